pub mod app_settings;
pub mod holiday;
pub mod persistence;
pub mod session;
pub mod user;

pub use app_settings::AppSettings;
pub use holiday::HolidayData;
pub use persistence::Persistable;
pub use session::Session;
pub use user::{Profile, User, UserData};
