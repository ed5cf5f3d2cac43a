pub mod error;
pub mod portal;

pub use error::{PortalError, PortalResult};
pub use portal::{Portal, RegistrationForm};

use crate::data::{Persistable, User, UserData};
use std::path::{Path, PathBuf};

const REGISTER_CONFLICT: &str = "Email or Employee ID already registered.";
const UPDATE_CONFLICT: &str = "New Email or Employee ID is already in use by another account.";
const PROFILE_NOT_FOUND: &str = "User profile not found.";
const UPDATE_NOT_FOUND: &str = "User not found or no changes made.";

/// A user about to be created. The password is already hashed.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub employee_id: String,
    pub phone_number: String,
    pub password_hash: String,
}

/// Replacement values for the editable profile fields.
#[derive(Clone, Debug)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub email: String,
    pub employee_id: String,
    pub phone_number: String,
}

/// Where portal users live. Email and employee id are both unique.
pub trait UserStore {
    /// Fails with `Conflict` when the email or employee id is already used.
    fn create(&mut self, user: NewUser) -> PortalResult<User>;

    fn find_by_email(&self, email: &str) -> PortalResult<User>;

    /// Fails with `Conflict` when the new email or employee id belongs to a
    /// different account, and with `NotFound` when `original_email` is unknown.
    fn update_by_email(
        &mut self,
        original_email: &str,
        update: ProfileUpdate,
    ) -> PortalResult<User>;
}

impl UserStore for UserData {
    fn create(&mut self, user: NewUser) -> PortalResult<User> {
        if self.is_taken(&user.email, &user.employee_id, None) {
            return Err(PortalError::Conflict(REGISTER_CONFLICT));
        }
        let user = User {
            id: self.next_id(),
            full_name: user.full_name,
            email: user.email,
            employee_id: user.employee_id,
            phone_number: user.phone_number,
            password_hash: user.password_hash,
        };
        self.users.push(user.clone());
        Ok(user)
    }

    fn find_by_email(&self, email: &str) -> PortalResult<User> {
        self.get(email)
            .cloned()
            .ok_or(PortalError::NotFound(PROFILE_NOT_FOUND))
    }

    fn update_by_email(
        &mut self,
        original_email: &str,
        update: ProfileUpdate,
    ) -> PortalResult<User> {
        if self.is_taken(&update.email, &update.employee_id, Some(original_email)) {
            return Err(PortalError::Conflict(UPDATE_CONFLICT));
        }
        let user = self
            .get_mut(original_email)
            .ok_or(PortalError::NotFound(UPDATE_NOT_FOUND))?;
        user.full_name = update.full_name;
        user.email = update.email;
        user.employee_id = update.employee_id;
        user.phone_number = update.phone_number;
        Ok(user.clone())
    }
}

/// A `UserData` kept in `users.json`. Every successful change is written
/// before it becomes visible; a failed write leaves the store unchanged.
pub struct FileUserStore {
    dir: PathBuf,
    data: UserData,
}

impl FileUserStore {
    pub fn open(dir: &Path) -> PortalResult<Self> {
        let data = UserData::load_from(dir).map_err(PortalError::storage)?;
        log::debug!("loaded {} user(s) from {}", data.users.len(), dir.display());
        Ok(FileUserStore {
            dir: dir.to_path_buf(),
            data,
        })
    }

    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut UserData) -> PortalResult<T>,
    ) -> PortalResult<T> {
        let mut next = self.data.clone();
        let out = change(&mut next)?;
        next.save_to(&self.dir).map_err(PortalError::storage)?;
        self.data = next;
        Ok(out)
    }
}

impl UserStore for FileUserStore {
    fn create(&mut self, user: NewUser) -> PortalResult<User> {
        self.commit(|data| data.create(user))
    }

    fn find_by_email(&self, email: &str) -> PortalResult<User> {
        self.data.find_by_email(email)
    }

    fn update_by_email(
        &mut self,
        original_email: &str,
        update: ProfileUpdate,
    ) -> PortalResult<User> {
        self.commit(|data| data.update_by_email(original_email, update))
    }
}
