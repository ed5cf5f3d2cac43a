use crate::calendar::{CalendarView, SystemClock};
use crate::data::{AppSettings, HolidayData, Persistable, Session, persistence::get_data_dir};
use crate::store::{FileUserStore, UserStore};
use crate::ui::calendar_view::{App, run_app};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use std::path::Path;

pub fn run() -> Result<()> {
    let data_dir = get_data_dir()?;
    let settings = AppSettings::load_from(&data_dir)?;
    let holidays = HolidayData::load_from(&data_dir)?.to_table();
    let signed_in = signed_in_name(&data_dir);
    if holidays.is_empty() {
        log::warn!("no fixed holidays configured, only Sundays are marked");
    } else {
        log::info!("loaded {} fixed holiday(s)", holidays.len());
    }

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(CalendarView::new(holidays, SystemClock), settings, signed_in);
    let result = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    // Events entered in the calendar are not saved.
    result
}

/// Full name of the session user, for the header only. A session pointing at
/// a deleted account, or an unreadable session or user file, counts as signed
/// out so the calendar always opens.
fn signed_in_name(dir: &Path) -> Option<String> {
    let session = match Session::load_from(dir) {
        Ok(session) => session,
        Err(e) => {
            log::warn!("ignoring unreadable session: {e:#}");
            return None;
        }
    };
    let email = session.email()?;
    let store = match FileUserStore::open(dir) {
        Ok(store) => store,
        Err(e) => {
            log::warn!("cannot resolve signed-in user: {e}");
            return None;
        }
    };
    store.find_by_email(email).ok().map(|u| u.full_name)
}
