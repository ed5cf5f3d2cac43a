use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

/// The user signed in through `login`, kept until `logout`.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct Session {
    pub email: Option<String>,
}

impl Persistable for Session {
    fn filename() -> &'static str {
        "session.json"
    }
    fn is_json() -> bool {
        true
    }
}

impl Session {
    pub fn signed_in(email: &str) -> Self {
        Session {
            email: Some(email.to_string()),
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
