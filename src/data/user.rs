use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

/// A registered employee as stored in users.json.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub full_name: String,
    pub email: String,
    pub employee_id: String,
    pub phone_number: String,
    pub password_hash: String,
}

/// The public part of a [`User`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    pub email: String,
    pub employee_id: String,
    pub phone_number: String,
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Profile {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            employee_id: user.employee_id.clone(),
            phone_number: user.phone_number.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct UserData {
    pub users: Vec<User>,
}

impl Persistable for UserData {
    fn filename() -> &'static str {
        "users.json"
    }
    fn is_json() -> bool {
        true
    }
}

impl UserData {
    pub fn next_id(&self) -> u32 {
        self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }

    pub fn get(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn get_mut(&mut self, email: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.email == email)
    }

    /// True when some user other than `except_email` holds `email` or
    /// `employee_id`.
    pub fn is_taken(&self, email: &str, employee_id: &str, except_email: Option<&str>) -> bool {
        self.users
            .iter()
            .filter(|u| Some(u.email.as_str()) != except_email)
            .any(|u| u.email == email || u.employee_id == employee_id)
    }
}
