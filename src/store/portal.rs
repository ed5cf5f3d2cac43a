use crate::data::Profile;
use crate::store::{NewUser, PortalError, PortalResult, ProfileUpdate, UserStore};

/// Fields submitted by the registration form.
#[derive(Clone, Debug, Default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub employee_id: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

/// Registration, login and profile editing on top of a [`UserStore`].
pub struct Portal<S: UserStore> {
    store: S,
    password_cost: u32,
}

/// A field holding only whitespace counts as missing.
fn require(fields: &[&str], message: &'static str) -> PortalResult<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(PortalError::MissingFields(message));
    }
    Ok(())
}

impl<S: UserStore> Portal<S> {
    pub fn new(store: S, password_cost: u32) -> Self {
        Portal {
            store,
            password_cost,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn register(&mut self, form: RegistrationForm) -> PortalResult<Profile> {
        require(
            &[
                form.full_name.as_str(),
                form.email.as_str(),
                form.employee_id.as_str(),
                form.phone_number.as_str(),
                form.password.as_str(),
                form.confirm_password.as_str(),
            ],
            "All fields are required.",
        )?;
        if form.password != form.confirm_password {
            return Err(PortalError::PasswordMismatch);
        }

        let password_hash = bcrypt::hash(&form.password, self.password_cost)?;
        let user = self.store.create(NewUser {
            full_name: form.full_name,
            email: form.email,
            employee_id: form.employee_id,
            phone_number: form.phone_number,
            password_hash,
        })?;
        log::info!("registered user {} ({})", user.id, user.email);
        Ok(Profile::from(&user))
    }

    /// Unknown emails and wrong passwords fail the same way.
    pub fn login(&self, email: &str, password: &str) -> PortalResult<Profile> {
        require(&[email, password], "Email and password are required.")?;
        let user = match self.store.find_by_email(email) {
            Ok(user) => user,
            Err(PortalError::NotFound(_)) => return Err(PortalError::InvalidCredentials),
            Err(e) => return Err(e),
        };
        if !bcrypt::verify(password, &user.password_hash)? {
            log::info!("failed login for {email}");
            return Err(PortalError::InvalidCredentials);
        }
        log::info!("login {}", user.email);
        Ok(Profile::from(&user))
    }

    pub fn profile(&self, email: &str) -> PortalResult<Profile> {
        self.store.find_by_email(email).map(|u| Profile::from(&u))
    }

    pub fn update_profile(
        &mut self,
        original_email: &str,
        update: ProfileUpdate,
    ) -> PortalResult<Profile> {
        require(
            &[
                original_email,
                update.full_name.as_str(),
                update.email.as_str(),
                update.employee_id.as_str(),
                update.phone_number.as_str(),
            ],
            "All fields are required for update.",
        )?;
        let user = self.store.update_by_email(original_email, update)?;
        log::info!("updated profile {} ({})", user.id, user.email);
        Ok(Profile::from(&user))
    }
}
