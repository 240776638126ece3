//! Registration, login, password reset and logout

use crate::domain::account::{validate_email, validate_password};
use crate::domain::{Account, Session};
use crate::error::{DataHubError, Result};
use crate::infrastructure::collection::{SESSION_KEY, USERS};
use crate::infrastructure::{KeyValueStore, SimulatedLatency};

/// Credential checks against the `app_users` collection.
///
/// Borrows the store mutably for its lifetime, so it is the only writer
/// while it exists.
pub struct AuthService<'s, S: KeyValueStore + ?Sized> {
    store: &'s mut S,
    latency: SimulatedLatency,
}

impl<'s, S: KeyValueStore + ?Sized> AuthService<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        AuthService {
            store,
            latency: SimulatedLatency::none(),
        }
    }

    /// Apply a fixed delay before register, login and password reset
    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    /// Session implied by the persisted "last login" pointer
    pub fn restore_session(&self) -> Session {
        Session::from_pointer(self.store.get(SESSION_KEY).map(str::to_string))
    }

    /// Create an account. Does not sign the user in.
    pub fn register(&mut self, email: &str, password: &str) -> Result<()> {
        self.latency.wait();
        validate_email(email)?;
        validate_password(password)?;

        let users = USERS.load(&*self.store)?;
        if users.iter().any(|u| u.email == email) {
            log::info!("event=register module=auth status=duplicate");
            return Err(DataHubError::DuplicateUser(email.to_string()));
        }

        USERS.push(&mut *self.store, Account::new(email, password))?;
        log::info!("event=register module=auth status=ok");
        Ok(())
    }

    /// Check credentials and move `session` to `Authenticated` on success
    pub fn login(&mut self, session: &mut Session, email: &str, password: &str) -> Result<()> {
        self.latency.wait();

        let users = USERS.load(&*self.store)?;
        if !users.iter().any(|u| u.matches(email, password)) {
            log::info!("event=login module=auth status=rejected");
            return Err(DataHubError::InvalidCredentials);
        }

        self.store.set(SESSION_KEY, email.to_string())?;
        session.login(email);
        log::info!("event=login module=auth status=ok");
        Ok(())
    }

    /// Overwrite the password of an existing account. Knowing the email is enough.
    pub fn reset_password(&mut self, email: &str, new_password: &str) -> Result<()> {
        self.latency.wait();
        validate_password(new_password)?;

        let changed = USERS.update_where(
            &mut *self.store,
            |u| u.email == email,
            |u| u.password = new_password.to_string(),
        )?;

        if changed == 0 {
            log::info!("event=reset_password module=auth status=not_found");
            return Err(DataHubError::UserNotFound(email.to_string()));
        }

        log::info!("event=reset_password module=auth status=ok");
        Ok(())
    }

    pub fn logout(&mut self, session: &mut Session) -> Result<()> {
        self.store.remove(SESSION_KEY)?;
        session.logout();
        log::info!("event=logout module=auth status=ok");
        Ok(())
    }
}
