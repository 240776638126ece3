//! Store-owning facade tying auth, session and entries together

use crate::application::{AuthService, EntryRepository};
use crate::domain::{Entry, Session};
use crate::error::{DataHubError, Result};
use crate::infrastructure::{Config, KeyValueStore, SimulatedLatency};

/// Owns the store, the current session and the signed-in user's entry view.
///
/// The view is loaded on first use, so auth operations never depend on the
/// entry collection being readable. Once loaded, every mutation goes through
/// the store and patches the view in the same call.
pub struct DataHub<S: KeyValueStore> {
    store: S,
    config: Config,
    session: Session,
    view: Option<Vec<Entry>>,
}

impl<S: KeyValueStore> DataHub<S> {
    /// Open a hub, restoring the session from the store's login pointer
    pub fn new(mut store: S, config: Config) -> Result<Self> {
        let session = AuthService::new(&mut store).restore_session();
        Ok(DataHub {
            store,
            config,
            session,
            view: None,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Entries of the signed-in user, newest first. Empty when anonymous.
    pub fn entries(&mut self) -> Result<&[Entry]> {
        if self.view.is_none() {
            self.refresh()?;
        }
        Ok(self.view.as_deref().unwrap_or_default())
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn auth(&mut self) -> AuthService<'_, S> {
        let latency = SimulatedLatency::new(self.config.latency());
        AuthService::new(&mut self.store).with_latency(latency)
    }

    fn require_email(&self) -> Result<String> {
        self.session
            .email()
            .map(str::to_string)
            .ok_or(DataHubError::NotAuthenticated)
    }

    /// Reload the entry view from the store
    pub fn refresh(&mut self) -> Result<()> {
        let view = match self.session.email() {
            Some(email) => EntryRepository::new(&mut self.store).list(email)?,
            None => Vec::new(),
        };
        self.view = Some(view);
        Ok(())
    }

    pub fn register(&mut self, email: &str, password: &str) -> Result<()> {
        self.auth().register(email, password)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let latency = SimulatedLatency::new(self.config.latency());
        AuthService::new(&mut self.store)
            .with_latency(latency)
            .login(&mut self.session, email, password)?;
        self.view = None;
        Ok(())
    }

    pub fn reset_password(&mut self, email: &str, new_password: &str) -> Result<()> {
        self.auth().reset_password(email, new_password)
    }

    pub fn logout(&mut self) -> Result<()> {
        AuthService::new(&mut self.store).logout(&mut self.session)?;
        self.view = Some(Vec::new());
        Ok(())
    }

    /// Look up an entry of the signed-in user
    pub fn get(&mut self, id: &str) -> Result<Option<Entry>> {
        let owner = self.require_email()?;
        match EntryRepository::new(&mut self.store).get(id)? {
            Some(entry) if self.config.enforce_ownership && !entry.is_owned_by(&owner) => {
                Err(DataHubError::Forbidden(id.to_string()))
            }
            found => Ok(found),
        }
    }

    pub fn create(&mut self, title: &str, content: &str) -> Result<Entry> {
        let owner = self.require_email()?;
        let entry = EntryRepository::new(&mut self.store).create(&owner, title, content)?;

        // Same order as `EntryRepository::list`: newest first, ties to the later insertion
        if let Some(view) = self.view.as_mut() {
            let pos = view
                .iter()
                .position(|e| e.created_at <= entry.created_at)
                .unwrap_or(view.len());
            view.insert(pos, entry.clone());
        }
        Ok(entry)
    }

    pub fn update(&mut self, id: &str, title: &str, content: &str) -> Result<Option<Entry>> {
        let owner = self.require_email()?;
        let mut repo = EntryRepository::new(&mut self.store);
        let updated = if self.config.enforce_ownership {
            repo.update_as(&owner, id, title, content)?
        } else {
            repo.update(id, title, content)?
        };

        if let (Some(entry), Some(view)) = (&updated, self.view.as_mut()) {
            if let Some(slot) = view.iter_mut().find(|e| e.id == entry.id) {
                *slot = entry.clone();
            }
        }
        Ok(updated)
    }

    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let owner = self.require_email()?;
        let mut repo = EntryRepository::new(&mut self.store);
        let removed = if self.config.enforce_ownership {
            repo.delete_as(&owner, id)?
        } else {
            repo.delete(id)?
        };

        if let Some(view) = self.view.as_mut() {
            view.retain(|e| e.id != id);
        }
        Ok(removed)
    }
}
