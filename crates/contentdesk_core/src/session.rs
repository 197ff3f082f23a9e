//! Signed-in user state persisted under `currentUser`.
//!
//! # Responsibility
//! - Check credentials against the user list and remember the match.
//! - Resolve the current `Actor` for the permission filter.
//!
//! # Invariants
//! - A missing or undecodable session reads as "nobody signed in".
//! - Before any user list exists, the demo accounts are accepted, so a
//!   fresh namespace can always be signed into.

use crate::model::user::User;
use crate::policy::Actor;
use crate::repo::{EntityRepository, JsonListRepository, RepoError, RepoResult};
use crate::seed::demo_users;
use crate::store::{keys, KeyValueStore};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum SessionError {
    InvalidCredentials,
    Repo(RepoError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid credentials"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCredentials => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for SessionError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub struct SessionStore<'s> {
    store: &'s dyn KeyValueStore,
}

impl<'s> SessionStore<'s> {
    pub fn new(store: &'s dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Signs in the user whose email and password match exactly.
    pub fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        let users = JsonListRepository::<User>::new(self.store);
        let candidates = if users.is_initialized()? {
            users.list()?
        } else {
            demo_users()
        };

        let Some(user) = candidates
            .into_iter()
            .find(|user| user.email == email && user.password == password)
        else {
            warn!("event=login module=session status=denied reason=invalid_credentials");
            return Err(SessionError::InvalidCredentials);
        };

        let raw = serde_json::to_string(&user).map_err(RepoError::from)?;
        self.store
            .set(keys::CURRENT_USER, &raw)
            .map_err(RepoError::from)?;
        info!(
            "event=login module=session status=ok user_id={} role={}",
            user.id, user.role
        );
        Ok(user)
    }

    pub fn logout(&self) -> RepoResult<()> {
        self.store.remove(keys::CURRENT_USER)?;
        info!("event=logout module=session status=ok");
        Ok(())
    }

    pub fn current_user(&self) -> RepoResult<Option<User>> {
        let Some(raw) = self.store.get(keys::CURRENT_USER)? else {
            return Ok(None);
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                warn!(
                    "event=session_decode module=session status=degraded error_line={} error_column={}",
                    err.line(),
                    err.column()
                );
                Ok(None)
            }
        }
    }

    pub fn actor(&self) -> RepoResult<Option<Actor>> {
        Ok(self.current_user()?.as_ref().map(Actor::from))
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionError, SessionStore};
    use crate::model::role::Role;
    use crate::store::{KeyValueStore, MemoryStore};

    #[test]
    fn demo_accounts_work_before_any_user_list_exists() {
        let store = MemoryStore::new();
        let session = SessionStore::new(&store);

        let user = session.login("editor@example.com", "editor123").unwrap();
        assert_eq!(user.role, Role::Editor);
        assert_eq!(session.actor().unwrap().unwrap().name, "Editor");
    }

    #[test]
    fn stored_user_list_replaces_demo_accounts() {
        let store = MemoryStore::new();
        store.set("users", "[]").unwrap();
        let session = SessionStore::new(&store);

        let err = session.login("admin@example.com", "admin123").unwrap_err();
        assert!(matches!(err, SessionError::InvalidCredentials));
        assert!(session.current_user().unwrap().is_none());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let store = MemoryStore::new();
        let session = SessionStore::new(&store);
        assert!(matches!(
            session.login("admin@example.com", "admin"),
            Err(SessionError::InvalidCredentials)
        ));
    }

    #[test]
    fn malformed_session_reads_as_signed_out() {
        let store = MemoryStore::new();
        store
            .set("currentUser", r#"{"id":1,"name":"X","role":"owner"}"#)
            .unwrap();
        let session = SessionStore::new(&store);
        assert!(session.current_user().unwrap().is_none());
        assert!(session.actor().unwrap().is_none());
    }

    #[test]
    fn logout_clears_session() {
        let store = MemoryStore::new();
        let session = SessionStore::new(&store);
        session.login("writer@example.com", "writer123").unwrap();
        session.logout().unwrap();
        assert!(session.current_user().unwrap().is_none());
    }
}
