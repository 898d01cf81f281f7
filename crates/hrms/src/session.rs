//! Demo sign-in and the current-session user.
//!
//! Authentication matches on email only; any password is accepted. The
//! signed-in user is stored as a single document.

use tracing::{debug, info};

use crate::error::Result;
use crate::fixtures;
use crate::models::User;
use crate::storage::{keys, Store};

/// Look up the demo user with `email`.
///
/// The password is not checked.
#[must_use]
pub fn authenticate(email: &str, _password: &str) -> Option<User> {
    fixtures::demo_users()
        .into_iter()
        .find(|user| user.email == email)
}

/// Session state over a store.
#[derive(Debug, Clone, Copy)]
pub struct Session<'a> {
    store: &'a Store,
}

impl<'a> Session<'a> {
    /// Create a session view over `store`.
    #[must_use]
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Authenticate and, on success, make the user current.
    ///
    /// # Errors
    ///
    /// Returns an error if the session document cannot be written.
    pub fn login(&self, email: &str, password: &str) -> Result<Option<User>> {
        let Some(user) = authenticate(email, password) else {
            debug!("No demo user with email {email}");
            return Ok(None);
        };
        self.set_current_user(&user)?;
        info!("Signed in as {}", user.email);
        Ok(Some(user))
    }

    /// The signed-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the session document cannot be read or is
    /// malformed.
    pub fn current_user(&self) -> Result<Option<User>> {
        self.store.load(keys::CURRENT_USER)
    }

    /// Make `user` the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns an error if the session document cannot be written.
    pub fn set_current_user(&self, user: &User) -> Result<()> {
        self.store.save(keys::CURRENT_USER, user)
    }

    /// Sign out. Returns `false` if nobody was signed in.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn logout(&self) -> Result<bool> {
        self.store.remove(keys::CURRENT_USER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    #[test]
    fn test_authenticate_any_password() {
        let user = authenticate("sarah.wilson@company.com", "anything").unwrap();
        assert_eq!(user.role, UserRole::Hr);
        assert!(authenticate("sarah.wilson@company.com", "").is_some());
    }

    #[test]
    fn test_authenticate_unknown_email() {
        assert!(authenticate("nobody@company.com", "secret").is_none());
        assert!(authenticate("SARAH.WILSON@company.com", "secret").is_none());
    }

    #[test]
    fn test_login_and_logout() {
        let store = Store::open_in_memory().unwrap();
        let session = Session::new(&store);
        assert!(session.current_user().unwrap().is_none());

        let user = session.login("john.doe@company.com", "pw").unwrap().unwrap();
        assert_eq!(session.current_user().unwrap(), Some(user));

        assert!(session.logout().unwrap());
        assert!(session.current_user().unwrap().is_none());
        assert!(!session.logout().unwrap());
    }

    #[test]
    fn test_failed_login_keeps_session() {
        let store = Store::open_in_memory().unwrap();
        let session = Session::new(&store);
        session.login("mike.johnson@company.com", "pw").unwrap();

        assert!(session.login("ghost@company.com", "pw").unwrap().is_none());
        let current = session.current_user().unwrap().unwrap();
        assert_eq!(current.employee_id, "EMP002");
    }
}
