//! The currently authenticated identity.
//!
//! `Session` is an explicitly constructed value the host application owns
//! and passes to whichever component needs the identity; there is no hidden
//! process-wide singleton. At most one identity is active per session
//! value. The master passphrase lives only in this struct's memory and is
//! zeroized on logout, re-login, and drop; it is never written to disk.
//!
//! The core makes no threading assumptions: a host that shares one session
//! across threads must synchronize `login`/`logout`/reads itself.

use zeroize::Zeroize;

use crate::errors::{Result, VaultError};

/// Holder of the logged-in user's id, master passphrase, and display
/// metadata. Zero or one identity at a time.
#[derive(Default)]
pub struct Session {
    user_id: Option<i64>,
    master_passphrase: Option<String>,
    username: Option<String>,
    email: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session identity. Overwrites all four fields
    /// unconditionally, so re-login works without an explicit logout; the
    /// previous passphrase is wiped first.
    pub fn login(
        &mut self,
        user_id: i64,
        master_passphrase: &str,
        username: Option<&str>,
        email: Option<&str>,
    ) {
        self.clear();
        self.user_id = Some(user_id);
        self.master_passphrase = Some(master_passphrase.to_string());
        self.username = username.map(str::to_string);
        self.email = email.map(str::to_string);
    }

    /// Clear the session, zeroizing the passphrase.
    pub fn logout(&mut self) {
        self.clear();
    }

    /// True iff both a user id and a non-empty master passphrase are set.
    /// This conjunction is the sole authorization gate collaborators check
    /// before calling vault read/write operations.
    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
            && self
                .master_passphrase
                .as_deref()
                .is_some_and(|p| !p.is_empty())
    }

    /// The logged-in user's id, or `NotAuthenticated` when logged out.
    pub fn user_id(&self) -> Result<i64> {
        match self.user_id {
            Some(id) if self.is_logged_in() => Ok(id),
            _ => Err(VaultError::NotAuthenticated),
        }
    }

    /// The in-memory master passphrase, or `NotAuthenticated` when logged
    /// out.
    pub fn master_passphrase(&self) -> Result<&str> {
        match self.master_passphrase.as_deref() {
            Some(pw) if self.is_logged_in() => Ok(pw),
            _ => Err(VaultError::NotAuthenticated),
        }
    }

    /// Display username, if one was provided at login.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Display email, if one was provided at login.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn clear(&mut self) {
        if let Some(pw) = self.master_passphrase.as_mut() {
            pw.zeroize();
        }
        self.user_id = None;
        self.master_passphrase = None;
        self.username = None;
        self.email = None;
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(pw) = self.master_passphrase.as_mut() {
            pw.zeroize();
        }
    }
}

// No Debug derive: it would print the passphrase.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("master_passphrase", &"<redacted>")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_logged_out() {
        let session = Session::new();
        assert!(!session.is_logged_in());
        assert!(session.user_id().is_err());
        assert!(session.master_passphrase().is_err());
    }

    #[test]
    fn login_sets_identity() {
        let mut session = Session::new();
        session.login(7, "hunter2", Some("alice"), Some("a@x.com"));

        assert!(session.is_logged_in());
        assert_eq!(session.user_id().unwrap(), 7);
        assert_eq!(session.master_passphrase().unwrap(), "hunter2");
        assert_eq!(session.username(), Some("alice"));
        assert_eq!(session.email(), Some("a@x.com"));
    }

    #[test]
    fn relogin_overwrites_all_fields() {
        let mut session = Session::new();
        session.login(1, "first", Some("alice"), Some("a@x.com"));
        session.login(2, "second", None, None);

        assert_eq!(session.user_id().unwrap(), 2);
        assert_eq!(session.master_passphrase().unwrap(), "second");
        assert_eq!(session.username(), None);
        assert_eq!(session.email(), None);
    }

    #[test]
    fn logout_clears_everything() {
        let mut session = Session::new();
        session.login(1, "pw", Some("alice"), None);
        session.logout();

        assert!(!session.is_logged_in());
        assert!(matches!(
            session.user_id(),
            Err(VaultError::NotAuthenticated)
        ));
        assert!(matches!(
            session.master_passphrase(),
            Err(VaultError::NotAuthenticated)
        ));
        assert_eq!(session.username(), None);
    }

    #[test]
    fn empty_passphrase_does_not_count_as_logged_in() {
        let mut session = Session::new();
        session.login(1, "", None, None);
        assert!(!session.is_logged_in());
        assert!(session.master_passphrase().is_err());
    }

    #[test]
    fn debug_redacts_passphrase() {
        let mut session = Session::new();
        session.login(1, "supersecret", None, None);
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("supersecret"));
    }
}
