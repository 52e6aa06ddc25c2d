//! Session identity model.
//!
//! # Invariants
//! - `is_logged_in()` is true only when both `username` and `email` are
//!   non-empty.
//! - A session never carries the password.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Presence-check failure for user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Named field was empty after trimming.
    BlankField(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "{field} must not be blank"),
        }
    }
}

impl Error for ValidationError {}

/// Login state for the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// Current identity. Empty when logged out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub email: String,
}

impl Session {
    /// Builds a logged-in session from raw input.
    ///
    /// Fields are trimmed; any blank field fails with the first offending name.
    pub fn from_input(username: &str, email: &str, password: &str) -> Result<Self, ValidationError> {
        let username = require_present("username", username)?;
        let email = require_present("email", email)?;
        require_present("password", password)?;
        Ok(Self {
            username: username.to_string(),
            email: email.to_string(),
        })
    }

    pub fn is_logged_in(&self) -> bool {
        !self.username.is_empty() && !self.email.is_empty()
    }

    pub fn state(&self) -> SessionState {
        if self.is_logged_in() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }

    /// Returns the partition key owner when logged in.
    pub fn active_email(&self) -> Option<&str> {
        self.is_logged_in().then_some(self.email.as_str())
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.email.clear();
    }
}

/// Returns the trimmed value, or a blank-field error.
pub fn require_present<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::{Session, SessionState, ValidationError};

    #[test]
    fn from_input_trims_fields() {
        let session = Session::from_input("  ada ", " ada@example.com\t", "pw")
            .expect("valid input should build a session");
        assert_eq!(session.username, "ada");
        assert_eq!(session.email, "ada@example.com");
        assert_eq!(session.state(), SessionState::LoggedIn);
    }

    #[test]
    fn from_input_reports_first_blank_field() {
        let err = Session::from_input("ada", "a@b.c", "   ").expect_err("blank password");
        assert_eq!(err, ValidationError::BlankField("password"));

        let err = Session::from_input("", "", "").expect_err("all blank");
        assert_eq!(err, ValidationError::BlankField("username"));
    }

    #[test]
    fn default_session_is_logged_out() {
        let session = Session::default();
        assert!(!session.is_logged_in());
        assert_eq!(session.active_email(), None);
    }
}
