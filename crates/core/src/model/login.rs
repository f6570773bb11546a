use std::fmt;

use thiserror::Error;

/// Raw contents of the login form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub username: String,
    pub password: String,
}

/// Trimmed, non-empty credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoginError {
    #[error("username is required")]
    MissingUsername,
    #[error("password is required")]
    MissingPassword,
}

impl LoginDraft {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Trim both fields and require them to be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::MissingUsername` or `LoginError::MissingPassword`
    /// when the corresponding field is blank after trimming.
    pub fn validate(&self) -> Result<Credentials, LoginError> {
        let username = self.username.trim();
        let password = self.password.trim();
        if username.is_empty() {
            return Err(LoginError::MissingUsername);
        }
        if password.is_empty() {
            return Err(LoginError::MissingPassword);
        }
        Ok(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

impl Credentials {
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Passwords stay out of logs and panic messages.
impl fmt::Debug for LoginDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginDraft")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
