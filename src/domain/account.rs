//! Registered accounts and credential validation

use crate::error::{DataHubError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+$").unwrap())
}

/// A registered email + password pair.
///
/// The password is stored as given. Emails compare case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    pub password: String,
}

impl Account {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Account {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Exact match on both email and password
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Reject emails that are not shaped like `local@domain`
pub fn validate_email(email: &str) -> Result<()> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(DataHubError::Validation(format!(
            "Invalid email address: '{}'",
            email
        )))
    }
}

pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(DataHubError::Validation(
            "Password is required".to_string(),
        ));
    }
    Ok(())
}
