//! Session state machine

/// The currently authenticated identity.
///
/// `Anonymous --login--> Authenticated(email) --logout--> Anonymous`.
/// There is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(String),
}

impl Session {
    /// Initial state from a persisted "last login" pointer
    pub fn from_pointer(pointer: Option<String>) -> Self {
        match pointer {
            Some(email) if !email.is_empty() => Session::Authenticated(email),
            _ => Session::Anonymous,
        }
    }

    pub fn login(&mut self, email: impl Into<String>) {
        *self = Session::Authenticated(email.into());
    }

    pub fn logout(&mut self) {
        *self = Session::Anonymous;
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Session::Authenticated(email) => Some(email),
            Session::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}
