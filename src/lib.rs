//! datahub - Personal record manager
//!
//! Users register, sign in, and keep a private list of titled text entries in
//! a local key-value store. Passwords are stored in plain text; this is not a
//! security boundary.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use application::DataHub;
pub use error::DataHubError;
