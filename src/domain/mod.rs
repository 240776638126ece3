//! Domain layer - Business logic and domain models

pub mod account;
pub mod entry;
pub mod session;

pub use account::Account;
pub use entry::Entry;
pub use session::Session;
