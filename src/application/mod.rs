//! Application layer - Use cases and orchestration

pub mod auth;
pub mod entries;
pub mod hub;

pub use auth::AuthService;
pub use entries::EntryRepository;
pub use hub::DataHub;
