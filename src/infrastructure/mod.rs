//! Infrastructure layer - External I/O and persistence

pub mod collection;
pub mod config;
pub mod latency;
pub mod store;
pub mod workspace;

pub use collection::Collection;
pub use config::Config;
pub use latency::SimulatedLatency;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use workspace::Workspace;
