//! Document store adapters.

mod memory;

#[cfg(feature = "mongo")]
mod mongo;

pub use memory::{InMemoryPostStore, InMemoryProfileStore};

#[cfg(feature = "mongo")]
pub use mongo::{MongoConfig, MongoPostStore, MongoProfileStore};
