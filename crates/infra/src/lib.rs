//! Infrastructure layer: durable storage adapters for the session core.

pub mod storage;


pub use storage::{InMemorySessionStorage, JsonFileSessionStorage};
