//! [`SessionStorage`] adapters.
//!
//! [`SessionStorage`]: loomerp_auth::SessionStorage

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemorySessionStorage;
pub use json_file::JsonFileSessionStorage;
