//! `loomerp-auth` — session state and access decisions (zero-trust core).
//!
//! This crate is intentionally decoupled from HTTP, rendering, and storage
//! media: persistence is a port, decisions are pure functions over an
//! immutable permission snapshot.

pub mod action;
pub mod engine;
pub mod matrix;
pub mod resource;
pub mod session;
pub mod storage;
pub mod store;

pub use action::Action;
pub use engine::{
    can_create, can_delete, can_read, can_update, has_any_permission, has_permission,
    resource_actions,
};
pub use matrix::PermissionMatrix;
pub use resource::Resource;
pub use session::{AuthToken, Role, Session};
pub use storage::{SessionStorage, StorageError, keys};
pub use store::{SessionStore, StoredSession};
