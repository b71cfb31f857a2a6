//! `loomerp-nav` — navigation model, route access, and menu filtering.
//!
//! The menu tree and route table are static configuration; everything that
//! operates on them is a pure data transformation. Rendering belongs to the
//! consuming UI layer.

pub mod config;
pub mod filter;
pub mod menu;
pub mod routes;

pub use filter::filter_menu;
pub use menu::MenuNode;
pub use routes::{RouteTable, can_access_route};
