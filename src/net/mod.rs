//! Network layer: wire types and REST clients.

pub mod api;
pub mod auth_api;
pub mod types;
