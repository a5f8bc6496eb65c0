//! Shared client-side state.
//!
//! DESIGN
//! ======
//! `auth` holds the state types and the transition logic behind trait
//! seams; `session` binds that logic to the `RwSignal` context the pages
//! share. Components never mutate auth state directly.

pub mod auth;
pub mod session;
