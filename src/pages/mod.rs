//! Routed pages.

pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod photos;
pub mod register;
pub mod reset_password;
pub mod verify_mfa;
