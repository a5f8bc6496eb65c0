//! Reusable UI components.

pub mod navbar;
pub mod password_requirements;
pub mod photo_card;
