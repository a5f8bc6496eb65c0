//! Small browser and validation utilities.

pub mod password;
pub mod token;
pub mod validate;
