//! Error handling for the animal guessing skill.

pub mod error_code;

pub use error_code::ErrorCode;
