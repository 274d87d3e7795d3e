//! # User Security
//!
//! Password hashing for stored users.

pub mod password;

pub use password::*;
