//! # User Core
//!
//! Foundational types for the user service: the error taxonomy shared by
//! every layer, the typed user identifier, and the user entity.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;

pub use domain::{User, UserUpdate, Vote};
pub use error::*;
pub use id::*;
pub use result::*;
