//! # User Config
//!
//! Configuration for the user service, loaded once at startup from layered
//! sources: TOML files, a `.env` file, and `USER_SERVICE`-prefixed
//! environment variables.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
