//! # User Service
//!
//! Use cases for the user service: wire DTOs, the mapping layer, the
//! cache port with its Redis implementation, and the interactor that ties
//! the cache and the repository together.

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod interactor;
pub mod mappers;

pub use cache::*;
pub use dto::*;
pub use interactor::*;
pub use r#impl::{UserInteractorImpl, CACHE_TTL};
