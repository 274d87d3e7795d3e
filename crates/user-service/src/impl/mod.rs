//! Interactor implementations.

pub mod user_interactor_impl;

pub use user_interactor_impl::{UserInteractorImpl, CACHE_TTL};
