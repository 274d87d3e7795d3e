//! Caching for read paths.
//!
//! The interactor talks to the [`UserCache`] port; [`RedisUserCache`] is the
//! Redis-backed implementation.

mod cache_interface;
pub mod cache_keys;
mod redis_cache;

pub use cache_interface::UserCache;
pub use redis_cache::{ttl_seconds, RedisConnection, RedisUserCache};
