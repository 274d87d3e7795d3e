//! Cache port.

use async_trait::async_trait;
use std::time::Duration;
use user_core::AppResult;

/// Key-value cache over opaque string payloads.
#[async_trait]
pub trait UserCache: Send + Sync {
    /// Returns the value stored under `key`.
    ///
    /// A missing key fails with `CacheMiss`; any other failure is `CacheRead`.
    async fn get(&self, key: &str) -> AppResult<String>;

    /// Stores `value` under `key` for `ttl`. Failures are `CacheWrite`.
    async fn set_with_expiration(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()>;
}
