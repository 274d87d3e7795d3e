//! Redis-based cache implementation.

use super::UserCache;
use async_trait::async_trait;
use deadpool_redis::{
    redis::{self, AsyncCommands},
    Config, Pool, PoolConfig, Runtime,
};
use std::time::Duration;
use tracing::{debug, error, info};
use user_config::RedisConfig;
use user_core::{AppResult, ErrorKind};

/// Whole seconds for a `SET EX`, rounded up and never below one.
#[must_use]
pub fn ttl_seconds(ttl: Duration) -> u64 {
    let secs = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
    secs.max(1)
}

/// Redis connection pool.
#[derive(Clone)]
pub struct RedisConnection {
    pool: Pool,
}

impl RedisConnection {
    /// Builds the pool and checks the server answers `PING`.
    ///
    /// Any failure is a `CacheInit` error.
    pub async fn connect(config: &RedisConfig) -> AppResult<Self> {
        info!(host = %config.host, port = config.port, db = config.db, "Connecting to Redis...");

        let url = config
            .url()
            .map_err(|e| ErrorKind::CacheInit.error("Failed InitRedisDB").with_context(e))?;
        let mut pool_config = Config::from_url(url);
        pool_config.pool = Some(PoolConfig::new(config.pool_size));

        let pool = pool_config
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| ErrorKind::CacheInit.error("Failed InitRedisDB").with_context(e))?;

        let mut conn = pool
            .get()
            .await
            .map_err(|e| ErrorKind::CacheInit.error("Failed InitRedisDB").with_context(e))?;

        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| ErrorKind::CacheInit.error("Failed InitRedisDB").with_context(e))?;

        info!(reply = %pong, "Redis connection established");
        Ok(Self { pool })
    }
}

/// Redis-backed [`UserCache`].
#[derive(Clone)]
pub struct RedisUserCache {
    pool: Pool,
}

impl RedisUserCache {
    #[must_use]
    pub fn new(connection: &RedisConnection) -> Self {
        Self {
            pool: connection.pool.clone(),
        }
    }
}

#[async_trait]
impl UserCache for RedisUserCache {
    async fn get(&self, key: &str) -> AppResult<String> {
        let mut conn = self.pool.get().await.map_err(|e| {
            let err = ErrorKind::CacheRead.error("Failed to get Redis connection").with_context(e);
            error!("{}", err);
            err
        })?;

        let value: Option<String> = conn.get(key).await.map_err(|e| {
            let err = ErrorKind::CacheRead.error("Failed RedisGet").with_context(e);
            error!("{}", err);
            err
        })?;

        match value {
            Some(value) => {
                debug!("Cache hit for key '{}'", key);
                Ok(value)
            }
            None => {
                let err = ErrorKind::CacheMiss
                    .error("Failed RedisGet")
                    .with_context(format!("no value for key '{key}'"));
                info!("{}", err);
                Err(err)
            }
        }
    }

    async fn set_with_expiration(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let mut conn = self.pool.get().await.map_err(|e| {
            let err = ErrorKind::CacheWrite.error("Failed to get Redis connection").with_context(e);
            error!("{}", err);
            err
        })?;

        let ttl_secs = ttl_seconds(ttl);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs).await.map_err(|e| {
            let err = ErrorKind::CacheWrite.error("Failed RedisSet").with_context(e);
            error!("{}", err);
            err
        })?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }
}
