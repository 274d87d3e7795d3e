//! Common test infrastructure for MongoDB integration tests.

use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;
use user_config::MongoConfig;
use user_repository::{MongoConnection, MongoUserRepository};

/// Test database container wrapper.
///
/// Manages a MongoDB testcontainer lifecycle and provides a connection.
pub struct TestDatabase {
    _container: ContainerAsync<Mongo>,
    connection: MongoConnection,
}

impl TestDatabase {
    /// Starts a fresh MongoDB container and connects to it.
    pub async fn new() -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let config = MongoConfig {
            host: "127.0.0.1".to_string(),
            port,
            database: "service_user_test".to_string(),
            ..MongoConfig::default()
        };

        let connection = Self::connect_with_retry(&config, 30).await;

        Self {
            _container: container,
            connection,
        }
    }

    pub fn repository(&self) -> MongoUserRepository {
        MongoUserRepository::from_connection(&self.connection)
    }

    async fn connect_with_retry(config: &MongoConfig, max_attempts: u32) -> MongoConnection {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match MongoConnection::connect(config).await {
                Ok(connection) => return connection,
                Err(e) => {
                    if attempts >= max_attempts {
                        panic!("Failed to connect to MongoDB after {} attempts: {}", max_attempts, e);
                    }
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                }
            }
        }
    }
}
