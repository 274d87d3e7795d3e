//! MongoDB connection management.

use crate::UserDocument;
use bson::doc;
use mongodb::{options::ClientOptions, Client, Collection, Database};
use std::time::Duration;
use tracing::{info, warn};
use user_config::MongoConfig;
use user_core::{AppResult, ErrorKind};

/// Live handle to the configured MongoDB database.
#[derive(Clone)]
pub struct MongoConnection {
    client: Client,
    database: Database,
    collection: String,
    query_timeout: Duration,
}

impl MongoConnection {
    /// Connects and pings the server.
    ///
    /// Any failure, including an unreachable server, is a `StoreInit` error.
    pub async fn connect(config: &MongoConfig) -> AppResult<Self> {
        info!(host = %config.host, port = config.port, "Connecting to MongoDB...");

        let init_error = |e: mongodb::error::Error| {
            warn!("Failed to connect to MongoDB: {}", e);
            ErrorKind::StoreInit.error("Failed Init mongoDB").with_context(e)
        };

        let uri = config.uri().map_err(|e| {
            warn!("Failed to build MongoDB URI: {}", e);
            ErrorKind::StoreInit.error("Failed Init mongoDB").with_context(e)
        })?;
        let mut options = ClientOptions::parse(uri).await.map_err(init_error)?;
        options.app_name = Some("service-user".to_string());
        options.connect_timeout = Some(config.connect_timeout());
        options.server_selection_timeout = Some(config.connect_timeout());

        let client = Client::with_options(options).map_err(init_error)?;
        let database = client.database(&config.database);

        database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(init_error)?;

        info!(database = %config.database, "MongoDB connection established");
        Ok(Self {
            client,
            database,
            collection: config.collection.clone(),
            query_timeout: config.query_timeout(),
        })
    }

    /// Returns the users collection.
    #[must_use]
    pub fn users(&self) -> Collection<UserDocument> {
        self.database.collection(&self.collection)
    }

    /// Server-side time limit for reads.
    #[must_use]
    pub const fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// Shuts the client down, waiting for in-flight operations.
    pub async fn close(self) {
        info!("Closing MongoDB connection");
        self.client.shutdown().await;
    }
}
