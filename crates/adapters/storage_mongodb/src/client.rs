//! `MongoDB` client setup.

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Database as MongoDatabase};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::StorageError;

/// Configuration for the `MongoDB` storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full connection string. When set, the credential fields are ignored.
    pub uri: Option<String>,
    /// Cluster host used to assemble an SRV connection string.
    pub host: String,
    pub username: String,
    pub password: String,
    /// Value of the `appName` connection option.
    pub app_name: String,
    /// Database holding the collections.
    pub database: String,
}

impl Config {
    /// The connection string to hand to the driver.
    ///
    /// Credentials are percent-encoded.
    #[must_use]
    pub fn connection_string(&self) -> String {
        if let Some(uri) = &self.uri {
            return uri.clone();
        }
        format!(
            "mongodb+srv://{}:{}@{}/?appName={}",
            utf8_percent_encode(&self.username, NON_ALPHANUMERIC),
            utf8_percent_encode(&self.password, NON_ALPHANUMERIC),
            self.host,
            self.app_name,
        )
    }

    /// Build a [`Database`] handle from this configuration.
    ///
    /// Pins the Stable API v1 in strict mode. The driver connects lazily, so
    /// this succeeds even when the cluster is unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection string is invalid.
    pub async fn build(self) -> Result<Database, StorageError> {
        let mut options = ClientOptions::parse(self.connection_string()).await?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(options)?;
        let database = client.database(&self.database);
        Ok(Database { client, database })
    }
}

/// Owns the driver client and the selected database.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database: MongoDatabase,
}

impl Database {
    /// Round-trip a `ping` command to check connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the cluster cannot be reached.
    pub async fn ping(&self) -> Result<(), StorageError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Borrow the selected database.
    #[must_use]
    pub fn database(&self) -> &MongoDatabase {
        &self.database
    }

    /// Shut the client down, waiting for in-flight operations.
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}
