use anyhow::Result;
use mongodb::{Client, Collection, Database};
use std::env;

/// MongoDB connection manager
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Create a new MongoDB client connection from the environment
    pub async fn new() -> Result<Self> {
        let uri =
            env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database_name = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "flutter".to_string());

        log::info!("Connecting to MongoDB at {}", uri);

        let mut client_options = mongodb::options::ClientOptions::parse(&uri).await?;
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(&database_name);

        // Test the connection
        db.list_collection_names().await?;
        log::info!(
            "Successfully connected to MongoDB database: {}",
            database_name
        );

        Ok(Self { client, db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Get a reference to the database
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Get a reference to the client
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();

        let db = MongoDB::new().await;
        assert!(db.is_ok());

        let db = db.unwrap();
        assert!(db.database().list_collection_names().await.is_ok());
        assert!(!db.client().list_database_names().await.unwrap().is_empty());
    }
}
