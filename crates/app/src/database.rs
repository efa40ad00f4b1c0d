//! Document store connection management

use async_trait::async_trait;
use mockall::automock;
use mongodb::{
    Client, Database,
    bson::doc,
    error::{Error, ErrorKind},
};

/// Whether a driver error means the store could not be reached at all.
#[must_use]
pub fn is_unavailable(error: &Error) -> bool {
    matches!(
        *error.kind,
        ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. }
    )
}

/// Connect to `MongoDB` and select the application database.
///
/// The driver connects lazily, so this only fails on a malformed URI or
/// unresolvable options. Call [`Db::ping`] to confirm the server is reachable.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
pub async fn connect(uri: &str, database: &str) -> Result<Db, Error> {
    let client = Client::with_uri_str(uri).await?;

    Ok(Db::new(client.database(database)))
}

#[derive(Debug, Clone)]
pub struct Db {
    database: Database,
}

impl Db {
    #[must_use]
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    #[must_use]
    pub fn database(&self) -> &Database {
        &self.database
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.database.name()
    }
}

#[async_trait]
impl HealthCheck for Db {
    async fn ping(&self) -> Result<(), Error> {
        self.database.run_command(doc! { "ping": 1 }).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Round-trip a `ping` command to the store.
    async fn ping(&self) -> Result<(), Error>;
}
