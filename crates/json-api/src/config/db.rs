//! Database Config

use clap::Args;

/// Document store settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `MongoDB` connection string
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub mongodb_uri: String,

    /// `MongoDB` database name
    #[arg(long, env = "MONGODB_DATABASE", default_value = "product-service")]
    pub mongodb_database: String,
}
