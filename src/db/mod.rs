pub mod entities;
pub mod repositories;

pub use entities::*;
pub use repositories::*;

use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

use crate::config::Config;
use crate::error::Result;

/// Open the configured database, applying migrations if enabled.
pub async fn connect(config: &Config) -> Result<DatabaseConnection> {
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Connected to database");

    if config.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        tracing::info!("Database migrations completed");
    }

    Ok(db)
}
