//! Test utilities for Artist IPI
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - Config factories
//! - Test data generators

use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::{
    config::Config,
    db::entities::{artist, artist_ipi},
    db::repositories::ArtistIpiRepository,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        auto_migrate: true,
    }
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a test artist in the database
pub async fn create_test_artist(db: &DatabaseConnection, name: &str) -> artist::Model {
    let artist = artist::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };

    artist.insert(db).await.expect("Failed to insert test artist")
}

/// Create an artist together with its IPI record
pub async fn create_test_artist_ipi(
    db: &DatabaseConnection,
    name: &str,
    ipi: &str,
) -> (artist::Model, artist_ipi::Model) {
    let artist = create_test_artist(db, name).await;
    let record = ArtistIpiRepository::new(db.clone())
        .create(artist.id, ipi)
        .await
        .expect("Failed to insert test IPI record");

    (artist, record)
}
