//! Database integration tests
//!
//! Tests the schema declared by the migrations to ensure:
//! - Key, unique and check constraints hold even for raw entity writes
//! - Column defaults are applied
//! - Foreign key cascades remove IPI records with their artist

use artist_ipi::test_utils::*;
use chrono::Utc;
use pretty_assertions::assert_eq;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};

use artist_ipi::db::entities::{artist, artist_ipi as ipi_record};

fn raw_record(artist_id: i32, ipi: &str, edits_pending: i32) -> ipi_record::ActiveModel {
    ipi_record::ActiveModel {
        artist_id: Set(artist_id),
        ipi: Set(ipi.to_string()),
        edits_pending: Set(edits_pending),
        created: Set(Some(Utc::now().into())),
    }
}

#[tokio::test]
async fn test_create_artist() {
    let db = setup_test_db().await;

    let artist = create_test_artist(&db, "Björk").await;

    assert_eq!(artist.name, "Björk");
    assert!(artist.id > 0);
}

#[tokio::test]
async fn test_edits_pending_defaults_to_zero() {
    let db = setup_test_db().await;
    let artist = create_test_artist(&db, "Default Artist").await;

    let record = ipi_record::ActiveModel {
        artist_id: Set(artist.id),
        ipi: Set("00014107338".to_string()),
        created: Set(Some(Utc::now().into())),
        ..Default::default()
    };

    let inserted = record.insert(&db).await.expect("Should insert IPI record");

    assert_eq!(inserted.edits_pending, 0);
    assert!(inserted.created.is_some());
}

#[tokio::test]
async fn test_schema_rejects_malformed_ipi() {
    let db = setup_test_db().await;
    let artist = create_test_artist(&db, "Check Artist").await;

    // Bypasses the repository, so only the table check stands in the way
    for ipi in ["0001410733A", "123", "abcdefghijk"] {
        let result = raw_record(artist.id, ipi, 0).insert(&db).await;
        assert!(result.is_err(), "{ipi:?} should violate the format check");
    }

    let stored = ipi_record::Entity::find().all(&db).await.unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_schema_rejects_negative_edits_pending() {
    let db = setup_test_db().await;
    let artist = create_test_artist(&db, "Check Artist").await;

    let result = raw_record(artist.id, "00014107338", -1).insert(&db).await;

    assert!(result.is_err(), "Negative edits_pending should violate the check");
}

#[tokio::test]
async fn test_ipi_requires_valid_artist() {
    let db = setup_test_db().await;

    let result = raw_record(99999, "00014107338", 0).insert(&db).await;

    assert!(result.is_err(), "Should fail to create IPI record for a missing artist");
}

#[tokio::test]
async fn test_ipi_and_artist_are_each_unique() {
    let db = setup_test_db().await;
    let first = create_test_artist(&db, "First").await;
    let second = create_test_artist(&db, "Second").await;

    raw_record(first.id, "00014107338", 0)
        .insert(&db)
        .await
        .expect("First record should insert");

    let same_ipi = raw_record(second.id, "00014107338", 0).insert(&db).await;
    assert!(same_ipi.is_err(), "Duplicate IPI must be rejected");

    let same_artist = raw_record(first.id, "00052210040", 0).insert(&db).await;
    assert!(same_artist.is_err(), "Second IPI for one artist must be rejected");
}

#[tokio::test]
async fn test_deleting_artist_cascades() {
    let db = setup_test_db().await;
    let (artist, record) = create_test_artist_ipi(&db, "Cascade Artist", "00014107338").await;

    let related = artist
        .find_related(ipi_record::Entity)
        .one(&db)
        .await
        .expect("Query should succeed");
    assert_eq!(related, Some(record));

    artist::Entity::delete_by_id(artist.id)
        .exec(&db)
        .await
        .expect("Delete should succeed");

    let remaining = ipi_record::Entity::find_by_id(artist.id)
        .one(&db)
        .await
        .expect("Query should succeed");
    assert_eq!(remaining, None);
}

#[tokio::test]
async fn test_created_defaults_when_not_set() {
    let db = setup_test_db().await;
    let artist = create_test_artist(&db, "Default Timestamp Artist").await;

    let record = ipi_record::ActiveModel {
        artist_id: Set(artist.id),
        ipi: Set("00014107338".to_string()),
        ..Default::default()
    };

    let inserted = record.insert(&db).await.expect("Should insert IPI record");

    let created = inserted.created.expect("created should default to the insert time");
    assert!(created.timestamp() > 0);
    assert_eq!(inserted.edits_pending, 0);
}
