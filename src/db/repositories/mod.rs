use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};

use crate::db::entities::{artist, artist_ipi};
use crate::error::{AppError, Result};
use crate::validation::{validate_edits_pending, validate_ipi};

/// Map a failed write on `artist_ipi` to the error the caller should see.
fn write_error(err: DbErr, artist_id: i32) -> AppError {
    if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
        return AppError::UnknownArtist(artist_id);
    }
    match err {
        DbErr::RecordNotUpdated => {
            AppError::NotFound(format!("IPI record for artist {}", artist_id))
        }
        other => other.into(),
    }
}

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create(&self, name: &str) -> Result<artist::Model> {
        let artist = artist::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        let artist = artist.insert(&self.db).await?;
        tracing::debug!(artist_id = artist.id, "Created artist");
        Ok(artist)
    }

    /// Deleting an artist also drops its IPI record through the foreign key.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = artist::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("artist {}", id)));
        }
        Ok(())
    }
}

/// The only write path for `artist_ipi`. Every write validates first and
/// stamps `created` with the current time.
pub struct ArtistIpiRepository {
    db: DatabaseConnection,
}

impl ArtistIpiRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, artist_id: i32, ipi: &str) -> Result<artist_ipi::Model> {
        self.create_with_edits_pending(artist_id, ipi, 0).await
    }

    pub async fn create_with_edits_pending(
        &self,
        artist_id: i32,
        ipi: &str,
        edits_pending: i32,
    ) -> Result<artist_ipi::Model> {
        validate_ipi(ipi)?;
        validate_edits_pending(edits_pending)?;

        let record = artist_ipi::ActiveModel {
            artist_id: Set(artist_id),
            ipi: Set(ipi.to_string()),
            edits_pending: Set(edits_pending),
            created: Set(Some(Utc::now().into())),
        };

        let record = record
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, artist_id))?;

        tracing::info!(artist_id, ipi = %record, "Created artist IPI record");
        Ok(record)
    }

    pub async fn update_ipi(
        &self,
        record: &artist_ipi::Model,
        new_ipi: &str,
    ) -> Result<artist_ipi::Model> {
        validate_ipi(new_ipi)?;

        let mut active: artist_ipi::ActiveModel = record.clone().into();
        active.ipi = Set(new_ipi.to_string());
        active.created = Set(Some(Utc::now().into()));

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, record.artist_id))?;

        tracing::info!(
            artist_id = record.artist_id,
            old_ipi = %record,
            new_ipi = %updated,
            "Updated artist IPI"
        );
        Ok(updated)
    }

    pub async fn set_edits_pending(
        &self,
        record: &artist_ipi::Model,
        edits_pending: i32,
    ) -> Result<artist_ipi::Model> {
        validate_edits_pending(edits_pending)?;

        let mut active: artist_ipi::ActiveModel = record.clone().into();
        active.edits_pending = Set(edits_pending);
        active.created = Set(Some(Utc::now().into()));

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, record.artist_id))?;

        tracing::debug!(
            artist_id = record.artist_id,
            edits_pending,
            "Updated pending edit count"
        );
        Ok(updated)
    }

    pub async fn find_by_artist(&self, artist_id: i32) -> Result<Option<artist_ipi::Model>> {
        Ok(artist_ipi::Entity::find_by_id(artist_id).one(&self.db).await?)
    }

    pub async fn find_by_ipi(&self, ipi: &str) -> Result<Option<artist_ipi::Model>> {
        validate_ipi(ipi)?;
        Ok(artist_ipi::Entity::find()
            .filter(artist_ipi::Column::Ipi.eq(ipi))
            .one(&self.db)
            .await?)
    }

    pub async fn list(&self) -> Result<Vec<artist_ipi::Model>> {
        Ok(artist_ipi::Entity::find()
            .order_by_asc(artist_ipi::Column::Ipi)
            .all(&self.db)
            .await?)
    }

    pub async fn delete(&self, artist_id: i32) -> Result<()> {
        let result = artist_ipi::Entity::delete_by_id(artist_id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("IPI record for artist {}", artist_id)));
        }
        tracing::info!(artist_id, "Deleted artist IPI record");
        Ok(())
    }
}
