//! Interested Parties Information code held for an artist.
//!
//! The table's primary key is `(artist, ipi)`, but each column is unique on
//! its own, so the entity is keyed by the artist reference alone.

use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "artist_ipi")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "artist")]
    pub artist_id: i32,
    #[sea_orm(column_type = "Char(Some(11))", unique)]
    pub ipi: String,
    pub edits_pending: i32,
    /// Time of the last successful write, not of the first insert.
    pub created: Option<DateTimeWithTimeZone>,
}

impl Model {
    pub fn to_display_string(&self) -> String {
        self.ipi.clone()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ipi)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::artist::Entity",
        from = "Column::ArtistId",
        to = "super::artist::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Artist,
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
