use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "artist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::artist_ipi::Entity")]
    ArtistIpi,
}

impl Related<super::artist_ipi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtistIpi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
