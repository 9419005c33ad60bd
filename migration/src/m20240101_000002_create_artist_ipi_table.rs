use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

use super::m20240101_000001_create_artist_table::Artist;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Backend-specific form of the `^\d{11}$` check on `artist_ipi.ipi`.
fn ipi_format_check(backend: DatabaseBackend) -> SimpleExpr {
    match backend {
        DatabaseBackend::Postgres => Expr::cust(r#""ipi" ~ '^[0-9]{11}$'"#),
        DatabaseBackend::Sqlite => Expr::cust(format!(r#""ipi" GLOB '{}'"#, "[0-9]".repeat(11))),
        _ => Expr::cust("`ipi` REGEXP '^[0-9]{11}$'"),
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        manager
            .create_table(
                Table::create()
                    .table(ArtistIpi::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArtistIpi::Artist)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ArtistIpi::Ipi)
                            .char_len(11)
                            .not_null()
                            .unique_key()
                            .check(ipi_format_check(backend)),
                    )
                    .col(
                        ColumnDef::new(ArtistIpi::EditsPending)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(ArtistIpi::EditsPending).gte(0)),
                    )
                    .col(
                        ColumnDef::new(ArtistIpi::Created)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_artist_ipi")
                            .col(ArtistIpi::Artist)
                            .col(ArtistIpi::Ipi),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_ipi_artist")
                            .from(ArtistIpi::Table, ArtistIpi::Artist)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArtistIpi::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArtistIpi {
    Table,
    Artist,
    Ipi,
    EditsPending,
    Created,
}
