use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Uniqueness violation: {0}")]
    UniquenessViolation(String),

    #[error("Unknown artist: {0}")]
    UnknownArtist(i32),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::UniquenessViolation(detail),
            _ => Self::Database(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
