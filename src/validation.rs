//! Write-path checks for artist IPI records.
//!
//! Every create or update in [`crate::db::repositories::ArtistIpiRepository`]
//! runs these before a statement reaches the database.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, Result};

pub const IPI_LENGTH: usize = 11;

/// Message used for any value rejected by the IPI pattern.
pub const INVALID_VALUE_MESSAGE: &str = "Enter a valid value.";

// ASCII class on purpose: `\d` would also accept non-Latin digits.
static IPI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11}$").expect("IPI pattern must compile"));

pub fn is_valid_ipi(ipi: &str) -> bool {
    IPI_REGEX.is_match(ipi)
}

pub fn validate_ipi(ipi: &str) -> Result<()> {
    if is_valid_ipi(ipi) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "ipi {:?}: {} ({} digits required)",
            ipi, INVALID_VALUE_MESSAGE, IPI_LENGTH
        )))
    }
}

pub fn validate_edits_pending(edits_pending: i32) -> Result<()> {
    if edits_pending < 0 {
        return Err(AppError::Validation(format!(
            "edits_pending {}: must be zero or positive",
            edits_pending
        )));
    }
    Ok(())
}
