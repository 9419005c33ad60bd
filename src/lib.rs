//! Artist IPI Library
//!
//! Storage and validation of artist Interested Parties Information codes.

pub mod config;
pub mod db;
pub mod error;
pub mod test_utils;
pub mod validation;
