//! Construction-time input validation.
//!
//! Malformed input is rejected here, before any pipeline stage runs.
//! Business rules (title shape, INVEST threshold, keyword coverage) live in
//! [`crate::rules`] instead.

use crate::error::{Result, StorycraftError};

/// Maximum allowed length for raw note content.
pub const MAX_NOTES_LENGTH: usize = 50_000;

/// Maximum allowed length for a story ID.
pub const MAX_ID_LENGTH: usize = 50;

/// Upper bound on stories requested per transform call.
pub const MAX_STORIES_CEILING: usize = 50;

/// Validates raw note content (non-empty, bounded).
pub fn validate_notes_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(StorycraftError::Validation(
            "Notes content cannot be empty".to_string(),
        ));
    }
    if content.len() > MAX_NOTES_LENGTH {
        return Err(StorycraftError::Validation(format!(
            "Notes content exceeds maximum length of {} characters",
            MAX_NOTES_LENGTH
        )));
    }
    Ok(())
}

/// Validates a requested story ceiling (1..=MAX_STORIES_CEILING).
pub fn validate_max_stories(max_stories: usize) -> Result<()> {
    if max_stories == 0 {
        return Err(StorycraftError::Validation(
            "max_stories must be at least 1".to_string(),
        ));
    }
    if max_stories > MAX_STORIES_CEILING {
        return Err(StorycraftError::Validation(format!(
            "max_stories cannot exceed {}",
            MAX_STORIES_CEILING
        )));
    }
    Ok(())
}

/// Validates a story ID.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(StorycraftError::Validation("ID cannot be empty".to_string()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(StorycraftError::Validation(format!(
            "ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }
    if id.contains(char::is_whitespace) {
        return Err(StorycraftError::Validation(
            "ID cannot contain whitespace".to_string(),
        ));
    }
    Ok(())
}
