//! Business-rule validation for user stories.
//!
//! Five independent rules, each evaluated unconditionally so a caller sees
//! every violation at once. Pure and deterministic; never mutates the story.

use crate::model::{GherkinKeyword, UserStory};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Minimum trimmed length for a definition of done.
pub const MIN_DEFINITION_OF_DONE_LENGTH: usize = 10;

/// Minimum number of satisfied INVEST criteria.
pub const MIN_INVEST_SCORE: usize = 4;

// Note: no space required before "so that". The permissive pattern is kept
// intentionally; tightening it would reject titles accepted today.
static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^as a .+, i want .+so that .+").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Offending attribute, possibly indexed (e.g. `acceptance_criteria[1]`).
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,

    #[serde(default)]
    pub errors: Vec<ValidationError>,
}

/// Validate a user story against all five business rules.
pub fn validate_story(story: &UserStory) -> ValidationOutcome {
    let mut errors = Vec::new();

    // Rule 1: definition of done must carry real content (character count,
    // not bytes, so multibyte text is measured the same as ASCII)
    if story.definition_of_done.trim().chars().count() < MIN_DEFINITION_OF_DONE_LENGTH {
        errors.push(ValidationError {
            field: "definition_of_done".to_string(),
            message: format!(
                "Definition of Done must be at least {} characters long",
                MIN_DEFINITION_OF_DONE_LENGTH
            ),
        });
    }

    // Rule 2: at least one acceptance-criteria scenario
    if story.acceptance_criteria.is_empty() {
        errors.push(ValidationError {
            field: "acceptance_criteria".to_string(),
            message: "User story must have at least one acceptance criteria scenario".to_string(),
        });
    }

    // Rule 3: title follows the user-story format
    if !TITLE_PATTERN.is_match(&story.title) {
        errors.push(ValidationError {
            field: "title".to_string(),
            message: "Title must follow format: 'As a [user], I want [goal] so that [reason]'"
                .to_string(),
        });
    }

    // Rule 4: every scenario covers Given, When, and Then
    for (i, scenario) in story.acceptance_criteria.iter().enumerate() {
        for required in [GherkinKeyword::Given, GherkinKeyword::When, GherkinKeyword::Then] {
            if !scenario.steps.iter().any(|s| s.keyword == required) {
                errors.push(ValidationError {
                    field: format!("acceptance_criteria[{}]", i),
                    message: format!(
                        "Scenario '{}' missing {} step",
                        scenario.scenario_title, required
                    ),
                });
            }
        }
    }

    // Rule 5: INVEST threshold
    if story.invest_criteria.score() < MIN_INVEST_SCORE {
        errors.push(ValidationError {
            field: "invest_criteria".to_string(),
            message: format!(
                "User story should meet at least {} out of 6 INVEST criteria",
                MIN_INVEST_SCORE
            ),
        });
    }

    ValidationOutcome {
        is_valid: errors.is_empty(),
        errors,
    }
}
