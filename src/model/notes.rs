use super::story::UserStory;
use crate::error::Result;
use crate::validation;
use serde::{Deserialize, Serialize};

/// Raw requirement notes as captured from a stakeholder conversation.
///
/// Immutable input; never persisted beyond the request that produced
/// stories from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNotes {
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl RawNotes {
    pub fn new(content: impl Into<String>, context: Option<String>) -> Result<Self> {
        let content = content.into();
        validation::validate_notes_content(&content)?;
        Ok(Self { content, context })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformRequest {
    pub notes: RawNotes,

    #[serde(default = "default_max_stories")]
    pub max_stories: usize,
}

impl TransformRequest {
    pub fn new(notes: RawNotes, max_stories: usize) -> Result<Self> {
        validation::validate_max_stories(max_stories)?;
        Ok(Self { notes, max_stories })
    }
}

fn default_max_stories() -> usize {
    5
}

/// Aggregate result of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformOutcome {
    pub user_stories: Vec<UserStory>,

    #[serde(default)]
    pub ambiguity_flags: Vec<String>,

    /// Wall-clock seconds spent in the pipeline.
    pub processing_time: f64,
}
