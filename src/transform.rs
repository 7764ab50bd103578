//! Story transformation: raw notes in, structured user stories out.
//!
//! Delegates the actual text generation to a [`TextGenerator`] and owns the
//! output contract: the response must contain a JSON array of story objects,
//! possibly buried in prose. Recovery is deliberately forgiving: a
//! transformer failure of any kind yields an empty batch, never an error, so
//! callers can still return ambiguity flags for the notes.

use crate::config::BacklogSettings;
use crate::generate::{SYSTEM_PROMPT, TextGenerator, build_user_prompt, story_array_schema};
use crate::model::{
    GherkinScenario, InvestCriteria, RawNotes, UserStory, generate_id,
};
use serde::Deserialize;
use std::sync::Arc;

/// Wire shape of one generated story, before an ID and timestamp exist.
///
/// INVEST booleans default to false when the generator omits them.
#[derive(Debug, Deserialize)]
struct StoryDraft {
    title: String,
    description: String,
    #[serde(default)]
    invest_criteria: InvestCriteria,
    #[serde(default)]
    definition_of_done: String,
    #[serde(default)]
    acceptance_criteria: Vec<GherkinScenario>,
}

pub struct StoryTransformer {
    generator: Arc<dyn TextGenerator>,
    settings: BacklogSettings,
}

impl StoryTransformer {
    pub fn new(generator: Arc<dyn TextGenerator>, settings: BacklogSettings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    /// Transform raw notes into at most `max_stories` user stories.
    ///
    /// Returns an empty vector on any generation or parse failure; the
    /// ceiling is requested of the generator, not enforced by truncation.
    pub async fn transform(&self, notes: &RawNotes, max_stories: usize) -> Vec<UserStory> {
        let user_prompt = build_user_prompt(notes, max_stories);
        let schema = story_array_schema();

        let content = match self
            .generator
            .generate(SYSTEM_PROMPT, &user_prompt, Some(&schema))
            .await
        {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(error = %e, "Story generation failed");
                return Vec::new();
            }
        };

        self.parse_stories(&content)
    }

    /// Map generator output into fully-formed stories, isolating per-element
    /// failures so one malformed entry does not discard the batch.
    fn parse_stories(&self, content: &str) -> Vec<UserStory> {
        let Some(array) = extract_json_array(content) else {
            tracing::warn!("No JSON array found in generator output");
            return Vec::new();
        };

        let mut stories = Vec::new();
        for (i, element) in array.into_iter().enumerate() {
            match serde_json::from_value::<StoryDraft>(element) {
                Ok(draft) => stories.push(self.materialize(draft)),
                Err(e) => {
                    tracing::warn!(index = i, error = %e, "Skipping unmappable story element");
                }
            }
        }
        stories
    }

    /// Assign a fresh ID and creation timestamp to a draft.
    fn materialize(&self, draft: StoryDraft) -> UserStory {
        UserStory::new(
            generate_id(&self.settings.prefix, self.settings.id_length),
            draft.title,
            draft.description,
        )
        .with_invest_criteria(draft.invest_criteria)
        .with_definition_of_done(draft.definition_of_done)
        .with_acceptance_criteria(draft.acceptance_criteria)
    }
}

/// Locate the first well-formed JSON array in loosely-formatted text.
///
/// Tries the span from the first `[` to each closing `]` working backwards,
/// accepting the first candidate that parses. Handles fenced code blocks and
/// prose wrapping without needing the generator to be byte-exact.
fn extract_json_array(content: &str) -> Option<Vec<serde_json::Value>> {
    let start = content.find('[')?;
    let bytes = content.as_bytes();
    for end in (start..content.len()).rev() {
        if bytes[end] != b']' {
            continue;
        }
        if let Ok(array) = serde_json::from_str::<Vec<serde_json::Value>>(&content[start..=end]) {
            return Some(array);
        }
    }
    None
}
