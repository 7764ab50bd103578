//! Pipeline orchestration: transform, validate each story, detect ambiguities.
//!
//! Stories that fail validation are dropped from the response and logged for
//! operator visibility only; the caller sees accepted stories plus ambiguity
//! flags, never per-story rejection details. Ambiguity detection is
//! informational and never gates acceptance.

use crate::error::Result;
use crate::model::{TransformOutcome, TransformRequest};
use crate::rules::validate_story;
use crate::storage::BacklogStore;
use crate::transform::StoryTransformer;
use crate::{ambiguity, validation};
use std::sync::Arc;
use std::time::Instant;

pub struct Pipeline {
    transformer: StoryTransformer,
    store: Arc<dyn BacklogStore>,
}

impl Pipeline {
    pub fn new(transformer: StoryTransformer, store: Arc<dyn BacklogStore>) -> Self {
        Self { transformer, store }
    }

    /// Run the full pipeline for one request.
    ///
    /// Only store failures propagate; a generation failure shows up as an
    /// empty `user_stories` with the ambiguity flags still populated.
    pub async fn run(&self, request: &TransformRequest) -> Result<TransformOutcome> {
        validation::validate_notes_content(&request.notes.content)?;
        validation::validate_max_stories(request.max_stories)?;

        let start = Instant::now();

        let candidates = self
            .transformer
            .transform(&request.notes, request.max_stories)
            .await;
        let candidate_count = candidates.len();

        let mut accepted = Vec::new();
        for story in candidates {
            let outcome = validate_story(&story);
            if outcome.is_valid {
                self.store.upsert(story.clone())?;
                accepted.push(story);
            } else {
                tracing::warn!(
                    id = %story.id,
                    errors = ?outcome.errors,
                    "Dropping story that failed validation"
                );
            }
        }

        let ambiguity_flags = ambiguity::detect(&request.notes);

        tracing::info!(
            generated = candidate_count,
            accepted = accepted.len(),
            flags = ambiguity_flags.len(),
            "Transform pipeline finished"
        );

        Ok(TransformOutcome {
            user_stories: accepted,
            ambiguity_flags,
            processing_time: start.elapsed().as_secs_f64(),
        })
    }
}
