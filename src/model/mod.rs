//! Data models for storycraft.
//!
//! This module defines the core data structures:
//!
//! - [`UserStory`]: a backlog record with INVEST evaluation and Gherkin
//!   acceptance criteria
//! - [`GherkinScenario`] / [`GherkinStep`]: acceptance-criteria notation
//! - [`InvestCriteria`]: six-boolean quality evaluation
//! - [`RawNotes`]: the free-text input to the pipeline
//! - [`TestStatus`]: acceptance-test workflow state

mod notes;
mod story;
mod types;

pub use notes::{RawNotes, TransformOutcome, TransformRequest};
pub use story::{GherkinScenario, GherkinStep, InvestCriteria, UserStory, generate_id};
pub use types::{GherkinKeyword, TestStatus};
