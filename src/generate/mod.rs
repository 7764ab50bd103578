//! External text-generation capability.
//!
//! The pipeline only ever talks to [`TextGenerator`], so the concrete
//! provider (an OpenAI-compatible endpoint today) can be swapped without
//! touching the transformation logic. Tests substitute an in-process fake.

mod client;
mod prompt;

pub use client::{ChatClient, ChatMessage};
pub use prompt::{SYSTEM_PROMPT, build_user_prompt, story_array_schema};

use crate::error::Result;
use async_trait::async_trait;

/// A black-box text transformation service.
///
/// `schema` optionally constrains the output shape for providers that
/// support structured generation; providers that do not may ignore it and
/// return loosely-formatted text, which the transformer repairs.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        system_instruction: &str,
        user_instruction: &str,
        schema: Option<&serde_json::Value>,
    ) -> Result<String>;
}
