//! # Storycraft - Requirements-to-backlog pipeline
//!
//! Storycraft turns free-form requirement notes into structured, INVEST-scored
//! user stories. An LLM behind an OpenAI-compatible API drafts the stories; a
//! deterministic rules engine validates them and a lexical analyzer flags
//! ambiguous wording in the source notes.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default .storycraft.toml
//! storycraft init
//!
//! # Transform notes into stories
//! storycraft transform "Users need to reset their password via email"
//!
//! # Only run the ambiguity detector
//! storycraft analyze --notes-file requirements.txt
//!
//! # Validate a story document
//! storycraft validate story.json
//!
//! # Start the GraphQL server
//! storycraft serve --port 4000
//! ```
//!
//! ## Modules
//!
//! - [`ambiguity`]: Lexical ambiguity detection over raw notes
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`generate`]: LLM text generation (trait + HTTP client)
//! - [`graphql`]: GraphQL schema and resolvers
//! - [`model`]: Data models (UserStory, GherkinScenario, etc.)
//! - [`pipeline`]: The transform-validate-analyze orchestration
//! - [`rules`]: Deterministic business-rule validation
//! - [`stats`]: Backlog aggregate statistics
//! - [`storage`]: In-memory backlog store
//! - [`transform`]: LLM output parsing and story materialization

/// Lexical ambiguity detection over raw requirement notes.
pub mod ambiguity;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.storycraft.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `StorycraftError` enum and `Result<T>` type alias.
pub mod error;

/// LLM text generation.
///
/// The `TextGenerator` trait plus an HTTP client for OpenAI-compatible APIs.
pub mod generate;

/// GraphQL schema and resolvers.
///
/// Provides async-graphql schema for querying and mutating the backlog.
pub mod graphql;

pub mod logging;

/// Data models for stories and notes.
///
/// Includes `UserStory`, `GherkinScenario`, `InvestCriteria`, and `TestStatus`.
pub mod model;

/// Pipeline orchestration: transform, validate, persist, analyze.
pub mod pipeline;

/// Deterministic business-rule validation for user stories.
pub mod rules;

/// Backlog aggregate statistics.
pub mod stats;

/// In-memory backlog storage behind the `BacklogStore` trait.
pub mod storage;

/// LLM output parsing and story materialization.
pub mod transform;

/// Input validation utilities.
///
/// Validates note content, story limits, and IDs to prevent invalid data.
pub mod validation;
