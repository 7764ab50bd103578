//! Backlog storage.
//!
//! The pipeline takes a store by trait object, so the transient in-memory
//! map shipped here can be replaced by a durable backend without touching
//! the orchestration code.
//!
//! ## Components
//!
//! - [`BacklogStore`]: get/upsert/delete/list by story ID
//! - [`InMemoryBacklog`]: process-lifetime `Mutex<HashMap>` implementation

mod backlog;

pub use backlog::InMemoryBacklog;

use crate::error::Result;
use crate::model::{TestStatus, UserStory};

/// Key-value storage for user stories, keyed by opaque ID.
///
/// Implementations must make each write atomic with respect to concurrent
/// reads by ID, and `list` must return a consistent snapshot of completed
/// writes.
pub trait BacklogStore: Send + Sync {
    /// Insert or replace a story under its ID.
    fn upsert(&self, story: UserStory) -> Result<()>;

    /// Fetch a story by ID; `NotFound` if absent.
    fn get(&self, id: &str) -> Result<UserStory>;

    /// Snapshot of all stories, ordered by creation time.
    fn list(&self) -> Result<Vec<UserStory>>;

    /// Remove a story by ID; `NotFound` if absent.
    fn delete(&self, id: &str) -> Result<()>;

    /// Update a story's acceptance-test status, stamping `updated_at`.
    fn set_test_status(&self, id: &str, status: TestStatus) -> Result<UserStory>;
}
