use super::BacklogStore;
use crate::error::{Result, StorycraftError};
use crate::model::{TestStatus, UserStory};
use std::collections::HashMap;
use std::sync::Mutex;

/// Transient per-process backlog.
///
/// A single mutex around the map keeps per-ID writes atomic and gives
/// `list` a consistent snapshot; fine for the request volumes this serves.
#[derive(Default)]
pub struct InMemoryBacklog {
    stories: Mutex<HashMap<String, UserStory>>,
}

impl InMemoryBacklog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BacklogStore for InMemoryBacklog {
    fn upsert(&self, story: UserStory) -> Result<()> {
        tracing::debug!(id = %story.id, "Storing story");
        let mut stories = self
            .stories
            .lock()
            .map_err(|_| StorycraftError::Storage("backlog lock poisoned".to_string()))?;
        stories.insert(story.id.clone(), story);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<UserStory> {
        let stories = self
            .stories
            .lock()
            .map_err(|_| StorycraftError::Storage("backlog lock poisoned".to_string()))?;
        stories
            .get(id)
            .cloned()
            .ok_or_else(|| StorycraftError::NotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<UserStory>> {
        let stories = self
            .stories
            .lock()
            .map_err(|_| StorycraftError::Storage("backlog lock poisoned".to_string()))?;
        let mut snapshot: Vec<UserStory> = stories.values().cloned().collect();
        snapshot.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(snapshot)
    }

    fn delete(&self, id: &str) -> Result<()> {
        tracing::info!(id = %id, "Deleting story");
        let mut stories = self
            .stories
            .lock()
            .map_err(|_| StorycraftError::Storage("backlog lock poisoned".to_string()))?;
        stories
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorycraftError::NotFound(id.to_string()))
    }

    fn set_test_status(&self, id: &str, status: TestStatus) -> Result<UserStory> {
        tracing::info!(id = %id, status = %status, "Updating test status");
        let mut stories = self
            .stories
            .lock()
            .map_err(|_| StorycraftError::Storage("backlog lock poisoned".to_string()))?;
        let story = stories
            .get_mut(id)
            .ok_or_else(|| StorycraftError::NotFound(id.to_string()))?;
        story.set_test_status(status);
        Ok(story.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserStory;

    fn story(id: &str) -> UserStory {
        UserStory::new(
            id.to_string(),
            format!("As a user, I want {} so that tests pass", id),
            "Test story".to_string(),
        )
    }

    #[test]
    fn test_upsert_and_get_returns_stored_record() {
        let backlog = InMemoryBacklog::new();
        let original = story("story-one");
        backlog.upsert(original.clone()).unwrap();

        let fetched = backlog.get("story-one").unwrap();
        assert_eq!(fetched, original);
        assert_eq!(fetched.created_at, original.created_at);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let backlog = InMemoryBacklog::new();
        assert!(matches!(
            backlog.get("story-missing"),
            Err(StorycraftError::NotFound(_))
        ));
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let backlog = InMemoryBacklog::new();
        backlog.upsert(story("story-one")).unwrap();

        let mut replacement = story("story-one");
        replacement.description = "Replaced".to_string();
        backlog.upsert(replacement).unwrap();

        assert_eq!(backlog.get("story-one").unwrap().description, "Replaced");
        assert_eq!(backlog.list().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let backlog = InMemoryBacklog::new();
        backlog.upsert(story("story-one")).unwrap();
        backlog.delete("story-one").unwrap();
        assert!(matches!(
            backlog.get("story-one"),
            Err(StorycraftError::NotFound(_))
        ));
        assert!(matches!(
            backlog.delete("story-one"),
            Err(StorycraftError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_sorted_by_creation_time() {
        let backlog = InMemoryBacklog::new();
        let mut first = story("story-a");
        let mut second = story("story-b");
        first.created_at = chrono::Utc::now() - chrono::Duration::minutes(5);
        second.created_at = chrono::Utc::now();
        backlog.upsert(second).unwrap();
        backlog.upsert(first).unwrap();

        let ids: Vec<_> = backlog
            .list()
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["story-a", "story-b"]);
    }

    #[test]
    fn test_set_test_status_stamps_updated_at() {
        let backlog = InMemoryBacklog::new();
        backlog.upsert(story("story-one")).unwrap();

        let updated = backlog
            .set_test_status("story-one", TestStatus::Passed)
            .unwrap();
        assert_eq!(updated.test_status, TestStatus::Passed);
        assert!(updated.updated_at.is_some());

        // Persisted, not just returned
        assert_eq!(
            backlog.get("story-one").unwrap().test_status,
            TestStatus::Passed
        );
    }

    #[test]
    fn test_set_test_status_unknown_id() {
        let backlog = InMemoryBacklog::new();
        assert!(matches!(
            backlog.set_test_status("story-nope", TestStatus::Failed),
            Err(StorycraftError::NotFound(_))
        ));
    }

    #[test]
    fn test_concurrent_writes_remain_consistent() {
        use std::sync::Arc;

        let backlog = Arc::new(InMemoryBacklog::new());
        let mut handles = Vec::new();
        for i in 0..8 {
            let backlog = Arc::clone(&backlog);
            handles.push(std::thread::spawn(move || {
                for j in 0..25 {
                    backlog.upsert(story(&format!("story-{}-{}", i, j))).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(backlog.list().unwrap().len(), 200);
    }
}
