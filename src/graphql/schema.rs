use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::config::StorycraftConfig;
use crate::error::{Result, StorycraftError};
use crate::generate::ChatClient;
use crate::model::{RawNotes, TransformRequest};
use crate::pipeline::Pipeline;
use crate::rules::validate_story;
use crate::stats;
use crate::storage::{BacklogStore, InMemoryBacklog};
use crate::transform::StoryTransformer;

use super::types::*;

pub type StorycraftSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct AppState {
    pub config: StorycraftConfig,
    pub store: Arc<InMemoryBacklog>,
    pub pipeline: Pipeline,
}

/// Build the schema with a fresh process-lifetime backlog.
pub fn build_schema(config: StorycraftConfig) -> Result<StorycraftSchema> {
    let store = Arc::new(InMemoryBacklog::new());
    let generator = Arc::new(ChatClient::new(&config.llm)?);
    let transformer = StoryTransformer::new(generator, config.backlog.clone());
    let pipeline = Pipeline::new(transformer, store.clone());

    let state = Arc::new(AppState {
        config,
        store,
        pipeline,
    });

    Ok(Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish())
}

fn state<'a>(ctx: &'a Context<'_>) -> &'a Arc<AppState> {
    ctx.data_unchecked::<Arc<AppState>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single user story by ID
    async fn story(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<Story>> {
        let state = state(ctx);
        match state.store.get(&id) {
            Ok(story) => Ok(Some(story.into())),
            Err(StorycraftError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List user stories with optional test-status filtering
    async fn stories(
        &self,
        ctx: &Context<'_>,
        test_status: Option<TestStatus>,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> async_graphql::Result<StoryConnection> {
        let state = state(ctx);
        let mut stories = state.store.list()?;

        if let Some(status) = test_status {
            let filter: crate::model::TestStatus = status.into();
            stories.retain(|s| s.test_status == filter);
        }

        let total_count = stories.len();
        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(100);
        let nodes: Vec<Story> = stories
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(Into::into)
            .collect();

        Ok(StoryConnection { nodes, total_count })
    }

    /// Backlog statistics: totals, test-status breakdown, INVEST compliance
    async fn stats(&self, ctx: &Context<'_>) -> async_graphql::Result<BacklogStats> {
        let state = state(ctx);
        let stories = state.store.list()?;
        Ok(stats::compute(&stories).into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Transform raw requirement notes into validated user stories
    async fn transform_notes(
        &self,
        ctx: &Context<'_>,
        input: TransformNotesInput,
    ) -> async_graphql::Result<TransformResult> {
        let state = state(ctx);

        let notes = RawNotes::new(input.content, input.context)?;
        let max_stories = input
            .max_stories
            .unwrap_or(state.config.backlog.default_max_stories);
        let request = TransformRequest::new(notes, max_stories)?;

        let outcome = state.pipeline.run(&request).await?;
        Ok(outcome.into())
    }

    /// Update a story's acceptance-test status
    async fn set_test_status(
        &self,
        ctx: &Context<'_>,
        id: String,
        status: TestStatus,
    ) -> async_graphql::Result<Story> {
        let state = state(ctx);
        let story = state.store.set_test_status(&id, status.into())?;
        Ok(story.into())
    }

    /// Re-validate a stored story against the business rules
    async fn validate_story(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<ValidationResult> {
        let state = state(ctx);
        let story = state.store.get(&id)?;
        Ok(validate_story(&story).into())
    }

    /// Delete a story from the backlog
    async fn delete_story(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<bool> {
        let state = state(ctx);
        state.store.delete(&id)?;
        Ok(true)
    }
}
