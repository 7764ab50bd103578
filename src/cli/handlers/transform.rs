use super::CommandContext;
use super::utils::{print_ambiguity_flags, print_story, resolve_notes};
use crate::generate::ChatClient;
use crate::model::{RawNotes, TransformRequest};
use crate::pipeline::Pipeline;
use crate::storage::InMemoryBacklog;
use crate::transform::StoryTransformer;
use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;

pub fn handle_transform(
    ctx: &CommandContext,
    notes: Option<String>,
    notes_file: Option<String>,
    context: Option<String>,
    max_stories: Option<usize>,
    json: bool,
) -> Result<()> {
    let content = resolve_notes(notes, notes_file)?;
    let raw = RawNotes::new(content, context)?;
    let request = TransformRequest::new(
        raw,
        max_stories.unwrap_or(ctx.config.backlog.default_max_stories),
    )?;

    let generator = Arc::new(ChatClient::new(&ctx.config.llm)?);
    let transformer = StoryTransformer::new(generator, ctx.config.backlog.clone());
    let pipeline = Pipeline::new(transformer, Arc::new(InMemoryBacklog::new()));

    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(pipeline.run(&request))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if outcome.user_stories.is_empty() {
        println!("{}", "No valid user stories were produced.".yellow());
    } else {
        println!(
            "{} ({})",
            "User stories".bold(),
            outcome.user_stories.len()
        );
        for story in &outcome.user_stories {
            println!();
            print_story(story);
        }
        println!();
    }

    print_ambiguity_flags(&outcome.ambiguity_flags);
    println!("\nProcessed in {:.2}s", outcome.processing_time);

    Ok(())
}
