use super::utils::read_stdin;
use crate::model::UserStory;
use crate::rules;
use anyhow::{Context, Result};
use colored::Colorize;

pub fn handle_validate(file: String, json: bool) -> Result<()> {
    let content = if file == "-" {
        read_stdin()?
    } else {
        std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read story from {}", file))?
    };

    let story: UserStory =
        serde_json::from_str(&content).context("Input is not a valid user story document")?;
    let outcome = rules::validate_story(&story);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.is_valid {
        println!("{} {}", story.id.cyan(), "valid".green().bold());
    } else {
        println!("{} {}", story.id.cyan(), "invalid".red().bold());
        for error in &outcome.errors {
            println!("  {} {}: {}", "x".red(), error.field, error.message);
        }
    }

    if !outcome.is_valid {
        anyhow::bail!("Story failed {} validation rule(s)", outcome.errors.len());
    }
    Ok(())
}
