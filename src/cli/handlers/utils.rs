use crate::model::{TestStatus, UserStory};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Read;

/// Resolve note text from a positional argument ('-' means stdin) or a file.
pub fn resolve_notes(notes: Option<String>, notes_file: Option<String>) -> Result<String> {
    if let Some(n) = notes {
        if n == "-" {
            return read_stdin();
        }
        return Ok(n);
    }
    if let Some(path) = notes_file {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read notes from {}", path))?;
        return Ok(content.trim().to_string());
    }
    anyhow::bail!("Provide notes as an argument, via --notes-file, or '-' for stdin")
}

pub fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read from stdin")?;
    Ok(content.trim().to_string())
}

pub fn print_story(story: &UserStory) {
    println!("{} {}", story.id.cyan().bold(), story.title.bold());
    println!("Status:   {}", format_test_status(story.test_status));
    println!(
        "INVEST:   {}/6 {}",
        story.invest_criteria.score(),
        format_invest(story)
    );
    println!("Done:     {}", story.definition_of_done);
    println!("Created:  {}", story.created_at.format("%Y-%m-%d %H:%M"));

    if !story.description.is_empty() {
        println!("\n{}", story.description);
    }

    for scenario in &story.acceptance_criteria {
        println!("\n  {} {}", "Scenario:".blue(), scenario.scenario_title);
        for step in &scenario.steps {
            println!("    {} {}", format!("{}", step.keyword).green(), step.text);
        }
    }
}

pub fn print_ambiguity_flags(flags: &[String]) {
    if flags.is_empty() {
        println!("{}", "No ambiguities detected.".green());
        return;
    }
    println!("{} ({})", "Ambiguity flags".yellow().bold(), flags.len());
    for flag in flags {
        println!("  {} {}", "!".yellow(), flag);
    }
}

pub fn format_test_status(status: TestStatus) -> colored::ColoredString {
    match status {
        TestStatus::NotTested => "not_tested".dimmed(),
        TestStatus::Passed => "passed".green(),
        TestStatus::Failed => "failed".red(),
    }
}

fn format_invest(story: &UserStory) -> String {
    let c = &story.invest_criteria;
    [
        ('I', c.independent),
        ('N', c.negotiable),
        ('V', c.valuable),
        ('E', c.estimable),
        ('S', c.small),
        ('T', c.testable),
    ]
    .iter()
    .map(|(letter, on)| {
        if *on {
            letter.to_string()
        } else {
            "-".to_string()
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InvestCriteria;

    #[test]
    fn test_format_invest_marks_missing_criteria() {
        let story = UserStory::new(
            "story-1".to_string(),
            "Title".to_string(),
            "Desc".to_string(),
        )
        .with_invest_criteria(InvestCriteria {
            independent: true,
            valuable: true,
            testable: true,
            ..Default::default()
        });
        assert_eq!(format_invest(&story), "I-V--T");
    }

    #[test]
    fn test_resolve_notes_prefers_argument() {
        let notes = resolve_notes(Some("inline notes".to_string()), None).unwrap();
        assert_eq!(notes, "inline notes");
    }

    #[test]
    fn test_resolve_notes_requires_a_source() {
        assert!(resolve_notes(None, None).is_err());
    }

    #[test]
    fn test_resolve_notes_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "file notes\n").unwrap();
        let notes = resolve_notes(None, Some(path.to_string_lossy().to_string())).unwrap();
        assert_eq!(notes, "file notes");
    }
}
