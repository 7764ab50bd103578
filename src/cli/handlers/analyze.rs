use super::utils::{print_ambiguity_flags, resolve_notes};
use crate::ambiguity;
use crate::model::RawNotes;
use anyhow::Result;

pub fn handle_analyze(
    notes: Option<String>,
    notes_file: Option<String>,
    json: bool,
) -> Result<()> {
    let content = resolve_notes(notes, notes_file)?;
    let raw = RawNotes::new(content, None)?;
    let flags = ambiguity::detect(&raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&flags)?);
        return Ok(());
    }

    print_ambiguity_flags(&flags);
    Ok(())
}
