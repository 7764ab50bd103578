use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use storycraft::cli::handlers::{
    CommandContext, handle_analyze, handle_init, handle_serve, handle_transform, handle_validate,
};
use storycraft::cli::{Cli, Commands};
use storycraft::config::StorycraftConfig;
use storycraft::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.clone().map(PathBuf::from));

    // reqwest is built without a default TLS provider; install ring once.
    rustls::crypto::ring::default_provider()
        .install_default()
        .ok();

    match cli.command {
        Commands::Init => handle_init(),
        Commands::Transform {
            notes,
            notes_file,
            context,
            max_stories,
            json,
        } => {
            let ctx = load_context()?;
            handle_transform(&ctx, notes, notes_file, context, max_stories, json)
        }
        Commands::Analyze {
            notes,
            notes_file,
            json,
        } => handle_analyze(notes, notes_file, json),
        Commands::Validate { file, json } => handle_validate(file, json),
        Commands::Serve { port } => {
            let ctx = load_context()?;
            handle_serve(&ctx, port)
        }
    }
}

fn load_context() -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let (config, root) =
        StorycraftConfig::load(&cwd).context("Failed to load storycraft configuration")?;
    Ok(CommandContext::new(config, root))
}
