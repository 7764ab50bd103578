use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "storycraft")]
#[command(
    author,
    version,
    about = "Turn raw requirement notes into validated INVEST user stories"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Write structured logs to this file in addition to stderr
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transform raw notes into user stories via the generation pipeline
    #[command(visible_alias = "t")]
    Transform {
        /// Raw requirement notes (use '-' to read from stdin)
        notes: Option<String>,

        /// Read notes from file
        #[arg(long)]
        notes_file: Option<String>,

        /// Additional project or domain context
        #[arg(short, long)]
        context: Option<String>,

        /// Maximum number of stories to generate
        #[arg(short, long)]
        max_stories: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run only the ambiguity detector over raw notes
    #[command(visible_alias = "a")]
    Analyze {
        /// Raw requirement notes (use '-' to read from stdin)
        notes: Option<String>,

        /// Read notes from file
        #[arg(long)]
        notes_file: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a user story JSON document against the business rules
    Validate {
        /// Path to a story JSON file (use '-' to read from stdin)
        file: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the GraphQL HTTP server with an in-memory backlog
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,
    },

    /// Write a default .storycraft.toml in the current directory
    Init,
}
