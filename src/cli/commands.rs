use clap::{Parser, Subcommand};
use initiative_wizard::wizard::FieldId;
use std::path::PathBuf;

/// `initiative-wizard` - step through an initiative draft from the terminal.
#[derive(Parser, Debug)]
#[command(name = "initiative-wizard")]
#[command(version)]
#[command(about = "Fill in, check and navigate an initiative draft.", long_about = None)]
pub struct Cli {
    /// Storage key of the draft (defaults to the configured key)
    #[arg(long, global = true)]
    pub draft_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every step with its status and the overall progress
    Status,

    /// Move to the next step if the current one has its required fields
    Next,

    /// Move to the previous step
    Prev,

    /// Jump to a step (values outside 1-6 are clamped)
    Goto {
        #[arg(allow_negative_numbers = true)]
        step: i64,
    },

    /// Set one field of the draft
    ///
    /// Text fields take the raw value. `tags` and `co_founder_emails` accept
    /// a comma-separated list; every other field expects JSON.
    Set {
        /// Field name in snake_case, e.g. `main_visual`
        field: FieldId,
        value: String,
    },

    /// Merge a JSON file of form values into the draft
    Import {
        /// Path to a camelCase JSON object, e.g. `{"title": "..."}`
        path: PathBuf,
    },

    /// Run every field validator and report the first step to fix
    Check,

    /// Throw the draft away
    Discard,
}
