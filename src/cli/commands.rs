//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagcombo")]
#[command(about = "Search wiki pages by combined tags", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize tagcombo in a wiki directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Find pages matching a tag query (tag, +tag, -tag)
    Search {
        /// Query terms; joined with spaces. Put `--` before a term starting with `-`
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Only show pages inside this page namespace
        #[arg(short, long)]
        scope: Option<String>,

        /// Resolution strategy (recursive, closure)
        #[arg(long)]
        strategy: Option<String>,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Read or edit tag compositions
    Compose {
        #[command(subcommand)]
        action: ComposeAction,
    },

    /// List all tags used in pages
    Tags,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ComposeAction {
    /// Print the composition text of a tag
    Get { tag: String },

    /// Set the components of a tag (no components clears it)
    Set {
        tag: String,
        components: Vec<String>,
    },

    /// Delete the composition entry of a tag
    Remove { tag: String },

    /// Show components, dependents and namespace members of a tag
    Show { tag: String },

    /// List every stored composition
    List,
}
