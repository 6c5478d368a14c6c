use clap::{Parser, Subcommand};
use std::sync::OnceLock;

fn get_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        let git_hash = env!("GIT_HASH");
        if git_hash.is_empty() {
            version.to_string()
        } else {
            format!("{}+{}", version, git_hash)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "jotz")]
#[command(version = get_version())]
#[command(about = "Bounded scratch files for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the cache area instead of persistent storage
    #[arg(short, long, global = true)]
    pub cache: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new empty file and start tracking it
    #[command(alias = "c")]
    Create {
        /// Name of the file to create
        name: String,
    },
    /// Write content to a file, creating it if needed
    #[command(alias = "w")]
    Write {
        /// Name of the file to write
        name: String,
        /// Content to write; opens $EDITOR when omitted
        content: Option<String>,
    },
    /// Print a file's content
    #[command(alias = "r")]
    Read {
        /// Name of the file to read
        name: String,
    },
    /// Delete a file and stop tracking it
    #[command(alias = "rm")]
    Delete {
        /// Name of the file to delete
        name: String,
    },
    /// List tracked files, oldest first
    #[command(alias = "ls")]
    List,
    /// Print where a file lives on disk
    Path {
        /// Name of the file to locate
        name: String,
    },
    /// Show or change configuration
    Config {
        /// Config key to show or set
        key: Option<String>,
        /// New value for the key
        value: Option<String>,
    },
}
