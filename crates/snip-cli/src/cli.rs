//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// snip - Extract named snippets from files and splice them back in
#[derive(Parser, Debug)]
#[command(name = "snip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ./.snip.toml
    #[arg(long, global = true, env = "SNIP_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write files in place instead of through a temp file
    #[arg(long, global = true)]
    pub direct: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// Every command takes the snippet file as its last argument. When it is
/// omitted, `SNIP_FILE` and then the config file's `snippet_file` are used.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Save a range of lines from a file as a new template
    ///
    /// Examples:
    ///   snip extract main.rs 10 24 handler snippets.txt
    Extract {
        /// File to copy lines from
        source_file: PathBuf,

        /// First line of the range (1-based)
        start_line: usize,

        /// Last line of the range (inclusive)
        end_line: usize,

        /// Name of the new template
        new_template_name: String,

        /// Snippet file to append to (created if missing)
        #[arg(env = "SNIP_FILE")]
        snippet_file: Option<PathBuf>,
    },

    /// Replace a line of a file with a template, matching its indentation
    ///
    /// Examples:
    ///   snip insert handler server.rs 42 snippets.txt
    Insert {
        /// Name of the template to insert
        template_name: String,

        /// File to insert into (created if missing)
        target_file: PathBuf,

        /// Line to overwrite (1-based); short files are padded
        line_number: usize,

        /// Snippet file holding the template
        #[arg(env = "SNIP_FILE")]
        snippet_file: Option<PathBuf>,
    },

    /// List template names
    #[command(alias = "ls")]
    List {
        /// Snippet file to read
        #[arg(env = "SNIP_FILE")]
        snippet_file: Option<PathBuf>,
    },

    /// Print a template
    Show {
        /// Name of the template to print
        template_name: String,

        /// Snippet file to read
        #[arg(env = "SNIP_FILE")]
        snippet_file: Option<PathBuf>,
    },

    /// Remove a template
    #[command(alias = "rm")]
    Delete {
        /// Name of the template to remove
        template_name: String,

        /// Snippet file to edit
        #[arg(env = "SNIP_FILE")]
        snippet_file: Option<PathBuf>,
    },

    /// Give a template a new name
    #[command(alias = "mv")]
    Rename {
        /// Current name of the template
        old_template_name: String,

        /// New name for the template
        new_template_name: String,

        /// Snippet file to edit
        #[arg(env = "SNIP_FILE")]
        snippet_file: Option<PathBuf>,
    },
}
