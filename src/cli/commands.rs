use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "zametki")]
#[command(version, about = "A JSON-file-backed personal notes manager")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the notes file
    #[arg(long, short = 'f', global = true, default_value = "notes.json")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    Add {
        /// Note title
        title: String,

        /// Category tag
        #[arg(long, short = 't')]
        tag: String,

        /// Date in YYYY-MM-DD form (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Note content
        #[arg(long, short = 'c', conflicts_with = "stdin")]
        content: Option<String>,

        /// Read content from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes
    List {
        /// Only show notes with this tag
        #[arg(long, short = 't')]
        tag: Option<String>,

        /// Only show notes whose title or content contains this text
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get a single note by id
    Get {
        /// Note id
        id: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update an existing note
    Update {
        /// Note id
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New category tag
        #[arg(long, short = 't')]
        tag: Option<String>,

        /// New date in YYYY-MM-DD form
        #[arg(long)]
        date: Option<String>,

        /// New content
        #[arg(long, short = 'c', conflicts_with = "stdin")]
        content: Option<String>,

        /// Read new content from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note by id
    Delete {
        /// Note id
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Start the JSON API server
    Serve {
        /// Port to listen on
        #[arg(long, short = 'p', default_value_t = 3000)]
        port: u16,
    },
}
