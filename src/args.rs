use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quick-links")]
#[command(about = "Search, pin, add and export your quick links")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Master bookmark list (file path or http(s) URL)
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Directory for locally saved bookmarks and pins
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CommandArg>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CommandArg {
    /// Show bookmarks, optionally filtered by a search query
    List {
        /// Case-insensitive text to look for in titles, descriptions and tags
        query: Option<String>,
    },

    /// Toggle the pin on a url
    Pin {
        url: String,
    },

    /// Add a bookmark of your own
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        url: String,

        #[arg(short, long)]
        description: Option<String>,

        /// Tag to attach; repeat for several
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Write your bookmarks to a JSON file
    Export {
        path: Option<PathBuf>,
    },

    /// Add bookmarks from a JSON export or an HTML bookmark file
    Import {
        path: PathBuf,

        /// Base URL for resolving relative links in HTML files
        #[arg(long)]
        base: Option<String>,
    },

    /// Erase your bookmarks and pins
    Clear,

    /// Interactive search and editing
    Shell,
}
