use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "rosterdesk",
    version,
    about = "Browse and search student records through the admin API"
)]
pub struct Cli {
    /// Config file (default: ~/.config/rosterdesk/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the records API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a debounced server search and print the settled results
    Search(SearchArgs),
    /// Fetch one page of a collection
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Collection to search (students, lecturers, departments, ...)
    pub entity: String,

    /// Search text
    pub term: String,

    /// Response field holding the results
    #[arg(long, value_name = "KEY")]
    pub result_key: Option<String>,

    /// Print only this field of each result
    #[arg(long, value_name = "FIELD")]
    pub field: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Collection to list (students, lecturers, departments, ...)
    pub entity: String,

    #[arg(long, default_value_t = 1)]
    pub page: u32,

    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,

    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    #[arg(long, value_name = "FIELD")]
    pub sort_by: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Filter as FIELD=VALUE; repeat for several values
    #[arg(long = "filter", value_name = "FIELD=VALUE")]
    pub filters: Vec<String>,

    /// Print only this field of each record
    #[arg(long, value_name = "FIELD")]
    pub field: Option<String>,
}
