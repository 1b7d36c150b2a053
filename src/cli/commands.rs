use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dl", about = "daylist - a local-first to-do list", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Keep state in a different directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Skip the first-run seed fetch (start with an empty list)
    #[arg(long, global = true)]
    pub no_fetch: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List a page (myday, important, planned, all, completed, inbox)
    List(ListArgs),
    /// Add a task
    Add(AddArgs),
    /// Show a task's details and sub-steps
    Show(IdArg),
    /// Mark a task complete
    Done(IdArg),
    /// Mark a task incomplete again
    Undone(IdArg),
    /// Flag a task as important
    Important(IdArg),
    /// Add a task to My Day
    Today(IdArg),
    /// Remove a task
    Remove(IdArg),
    /// Add a sub-step to a task
    Sub(SubArgs),
    /// Set or clear a task's deadline
    Due(DueArgs),
    /// Search tasks by keyword
    Search(SearchArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Page to list
    #[arg(default_value = "inbox")]
    pub page: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Flag as important
    #[arg(short, long)]
    pub important: bool,
    /// Add to My Day
    #[arg(short, long)]
    pub today: bool,
    /// Deadline as YYYY-MM-DD
    #[arg(short, long)]
    pub due: Option<String>,
    /// Free-form memo
    #[arg(short, long)]
    pub memo: Option<String>,
}

#[derive(Args)]
pub struct IdArg {
    /// Task id (a unique prefix is enough)
    pub id: String,
}

#[derive(Args)]
pub struct SubArgs {
    /// Parent task id (a unique prefix is enough)
    pub id: String,
    /// Sub-step title
    pub title: String,
}

#[derive(Args)]
pub struct DueArgs {
    /// Task id (a unique prefix is enough)
    pub id: String,
    /// Deadline as YYYY-MM-DD; omit to clear
    pub date: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Keyword (literal, case-insensitive)
    pub keyword: String,
}
