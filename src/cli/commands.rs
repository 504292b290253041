use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tick", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - your todo list, one file"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different store file
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List items (optionally filtered)
    List(ListArgs),
    /// Add an item to the end of the list
    Add(AddArgs),
    /// Toggle an item's completion flag
    Toggle(IdArgs),
    /// Edit an item's text
    Edit(EditArgs),
    /// Remove an item
    Rm(IdArgs),
    /// Remove every completed item
    Clear,
}

#[derive(Args)]
pub struct ListArgs {
    /// Show only `all`, `active`, or `completed` items
    #[arg(long, default_value = "all")]
    pub filter: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Item text (words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Item id (a unique prefix is enough)
    pub id: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Item id (a unique prefix is enough)
    pub id: String,
    /// Replacement text (words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,
}
