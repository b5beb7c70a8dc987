use clap::{Parser, Subcommand};
use todo_core::DEFAULT_BASE_URL;

/// Terminal frontend for the todo server.
#[derive(Debug, Parser)]
#[command(name = "todo", version)]
pub struct Cli {
    /// Server root; the collection lives at `<base-url>/todos`.
    #[arg(long, env = "TODO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Order rows by title instead of server order.
    #[arg(long, env = "TODO_SORT")]
    pub sort: bool,

    /// Log requests and state transitions to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show all todos (default).
    List,
    /// Create a todo.
    Add { title: String },
    /// Change a todo's title.
    Rename { id: String, title: String },
    /// Mark a todo as completed.
    Done { id: String },
    /// Mark a todo as not completed.
    Undo { id: String },
    /// Delete a todo.
    Rm { id: String },
    /// Interactive session reading commands from stdin.
    Shell,
}
