//! Terminal frontend for the todo server.
//!
//! # Design
//! All state handling lives in `todo-core`. This crate supplies the blocking
//! HTTP transport, command-line configuration, and the commands that feed
//! messages into a [`todo_core::Runtime`].

pub mod args;
pub mod commands;
pub mod shell;
pub mod transport;

pub use args::{Cli, Command};
pub use commands::{apply, run_command, Action, CommandError};
pub use transport::UreqTransport;

use todo_core::{Model, Runtime, TodoClient};

/// Build a runtime for `cli`'s server and display settings.
pub fn runtime(cli: &Cli) -> Runtime<UreqTransport> {
    Runtime::new(
        TodoClient::new(&cli.base_url),
        UreqTransport::new(),
        Model::new(cli.sort),
    )
}
