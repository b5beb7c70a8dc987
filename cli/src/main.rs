use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use todo_cli::{run_command, runtime, shell, Cli, Command};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let mut runtime = runtime(&cli);
    let command = cli.command.unwrap_or(Command::List);

    if command == Command::Shell {
        shell::run(&mut runtime, io::stdin().lock(), io::stdout().lock())?;
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = run_command(&mut runtime, &command);

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", runtime.view())?;
    stdout.flush()?;

    if let Err(err) = outcome {
        eprintln!("todo: {err}");
        return Ok(ExitCode::FAILURE);
    }
    if runtime.model().error.is_some() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
