//! Line-oriented interactive session.

use std::io::{self, BufRead, Write};

use todo_core::{Runtime, Transport};

use crate::commands::{apply, Action};

const HELP: &str = "\
commands:
  add <title>        create a todo
  edit <id>          start renaming a todo
  draft <title>      replace the title being edited
  save | cancel      finish or abandon the edit
  done <id>          mark completed
  undo <id>          mark not completed
  rm <id>            delete a todo
  refresh            reload the list
  help | quit";

#[derive(Debug, PartialEq, Eq)]
enum Line {
    Empty,
    Help,
    Quit,
    Run(Action),
}

fn parse(line: &str) -> Result<Line, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let arg = |name: &str| {
        if rest.is_empty() {
            Err(format!("usage: {word} <{name}>"))
        } else {
            Ok(rest.to_string())
        }
    };

    let action = match word {
        "" => return Ok(Line::Empty),
        "help" | "?" => return Ok(Line::Help),
        "quit" | "exit" => return Ok(Line::Quit),
        // An empty title is passed through so the submit guard rejects it.
        "add" => Action::Add(rest.to_string()),
        "edit" => Action::Edit(arg("id")?),
        "draft" => Action::Draft(rest.to_string()),
        "save" => Action::Save,
        "cancel" => Action::Cancel,
        "done" => Action::SetCompleted {
            id: arg("id")?,
            completed: true,
        },
        "undo" => Action::SetCompleted {
            id: arg("id")?,
            completed: false,
        },
        "rm" => Action::Remove(arg("id")?),
        "refresh" => Action::Refresh,
        other => return Err(format!("unknown command {other:?}, try `help`")),
    };
    Ok(Line::Run(action))
}

/// Read commands from `input` until EOF or `quit`, writing the view after
/// every accepted action.
pub fn run<T, R, W>(runtime: &mut Runtime<T>, input: R, mut out: W) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    // Ignored: a failed listing is already recorded in the model's error.
    let _ = apply(runtime, Action::Refresh);
    write!(out, "{}", runtime.view())?;

    for line in input.lines() {
        match parse(&line?) {
            Ok(Line::Empty) => continue,
            Ok(Line::Quit) => break,
            Ok(Line::Help) => writeln!(out, "{HELP}")?,
            Ok(Line::Run(action)) => match apply(runtime, action) {
                Ok(()) => write!(out, "{}", runtime.view())?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Err(usage) => writeln!(out, "{usage}")?,
        }
        out.flush()?;
    }
    Ok(())
}
