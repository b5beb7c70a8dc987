//! User actions and the guards a UI would enforce before dispatching them.
//!
//! A graphical frontend only offers buttons that make sense: submit is
//! disabled for an empty input, Edit/Delete exist only on listed rows. A
//! terminal has no disabled buttons, so the same conditions are checked here
//! and reported as [`CommandError`] without touching the network.

use thiserror::Error;
use todo_core::{EditState, Msg, Runtime, Transport};

use crate::args::Command;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("no todo with id {0}")]
    UnknownId(String),
    #[error("not editing any todo")]
    NotEditing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Refresh,
    Add(String),
    Edit(String),
    Draft(String),
    Save,
    Cancel,
    SetCompleted { id: String, completed: bool },
    Remove(String),
}

impl Action {
    /// Actions performed by a one-shot command after the initial listing.
    pub fn script(command: &Command) -> Vec<Action> {
        match command {
            Command::List | Command::Shell => Vec::new(),
            Command::Add { title } => vec![Action::Add(title.clone())],
            Command::Rename { id, title } => vec![
                Action::Edit(id.clone()),
                Action::Draft(title.clone()),
                Action::Save,
            ],
            Command::Done { id } => vec![Action::SetCompleted {
                id: id.clone(),
                completed: true,
            }],
            Command::Undo { id } => vec![Action::SetCompleted {
                id: id.clone(),
                completed: false,
            }],
            Command::Rm { id } => vec![Action::Remove(id.clone())],
        }
    }
}

pub fn apply<T: Transport>(runtime: &mut Runtime<T>, action: Action) -> Result<(), CommandError> {
    match action {
        Action::Refresh => runtime.dispatch(Msg::Refresh),
        Action::Add(title) => {
            runtime.dispatch(Msg::InputChanged(title));
            if !runtime.view().form.submit_enabled {
                return Err(CommandError::EmptyTitle);
            }
            runtime.dispatch(Msg::Submit);
        }
        Action::Edit(id) => {
            known(runtime, &id)?;
            runtime.dispatch(Msg::StartEdit(id));
        }
        Action::Draft(text) => {
            editing_draft(runtime)?;
            runtime.dispatch(Msg::DraftChanged(text));
        }
        Action::Save => {
            if editing_draft(runtime)?.is_empty() {
                return Err(CommandError::EmptyTitle);
            }
            runtime.dispatch(Msg::SaveEdit);
        }
        Action::Cancel => runtime.dispatch(Msg::CancelEdit),
        Action::SetCompleted { id, completed } => {
            known(runtime, &id)?;
            runtime.dispatch(Msg::SetCompleted { id, completed });
        }
        Action::Remove(id) => {
            known(runtime, &id)?;
            runtime.dispatch(Msg::Delete(id));
        }
    }
    Ok(())
}

/// Load the list, then run the command's actions, stopping at the first
/// rejected one.
pub fn run_command<T: Transport>(
    runtime: &mut Runtime<T>,
    command: &Command,
) -> Result<(), CommandError> {
    apply(runtime, Action::Refresh)?;
    for action in Action::script(command) {
        apply(runtime, action)?;
    }
    Ok(())
}

fn known<T: Transport>(runtime: &Runtime<T>, id: &str) -> Result<(), CommandError> {
    match runtime.model().find(id) {
        Some(_) => Ok(()),
        None => Err(CommandError::UnknownId(id.to_string())),
    }
}

fn editing_draft<T: Transport>(runtime: &Runtime<T>) -> Result<&str, CommandError> {
    match &runtime.model().edit {
        EditState::Editing { draft, .. } => Ok(draft.as_str()),
        EditState::Viewing => Err(CommandError::NotEditing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_goes_through_edit_mode() {
        let script = Action::script(&Command::Rename {
            id: "1".to_string(),
            title: "new".to_string(),
        });
        assert_eq!(
            script,
            vec![
                Action::Edit("1".to_string()),
                Action::Draft("new".to_string()),
                Action::Save
            ]
        );
    }

    #[test]
    fn undo_clears_completed() {
        let script = Action::script(&Command::Undo { id: "1".to_string() });
        assert_eq!(
            script,
            vec![Action::SetCompleted {
                id: "1".to_string(),
                completed: false
            }]
        );
    }

    #[test]
    fn list_has_no_extra_actions() {
        assert!(Action::script(&Command::List).is_empty());
    }
}
