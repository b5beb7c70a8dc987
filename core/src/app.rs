//! Frontend state and its transition function.
//!
//! # Design
//! `update` is pure: it takes the model by value along with a message and
//! returns the next model plus the effects to run. Effects are HTTP calls
//! executed elsewhere (see [`crate::runtime`]) whose outcomes come back as
//! `TodosLoaded` or `Mutated` messages. Every mutation is followed by a full
//! relist, so `todos` always mirrors the last successful listing.

use crate::error::ApiError;
use crate::types::Todo;

/// Which item, if any, is being renamed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { id: String, draft: String },
}

impl EditState {
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            EditState::Viewing => None,
            EditState::Editing { id, .. } => Some(id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    pub todos: Vec<Todo>,
    /// Contents of the "new todo" input.
    pub input: String,
    pub edit: EditState,
    pub error: Option<String>,
    /// Display rows ordered by title. Does not affect `todos`.
    pub sort_by_title: bool,
}

impl Model {
    pub fn new(sort_by_title: bool) -> Self {
        Self {
            sort_by_title,
            ..Self::default()
        }
    }

    pub fn find(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn can_submit(&self) -> bool {
        !self.input.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Refresh,
    TodosLoaded(Result<Vec<Todo>, ApiError>),
    InputChanged(String),
    Submit,
    StartEdit(String),
    DraftChanged(String),
    SaveEdit,
    CancelEdit,
    SetCompleted { id: String, completed: bool },
    Delete(String),
    /// A create, rename, completion or delete call finished.
    Mutated(Result<(), ApiError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ListTodos,
    CreateTodo { title: String },
    RenameTodo { id: String, title: String },
    SetCompleted { id: String, completed: bool },
    RemoveTodo { id: String },
}

pub fn update(mut model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    let effects = match msg {
        Msg::Refresh => vec![Effect::ListTodos],

        Msg::TodosLoaded(Ok(todos)) => {
            model.todos = todos;
            model.error = None;
            Vec::new()
        }
        Msg::TodosLoaded(Err(err)) => {
            model.error = Some(err.to_string());
            Vec::new()
        }

        Msg::InputChanged(input) => {
            model.input = input;
            Vec::new()
        }
        Msg::Submit => {
            if !model.can_submit() {
                return (model, Vec::new());
            }
            let title = std::mem::take(&mut model.input);
            vec![Effect::CreateTodo { title }]
        }

        Msg::StartEdit(id) => {
            if let Some(todo) = model.find(&id) {
                let draft = todo.title.clone();
                model.edit = EditState::Editing { id, draft };
            }
            Vec::new()
        }
        Msg::DraftChanged(text) => {
            if let EditState::Editing { draft, .. } = &mut model.edit {
                *draft = text;
            }
            Vec::new()
        }
        Msg::SaveEdit => match std::mem::take(&mut model.edit) {
            EditState::Editing { id, draft } if !draft.is_empty() => {
                vec![Effect::RenameTodo { id, title: draft }]
            }
            unchanged => {
                model.edit = unchanged;
                Vec::new()
            }
        },
        Msg::CancelEdit => {
            model.edit = EditState::Viewing;
            Vec::new()
        }

        Msg::SetCompleted { id, completed } => vec![Effect::SetCompleted { id, completed }],
        Msg::Delete(id) => {
            model.edit = EditState::Viewing;
            vec![Effect::RemoveTodo { id }]
        }

        Msg::Mutated(_) => vec![Effect::ListTodos],
    };

    (model, effects)
}
