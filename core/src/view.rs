//! Presentation of a [`Model`] as plain data.

use std::fmt;

use crate::app::{EditState, Model};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub error: Option<String>,
    pub form: FormView,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub input: String,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowView {
    Static {
        id: String,
        title: String,
        completed: bool,
    },
    Editing {
        id: String,
        draft: String,
        save_enabled: bool,
    },
}

impl RowView {
    pub fn id(&self) -> &str {
        match self {
            RowView::Static { id, .. } | RowView::Editing { id, .. } => id,
        }
    }
}

pub fn view(model: &Model) -> View {
    let mut todos: Vec<_> = model.todos.iter().collect();
    if model.sort_by_title {
        todos.sort_by(|a, b| a.title.cmp(&b.title));
    }

    let rows = todos
        .into_iter()
        .map(|todo| match &model.edit {
            EditState::Editing { id, draft } if *id == todo.id => RowView::Editing {
                id: todo.id.clone(),
                draft: draft.clone(),
                save_enabled: !draft.is_empty(),
            },
            _ => RowView::Static {
                id: todo.id.clone(),
                title: todo.title.clone(),
                completed: todo.completed,
            },
        })
        .collect();

    View {
        error: model.error.clone(),
        form: FormView {
            input: model.input.clone(),
            submit_enabled: model.can_submit(),
        },
        rows,
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            writeln!(f, "! {error}")?;
        }
        let submit = if self.form.submit_enabled { "add" } else { "add (disabled)" };
        writeln!(f, "> {} [{submit}]", self.form.input)?;

        if self.rows.is_empty() {
            return writeln!(f, "  (no todos)");
        }
        for row in &self.rows {
            match row {
                RowView::Static {
                    id,
                    title,
                    completed,
                } => {
                    let mark = if *completed { 'x' } else { ' ' };
                    writeln!(f, "  [{mark}] {title}  ({id})")?;
                }
                RowView::Editing {
                    id,
                    draft,
                    save_enabled,
                } => {
                    let save = if *save_enabled { "save" } else { "save (disabled)" };
                    writeln!(f, "  [~] {draft}_  ({id}) [{save}] [cancel]")?;
                }
            }
        }
        Ok(())
    }
}
