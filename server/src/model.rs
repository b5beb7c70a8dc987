use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update. Fields left out of the body keep their current value.
#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl Todo {
    pub fn create(input: CreateTodo) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            completed: input.completed,
        }
    }

    pub fn apply(&mut self, input: UpdateTodo) {
        if let Some(title) = input.title {
            self.title = title;
        }
        if let Some(completed) = input.completed {
            self.completed = completed;
        }
    }
}
