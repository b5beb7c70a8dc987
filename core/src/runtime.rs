//! Drives [`update`] and executes its effects through a [`Transport`].
//!
//! # Design
//! Dispatch is synchronous and single-threaded. Messages are drained from a
//! FIFO queue; each effect runs to completion before the next one starts and
//! its outcome is queued as a new message. Nothing is deduplicated or
//! cancelled, so the last listing to arrive wins.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::app::{update, Effect, Model, Msg};
use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, Transport};
use crate::types::CreateTodo;
use crate::view::{view, View};

pub struct Runtime<T> {
    client: TodoClient,
    transport: T,
    model: Model,
}

impl<T: Transport> Runtime<T> {
    pub fn new(client: TodoClient, transport: T, model: Model) -> Self {
        Self {
            client,
            transport,
            model,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn into_model(self) -> Model {
        self.model
    }

    pub fn view(&self) -> View {
        view(&self.model)
    }

    /// Apply `msg` and every message produced by the effects it triggers.
    pub fn dispatch(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            debug!(?msg, "dispatch");
            let (model, effects) = update(std::mem::take(&mut self.model), msg);
            self.model = model;
            queue.extend(effects.into_iter().map(|effect| self.run(effect)));
        }
    }

    fn run(&self, effect: Effect) -> Msg {
        debug!(?effect, "running effect");
        match effect {
            Effect::ListTodos => {
                let result = self
                    .transport
                    .execute(self.client.build_list_todos())
                    .and_then(|response| self.client.parse_list_todos(response));
                if let Err(err) = &result {
                    warn!(%err, "listing todos failed");
                }
                Msg::TodosLoaded(result)
            }
            Effect::CreateTodo { title } => {
                self.mutate(self.client.build_create_todo(&CreateTodo::new(title)))
            }
            Effect::RenameTodo { id, title } => {
                self.mutate(self.client.build_rename_todo(&id, &title))
            }
            Effect::SetCompleted { id, completed } => {
                self.mutate(self.client.build_set_completed(&id, completed))
            }
            Effect::RemoveTodo { id } => self.mutate(Ok(self.client.build_delete_todo(&id))),
        }
    }

    fn mutate(&self, request: Result<HttpRequest, ApiError>) -> Msg {
        let result = request
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_ack(response));
        if let Err(err) = &result {
            warn!(%err, "mutation failed");
        }
        Msg::Mutated(result)
    }
}
