//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Mutations are acknowledged with [`TodoClient::parse_ack`], which checks the
//! status and ignores the body; callers resync by listing afterwards.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, UpdateTodo};

pub const DEFAULT_BASE_URL: &str = "http://localhost:9228";

/// Characters escaped when an id is placed in a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item(&self, id: &str) -> String {
        format!(
            "{}/todos/{}",
            self.base_url,
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_todo(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.collection(), input)
    }

    pub fn build_rename_todo(&self, id: &str, title: &str) -> Result<HttpRequest, ApiError> {
        self.build_update_todo(id, &UpdateTodo::rename(title))
    }

    pub fn build_set_completed(&self, id: &str, completed: bool) -> Result<HttpRequest, ApiError> {
        self.build_update_todo(id, &UpdateTodo::set_completed(completed))
    }

    pub fn build_update_todo(&self, id: &str, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Patch, self.item(id), input)
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        decode(response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        decode(response)
    }

    /// Parse the item echoed back by create and update calls.
    pub fn parse_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        decode(response)
    }

    /// Accept any 2xx response and discard its body.
    pub fn parse_ack(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_request<T: serde::Serialize>(
    method: HttpMethod,
    path: String,
    input: &T,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::BadBody(e.to_string()))
}

/// Map non-2xx status codes to `ApiError::BadStatus`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::BadStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:9228")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn default_client_targets_local_port() {
        let req = TodoClient::default().build_list_todos();
        assert_eq!(req.path, "http://localhost:9228/todos");
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:9228/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo("00000000-0000-0000-0000-000000000000");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path,
            "http://localhost:9228/todos/00000000-0000-0000-0000-000000000000"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_sends_completed_false() {
        let req = client().build_create_todo(&CreateTodo::new("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:9228/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Buy milk", "completed": false}));
    }

    #[test]
    fn build_rename_todo_sends_only_title() {
        let req = client().build_rename_todo("7", "Updated").unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "http://localhost:9228/todos/7");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Updated"}));
    }

    #[test]
    fn build_set_completed_sends_only_completed() {
        let req = client().build_set_completed("7", true).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"completed": true}));
    }

    #[test]
    fn build_delete_todo_has_empty_body() {
        let req = client().build_delete_todo("7");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:9228/todos/7");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn ids_are_escaped_as_one_segment() {
        let req = client().build_delete_todo("a/b c");
        assert_eq!(req.path, "http://localhost:9228/todos/a%2Fb%20c");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:9228/");
        assert_eq!(client.base_url(), "http://localhost:9228");
        assert_eq!(client.build_list_todos().path, "http://localhost:9228/todos");
    }

    #[test]
    fn parse_list_todos_success() {
        let body = r#"[{"id":"1","title":"Test","completed":false},{"id":"2","title":"Done","completed":true}]"#;
        let todos = client().parse_list_todos(response(200, body)).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, "1");
        assert!(todos[1].completed);
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client().parse_list_todos(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::BadBody(_)));
    }

    #[test]
    fn parse_list_todos_missing_field_is_bad_body() {
        let err = client()
            .parse_list_todos(response(200, r#"[{"id":"1","title":"x"}]"#))
            .unwrap_err();
        match err {
            ApiError::BadBody(msg) => assert!(msg.contains("completed"), "{msg}"),
            other => panic!("expected BadBody, got {other:?}"),
        }
    }

    #[test]
    fn parse_list_todos_bad_status() {
        let err = client().parse_list_todos(response(500, "boom")).unwrap_err();
        assert_eq!(
            err,
            ApiError::BadStatus {
                status: 500,
                body: "boom".to_string()
            }
        );
    }

    #[test]
    fn parse_get_todo_not_found() {
        let err = client().parse_get_todo(response(404, "")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn parse_todo_success() {
        let todo = client()
            .parse_todo(response(201, r#"{"id":"1","title":"New","completed":false}"#))
            .unwrap();
        assert_eq!(todo.title, "New");
    }

    #[test]
    fn parse_ack_ignores_body() {
        assert!(client().parse_ack(response(201, "not json at all")).is_ok());
        assert!(client().parse_ack(response(204, "")).is_ok());
    }

    #[test]
    fn parse_ack_rejects_non_2xx() {
        let err = client().parse_ack(response(404, "todo 7 not found")).unwrap_err();
        assert!(err.is_not_found());
        let err = client().parse_ack(response(302, "")).unwrap_err();
        assert!(matches!(err, ApiError::BadStatus { status: 302, .. }));
    }
}
