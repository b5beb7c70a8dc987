//! Full CRUD lifecycle test against a live `todo-server`.
//!
//! # Design
//! Starts the server on a random port, then exercises every core client
//! operation over real HTTP using ureq. Validates that request building and
//! response parsing agree with the actual server.

use todo_core::{CreateTodo, HttpMethod, HttpRequest, HttpResponse, TodoClient, UpdateTodo};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let body = req.body.unwrap_or_default();
    let mut response = match req.method {
        HttpMethod::Get => agent.get(&req.path).call(),
        HttpMethod::Delete => agent.delete(&req.path).call(),
        HttpMethod::Post => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        HttpMethod::Patch => agent
            .patch(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn crud_lifecycle() {
    let addr = start_server();
    let client = TodoClient::new(&format!("http://{addr}"));

    // Step 1: list, should be empty.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // Step 2: create a todo.
    let req = client.build_create_todo(&CreateTodo::new("Integration test")).unwrap();
    let created = client.parse_todo(execute(req)).unwrap();
    assert_eq!(created.title, "Integration test");
    assert!(!created.completed);
    let id = created.id.clone();

    // Step 3: get the created todo.
    let fetched = client.parse_get_todo(execute(client.build_get_todo(&id))).unwrap();
    assert_eq!(fetched, created);

    // Step 4: rename.
    let req = client.build_rename_todo(&id, "Updated title").unwrap();
    let updated = client.parse_todo(execute(req)).unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.title, "Updated title");
    assert!(!updated.completed);

    // Step 5: complete.
    let req = client.build_set_completed(&id, true).unwrap();
    client.parse_ack(execute(req)).unwrap();

    // Step 6: an empty update changes nothing.
    let req = client.build_update_todo(&id, &UpdateTodo::default()).unwrap();
    let unchanged = client.parse_todo(execute(req)).unwrap();
    assert_eq!(unchanged.title, "Updated title");
    assert!(unchanged.completed);

    // Step 7: list, should have one item.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos, vec![unchanged]);

    // Step 8: delete.
    client.parse_ack(execute(client.build_delete_todo(&id))).unwrap();

    // Step 9: get after delete is a 404.
    let err = client.parse_get_todo(execute(client.build_get_todo(&id))).unwrap_err();
    assert!(err.is_not_found());

    // Step 10: delete again is a 404.
    let err = client.parse_ack(execute(client.build_delete_todo(&id))).unwrap_err();
    assert!(err.is_not_found());

    // Step 11: list, should be empty again.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list after delete");
}

#[test]
fn malformed_id_is_a_bad_status() {
    let addr = start_server();
    let client = TodoClient::new(&format!("http://{addr}"));

    let err = client.parse_ack(execute(client.build_delete_todo("not-a-uuid"))).unwrap_err();
    assert!(matches!(err, todo_core::ApiError::BadStatus { status: 400, .. }));
}
