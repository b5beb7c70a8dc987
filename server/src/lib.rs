//! In-memory backend for the `/todos` resource.
//!
//! # Design
//! Storage is a `HashMap` behind a `tokio::sync::RwLock` and lives as long as
//! the process. Listing order is unspecified. The router allows any origin so
//! browser frontends served from elsewhere can reach it.

pub mod config;
pub mod error;
pub mod model;
mod routes;

use std::{collections::HashMap, future::Future, sync::Arc};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

pub use config::Config;
pub use error::AppError;
pub use model::{CreateTodo, Todo, UpdateTodo};

pub type Db = Arc<RwLock<HashMap<Uuid, Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/todos", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/todos/{id}",
            get(routes::get_todo)
                .patch(routes::update_todo)
                .delete(routes::delete_todo),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}
