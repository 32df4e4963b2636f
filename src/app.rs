use std::sync::Arc;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::render::Renderer;
use crate::routes_static;
use crate::routes_todos;
use crate::store::{SharedStore, TodoStore};

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(store: TodoStore, renderer: Renderer) -> Self {
        Self {
            store: store.into_shared(),
            renderer: Arc::new(renderer),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // page + assets
        .route("/", get(routes_static::index))
        .route("/static/*path", get(routes_static::static_file))
        // todos
        .route("/todos", get(routes_todos::get_todos).post(routes_todos::add_todo))
        .route("/todos/", any(routes_todos::todo_action_empty))
        .route("/todos/*rest", any(routes_todos::todo_action))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
