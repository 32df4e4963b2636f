// --------------------------------------------------
// Handles the /todos endpoints.
//
// Responsibilities:
// - List todos as an HTML fragment
// - Add a todo from a form post
// - Toggle / delete a todo addressed by /todos/{id}[/toggle]
//
// Every successful call answers with the full re-rendered list so the
// front end can swap it in place.
// --------------------------------------------------

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    http::Method,
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::app::AppState;
use crate::error::{Result, TodoError};

/// What a request under `/todos/` asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoAction {
    Toggle(u64),
    Delete(u64),
}

impl TodoAction {
    /// Parse the path remainder after `/todos/` together with the method.
    ///
    /// `{id}` + DELETE is a delete, `{id}/toggle` + PUT is a toggle.
    /// A first segment that is not an integer is `InvalidId`; any other
    /// shape is `InvalidRequest`.
    pub fn parse(method: &Method, rest: &str) -> Result<Self> {
        let parts: Vec<&str> = rest.split('/').collect();

        let id: u64 = parts[0]
            .parse()
            .map_err(|_| TodoError::InvalidId(parts[0].to_string()))?;

        match parts.as_slice() {
            [_, "toggle"] if *method == Method::PUT => Ok(TodoAction::Toggle(id)),
            [_] if *method == Method::DELETE => Ok(TodoAction::Delete(id)),
            _ => Err(TodoError::InvalidRequest),
        }
    }
}

// -----------------------------
// GET /todos
// -----------------------------
pub async fn get_todos(State(state): State<AppState>) -> Result<Html<String>> {
    let store = state.store.lock().await;
    Ok(Html(state.renderer.render(store.list())?))
}

#[derive(Debug, Deserialize)]
pub struct AddTodoForm {
    pub text: Option<String>,
}

// -----------------------------
// POST /todos
// Field `text` from the form body, else the query string;
// trimmed, must not be empty
// -----------------------------
pub async fn add_todo(
    State(state): State<AppState>,
    query: std::result::Result<Query<AddTodoForm>, QueryRejection>,
    form: std::result::Result<Form<AddTodoForm>, FormRejection>,
) -> Result<Html<String>> {
    // An unreadable body or query counts as a missing field
    let text = form
        .ok()
        .and_then(|Form(f)| f.text)
        .or_else(|| query.ok().and_then(|Query(q)| q.text))
        .unwrap_or_default();
    let text = text.trim();
    if text.is_empty() {
        return Err(TodoError::EmptyText);
    }

    let mut store = state.store.lock().await;
    let todo = store.add(text)?;
    tracing::info!(id = todo.id, "added todo");

    Ok(Html(state.renderer.render(store.list())?))
}

// -----------------------------
// ANY /todos/{rest}
// PUT /todos/:id/toggle and DELETE /todos/:id
// -----------------------------
pub async fn todo_action(
    State(state): State<AppState>,
    method: Method,
    Path(rest): Path<String>,
) -> Result<Html<String>> {
    let action = TodoAction::parse(&method, &rest)?;

    let mut store = state.store.lock().await;
    match action {
        TodoAction::Toggle(id) => {
            let completed = store.toggle(id)?.completed;
            tracing::info!(id, completed, "toggled todo");
        }
        TodoAction::Delete(id) => {
            store.delete(id)?;
            tracing::info!(id, "deleted todo");
        }
    }

    Ok(Html(state.renderer.render(store.list())?))
}

// `/todos/` with nothing after the slash
pub async fn todo_action_empty(state: State<AppState>, method: Method) -> Result<Html<String>> {
    todo_action(state, method, Path(String::new())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toggle() {
        assert_eq!(
            TodoAction::parse(&Method::PUT, "7/toggle").unwrap(),
            TodoAction::Toggle(7)
        );
    }

    #[test]
    fn parses_delete() {
        assert_eq!(
            TodoAction::parse(&Method::DELETE, "12").unwrap(),
            TodoAction::Delete(12)
        );
    }

    #[test]
    fn malformed_id_is_invalid_id() {
        for rest in ["abc", "", "1.5", "-3", "abc/toggle"] {
            let err = TodoAction::parse(&Method::DELETE, rest).unwrap_err();
            assert!(matches!(err, TodoError::InvalidId(_)), "rest={rest:?}");
        }
    }

    #[test]
    fn wrong_method_or_shape_is_invalid_request() {
        let cases = [
            (Method::GET, "1"),
            (Method::PUT, "1"),
            (Method::DELETE, "1/toggle"),
            (Method::POST, "1/toggle"),
            (Method::PUT, "1/toggle/extra"),
            (Method::PUT, "1/flip"),
            (Method::DELETE, "1/"),
        ];
        for (method, rest) in cases {
            let err = TodoAction::parse(&method, rest).unwrap_err();
            assert!(
                matches!(err, TodoError::InvalidRequest),
                "{method} {rest:?} gave {err:?}"
            );
        }
    }
}
