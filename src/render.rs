//! HTML fragment rendering for the todo list.
//!
//! Kept apart from HTTP / Axum so it can be tested on plain slices.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;
use crate::models::Todo;

const EMPTY_STATE: &str = "empty-state";
const TODOS_LIST: &str = "todos-list";

const EMPTY_STATE_SRC: &str = include_str!("../templates/empty-state.hbs");
const TODOS_LIST_SRC: &str = include_str!("../templates/todos-list.hbs");

// Row view handed to the list template
#[derive(Debug, Serialize)]
struct TodoRow<'a> {
    id: u64,
    text: &'a str,
    completed: bool,
    created_at: String, // "YYYY-MM-DD HH:MM"
}

#[derive(Debug, Serialize)]
struct ListContext<'a> {
    todos: Vec<TodoRow<'a>>,
}

/// Renders the todo list, or the empty state, as an HTML fragment.
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    /// Compile the embedded templates.
    pub fn new() -> Result<Self> {
        Self::from_sources(EMPTY_STATE_SRC, TODOS_LIST_SRC)
    }

    /// Compile from caller-supplied template sources.
    ///
    /// The list template sees `todos`, each with `id`, `text`, `completed`
    /// and `created_at`. Text is HTML-escaped.
    pub fn from_sources(empty_state: &str, todos_list: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_template_string(EMPTY_STATE, empty_state)?;
        handlebars.register_template_string(TODOS_LIST, todos_list)?;
        Ok(Self { handlebars })
    }

    pub fn render(&self, todos: &[Todo]) -> Result<String> {
        if todos.is_empty() {
            let html = self.handlebars.render(EMPTY_STATE, &())?;
            return Ok(html.trim_end().to_string());
        }

        let ctx = ListContext {
            todos: todos
                .iter()
                .map(|t| TodoRow {
                    id: t.id,
                    text: &t.text,
                    completed: t.completed,
                    created_at: t.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect(),
        };
        Ok(self.handlebars.render(TODOS_LIST, &ctx)?)
    }
}
