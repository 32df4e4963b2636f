//! Server-rendered todo list.
//!
//! Todos are kept in a JSON Lines file and served as HTML fragments for an
//! htmx front end.

pub mod app; // Shared state and route table
pub mod config; // Command line / env configuration
pub mod error; // Error taxonomy and HTTP mapping
pub mod models; // Todo record
pub mod render; // HTML fragments
pub mod routes_static; // Bootstrap page and assets
pub mod routes_todos; // /todos handlers
pub mod store; // File-backed todo store

pub use app::{router, AppState};
pub use config::Config;
pub use error::{Result, TodoError};
pub use models::Todo;
pub use render::Renderer;
pub use store::TodoStore;
