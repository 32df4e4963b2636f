//! File-backed todo store.
//!
//! Records live in memory newest-first and are mirrored to a JSON Lines file.
//! Every mutation rewrites the whole file before returning. If that write
//! fails the in-memory change stays applied and the error goes to the caller.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{Result, TodoError};
use crate::models::Todo;

pub const DEFAULT_PATH: &str = "todos.jsonl";

/// Store handle shared by all request handlers.
pub type SharedStore = Arc<Mutex<TodoStore>>;

#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
    path: PathBuf,
}

impl TodoStore {
    /// Open the store at `path`, loading whatever is already there.
    ///
    /// A missing file is an empty store. Any other I/O failure is returned.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self {
            todos: Vec::new(),
            next_id: 1,
            path: path.into(),
        };
        store.load()?;
        Ok(store)
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    fn load(&mut self) -> Result<()> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no todo file yet, starting empty");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut line_no = 0usize;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(l) => l.trim(),
                Err(e) => {
                    tracing::warn!(line_no, error = %e, "skipping non-UTF-8 todo line");
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }

            let todo: Todo = match serde_json::from_str(line) {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!(line_no, %line, error = %e, "skipping malformed todo line");
                    continue;
                }
            };

            // ids are positive and must leave room for next_id
            let Some(after) = todo.id.checked_add(1).filter(|_| todo.id > 0) else {
                tracing::warn!(line_no, id = todo.id, "skipping todo with out-of-range id");
                continue;
            };

            if self.todos.iter().any(|t| t.id == todo.id) {
                tracing::warn!(line_no, id = todo.id, "skipping duplicate todo id");
                continue;
            }

            self.next_id = self.next_id.max(after);
            self.todos.push(todo);
        }

        tracing::info!(
            path = %self.path.display(),
            count = self.todos.len(),
            next_id = self.next_id,
            "loaded todos"
        );
        Ok(())
    }

    // Full rewrite via a sibling tmp file, then rename over the target
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = tmp_path_for(&self.path);
        let mut out = BufWriter::new(File::create(&tmp_path)?);
        for todo in &self.todos {
            serde_json::to_writer(&mut out, todo)?;
            out.write_all(b"\n")?;
        }
        out.into_inner().map_err(|e| e.into_error())?.sync_all()?;

        fs::rename(&tmp_path, &self.path)?;
        tracing::debug!(path = %self.path.display(), count = self.todos.len(), "saved todos");
        Ok(())
    }

    /// Prepend a new todo and persist. `text` is stored as given.
    pub fn add(&mut self, text: impl Into<String>) -> Result<&Todo> {
        let after = self.next_id.checked_add(1).ok_or(TodoError::IdsExhausted)?;
        let todo = Todo::new(self.next_id, text);
        self.next_id = after;
        self.todos.insert(0, todo);

        self.save()?;
        Ok(&self.todos[0])
    }

    pub fn toggle(&mut self, id: u64) -> Result<&Todo> {
        let idx = self.position(id)?;
        self.todos[idx].completed = !self.todos[idx].completed;

        self.save()?;
        Ok(&self.todos[idx])
    }

    pub fn delete(&mut self, id: u64) -> Result<Todo> {
        let idx = self.position(id)?;
        let removed = self.todos.remove(idx);

        self.save()?;
        Ok(removed)
    }

    /// Current todos, newest first.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    #[cfg(test)]
    fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
