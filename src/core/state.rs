//! # Application State
//!
//! Core business state for Todoer. Domain data only; presentation state
//! (focus, cursor, selection) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: Store                 // owned database handle
//! ├── todos: Vec<Todo>             // projection of the store, creation order
//! ├── status_message: String       // status bar text
//! └── error: Option<String>        // last failed store operation
//! ```
//!
//! `todos` is never edited directly. Every mutation goes through the store
//! and is followed by `refresh()`, so what is drawn is what is on disk.

use log::warn;

use crate::core::store::{Store, StoreError};
use crate::core::todo::Todo;

pub struct App {
    store: Store,
    pub todos: Vec<Todo>,
    pub status_message: String,
    pub error: Option<String>,
}

impl App {
    pub fn new(store: Store) -> Self {
        let mut app = Self {
            store,
            todos: Vec::new(),
            status_message: String::new(),
            error: None,
        };
        app.refresh();
        app
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Reload the projection from the store. A corrupt record shows the
    /// todos read before it; any other failure keeps the previous list.
    /// Either way the error is surfaced.
    pub fn refresh(&mut self) {
        match self.store.list_all() {
            Ok(todos) => self.todos = todos,
            Err(e) => {
                warn!("Failed to load todos: {}", e);
                self.error = Some(e.to_string());
                if let StoreError::Decode { partial, .. } = e {
                    self.todos = partial;
                }
            }
        }
    }

    pub fn open_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn done_count(&self) -> usize {
        self.todos.len() - self.open_count()
    }
}
