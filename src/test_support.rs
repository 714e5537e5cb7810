//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use tempfile::TempDir;

use crate::core::state::App;
use crate::core::store::{DB_NAME, Store};

/// Creates an App backed by a fresh database in a temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the App is used.
pub fn test_app() -> (TempDir, App) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(&dir.path().join(DB_NAME)).unwrap();
    (dir, App::new(store))
}

/// Same as `test_app`, pre-filled with the given todo texts.
pub fn test_app_with(texts: &[&str]) -> (TempDir, App) {
    let (dir, mut app) = test_app();
    for text in texts {
        app.store().add(text).unwrap();
    }
    app.refresh();
    (dir, app)
}
