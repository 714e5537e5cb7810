//! # Actions
//!
//! Everything that changes todos becomes an `Action`.
//! User presses Enter on some text? That's `Action::AddTodo(text)`.
//! User presses `d` in the list? That's `Action::DeleteCompleted`.
//!
//! `update()` is the only place that writes through the store. Each action is
//! one store call followed by a refresh of the projection in `App`:
//!
//! ```text
//! App + Action  →  update()  →  Store  →  App.refresh()  →  Effect
//! ```
//!
//! Failures land in `App.error` so the view can show them; the loop keeps going.

use log::{info, warn};

use crate::core::state::App;
use crate::core::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddTodo(String),
    MarkCompleted(Vec<u64>),
    DeleteCompleted,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::AddTodo(text) => {
            let result = app.store().add(&text);
            settle(app, result.map(|id| format!("Added #{id}")));
        }
        Action::MarkCompleted(ids) => {
            if ids.is_empty() {
                return Effect::None;
            }
            let result = app
                .store()
                .mark_completed_many(&ids)
                .map(|()| match ids.as_slice() {
                    [id] => format!("Completed #{id}"),
                    _ => format!("Completed {} todos", ids.len()),
                });
            settle(app, result);
        }
        Action::DeleteCompleted => {
            let result = app
                .store()
                .delete_completed()
                .map(|count| format!("Deleted {count} completed"));
            settle(app, result);
        }
        Action::Quit => {
            info!("Quit requested");
            return Effect::Quit;
        }
    }
    Effect::None
}

/// Record the outcome of a store call and reload the projection.
fn settle(app: &mut App, result: Result<String, StoreError>) {
    match result {
        Ok(status) => {
            info!("{}", status);
            app.status_message = status;
            app.error = None;
        }
        Err(e) => {
            warn!("Store operation failed: {}", e);
            app.status_message.clear();
            app.error = Some(e.to_string());
        }
    }
    app.refresh();
}
