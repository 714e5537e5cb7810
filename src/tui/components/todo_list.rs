//! # Todo List Component
//!
//! The list of todos with a cursor and a selected set.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TodoListState` lives in `TuiState`
//! - `TodoList` is created each frame with borrowed state and the todos to draw
//!
//! Cursor and selection are indices into `App.todos`, so they are clamped or
//! cleared whenever that list is refreshed with a different length.

use std::collections::BTreeSet;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::core::todo::Todo;

pub const CURSOR_MARKER: &str = "👉";
pub const CHECKED_MARKER: &str = "❌";
const BLANK_MARKER: &str = "  ";

/// Persistent state for the todo list.
#[derive(Default)]
pub struct TodoListState {
    pub cursor: usize,
    pub selected: BTreeSet<usize>,
    pub list_state: ListState,
}

impl TodoListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Add the cursor index to the selected set, or remove it if already there.
    pub fn toggle_selected(&mut self) {
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
    }

    /// Keep the cursor on a valid index after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.selected.retain(|&i| i < len);
    }

    /// IDs the `c` binding acts on: the selected todos, or the one under the
    /// cursor when nothing is selected.
    pub fn target_ids(&self, todos: &[Todo]) -> Vec<u64> {
        if self.selected.is_empty() {
            todos.get(self.cursor).map(|t| vec![t.id]).unwrap_or_default()
        } else {
            self.selected
                .iter()
                .filter_map(|&i| todos.get(i))
                .map(|t| t.id)
                .collect()
        }
    }
}

/// Transient render wrapper for the todo list.
pub struct TodoList<'a> {
    state: &'a mut TodoListState,
    todos: &'a [Todo],
    focused: bool,
}

impl<'a> TodoList<'a> {
    pub fn new(state: &'a mut TodoListState, todos: &'a [Todo], focused: bool) -> Self {
        Self {
            state,
            todos,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.todos.is_empty() {
            let empty = Paragraph::new("Nothing to do. Type a todo and press enter.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .todos
            .iter()
            .enumerate()
            .map(|(i, todo)| ListItem::new(todo_line(todo, i, self.state, self.focused)))
            .collect();

        self.state.list_state.select(Some(self.state.cursor));
        frame.render_stateful_widget(List::new(items), area, &mut self.state.list_state);
    }
}

/// `{cursor} [{checked}] {text}`
fn todo_line<'t>(todo: &'t Todo, index: usize, state: &TodoListState, focused: bool) -> Line<'t> {
    let is_cursor = index == state.cursor;
    let cursor = if is_cursor { CURSOR_MARKER } else { BLANK_MARKER };
    let checked = if state.selected.contains(&index) {
        CHECKED_MARKER
    } else {
        BLANK_MARKER
    };

    let mut text_style = if todo.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };
    if is_cursor && focused {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::raw(format!("{cursor} [{checked}] ")),
        Span::styled(todo.text.as_str(), text_style),
    ])
}
