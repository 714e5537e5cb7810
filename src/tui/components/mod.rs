//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top line with counts and the latest status
//! - `HelpPanel`: Key binding hints, short or full
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: Single-line text entry for new todos
//! - `TodoList`: Cursor, selected set, and the rendered todos
//!
//! Each component file holds its state types, event types, rendering,
//! event handling, and tests. Components receive external data as props
//! rather than reaching into `App`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── todo_list.rs     (Todos with cursor and selection)
//! ├── help.rs          (Key binding hints)
//! └── input_box/       (Text entry)
//! ```

pub mod help;
pub mod input_box;
mod title_bar;
pub mod todo_list;

pub use help::HelpPanel;
pub use input_box::{InputBox, InputEvent};
pub use title_bar::TitleBar;
pub use todo_list::{TodoList, TodoListState};
