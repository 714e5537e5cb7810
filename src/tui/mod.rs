//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Single-threaded and blocking: read one event, dispatch it, redraw.
//! Nothing animates, so there is no poll timeout and no background work.
//!
//! ## Focus
//!
//! ```text
//!            esc
//!   Input ─────────▶ List
//!     ▲                │
//!     └────────────────┘
//!            enter
//! ```
//!
//! In `Input` every key except esc/enter goes to the `InputBox`, so `q`, `j`,
//! `k`, space and `?` are just text. In `List` those keys drive the cursor,
//! selection, help and quit.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{HelpPanel, InputBox, InputEvent, TodoListState};
use crate::tui::event::{TuiEvent, read_event};

/// Which widget keyboard events are routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing into the input box. Esc switches to List.
    Input,
    /// Navigating the todo list. Enter switches back to Input.
    List,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub input_mode: InputMode,
    pub todo_list: TodoListState,
    pub help: HelpPanel,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig, width: u16) -> Self {
        Self {
            input_box: InputBox::new(config.placeholder.clone(), config.char_limit),
            input_mode: InputMode::Input, // User expects to type immediately
            todo_list: TodoListState::new(),
            help: HelpPanel::new(config.show_full_help, width),
        }
    }

    fn set_mode(&mut self, mode: InputMode) {
        debug!("Input mode: {:?} -> {:?}", self.input_mode, mode);
        self.input_mode = mode;
        self.input_box.focused = mode == InputMode::Input;
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBar
        )?;
        info!("Terminal modes enabled (bracketed paste, steady bar cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Run the UI until the user quits. `app` (and with it the database) is
/// dropped when this returns.
pub fn run(mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let (width, _) = crossterm::terminal::size()?;
    let mut tui = TuiState::new(config, width);

    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, &mut app, &mut tui);
    ratatui::restore();

    info!("Closing todo store at {}", app.store().path().display());
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    loop {
        terminal.draw(|f| ui::draw_ui(f, app, tui))?;

        let event = read_event()?;
        if dispatch(app, tui, event) == Effect::Quit {
            return Ok(());
        }
    }
}

/// Apply one event to the app and presentation state.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    // Resize only affects how wide the help panel may draw
    if let TuiEvent::Resize(width, _) = event {
        tui.help.width = width;
        return Effect::None;
    }

    match tui.input_mode {
        InputMode::Input => match event {
            TuiEvent::Escape => tui.set_mode(InputMode::List),
            // Ctrl+C only quits from the list; the input swallows it
            TuiEvent::ForceQuit => {}
            _ => {
                if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&event) {
                    update(app, Action::AddTodo(text));
                    tui.todo_list.clamp(app.todos.len());
                }
            }
        },
        InputMode::List => match event {
            TuiEvent::Submit => tui.set_mode(InputMode::Input),
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => tui.todo_list.move_up(),
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                tui.todo_list.move_down(app.todos.len())
            }
            TuiEvent::InputChar(' ') => {
                if !app.todos.is_empty() {
                    tui.todo_list.toggle_selected();
                }
            }
            TuiEvent::InputChar('?') => tui.help.toggle(),
            TuiEvent::InputChar('q') | TuiEvent::ForceQuit => return update(app, Action::Quit),
            TuiEvent::InputChar('c') => {
                let ids = tui.todo_list.target_ids(&app.todos);
                update(app, Action::MarkCompleted(ids));
                tui.todo_list.selected.clear();
                tui.todo_list.clamp(app.todos.len());
            }
            TuiEvent::InputChar('d') => {
                update(app, Action::DeleteCompleted);
                tui.todo_list.selected.clear();
                tui.todo_list.clamp(app.todos.len());
            }
            _ => {}
        },
    }
    Effect::None
}
