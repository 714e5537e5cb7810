//! # InputBox Component
//!
//! Single-line text entry for new todos.
//!
//! ## Responsibilities
//!
//! - Capture text input, up to `char_limit` characters
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Show a placeholder while empty
//!
//! ## State Management
//!
//! The buffer is internal state. `focused` is a prop driven by the parent's
//! input mode; an unfocused box renders dimmed and places no terminal cursor.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, inner_width, next_char_boundary, prev_char_boundary};

/// Height of the bordered single-line box.
pub const INPUT_HEIGHT: u16 = 3;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content or cursor changed
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Shown dimmed while the buffer is empty (Prop)
    pub placeholder: String,
    /// Maximum number of characters accepted (Prop)
    pub char_limit: usize,
    /// Whether keystrokes are routed here (Prop)
    pub focused: bool,
    cursor: CursorState,
}

impl InputBox {
    pub fn new(placeholder: impl Into<String>, char_limit: usize) -> Self {
        Self {
            buffer: String::new(),
            placeholder: placeholder.into(),
            char_limit,
            focused: true,
            cursor: CursorState::new(),
        }
    }

    /// Insert as much of `text` as fits under the character limit.
    /// Returns true if anything was inserted.
    fn insert(&mut self, text: &str) -> bool {
        let room = self.char_limit.saturating_sub(self.buffer.chars().count());
        let accepted: String = text
            .chars()
            .filter(|c| !c.is_control())
            .take(room)
            .collect();
        if accepted.is_empty() {
            return false;
        }
        self.buffer.insert_str(self.cursor.pos, &accepted);
        self.cursor.pos += accepted.len();
        true
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        self.cursor.update_scroll_offset(&self.buffer, width);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("New todo");

        let input = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            let style = if self.focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            Paragraph::new(self.cursor.visible(&self.buffer, width)).style(style)
        };

        frame.render_widget(input.block(block), area);

        if self.focused {
            frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert(c.encode_utf8(&mut tmp))
                    .then_some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines become spaces
                let flat = text.replace(['\r', '\n'], " ");
                self.insert(&flat).then_some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor.pos != 0).then(|| {
                self.cursor.pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor.pos != self.buffer.len()).then(|| {
                self.cursor.pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor.reset();
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(input: &mut InputBox, text: &str) {
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new("Add a new Todo", 156);
        assert!(input.buffer.is_empty());
        assert!(input.focused);
        assert_eq!(input.char_limit, 156);
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new("", 156);

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut input = InputBox::new("", 156);
        type_str(&mut input, "buy mlk");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('i'));
        assert_eq!(input.buffer, "buy milk");

        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "uy milk");

        input.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(input.handle_event(&TuiEvent::CursorRight), None);
    }

    #[test]
    fn test_char_limit() {
        let mut input = InputBox::new("", 3);
        type_str(&mut input, "abcd");
        assert_eq!(input.buffer, "abc");
        assert_eq!(input.handle_event(&TuiEvent::InputChar('e')), None);
    }

    #[test]
    fn test_paste_flattens_newlines_and_respects_limit() {
        let mut input = InputBox::new("", 10);
        input.handle_event(&TuiEvent::Paste("one\ntwo\nthree".into()));
        assert_eq!(input.buffer, "one two th");
    }

    #[test]
    fn test_submit() {
        let mut input = InputBox::new("", 156);
        input.buffer = "hello".to_string();

        let res = input.handle_event(&TuiEvent::Submit);
        match res {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "hello"),
            _ => panic!("Expected Submit event"),
        }

        assert!(input.buffer.is_empty(), "Buffer should be cleared after submit");
    }

    #[test]
    fn test_submit_whitespace_is_ignored() {
        let mut input = InputBox::new("", 156);
        type_str(&mut input, "   ");
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.buffer, "   ");
    }

    #[test]
    fn test_render_shows_placeholder() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new("Add a new Todo", 156);

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();

        assert!(text.contains("Add a new Todo"));
    }

    #[test]
    fn test_render_scrolls_long_text() {
        let backend = TestBackend::new(12, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new("", 156);
        type_str(&mut input, "the quick brown fox");

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();

        assert!(text.contains("brown fox"));
        assert!(!text.contains("the quick"));
    }
}
