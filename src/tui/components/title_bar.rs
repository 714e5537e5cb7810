//! # TitleBar Component
//!
//! Top line: `Your Todos` with open/done counts and the latest status.
//!
//! Purely presentational. All props come from `App`:
//! - `open` / `done`: counts over the current projection
//! - `status_message`: outcome of the last store operation
//!
//! ```text
//! Your Todos (2 open, 1 done) | Added #3
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub open: usize,
    pub done: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(open: usize, done: usize, status_message: String) -> Self {
        Self {
            open,
            done,
            status_message,
        }
    }

    fn text(&self) -> String {
        let counts = format!("Your Todos ({} open, {} done)", self.open, self.done);
        if self.status_message.is_empty() {
            counts
        } else {
            format!("{} | {}", counts, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(2, 1, "Added #3".to_string());
        let text = rendered(&mut title_bar);
        assert!(text.contains("Your Todos (2 open, 1 done)"));
        assert!(text.contains("| Added #3"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new(0, 0, String::new());
        let text = rendered(&mut title_bar);
        assert!(text.contains("Your Todos (0 open, 0 done)"));
        assert!(!text.contains('|'));
    }
}
