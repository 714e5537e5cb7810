//! # Help Panel Component
//!
//! Key binding hints at the bottom of the screen. Short form is a single
//! line; `?` toggles the full form, which lays bindings out in columns.
//! Both forms truncate to the terminal width, which is kept current from
//! resize events.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// A key and what it does.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub key: &'static str,
    pub desc: &'static str,
}

const fn binding(key: &'static str, desc: &'static str) -> Binding {
    Binding { key, desc }
}

pub const UP: Binding = binding("↑/k", "move up");
pub const DOWN: Binding = binding("↓/j", "move down");
pub const ESC: Binding = binding("esc", "unfocus input");
pub const SPACE: Binding = binding("space", "select");
pub const ENTER: Binding = binding("enter", "add a new todo");
pub const HELP: Binding = binding("?", "toggle help");
pub const QUIT: Binding = binding("q", "quit");
pub const COMPLETE: Binding = binding("c", "complete");
pub const PURGE: Binding = binding("d", "delete completed");

const SHORT: &[Binding] = &[ESC, HELP, QUIT];
const FULL: &[&[Binding]] = &[
    &[UP, DOWN, ESC, SPACE],
    &[ENTER, COMPLETE, PURGE],
    &[HELP, QUIT],
];

const SEPARATOR: &str = " • ";
const COLUMN_GAP: &str = "    ";
const ELLIPSIS: &str = "…";

pub struct HelpPanel {
    pub show_all: bool,
    /// Available width in columns (0 = unlimited)
    pub width: u16,
}

impl HelpPanel {
    pub fn new(show_all: bool, width: u16) -> Self {
        Self { show_all, width }
    }

    pub fn toggle(&mut self) {
        self.show_all = !self.show_all;
    }

    /// Rows the panel needs in its current form.
    pub fn height(&self) -> u16 {
        if self.show_all {
            FULL.iter().map(|col| col.len()).max().unwrap_or(1) as u16
        } else {
            1
        }
    }

    pub fn lines(&self) -> Vec<String> {
        if self.show_all {
            full_help(self.width as usize)
        } else {
            vec![short_help(self.width as usize)]
        }
    }
}

impl Component for HelpPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self.lines().into_iter().map(Line::from).collect();
        let help = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, area);
    }
}

/// `esc unfocus input • ? toggle help • q quit`, dropping trailing bindings
/// (replaced by `…`) when they do not fit.
fn short_help(max_width: usize) -> String {
    let mut out = String::new();
    for (i, b) in SHORT.iter().enumerate() {
        let sep = if i == 0 { "" } else { SEPARATOR };
        let item = format!("{sep}{} {}", b.key, b.desc);
        if max_width > 0 && out.width() + item.width() > max_width {
            if out.width() + SEPARATOR.width() + ELLIPSIS.width() <= max_width {
                out.push_str(SEPARATOR);
                out.push_str(ELLIPSIS);
            }
            break;
        }
        out.push_str(&item);
    }
    out
}

/// Bindings in aligned columns. Columns that do not fit are dropped.
fn full_help(max_width: usize) -> Vec<String> {
    let rows = FULL.iter().map(|col| col.len()).max().unwrap_or(0);
    let mut lines = vec![String::new(); rows];
    let mut used = 0;

    for (c, column) in FULL.iter().enumerate() {
        let key_width = column.iter().map(|b| b.key.width()).max().unwrap_or(0);
        let cells: Vec<String> = column
            .iter()
            .map(|b| format!("{}{} {}", b.key, " ".repeat(key_width - b.key.width()), b.desc))
            .collect();
        let col_width = cells.iter().map(|cell| cell.width()).max().unwrap_or(0);
        let gap = if c == 0 { "" } else { COLUMN_GAP };

        if max_width > 0 && used + gap.width() + col_width > max_width {
            if used + gap.width() + ELLIPSIS.width() <= max_width {
                lines[0].push_str(gap);
                lines[0].push_str(ELLIPSIS);
            }
            break;
        }

        for (r, line) in lines.iter_mut().enumerate() {
            let cell = cells.get(r).map(String::as_str).unwrap_or("");
            line.push_str(gap);
            line.push_str(cell);
            line.push_str(&" ".repeat(col_width - cell.width()));
        }
        used += gap.width() + col_width;
    }

    lines.into_iter().map(|l| l.trim_end().to_string()).collect()
}
