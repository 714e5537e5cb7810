//! Cursor position tracking and horizontal scrolling for the InputBox.
//!
//! `CursorState` owns the cursor byte offset and the scroll offset (in display
//! columns). All methods accept `buffer: &str` explicitly; the text itself is
//! owned by `InputBox`.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;
/// Border (2) consumed horizontally by the bordered block
const HORIZONTAL_OVERHEAD: u16 = 2;

/// Content width inside the block borders. 0 if the area is too narrow.
pub(super) fn inner_width(area_width: u16) -> usize {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD) as usize
}

/// Byte offset of the character boundary before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the character boundary after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible display column
    pub scroll_offset: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    /// Reset cursor to start (used after Submit clears the buffer).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Display column of the cursor from the start of the buffer.
    pub fn column(&self, buffer: &str) -> usize {
        buffer[..self.pos].width()
    }

    /// Scroll so the cursor cell stays inside a viewport `width` columns wide.
    pub fn update_scroll_offset(&mut self, buffer: &str, width: usize) {
        if width == 0 {
            self.scroll_offset = 0;
            return;
        }
        let column = self.column(buffer);
        if column < self.scroll_offset {
            self.scroll_offset = column;
        } else if column >= self.scroll_offset + width {
            self.scroll_offset = column + 1 - width;
        }
    }

    /// The slice of `buffer` visible from the current scroll offset.
    pub fn visible<'a>(&self, buffer: &'a str, width: usize) -> &'a str {
        let mut skipped = 0;
        let mut start = buffer.len();
        for (i, c) in buffer.char_indices() {
            if skipped >= self.scroll_offset {
                start = i;
                break;
            }
            skipped += c.width().unwrap_or(0);
        }

        let rest = &buffer[start..];
        let mut used = 0;
        let mut end = rest.len();
        for (i, c) in rest.char_indices() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                end = i;
                break;
            }
            used += w;
        }
        &rest[..end]
    }

    /// Screen position of the cursor inside a bordered `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let column = self.column(buffer).saturating_sub(self.scroll_offset);
        (
            area.x + BORDER_OFFSET + column as u16,
            area.y + BORDER_OFFSET,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_boundaries_multibyte() {
        let text = "aé✓";
        assert_eq!(next_char_boundary(text, 0), 1);
        assert_eq!(next_char_boundary(text, 1), 3);
        assert_eq!(prev_char_boundary(text, text.len()), 3);
        assert_eq!(prev_char_boundary(text, 1), 0);
    }

    #[test]
    fn test_scroll_follows_cursor_right() {
        let buffer = "abcdefghij";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        cursor.update_scroll_offset(buffer, 4);
        // cursor sits after 'j' at column 10; viewport shows columns 7..=10
        assert_eq!(cursor.scroll_offset, 7);
        assert_eq!(cursor.visible(buffer, 4), "hij");
    }

    #[test]
    fn test_scroll_follows_cursor_left() {
        let buffer = "abcdefghij";
        let mut cursor = CursorState::new();
        cursor.scroll_offset = 6;
        cursor.pos = 2;
        cursor.update_scroll_offset(buffer, 4);
        assert_eq!(cursor.scroll_offset, 2);
        assert_eq!(cursor.visible(buffer, 4), "cdef");
    }

    #[test]
    fn test_no_scroll_when_it_fits() {
        let buffer = "abc";
        let mut cursor = CursorState::new();
        cursor.pos = 3;
        cursor.update_scroll_offset(buffer, 20);
        assert_eq!(cursor.scroll_offset, 0);
        assert_eq!(cursor.visible(buffer, 20), "abc");
    }

    #[test]
    fn test_wide_chars_count_two_columns() {
        let buffer = "日本";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        assert_eq!(cursor.column(buffer), 4);
        let area = Rect::new(0, 0, 20, 3);
        assert_eq!(cursor.screen_pos(buffer, area), (5, 1));
    }
}
