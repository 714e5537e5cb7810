use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::input_box::INPUT_HEIGHT;
use crate::tui::components::{TitleBar, TodoList};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

/// Frame layout, top to bottom:
///
/// ```text
/// Your Todos (2 open, 0 done) | Added #2
///
/// 👉 [  ] buy milk
///    [❌] buy eggs
/// error: ...                      (only after a failed store call)
/// ╭New todo──────────────╮
/// │Add a new Todo        │
/// ╰──────────────────────╯
/// esc unfocus input • ? toggle help • q quit
/// ```
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let error_height = u16::from(app.error.is_some());
    let layout = Layout::vertical([
        Length(1),
        Length(1),
        Min(0),
        Length(error_height),
        Length(INPUT_HEIGHT),
        Length(tui.help.height()),
    ]);
    let [title_area, _gap, list_area, error_area, input_area, help_area] =
        layout.areas(frame.area());

    TitleBar::new(app.open_count(), app.done_count(), app.status_message.clone())
        .render(frame, title_area);

    let list_focused = matches!(tui.input_mode, InputMode::List);
    TodoList::new(&mut tui.todo_list, &app.todos, list_focused).render(frame, list_area);

    if let Some(error_msg) = &app.error {
        draw_error_line(frame, error_area, error_msg);
    }

    tui.input_box.render(frame, input_area);
    tui.help.render(frame, help_area);
}

fn draw_error_line(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error = Paragraph::new(format!("error: {error_msg}")).style(Style::default().fg(Color::Red));
    frame.render_widget(error, area);
}
