mod editor;
mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::editor::Editor;

pub use editor::{pad_area, render_pad, PadView};
pub use status_bar::render_status_bar;

/// Pad on top, one-line status bar underneath.
pub fn render(f: &mut Frame, editor: &mut Editor, border: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    render_pad(f, editor, chunks[0], border);
    render_status_bar(f, editor, chunks[1]);
}
