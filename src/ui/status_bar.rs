use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::editor::Editor;

pub fn render_status_bar(f: &mut Frame, editor: &Editor, area: Rect) {
    f.render_widget(Paragraph::new(status_line(editor)), area);
}

fn status_line(editor: &Editor) -> Line<'static> {
    let logo = Span::styled(
        " linepad ",
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
    );

    let position = Span::raw(format!(
        " Ln {}, Col {} ",
        editor.absolute_row() + 1,
        editor.cursor().col + 1
    ));

    let hint = Span::styled(
        " ^G quit  ^K kill  ^Y yank ",
        Style::default().add_modifier(Modifier::DIM),
    );

    let mut spans = vec![logo, position];
    if let Some(command) = editor.last_command() {
        spans.push(Span::raw(format!("[{}] ", command.name())));
    }
    spans.push(hint);
    Line::from(spans)
}
