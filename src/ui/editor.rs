use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::editor::Editor;

/// Paints the visible lines of a pad. Holds no state of its own.
pub struct PadView<'a> {
    editor: &'a Editor,
    block: Option<Block<'a>>,
}

impl<'a> PadView<'a> {
    pub fn new(editor: &'a Editor) -> Self {
        Self { editor, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for PadView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        for (y, line) in (inner.y..inner.y + inner.height).zip(self.editor.visible_lines()) {
            let mut x = inner.x;
            for ch in line.chars() {
                if x >= inner.x + inner.width {
                    break;
                }
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch);
                }
                x += ch.width().unwrap_or(1) as u16;
            }
        }

        // Debug mode: visible length of the cursor line, five columns in from the right edge.
        if let Some(eol) = self.editor.end_of_line_indicator() {
            let x = inner.x + inner.width.saturating_sub(6);
            let style = Style::default().add_modifier(Modifier::REVERSED);
            buf.set_stringn(x, inner.y, eol.to_string(), (inner.x + inner.width - x) as usize, style);
        }
    }
}

/// Area left for text once the optional border is drawn.
pub fn pad_area(area: Rect, border: bool) -> Rect {
    if border {
        Block::default().borders(Borders::ALL).inner(area)
    } else {
        area
    }
}

/// Paint the pad into `area`, feed the new size back to the session and place
/// the terminal cursor on the model cursor.
pub fn render_pad(f: &mut Frame, editor: &mut Editor, area: Rect, border: bool) {
    let inner = pad_area(area, border);
    editor.set_view_size(inner.height as usize, inner.width as usize);

    let mut view = PadView::new(editor);
    if border {
        view = view.block(Block::default().borders(Borders::ALL).title(" linepad "));
    }
    f.render_widget(view, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let cursor = editor.cursor();
    let x = inner.x + (cursor.col as u16).min(inner.width - 1);
    let y = inner.y + (cursor.row as u16).min(inner.height - 1);
    f.set_cursor_position(Position::new(x, y));
}
