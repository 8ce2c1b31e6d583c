mod buffer;
mod command;
mod cursor;
pub mod input;
mod register;
mod viewport;

pub use buffer::{visible_chars, TextBuffer};
pub use command::{Command, SessionState};
pub use cursor::{CursorMove, Position};
pub use input::{decode_code, process_key, InputAction};
pub use register::KillRegister;
pub use viewport::Viewport;

use cursor::Cursor;

use crossterm::event::KeyEvent;
use tracing::{debug, trace, warn};

/// One editing session: the buffer, the viewport over it, the cursor and the
/// kill register, driven one [`Command`] at a time through [`Editor::process`].
///
/// After every call the cursor addresses an existing line and never sits past
/// the visible end of that line.
pub struct Editor {
    buffer: TextBuffer,
    cursor: Cursor,
    viewport: Viewport,
    register: KillRegister,
    state: SessionState,
    pending_size: Option<(usize, usize)>,
    last_command: Option<Command>,
    debug: bool,
    invariant_repairs: usize,
}

impl Editor {
    /// `content` is split on `\n`. Zero dimensions are raised to 1.
    pub fn new(content: &str, height: usize, width: usize, debug: bool) -> Self {
        if height == 0 || width == 0 {
            warn!(height, width, "viewport dimensions must be at least 1, clamping");
        }
        let buffer = TextBuffer::from_text(content);
        let debug_mode = debug;
        debug!(lines = buffer.line_count(), height, width, debug_mode, "new pad session");
        Self {
            buffer,
            cursor: Cursor::new(),
            viewport: Viewport::new(height, width),
            register: KillRegister::new(),
            state: SessionState::default(),
            pending_size: None,
            last_command: None,
            debug,
            invariant_repairs: 0,
        }
    }

    // Host surface

    /// Record a new display size. It takes effect at the start of the next command.
    pub fn set_view_size(&mut self, height: usize, width: usize) {
        self.pending_size = Some((height, width));
    }

    /// Decode a crossterm key and apply it.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.process_action(process_key(key))
    }

    /// Decode a curses-style key code and apply it.
    pub fn process_code(&mut self, code: u32) -> bool {
        self.process_action(decode_code(code))
    }

    pub fn process_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Command(command) => self.process(command),
            InputAction::Ignored => {
                trace!("ignored input");
                true
            }
        }
    }

    /// Feed `actions` until the session stops or input runs out, then return the text.
    pub fn edit<I>(&mut self, actions: I) -> String
    where
        I: IntoIterator<Item = InputAction>,
    {
        for action in actions {
            if !self.process_action(action) {
                break;
            }
        }
        self.result()
    }

    /// Apply one command. Returns false once editing should stop.
    pub fn process(&mut self, command: Command) -> bool {
        if self.state.is_terminated() {
            return false;
        }

        self.sync_view();
        self.last_command = Some(command);
        trace!(command = command.name(), "process");

        let keep_going = match command {
            Command::InsertChar(c) => {
                self.insert_char(c);
                true
            }
            Command::MoveStartOfLine => {
                self.move_cursor(CursorMove::Head);
                true
            }
            Command::MoveLeft => {
                self.move_cursor(CursorMove::Back);
                true
            }
            Command::DeleteLeft => {
                self.delete_left();
                true
            }
            Command::DeleteChar => {
                self.delete_char();
                true
            }
            Command::MoveEndOfLine => {
                self.move_cursor(CursorMove::End);
                true
            }
            Command::MoveRight => {
                self.move_cursor(CursorMove::Forward);
                true
            }
            Command::Terminate => {
                self.state = SessionState::Terminated;
                false
            }
            Command::SplitLine => self.split_line(),
            Command::KillToEndOfLine => {
                self.kill_to_end_of_line();
                true
            }
            Command::OpenLine => {
                self.open_line();
                true
            }
            Command::MoveDown => {
                self.move_cursor(CursorMove::Down);
                true
            }
            Command::MoveUp => {
                self.move_cursor(CursorMove::Up);
                true
            }
            Command::KillToStartOfLine => {
                self.kill_to_start_of_line();
                true
            }
            Command::Yank => {
                self.yank();
                true
            }
            Command::Refresh => true,
        };

        // Edits may leave the cursor one past the clipped width.
        let max_col = self.current_visible_len();
        self.cursor.clamp_col(max_col);
        keep_going
    }

    /// The document joined with `\n`.
    pub fn result(&self) -> String {
        self.buffer.text()
    }

    // Queries

    pub fn cursor(&self) -> Position {
        self.cursor.pos()
    }

    pub fn topline(&self) -> usize {
        self.viewport.topline()
    }

    /// `(height, width)` currently in effect.
    pub fn view_size(&self) -> (usize, usize) {
        (self.viewport.height(), self.viewport.width())
    }

    pub fn absolute_row(&self) -> usize {
        self.viewport.absolute(self.cursor.row())
    }

    pub fn current_line(&self) -> &str {
        self.buffer.line(self.absolute_row()).unwrap_or("")
    }

    pub fn lines(&self) -> Vec<&str> {
        self.buffer.lines()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// Lines on screen, stripped of `\r`/`\n` and clipped to the viewport width.
    pub fn visible_lines(&self) -> Vec<String> {
        let width = self.viewport.width();
        self.viewport
            .visible_range(self.buffer.line_count())
            .map(|row| {
                let line = self.buffer.line(row).unwrap_or("");
                visible_chars(line).take(width).collect()
            })
            .collect()
    }

    pub fn kill_register(&self) -> Option<&str> {
        self.register.yank()
    }

    pub fn is_terminated(&self) -> bool {
        self.state.is_terminated()
    }

    pub fn last_command(&self) -> Option<Command> {
        self.last_command
    }

    /// Visible length of the cursor line, exposed only in debug mode.
    pub fn end_of_line_indicator(&self) -> Option<usize> {
        self.debug.then(|| self.current_visible_len())
    }

    /// Silent cursor repairs that were not caused by a resize. Only counted in debug mode.
    pub fn invariant_repairs(&self) -> usize {
        self.invariant_repairs
    }

    // Viewport bookkeeping

    fn current_visible_len(&self) -> usize {
        self.buffer
            .visible_len(self.absolute_row(), self.viewport.width())
    }

    /// Apply a pending resize and pull the cursor back inside the document.
    fn sync_view(&mut self) {
        let resized = match self.pending_size.take() {
            Some((height, width)) if (height.max(1), width.max(1)) != self.view_size() => {
                debug!(height, width, "viewport resized");
                self.viewport.set_size(height, width);
                true
            }
            _ => false,
        };

        let mut repaired = false;

        let bottom = self.viewport.bottom_row();
        let pos = self.cursor.pos();
        if pos.row > bottom {
            // Keep the same absolute line under the cursor.
            self.viewport
                .set_topline(self.viewport.topline() + (pos.row - bottom));
            self.cursor.move_to(bottom, pos.col);
            repaired = true;
        }

        let last = self.buffer.line_count() - 1;
        if self.absolute_row() > last {
            let topline = self.viewport.topline().min(last);
            self.viewport.set_topline(topline);
            self.cursor.move_to(last - topline, self.cursor.col());
            repaired = true;
        }

        let max_col = self.current_visible_len();
        repaired |= self.cursor.clamp_col(max_col);

        if repaired && !resized {
            warn!(
                topline = self.viewport.topline(),
                row = self.cursor.row(),
                col = self.cursor.col(),
                "cursor was outside the document, clamped"
            );
            if self.debug {
                self.invariant_repairs += 1;
            }
        }
    }

    /// Append an empty line if the cursor is on the last one.
    fn ensure_next_line(&mut self) {
        if self.absolute_row() + 1 >= self.buffer.line_count() {
            debug!(lines = self.buffer.line_count() + 1, "extending document");
            self.buffer.append_line();
        }
    }

    /// Move down one line; at the bottom row the viewport scrolls instead.
    fn step_down(&mut self) {
        let pos = self.cursor.pos();
        if pos.row < self.viewport.bottom_row() {
            self.cursor.move_to(pos.row + 1, pos.col);
        } else {
            self.viewport.scroll_down();
            debug!(topline = self.viewport.topline(), "scrolled down");
        }
    }

    /// Move up one line, scrolling back at row 0. False at the document start.
    fn step_up(&mut self) -> bool {
        let pos = self.cursor.pos();
        if pos.row > 0 {
            self.cursor.move_to(pos.row - 1, pos.col);
            true
        } else if self.viewport.scroll_up() {
            debug!(topline = self.viewport.topline(), "scrolled up");
            true
        } else {
            false
        }
    }

    // Cursor

    pub fn move_cursor(&mut self, movement: CursorMove) {
        let col = self.cursor.col();
        match movement {
            CursorMove::Forward => {
                if col < self.current_visible_len() {
                    self.cursor.set_col(col + 1);
                } else {
                    self.ensure_next_line();
                    self.step_down();
                    self.cursor.set_col(0);
                }
            }
            CursorMove::Back => {
                if col > 0 {
                    self.cursor.set_col(col - 1);
                } else if self.step_up() {
                    let end = self.current_visible_len();
                    self.cursor.set_col(end);
                }
            }
            CursorMove::Up => {
                if self.step_up() {
                    let max_col = self.current_visible_len();
                    self.cursor.clamp_col(max_col);
                }
            }
            CursorMove::Down => {
                self.ensure_next_line();
                self.step_down();
                let max_col = self.current_visible_len();
                self.cursor.clamp_col(max_col);
            }
            CursorMove::Head => self.cursor.set_col(0),
            CursorMove::End => {
                let end = self.current_visible_len();
                self.cursor.set_col(end);
            }
        }
    }

    // Text manipulation

    fn insert_char(&mut self, c: char) {
        if c.is_control() {
            trace!(?c, "control character not inserted");
            return;
        }
        let col = self.cursor.col();
        // The last column before the right edge is reserved; the cursor cannot advance past it.
        if col + 1 >= self.viewport.width() {
            trace!(col, "no room to insert at the right edge");
            return;
        }
        let row = self.absolute_row();
        self.buffer.insert_char(row, col, c);
        self.cursor.set_col(col + 1);
    }

    fn delete_left(&mut self) {
        let col = self.cursor.col();
        if col > 0 {
            self.buffer.delete_char(self.absolute_row(), col - 1);
            self.cursor.set_col(col - 1);
        } else {
            self.join_with_previous();
        }
    }

    fn delete_char(&mut self) {
        let row = self.absolute_row();
        if self.cursor.col() < self.buffer.line_len(row) {
            self.buffer.delete_char(row, self.cursor.col());
        } else {
            self.buffer.join_with_next(row);
        }
    }

    /// Merge the cursor line onto the end of the previous one, leaving the
    /// cursor at the join point. No-op on the first line.
    fn join_with_previous(&mut self) {
        let row = self.absolute_row();
        if row == 0 {
            return;
        }
        let join_col = self.buffer.line_len(row - 1);
        self.buffer.join_with_next(row - 1);
        self.step_up();
        self.cursor.set_col(join_col);
    }

    fn split_line(&mut self) -> bool {
        if self.viewport.height() == 1 {
            debug!("no room to split a one-row viewport, stopping");
            self.state = SessionState::Terminated;
            return false;
        }
        self.buffer.split_line(self.absolute_row(), self.cursor.col());
        self.step_down();
        self.cursor.set_col(0);
        true
    }

    fn kill_to_end_of_line(&mut self) {
        let row = self.absolute_row();
        let col = self.cursor.col();
        let len = self.buffer.line_len(row);
        if col < len {
            let killed = self.buffer.delete_range(row, col, len);
            self.register.kill(killed);
        } else {
            self.buffer.join_with_next(row);
        }
    }

    fn kill_to_start_of_line(&mut self) {
        let col = self.cursor.col();
        if col > 0 {
            let killed = self.buffer.delete_range(self.absolute_row(), 0, col);
            self.register.kill(killed);
            self.cursor.set_col(0);
        } else {
            self.join_with_previous();
        }
    }

    fn open_line(&mut self) {
        self.buffer.insert_line(self.absolute_row() + 1, String::new());
        self.step_down();
        self.cursor.set_col(0);
    }

    fn yank(&mut self) {
        let Some(text) = self.register.yank().map(str::to_owned) else {
            return;
        };
        let col = self.cursor.col();
        self.buffer.insert_str(self.absolute_row(), col, &text);
        self.cursor.set_col(col + text.chars().count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(content: &str) -> Editor {
        crate::logging::test();
        Editor::new(content, 10, 80, false)
    }

    fn run(editor: &mut Editor, commands: &[Command]) {
        for command in commands {
            assert!(editor.process(*command), "{} stopped the session", command.name());
        }
    }

    fn assert_invariants(editor: &Editor) {
        let abs = editor.absolute_row();
        assert!(abs < editor.line_count(), "cursor line {abs} out of range");
        let max_col = editor.buffer.visible_len(abs, editor.view_size().1);
        assert!(editor.cursor().col <= max_col, "col {} > {}", editor.cursor().col, max_col);
        assert!(editor.line_count() >= 1);
        assert!(editor.cursor().row < editor.view_size().0);
    }

    #[test]
    fn test_round_trip_without_commands() {
        for content in ["", "abc", "a\nb\n", "one\n\n\nthree"] {
            assert_eq!(pad(content).result(), content);
        }
    }

    #[test]
    fn test_insert_char_at_start() {
        let mut editor = Editor::new("ab\ncd", 3, 10, false);
        run(&mut editor, &[Command::InsertChar('Z')]);
        assert_eq!(editor.lines(), vec!["Zab", "cd"]);
        assert_eq!(editor.cursor(), Position::new(0, 1));
    }

    #[test]
    fn test_control_char_is_not_inserted() {
        let mut editor = pad("ab");
        run(&mut editor, &[Command::InsertChar('\n'), Command::InsertChar('\r')]);
        assert_eq!(editor.lines(), vec!["ab"]);
        assert_eq!(editor.cursor().col, 0);
    }

    #[test]
    fn test_split_at_end_of_line() {
        let mut editor = pad("hello");
        run(&mut editor, &[Command::MoveEndOfLine]);
        assert_eq!(editor.cursor().col, 5);
        run(&mut editor, &[Command::SplitLine]);
        assert_eq!(editor.lines(), vec!["hello", ""]);
        assert_eq!(editor.cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_split_in_middle() {
        let mut editor = pad("hello");
        run(&mut editor, &[Command::MoveRight, Command::MoveRight, Command::SplitLine]);
        assert_eq!(editor.lines(), vec!["he", "llo"]);
        assert_eq!(editor.cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_split_with_single_row_viewport_stops() {
        let mut editor = Editor::new("hello", 1, 10, false);
        assert!(!editor.process(Command::SplitLine));
        assert_eq!(editor.lines(), vec!["hello"]);
        assert!(editor.is_terminated());
    }

    #[test]
    fn test_split_at_bottom_row_scrolls() {
        let mut editor = Editor::new("a\nb", 2, 10, false);
        run(&mut editor, &[Command::MoveDown, Command::MoveEndOfLine, Command::SplitLine]);
        assert_eq!(editor.lines(), vec!["a", "b", ""]);
        assert_eq!(editor.topline(), 1);
        assert_eq!(editor.cursor(), Position::new(1, 0));
        assert_eq!(editor.absolute_row(), 2);
    }

    #[test]
    fn test_move_down_scrolls_at_bottom_edge() {
        let mut editor = Editor::new("one\ntwo\nthree", 2, 10, false);
        run(&mut editor, &[Command::MoveDown]);
        assert_eq!((editor.topline(), editor.cursor().row), (0, 1));
        run(&mut editor, &[Command::MoveDown]);
        assert_eq!((editor.topline(), editor.cursor().row), (1, 1));
        assert_eq!(editor.current_line(), "three");
        assert_eq!(editor.visible_lines(), vec!["two", "three"]);
    }

    #[test]
    fn test_move_down_past_last_line_extends_document() {
        // Moving down from the last line appends an empty line before scrolling onto it.
        let mut editor = Editor::new("one\ntwo\nthree", 2, 10, false);
        run(&mut editor, &[Command::MoveDown, Command::MoveDown, Command::MoveDown]);
        assert_eq!(editor.lines(), vec!["one", "two", "three", ""]);
        assert_eq!((editor.topline(), editor.cursor().row), (2, 1));
        assert_eq!(editor.absolute_row(), 3);
        assert_invariants(&editor);
    }

    #[test]
    fn test_move_up_scrolls_back_then_stops() {
        let mut editor = Editor::new("one\ntwo\nthree", 2, 10, false);
        run(&mut editor, &[Command::MoveDown, Command::MoveDown]);
        run(&mut editor, &[Command::MoveUp]);
        assert_eq!((editor.topline(), editor.cursor().row), (1, 0));
        run(&mut editor, &[Command::MoveUp]);
        assert_eq!((editor.topline(), editor.cursor().row), (0, 0));
        run(&mut editor, &[Command::MoveUp]);
        assert_eq!((editor.topline(), editor.cursor().row), (0, 0));
    }

    #[test]
    fn test_vertical_moves_clamp_to_destination() {
        let mut editor = pad("long line\nab\nanother long");
        run(&mut editor, &[Command::MoveEndOfLine, Command::MoveDown]);
        assert_eq!(editor.cursor(), Position::new(1, 2));
        run(&mut editor, &[Command::MoveDown]);
        assert_eq!(editor.cursor(), Position::new(2, 2));
        run(&mut editor, &[Command::MoveEndOfLine, Command::MoveUp]);
        assert_eq!(editor.cursor(), Position::new(1, 2));
    }

    #[test]
    fn test_move_right_wraps_and_extends() {
        let mut editor = pad("ab");
        run(&mut editor, &[Command::MoveRight, Command::MoveRight]);
        assert_eq!(editor.cursor(), Position::new(0, 2));
        run(&mut editor, &[Command::MoveRight]);
        assert_eq!(editor.cursor(), Position::new(1, 0));
        assert_eq!(editor.lines(), vec!["ab", ""]);
    }

    #[test]
    fn test_move_right_wraps_at_clipped_width() {
        let mut editor = Editor::new("abcdefgh\nxy", 3, 5, false);
        for _ in 0..4 {
            run(&mut editor, &[Command::MoveRight]);
        }
        assert_eq!(editor.cursor(), Position::new(0, 4));
        run(&mut editor, &[Command::MoveRight]);
        assert_eq!(editor.cursor(), Position::new(1, 0));
        assert_eq!(editor.line_count(), 2);
    }

    #[test]
    fn test_move_left_wraps_to_previous_end() {
        let mut editor = pad("abc\nd");
        run(&mut editor, &[Command::MoveDown, Command::MoveLeft]);
        assert_eq!(editor.cursor(), Position::new(0, 3));
    }

    #[test]
    fn test_move_left_scrolls_back_at_top_row() {
        let mut editor = Editor::new("abc\ndef\nghi", 1, 10, false);
        run(&mut editor, &[Command::MoveDown, Command::MoveDown]);
        assert_eq!(editor.topline(), 2);
        run(&mut editor, &[Command::MoveLeft]);
        assert_eq!(editor.topline(), 1);
        assert_eq!(editor.cursor(), Position::new(0, 3));
    }

    #[test]
    fn test_move_left_at_document_start_is_idempotent() {
        let mut editor = pad("abc\ndef");
        let lines = editor.result();
        for _ in 0..5 {
            run(&mut editor, &[Command::MoveLeft]);
            assert_eq!(editor.cursor(), Position::new(0, 0));
            assert_eq!(editor.topline(), 0);
            assert_eq!(editor.result(), lines);
            assert_eq!(editor.kill_register(), None);
        }
    }

    #[test]
    fn test_line_start_and_end() {
        let mut editor = Editor::new("abcdefghij", 2, 6, false);
        run(&mut editor, &[Command::MoveEndOfLine]);
        assert_eq!(editor.cursor().col, 5);
        run(&mut editor, &[Command::MoveStartOfLine]);
        assert_eq!(editor.cursor().col, 0);
    }

    #[test]
    fn test_delete_left_removes_previous_char() {
        let mut editor = pad("abc");
        run(&mut editor, &[Command::MoveEndOfLine, Command::DeleteLeft]);
        assert_eq!(editor.lines(), vec!["ab"]);
        assert_eq!(editor.cursor().col, 2);
    }

    #[test]
    fn test_delete_left_joins_with_previous() {
        let mut editor = pad("abc\ndef");
        run(&mut editor, &[Command::MoveDown, Command::DeleteLeft]);
        assert_eq!(editor.lines(), vec!["abcdef"]);
        assert_eq!(editor.cursor(), Position::new(0, 3));
    }

    #[test]
    fn test_delete_left_join_scrolls_back() {
        let mut editor = Editor::new("ab\ncd\nef", 1, 10, false);
        run(&mut editor, &[Command::MoveDown]);
        assert_eq!(editor.topline(), 1);
        run(&mut editor, &[Command::DeleteLeft]);
        assert_eq!(editor.lines(), vec!["abcd", "ef"]);
        assert_eq!(editor.topline(), 0);
        assert_eq!(editor.cursor(), Position::new(0, 2));
    }

    #[test]
    fn test_delete_left_at_document_start_is_noop() {
        let mut editor = pad("abc");
        run(&mut editor, &[Command::DeleteLeft]);
        assert_eq!(editor.lines(), vec!["abc"]);
        assert_eq!(editor.cursor(), Position::new(0, 0));
    }

    #[test]
    fn test_delete_char() {
        let mut editor = pad("abc\ndef");
        run(&mut editor, &[Command::DeleteChar]);
        assert_eq!(editor.lines(), vec!["bc", "def"]);
        run(&mut editor, &[Command::MoveEndOfLine, Command::DeleteChar]);
        assert_eq!(editor.lines(), vec!["bcdef"]);
        assert_eq!(editor.cursor().col, 2);
        run(&mut editor, &[Command::MoveEndOfLine, Command::DeleteChar]);
        assert_eq!(editor.lines(), vec!["bcdef"]);
    }

    #[test]
    fn test_kill_to_end_then_yank() {
        let mut editor = pad("abcdef");
        run(&mut editor, &[Command::MoveRight, Command::MoveRight, Command::KillToEndOfLine]);
        assert_eq!(editor.lines(), vec!["ab"]);
        assert_eq!(editor.kill_register(), Some("cdef"));
        run(&mut editor, &[Command::Yank]);
        assert_eq!(editor.lines(), vec!["abcdef"]);
        assert_eq!(editor.cursor().col, 6);
    }

    #[test]
    fn test_kill_yank_restores_line_for_every_column() {
        let line = "kill me";
        for c in 0..=line.len() {
            let mut editor = pad(line);
            for _ in 0..c {
                run(&mut editor, &[Command::MoveRight]);
            }
            run(&mut editor, &[Command::KillToEndOfLine, Command::Yank]);
            assert_eq!(editor.result(), line, "column {c}");
            assert_eq!(editor.cursor().col, line.len(), "column {c}");
        }
    }

    #[test]
    fn test_kill_at_end_joins_without_touching_register() {
        let mut editor = pad("ab\ncd");
        run(&mut editor, &[Command::MoveRight, Command::KillToEndOfLine]);
        assert_eq!(editor.kill_register(), Some("b"));
        run(&mut editor, &[Command::KillToEndOfLine]);
        assert_eq!(editor.lines(), vec!["acd"]);
        assert_eq!(editor.kill_register(), Some("b"));
    }

    #[test]
    fn test_kill_replaces_register() {
        let mut editor = pad("one\ntwo");
        run(&mut editor, &[Command::KillToEndOfLine]);
        run(&mut editor, &[Command::MoveDown, Command::KillToEndOfLine]);
        assert_eq!(editor.kill_register(), Some("two"));
        assert_eq!(editor.lines(), vec!["", ""]);
    }

    #[test]
    fn test_repeated_yank_reinserts() {
        let mut editor = pad("xy");
        run(&mut editor, &[Command::KillToEndOfLine, Command::Yank, Command::Yank]);
        assert_eq!(editor.lines(), vec!["xyxy"]);
        assert_eq!(editor.cursor().col, 4);
        assert_eq!(editor.kill_register(), Some("xy"));
    }

    #[test]
    fn test_yank_with_empty_register_is_noop() {
        let mut editor = pad("abc");
        run(&mut editor, &[Command::Yank]);
        assert_eq!(editor.lines(), vec!["abc"]);
        assert_eq!(editor.cursor().col, 0);
    }

    #[test]
    fn test_yank_past_clipped_width_clamps_cursor() {
        let mut editor = Editor::new("abcd", 2, 5, false);
        run(&mut editor, &[Command::KillToEndOfLine, Command::Yank, Command::Yank]);
        assert_eq!(editor.lines(), vec!["abcdabcd"]);
        assert_eq!(editor.cursor().col, 4);
        assert_invariants(&editor);
    }

    #[test]
    fn test_typing_at_right_edge_keeps_order() {
        crate::logging::test();
        let mut editor = Editor::new("ab", 2, 5, false);
        run(&mut editor, &[Command::MoveEndOfLine]);
        for c in ['x', 'y', 'z'] {
            run(&mut editor, &[Command::InsertChar(c)]);
        }
        assert_eq!(editor.lines(), vec!["abxy"]);
        assert_eq!(editor.cursor().col, 4);
    }

    #[test]
    fn test_insert_on_clipped_line_at_edge_is_noop() {
        let mut editor = Editor::new("abcd", 2, 5, false);
        run(&mut editor, &[Command::MoveEndOfLine]);
        for c in ['x', 'y', 'z'] {
            run(&mut editor, &[Command::InsertChar(c)]);
        }
        assert_eq!(editor.result(), "abcd");
        assert_eq!(editor.cursor().col, 4);
        run(&mut editor, &[Command::MoveLeft, Command::InsertChar('x')]);
        assert_eq!(editor.result(), "abcxd");
        assert_eq!(editor.cursor().col, 4);
    }

    #[test]
    fn test_kill_to_start_of_line() {
        let mut editor = pad("hello world");
        for _ in 0..6 {
            run(&mut editor, &[Command::MoveRight]);
        }
        run(&mut editor, &[Command::KillToStartOfLine]);
        assert_eq!(editor.lines(), vec!["world"]);
        assert_eq!(editor.kill_register(), Some("hello "));
        assert_eq!(editor.cursor().col, 0);
    }

    #[test]
    fn test_kill_to_start_at_column_zero() {
        let mut editor = pad("ab\ncd");
        run(&mut editor, &[Command::KillToStartOfLine]);
        assert_eq!(editor.lines(), vec!["ab", "cd"]);
        run(&mut editor, &[Command::MoveDown, Command::KillToStartOfLine]);
        assert_eq!(editor.lines(), vec!["abcd"]);
        assert_eq!(editor.cursor(), Position::new(0, 2));
        assert_eq!(editor.kill_register(), None);
    }

    #[test]
    fn test_open_line() {
        let mut editor = pad("ab\ncd");
        run(&mut editor, &[Command::MoveRight, Command::OpenLine]);
        assert_eq!(editor.lines(), vec!["ab", "", "cd"]);
        assert_eq!(editor.cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_open_line_at_bottom_row_scrolls() {
        let mut editor = Editor::new("ab", 1, 10, false);
        run(&mut editor, &[Command::OpenLine]);
        assert_eq!(editor.lines(), vec!["ab", ""]);
        assert_eq!(editor.topline(), 1);
        assert_eq!(editor.cursor(), Position::new(0, 0));
    }

    #[test]
    fn test_refresh_changes_nothing() {
        let mut editor = pad("abc");
        run(&mut editor, &[Command::MoveRight, Command::Refresh]);
        assert_eq!(editor.lines(), vec!["abc"]);
        assert_eq!(editor.cursor().col, 1);
        assert_eq!(editor.last_command(), Some(Command::Refresh));
    }

    #[test]
    fn test_terminate_returns_false_and_keeps_text() {
        let mut editor = pad("ab");
        run(&mut editor, &[Command::InsertChar('x'), Command::SplitLine]);
        assert!(!editor.process(Command::Terminate));
        assert!(editor.is_terminated());
        assert_eq!(editor.result(), "x\nab");
        assert!(!editor.process(Command::InsertChar('y')));
        assert_eq!(editor.result(), "x\nab");
    }

    #[test]
    fn test_ignored_input_continues() {
        let mut editor = pad("abc");
        assert!(editor.process_code(0x1b));
        assert!(editor.process_action(InputAction::Ignored));
        assert_eq!(editor.result(), "abc");
        assert_eq!(editor.last_command(), None);
    }

    #[test]
    fn test_edit_drives_codes_until_terminate() {
        let mut editor = pad("world");
        let actions = "hello "
            .bytes()
            .map(|b| decode_code(b as u32))
            .chain([decode_code(input::codes::BEL), decode_code(b'!' as u32)]);
        assert_eq!(editor.edit(actions), "hello world");
    }

    #[test]
    fn test_resize_keeps_cursor_line() {
        let mut editor = Editor::new("a\nb\nc\nd\ne", 5, 10, false);
        run(&mut editor, &[Command::MoveDown, Command::MoveDown, Command::MoveDown]);
        assert_eq!(editor.absolute_row(), 3);
        editor.set_view_size(2, 10);
        assert_eq!(editor.view_size(), (5, 10));
        run(&mut editor, &[Command::Refresh]);
        assert_eq!(editor.view_size(), (2, 10));
        assert_eq!(editor.cursor().row, 1);
        assert_eq!(editor.absolute_row(), 3);
        assert_invariants(&editor);
    }

    #[test]
    fn test_resize_narrower_clamps_column() {
        let mut editor = Editor::new("abcdefgh", 3, 20, true);
        run(&mut editor, &[Command::MoveEndOfLine]);
        editor.set_view_size(3, 4);
        run(&mut editor, &[Command::Refresh]);
        assert_eq!(editor.cursor().col, 3);
        assert_eq!(editor.invariant_repairs(), 0);
    }

    #[test]
    fn test_out_of_bounds_cursor_is_repaired() {
        let mut editor = Editor::new("ab\ncd", 5, 10, true);
        editor.cursor.move_to(4, 9);
        run(&mut editor, &[Command::Refresh]);
        assert_eq!(editor.absolute_row(), 1);
        assert_eq!(editor.cursor().col, 2);
        assert_eq!(editor.invariant_repairs(), 1);
        assert_invariants(&editor);
    }

    #[test]
    fn test_repairs_not_counted_without_debug() {
        let mut editor = Editor::new("ab", 5, 10, false);
        editor.viewport.set_topline(7);
        run(&mut editor, &[Command::Refresh]);
        assert_eq!(editor.topline(), 0);
        assert_eq!(editor.invariant_repairs(), 0);
    }

    #[test]
    fn test_end_of_line_indicator_only_in_debug() {
        let editor = Editor::new("abcdef", 3, 4, true);
        assert_eq!(editor.end_of_line_indicator(), Some(3));
        assert_eq!(pad("abc").end_of_line_indicator(), None);
    }

    #[test]
    fn test_visible_lines_clip_to_width() {
        let editor = Editor::new("abcdefgh\nxy\nz", 2, 4, false);
        assert_eq!(editor.visible_lines(), vec!["abcd", "xy"]);
    }

    #[test]
    fn test_zero_dimensions_are_raised() {
        let editor = Editor::new("abc", 0, 0, false);
        assert_eq!(editor.view_size(), (1, 1));
    }

    #[test]
    fn test_invariants_hold_over_mixed_commands() {
        let commands = [
            Command::InsertChar('q'),
            Command::MoveDown,
            Command::MoveDown,
            Command::MoveRight,
            Command::KillToEndOfLine,
            Command::MoveUp,
            Command::Yank,
            Command::Yank,
            Command::MoveEndOfLine,
            Command::DeleteChar,
            Command::SplitLine,
            Command::OpenLine,
            Command::MoveLeft,
            Command::MoveLeft,
            Command::DeleteLeft,
            Command::KillToStartOfLine,
            Command::MoveDown,
            Command::MoveDown,
            Command::MoveDown,
            Command::DeleteLeft,
            Command::MoveUp,
            Command::MoveUp,
            Command::MoveUp,
            Command::MoveUp,
        ];
        for (height, width) in [(1, 1), (1, 3), (2, 4), (3, 10)] {
            let mut editor = Editor::new("first line\nsecond\n\nfourth line here", height, width, false);
            for command in commands {
                if command == Command::SplitLine && height == 1 {
                    continue;
                }
                assert!(editor.process(command));
                assert_invariants(&editor);
            }
        }
    }
}
