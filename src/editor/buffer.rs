/// Line storage for a pad session.
///
/// Columns are char indices. Out of range indices are clamped rather than
/// rejected so callers can issue edits without pre-validating every position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self { lines: vec![String::new()] }
    }
}

impl TextBuffer {
    /// Split `text` on `\n`. Carriage returns are dropped so stored lines never
    /// carry line structure of their own.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.chars().filter(|c| *c != '\r').collect())
            .collect();
        Self::from_lines(lines)
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            Self::default()
        } else {
            Self { lines }
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    pub fn lines(&self) -> Vec<&str> {
        self.lines.iter().map(String::as_str).collect()
    }

    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map(|l| l.chars().count()).unwrap_or(0)
    }

    /// Length of `row` once line-structural characters are stripped, clipped to
    /// `width - 1` so the last column before the right edge stays free.
    pub fn visible_len(&self, row: usize, width: usize) -> usize {
        let len = self
            .lines
            .get(row)
            .map(|l| visible_chars(l).count())
            .unwrap_or(0);
        len.min(width.saturating_sub(1))
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn append_line(&mut self) {
        self.lines.push(String::new());
    }

    pub fn insert_line(&mut self, row: usize, text: String) {
        let row = row.min(self.lines.len());
        self.lines.insert(row, text);
    }

    /// Remove `row`, keeping at least one line in the buffer.
    pub fn remove_line(&mut self, row: usize) -> Option<String> {
        if row >= self.lines.len() {
            return None;
        }
        let removed = self.lines.remove(row);
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        Some(removed)
    }

    pub fn insert_char(&mut self, row: usize, col: usize, c: char) {
        if let Some(line) = self.lines.get_mut(row) {
            let idx = byte_index(line, col);
            line.insert(idx, c);
        }
    }

    pub fn insert_str(&mut self, row: usize, col: usize, s: &str) {
        if let Some(line) = self.lines.get_mut(row) {
            let idx = byte_index(line, col);
            line.insert_str(idx, s);
        }
    }

    pub fn delete_char(&mut self, row: usize, col: usize) -> Option<char> {
        let line = self.lines.get_mut(row)?;
        if col >= line.chars().count() {
            return None;
        }
        let idx = byte_index(line, col);
        Some(line.remove(idx))
    }

    /// Remove the chars in `from..to` and return them.
    pub fn delete_range(&mut self, row: usize, from: usize, to: usize) -> String {
        let Some(line) = self.lines.get_mut(row) else {
            return String::new();
        };
        let start = byte_index(line, from);
        let end = byte_index(line, to.max(from));
        line.drain(start..end).collect()
    }

    /// Break `row` at `col`; the tail becomes a new line right after it.
    pub fn split_line(&mut self, row: usize, col: usize) {
        if let Some(line) = self.lines.get_mut(row) {
            let idx = byte_index(line, col);
            let rest = line.split_off(idx);
            self.lines.insert(row + 1, rest);
        }
    }

    /// Append line `row + 1` onto `row`. Returns false when there is no next line.
    pub fn join_with_next(&mut self, row: usize) -> bool {
        if row + 1 >= self.lines.len() {
            return false;
        }
        let next = self.lines.remove(row + 1);
        self.lines[row].push_str(&next);
        true
    }
}

/// Chars of `line` without `\r` or `\n`.
pub fn visible_chars(line: &str) -> impl Iterator<Item = char> + '_ {
    line.chars().filter(|c| !matches!(c, '\r' | '\n'))
}

fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}
