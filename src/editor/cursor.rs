/// Cursor position relative to the viewport: `row` counts from the top visible line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Forward,
    Back,
    Up,
    Down,
    Head,
    End,
}

#[derive(Debug, Clone, Default)]
pub struct Cursor {
    pub position: Position,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pos(&self) -> Position {
        self.position
    }

    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn col(&self) -> usize {
        self.position.col
    }

    pub fn move_to(&mut self, row: usize, col: usize) {
        self.position = Position::new(row, col);
    }

    pub fn set_col(&mut self, col: usize) {
        self.position.col = col;
    }

    /// Pull `col` back to `max` if it ran past it.
    pub fn clamp_col(&mut self, max: usize) -> bool {
        if self.position.col > max {
            self.position.col = max;
            true
        } else {
            false
        }
    }
}
