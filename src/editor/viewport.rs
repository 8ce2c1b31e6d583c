//! Scrolling window over the buffer

/// Which buffer lines are shown: `height` rows starting at `topline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    topline: usize,
    height: usize,
    width: usize,
}

impl Viewport {
    /// Zero dimensions are raised to 1.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            topline: 0,
            height: height.max(1),
            width: width.max(1),
        }
    }

    pub fn topline(&self) -> usize {
        self.topline
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn bottom_row(&self) -> usize {
        self.height - 1
    }

    pub fn absolute(&self, row: usize) -> usize {
        self.topline + row
    }

    pub fn set_size(&mut self, height: usize, width: usize) {
        self.height = height.max(1);
        self.width = width.max(1);
    }

    pub fn set_topline(&mut self, topline: usize) {
        self.topline = topline;
    }

    pub fn scroll_down(&mut self) {
        self.topline += 1;
    }

    /// Returns false at the document start, where there is nothing to scroll back to.
    pub fn scroll_up(&mut self) -> bool {
        if self.topline == 0 {
            return false;
        }
        self.topline -= 1;
        true
    }

    /// Buffer line range currently on screen, bounded by `line_count`.
    pub fn visible_range(&self, line_count: usize) -> std::ops::Range<usize> {
        let start = self.topline.min(line_count);
        let end = (self.topline + self.height).min(line_count);
        start..end
    }
}
