use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::rect::Rect;
use super::style::{Rgb, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Second column of a wide character; skipped when flushing.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }

    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Paint the background of every cell in `area`, keeping characters.
    pub fn fill(&mut self, area: Rect, bg: Rgb) {
        for y in area.y..area.bottom().min(self.height) {
            for x in area.x..area.right().min(self.width) {
                let idx = self.index(x, y);
                self.cells[idx].bg = bg;
            }
        }
    }

    /// Write `text` starting at `(x, y)`, clipped to `max_x` (exclusive).
    ///
    /// Cells keep their background. Returns the x position after the last
    /// written column.
    pub fn put_str(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        max_x: u16,
        fg: Rgb,
        style: TextStyle,
    ) -> u16 {
        let max_x = max_x.min(self.width);
        let mut cx = x;
        if y >= self.height {
            return cx;
        }
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if cx + w > max_x {
                break;
            }
            let idx = self.index(cx, y);
            let bg = self.cells[idx].bg;
            self.cells[idx] = Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style);
            if w == 2 {
                let idx = self.index(cx + 1, y);
                let cell = &mut self.cells[idx];
                cell.char = ' ';
                cell.wide_continuation = true;
            }
            cx += w;
        }
        cx
    }

    /// The characters of row `y`, with trailing spaces removed.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        let row = &self.cells[start..start + self.width as usize];
        let text: String = row
            .iter()
            .filter(|c| !c.wide_continuation)
            .map(|c| c.char)
            .collect();
        text.trim_end().to_string()
    }

    /// Every row as text, for assertions and snapshots.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_text(y)).collect()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
