use crate::game::{Piece, Shape};
use crate::{BOARD_H, BOARD_W};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Shape),
}

impl Cell {
    /// 0 for empty, otherwise the shape's type code.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(shape) => shape.code(),
        }
    }

    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// The committed grid. Always `BOARD_H` rows by `BOARD_W` columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            width: BOARD_W,
            height: BOARD_H,
            cells: vec![Cell::Empty; BOARD_W * BOARD_H],
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    fn set(&mut self, x: usize, y: usize, value: Cell) {
        let idx = self.idx(x, y);
        self.cells[idx] = value;
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let start = self.idx(0, y);
        &self.cells[start..start + self.width]
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| !c.is_filled())
    }

    /// All-or-nothing validity check. Columns must be on the board, rows must be
    /// above the floor, and any cell at row >= 0 must land on an empty square.
    /// Rows above the top are allowed.
    pub fn accepts(&self, piece: &Piece) -> bool {
        piece.cells().into_iter().all(|(x, y, _)| {
            if x < 0 || x as usize >= self.width || y >= self.height as i32 {
                return false;
            }
            y < 0 || !self.get(x as usize, y as usize).is_filled()
        })
    }

    /// Writes the piece's filled cells into the grid. Cells above the top are dropped.
    pub fn place(&mut self, piece: &Piece) {
        for (x, y, cell) in piece.cells() {
            if x >= 0 && y >= 0 {
                let (xu, yu) = (x as usize, y as usize);
                if xu < self.width && yu < self.height {
                    self.set(xu, yu, cell);
                }
            }
        }
    }

    /// Copy of the grid with the piece drawn on top.
    pub fn overlay(&self, piece: &Piece) -> Board {
        let mut merged = self.clone();
        merged.place(piece);
        merged
    }

    /// Drops every full row at once, shifts the rest down in order and fills the
    /// top with empty rows. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut kept = Vec::with_capacity(self.cells.len());
        for y in 0..self.height {
            let row = self.row(y);
            if row.iter().any(|c| !c.is_filled()) {
                kept.extend_from_slice(row);
            }
        }
        let cleared = self.height - kept.len() / self.width;
        if cleared == 0 {
            return 0;
        }
        let mut new_cells = vec![Cell::Empty; cleared * self.width];
        new_cells.extend(kept);
        self.cells = new_cells;
        cleared
    }

    /// Row-major type codes, the renderer's input.
    pub fn codes(&self) -> Vec<Vec<u8>> {
        (0..self.height)
            .map(|y| self.row(y).iter().map(|c| c.code()).collect())
            .collect()
    }
}
