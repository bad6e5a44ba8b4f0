use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::Cell;
use crate::{SPAWN_X, SPAWN_Y};

/// The seven catalog shapes, in catalog index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Square,
    Line,
    S,
    Z,
    T,
    J,
    L,
}

pub const SHAPES: [Shape; 7] = [
    Shape::Square,
    Shape::Line,
    Shape::S,
    Shape::Z,
    Shape::T,
    Shape::J,
    Shape::L,
];

impl Shape {
    /// Catalog index, 0..=6.
    pub fn index(self) -> usize {
        match self {
            Shape::Square => 0,
            Shape::Line => 1,
            Shape::S => 2,
            Shape::Z => 3,
            Shape::T => 4,
            Shape::J => 5,
            Shape::L => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Shape> {
        SHAPES.get(index).copied()
    }

    /// Type code written into the grid, 1..=7.
    pub fn code(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_code(code: u8) -> Option<Shape> {
        match code {
            0 => None,
            c => Shape::from_index(c as usize - 1),
        }
    }

    pub fn template(self) -> Matrix {
        const SQUARE: &[&[u8]] = &[&[1, 1], &[1, 1]];
        const LINE: &[&[u8]] = &[&[1, 1, 1, 1]];
        const S: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
        const Z: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
        const T: &[&[u8]] = &[&[1, 1, 1], &[0, 1, 0]];
        const J: &[&[u8]] = &[&[1, 1, 1], &[1, 0, 0]];
        const L: &[&[u8]] = &[&[1, 1, 1], &[0, 0, 1]];

        let mask = match self {
            Shape::Square => SQUARE,
            Shape::Line => LINE,
            Shape::S => S,
            Shape::Z => Z,
            Shape::T => T,
            Shape::J => J,
            Shape::L => L,
        };
        Matrix::from_mask(self, mask)
    }
}

/// Uniform pick over the catalog.
pub fn random_shape<R: Rng + ?Sized>(rng: &mut R) -> Shape {
    *SHAPES.choose(rng).unwrap_or(&Shape::Square)
}

/// Rectangular block of cells. Never mutated in place; rotation builds a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Matrix {
    /// Builds a matrix from rows of cells. Short rows are padded with empties.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            cells.extend(row.iter().copied());
            cells.extend(std::iter::repeat(Cell::Empty).take(cols - row.len()));
        }
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    fn from_mask(shape: Shape, mask: &[&[u8]]) -> Self {
        let rows: Vec<Vec<Cell>> = mask
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&bit| if bit == 0 { Cell::Empty } else { Cell::Filled(shape) })
                    .collect()
            })
            .collect();
        Self::from_rows(&rows)
    }

    /// A single row of `len` filled cells.
    pub fn bar(shape: Shape, len: usize) -> Self {
        Self {
            rows: 1,
            cols: len,
            cells: vec![Cell::Filled(shape); len],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Transpose, then reverse row order.
    pub fn rotated(&self) -> Self {
        let rows = self.cols;
        let cols = self.rows;
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..rows {
            let src_col = self.cols - 1 - r;
            for c in 0..cols {
                cells.push(self.get(c, src_col));
            }
        }
        Self { rows, cols, cells }
    }

    /// Filled cells as (col, row, cell) offsets from the top-left corner.
    pub fn filled(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, &cell)| {
            cell.is_filled()
                .then(|| ((i % self.cols) as i32, (i / self.cols) as i32, cell))
        })
    }

    pub fn codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}

/// A matrix placed at a grid offset. `x`/`y` are the top-left of the bounding matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub matrix: Matrix,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Fresh template at the spawn position.
    pub fn spawn(shape: Shape) -> Self {
        Self::at(shape.template(), shape, SPAWN_X, SPAWN_Y)
    }

    pub fn at(matrix: Matrix, shape: Shape, x: i32, y: i32) -> Self {
        Self { shape, matrix, x, y }
    }

    /// Absolute (x, y, cell) for every filled cell.
    pub fn cells(&self) -> Vec<(i32, i32, Cell)> {
        self.matrix
            .filled()
            .map(|(dx, dy, cell)| (self.x + dx, self.y + dy, cell))
            .collect()
    }

    /// True when any filled cell of `other` shares a square with this piece.
    pub fn overlaps(&self, other: &Piece) -> bool {
        let mine = self.cells();
        other
            .cells()
            .into_iter()
            .any(|(x, y, _)| mine.iter().any(|&(mx, my, _)| mx == x && my == y))
    }

    pub fn rotated(&self) -> Self {
        let mut next = self.clone();
        next.matrix = self.matrix.rotated();
        next
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        let mut next = self.clone();
        next.x += dx;
        next.y += dy;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn catalog_dimensions_and_codes() {
        let dims: Vec<(usize, usize, u8)> = SHAPES
            .iter()
            .map(|s| {
                let m = s.template();
                (m.rows(), m.cols(), s.code())
            })
            .collect();
        assert_eq!(
            dims,
            vec![
                (2, 2, 1),
                (1, 4, 2),
                (2, 3, 3),
                (2, 3, 4),
                (2, 3, 5),
                (2, 3, 6),
                (2, 3, 7),
            ]
        );
    }

    #[test]
    fn every_template_uses_one_code() {
        for shape in SHAPES {
            let m = shape.template();
            assert_eq!(m.filled().count(), 4);
            assert!(m.filled().all(|(_, _, c)| c.code() == shape.code()));
        }
    }

    #[test]
    fn t_template_layout() {
        assert_eq!(Shape::T.template().codes(), vec![vec![5, 5, 5], vec![0, 5, 0]]);
    }

    #[test]
    fn square_rotation_is_identity() {
        let sq = Shape::Square.template();
        assert_eq!(sq.rotated(), sq);
    }

    #[test]
    fn line_rotation_toggles_footprint() {
        let line = Shape::Line.template();
        let once = line.rotated();
        assert_eq!((once.rows(), once.cols()), (4, 1));
        let twice = once.rotated();
        assert_eq!((twice.rows(), twice.cols()), (1, 4));
    }

    #[test]
    fn rotation_is_transpose_then_reverse() {
        // [[6,6,6],[6,0,0]] -> transpose [[6,6],[6,0],[6,0]] -> reversed [[6,0],[6,0],[6,6]]
        let j = Shape::J.template().rotated();
        assert_eq!(j.codes(), vec![vec![6, 0], vec![6, 0], vec![6, 6]]);
        let four = (0..4).fold(Shape::J.template(), |m, _| m.rotated());
        assert_eq!(four, Shape::J.template());
    }

    #[test]
    fn code_round_trips_through_shape() {
        assert_eq!(Shape::from_code(0), None);
        assert_eq!(Shape::from_code(8), None);
        assert_eq!(Shape::from_code(7), Some(Shape::L));
    }

    #[test]
    fn seeded_selection_is_repeatable_and_covers_catalog() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let left: Vec<Shape> = (0..200).map(|_| random_shape(&mut a)).collect();
        let right: Vec<Shape> = (0..200).map(|_| random_shape(&mut b)).collect();
        assert_eq!(left, right);
        for shape in SHAPES {
            assert!(left.contains(&shape), "{shape:?} never drawn");
        }
    }

    #[test]
    fn overlap_ignores_empty_matrix_cells() {
        // T = [[5,5,5],[0,5,0]]; (3,1) is its empty corner.
        let t = Piece::spawn(Shape::T);
        let dot = |x, y| Piece::at(Matrix::bar(Shape::J, 1), Shape::J, x, y);
        assert!(t.overlaps(&dot(4, 1)));
        assert!(!t.overlaps(&dot(3, 1)));
        assert!(!t.overlaps(&dot(6, 0)));
    }

    #[test]
    fn piece_cells_are_offset_by_position() {
        let p = Piece::spawn(Shape::Square).shifted(-3, 5);
        let mut cells: Vec<(i32, i32)> = p.cells().into_iter().map(|(x, y, _)| (x, y)).collect();
        cells.sort();
        assert_eq!(cells, vec![(0, 5), (0, 6), (1, 5), (1, 6)]);
    }
}
