use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::board::BOARD_WIDTH;

/// Enum representing the type of shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ShapeKind {
    /// I-shape.
    I = 0,
    /// O-shape.
    O = 1,
    /// S-shape.
    S = 2,
    /// Z-shape.
    Z = 3,
    /// T-shape.
    T = 4,
    /// L-shape.
    L = 5,
    /// J-shape.
    J = 6,
}

impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        match rng.random_range(0..=6) {
            0 => ShapeKind::I,
            1 => ShapeKind::O,
            2 => ShapeKind::S,
            3 => ShapeKind::Z,
            4 => ShapeKind::T,
            5 => ShapeKind::L,
            _ => ShapeKind::J,
        }
    }
}

impl ShapeKind {
    /// Number of shape types (7).
    pub const LEN: usize = 7;

    /// Returns the shape's matrix in its spawn orientation.
    #[must_use]
    pub fn spawn_grid(self) -> ShapeGrid {
        SPAWN_GRIDS[self as usize]
    }
}

/// An immutable boolean matrix describing one orientation of a shape.
///
/// The matrix is stored with its exact width and height (the I-shape spawns
/// as a 1×4 row and rotates into a 4×1 column). [`ShapeGrid::rotated`] returns
/// a new grid; the catalog entries are never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeGrid {
    width: usize,
    height: usize,
    cells: [[bool; Self::MAX_DIM]; Self::MAX_DIM],
}

impl ShapeGrid {
    /// Largest matrix dimension in the catalog (the 1×4 I-shape rotates to 4×1).
    pub const MAX_DIM: usize = 4;

    const fn new<const W: usize, const H: usize>(rows: [[bool; W]; H]) -> Self {
        assert!(W <= Self::MAX_DIM && H <= Self::MAX_DIM);
        let mut cells = [[false; Self::MAX_DIM]; Self::MAX_DIM];
        let mut row = 0;
        while row < H {
            let mut col = 0;
            while col < W {
                cells[row][col] = rows[row][col];
                col += 1;
            }
            row += 1;
        }
        Self {
            width: W,
            height: H,
            cells,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row][col]
    }

    /// Returns an iterator over the occupied `(row, col)` offsets of the matrix.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells[..self.height]
            .iter()
            .enumerate()
            .flat_map(move |(row, cells)| {
                cells[..self.width]
                    .iter()
                    .enumerate()
                    .filter_map(move |(col, &occupied)| occupied.then_some((row, col)))
            })
    }

    /// Returns the matrix rotated 90° clockwise: transpose plus row reversal.
    ///
    /// The rotation pivots on the matrix's own top-left corner rather than a
    /// piece-specific center, and there is no wall-kick correction.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let mut cells = [[false; Self::MAX_DIM]; Self::MAX_DIM];
        for (row, cells) in cells[..self.width].iter_mut().enumerate() {
            for (col, cell) in cells[..self.height].iter_mut().enumerate() {
                *cell = self.cells[self.height - 1 - col][row];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

const SPAWN_GRIDS: [ShapeGrid; ShapeKind::LEN] = {
    const C: bool = true;
    const E: bool = false;
    [
        // I-shape
        ShapeGrid::new([[C, C, C, C]]),
        // O-shape
        ShapeGrid::new([[C, C], [C, C]]),
        // S-shape
        ShapeGrid::new([[C, C, E], [E, C, C]]),
        // Z-shape
        ShapeGrid::new([[E, C, C], [C, C, E]]),
        // T-shape
        ShapeGrid::new([[C, C, C], [E, C, E]]),
        // L-shape
        ShapeGrid::new([[C, C, C], [C, E, E]]),
        // J-shape
        ShapeGrid::new([[C, C, C], [E, E, C]]),
    ]
};

/// Board offset of a shape matrix's top-left cell.
///
/// The row may be negative while a freshly spawned piece is still entering
/// the board from above. Locked board cells never have a negative row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> i32 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> i32 {
        self.col
    }
}

/// The piece currently falling on the board.
///
/// Movement and rotation return new `ActivePiece` values; whether a candidate
/// is accepted is decided by the board's validity check, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    kind: ShapeKind,
    grid: ShapeGrid,
    position: Position,
}

impl ActivePiece {
    /// Creates a piece at the spawn position: row 0, horizontally centered
    /// using the width of its spawn orientation.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn spawn(kind: ShapeKind) -> Self {
        let grid = kind.spawn_grid();
        let col = (BOARD_WIDTH / 2 - grid.width() / 2) as i32;
        Self {
            kind,
            grid,
            position: Position::new(0, col),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn grid(&self) -> &ShapeGrid {
        &self.grid
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn left(&self) -> Self {
        self.shifted(0, -1)
    }

    #[must_use]
    pub fn right(&self) -> Self {
        self.shifted(0, 1)
    }

    #[must_use]
    pub fn down(&self) -> Self {
        self.shifted(1, 0)
    }

    #[must_use]
    pub fn up(&self) -> Self {
        self.shifted(-1, 0)
    }

    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            kind: self.kind,
            grid: self.grid.rotated(),
            position: self.position,
        }
    }

    fn shifted(&self, rows: i32, cols: i32) -> Self {
        Self {
            kind: self.kind,
            grid: self.grid,
            position: Position::new(self.position.row + rows, self.position.col + cols),
        }
    }

    /// Returns an iterator over the board `(row, col)` coordinates covered by
    /// the piece's occupied cells, scanning the matrix top row first.
    #[expect(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn occupied_board_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.grid.occupied_cells().map(move |(row, col)| {
            (
                self.position.row + row as i32,
                self.position.col + col as i32,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [ShapeKind; ShapeKind::LEN] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
    ];

    fn grid_rows(grid: &ShapeGrid) -> Vec<Vec<bool>> {
        (0..grid.height())
            .map(|row| (0..grid.width()).map(|col| grid.is_occupied(row, col)).collect())
            .collect()
    }

    #[test]
    fn every_shape_has_four_cells() {
        for kind in ALL_KINDS {
            assert_eq!(
                kind.spawn_grid().occupied_cells().count(),
                4,
                "{kind:?} should cover four cells"
            );
        }
    }

    #[test]
    fn rotation_swaps_dimensions() {
        for kind in ALL_KINDS {
            let grid = kind.spawn_grid();
            let rotated = grid.rotated();
            assert_eq!(rotated.width(), grid.height());
            assert_eq!(rotated.height(), grid.width());
            assert_eq!(rotated.occupied_cells().count(), 4);
        }
    }

    #[test]
    fn i_shape_rotates_to_column() {
        let rotated = ShapeKind::I.spawn_grid().rotated();
        assert_eq!(
            grid_rows(&rotated),
            vec![vec![true], vec![true], vec![true], vec![true]]
        );
    }

    #[test]
    fn t_shape_rotates_clockwise() {
        // [[1,1,1],[0,1,0]] -> transpose + row reversal
        let rotated = ShapeKind::T.spawn_grid().rotated();
        assert_eq!(
            grid_rows(&rotated),
            vec![vec![false, true], vec![true, true], vec![false, true]]
        );
    }

    #[test]
    fn four_rotations_return_to_spawn_for_square_matrices() {
        // Only matrices with equal width and height pivot back onto themselves;
        // the O-shape is the catalog's single square matrix.
        let grid = ShapeKind::O.spawn_grid();
        let full_turn = grid.rotated().rotated().rotated().rotated();
        assert_eq!(full_turn, grid);
    }

    #[test]
    fn rotation_does_not_mutate_the_catalog() {
        let before = ShapeKind::I.spawn_grid();
        let _ = before.rotated();
        assert_eq!(ShapeKind::I.spawn_grid(), before);
    }

    #[test]
    fn spawn_is_centered_by_integer_arithmetic() {
        // col = BOARD_WIDTH/2 - width/2
        assert_eq!(ActivePiece::spawn(ShapeKind::I).position().col(), 3);
        assert_eq!(ActivePiece::spawn(ShapeKind::O).position().col(), 4);
        assert_eq!(ActivePiece::spawn(ShapeKind::T).position().col(), 4);
        for kind in ALL_KINDS {
            assert_eq!(ActivePiece::spawn(kind).position().row(), 0);
        }
    }

    #[test]
    fn movement_helpers_shift_by_one() {
        let piece = ActivePiece::spawn(ShapeKind::T);
        assert_eq!(piece.left().position().col(), piece.position().col() - 1);
        assert_eq!(piece.right().position().col(), piece.position().col() + 1);
        assert_eq!(piece.down().position().row(), piece.position().row() + 1);
    }

    #[test]
    fn occupied_board_cells_apply_the_offset() {
        let piece = ActivePiece::spawn(ShapeKind::O);
        let cells: Vec<_> = piece.occupied_board_cells().collect();
        assert_eq!(cells, vec![(0, 4), (0, 5), (1, 4), (1, 5)]);
    }
}
