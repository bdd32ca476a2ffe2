use crate::TopOutError;

use super::shape::{ActivePiece, ShapeKind};

/// Number of columns in the playfield.
pub const BOARD_WIDTH: usize = 10;
/// Number of rows in the playfield. Row 0 is the top.
pub const BOARD_HEIGHT: usize = 20;

/// A single cell of the board.
///
/// An occupied cell always carries the kind of the piece that produced it,
/// which is what the presentation layer colors it by. `Ghost` is only ever
/// written into render copies of the board, never into the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Block {
    /// Empty cell.
    #[default]
    Empty,
    /// Landing preview of the active piece.
    Ghost,
    /// Locked cell of a specific shape.
    Piece(ShapeKind),
}

impl Block {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Block::Empty
    }
}

/// The playfield grid of locked cells.
///
/// The board knows nothing about gravity or scoring; it answers validity
/// queries and applies lock and line-clear mutations when told to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [[Block; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        rows: [[Block::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
    };

    /// Returns an iterator over the rows, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Block; BOARD_WIDTH]> {
        self.rows.iter()
    }

    #[must_use]
    pub fn block_at(&self, row: usize, col: usize) -> Block {
        self.rows[row][col]
    }

    /// Sets a single cell. Mainly useful for constructing board states in
    /// tests and tools; gameplay mutation goes through [`Self::lock_piece`].
    pub fn fill_block_at(&mut self, row: usize, col: usize, block: Block) {
        self.rows[row][col] = block;
    }

    /// The single legality predicate shared by movement, rotation, drops, and
    /// ghost projection.
    ///
    /// A piece placement is invalid if any occupied cell maps to a column
    /// outside the board, to a row at or below the floor, or onto an occupied
    /// cell. Rows above the top edge (negative) are legal; they are only
    /// rejected later, at lock time.
    #[must_use]
    pub fn is_valid(&self, piece: &ActivePiece) -> bool {
        piece.occupied_board_cells().all(|(row, col)| {
            let Ok(col) = usize::try_from(col) else {
                return false;
            };
            if col >= BOARD_WIDTH {
                return false;
            }
            match usize::try_from(row) {
                Ok(row) => row < BOARD_HEIGHT && self.rows[row][col].is_empty(),
                // Above the top edge: never checked against the board.
                Err(_) => true,
            }
        })
    }

    /// Writes the piece's cells into the board, top row first.
    ///
    /// The first cell that resolves above row 0 aborts the lock: the piece
    /// could not fully enter the board and the game is over. Cells written
    /// before the abort are left in place, matching the write order.
    ///
    /// The piece is expected to be at a position accepted by
    /// [`Self::is_valid`]; anything else is a caller bug and panics on the
    /// column index.
    #[expect(clippy::cast_sign_loss)]
    pub fn lock_piece(&mut self, piece: &ActivePiece) -> Result<(), TopOutError> {
        for (row, col) in piece.occupied_board_cells() {
            let Ok(row) = usize::try_from(row) else {
                return Err(TopOutError);
            };
            self.rows[row][col as usize] = Block::Piece(piece.kind());
        }
        Ok(())
    }

    /// Overlays the piece onto the board with the given block, skipping cells
    /// that fall outside the grid.
    ///
    /// Used by the presentation layer to paint the falling piece and its
    /// ghost onto a render copy of the board.
    pub fn fill_piece_as(&mut self, piece: &ActivePiece, block: Block) {
        for (row, col) in piece.occupied_board_cells() {
            if let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col))
                && row < BOARD_HEIGHT
                && col < BOARD_WIDTH
            {
                self.rows[row][col] = block;
            }
        }
    }

    /// Removes every full row, keeping the relative order of the remaining
    /// rows, and refills the top with that many empty rows.
    ///
    /// # Returns
    ///
    /// The number of rows removed.
    pub fn clear_lines(&mut self) -> usize {
        let mut count = 0;
        for row in (0..BOARD_HEIGHT).rev() {
            if self.rows[row].iter().all(|block| !block.is_empty()) {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows[row + count] = self.rows[row];
            }
        }
        self.rows[..count].fill([Block::Empty; BOARD_WIDTH]);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, row: usize, kind: ShapeKind) {
        for col in 0..BOARD_WIDTH {
            board.rows[row][col] = Block::Piece(kind);
        }
    }

    fn occupied_cells(board: &Board) -> usize {
        board
            .rows()
            .flat_map(|row| row.iter())
            .filter(|block| !block.is_empty())
            .count()
    }

    #[test]
    fn empty_board_accepts_spawned_pieces() {
        let board = Board::EMPTY;
        assert!(board.is_valid(&ActivePiece::spawn(ShapeKind::I)));
        assert!(board.is_valid(&ActivePiece::spawn(ShapeKind::O)));
    }

    #[test]
    fn validity_rejects_columns_outside_the_board() {
        let board = Board::EMPTY;
        let mut piece = ActivePiece::spawn(ShapeKind::O);
        while piece.position().col() > -1 {
            piece = piece.left();
        }
        assert!(!board.is_valid(&piece));

        let mut piece = ActivePiece::spawn(ShapeKind::O);
        while piece.occupied_board_cells().all(|(_, col)| col < 10) {
            piece = piece.right();
        }
        assert!(!board.is_valid(&piece));
    }

    #[test]
    fn validity_rejects_rows_below_the_floor() {
        let board = Board::EMPTY;
        let mut piece = ActivePiece::spawn(ShapeKind::O);
        // O-shape is two rows tall; its last valid top row is 18.
        for _ in 0..18 {
            piece = piece.down();
            assert!(board.is_valid(&piece));
        }
        assert!(!board.is_valid(&piece.down()));
    }

    #[test]
    fn validity_permits_negative_rows() {
        let board = Board::EMPTY;
        let mut piece = ActivePiece::spawn(ShapeKind::I).rotated();
        for _ in 0..3 {
            piece = piece.up();
            assert!(board.is_valid(&piece));
        }
    }

    #[test]
    fn validity_rejects_overlap_with_locked_cells() {
        let mut board = Board::EMPTY;
        let piece = ActivePiece::spawn(ShapeKind::O);
        board.rows[1][4] = Block::Piece(ShapeKind::T);
        assert!(!board.is_valid(&piece));
        assert!(board.is_valid(&piece.right()));
    }

    #[test]
    fn lock_writes_the_piece_kind() {
        let mut board = Board::EMPTY;
        let piece = ActivePiece::spawn(ShapeKind::O);
        board.lock_piece(&piece).unwrap();
        assert_eq!(board.block_at(0, 4), Block::Piece(ShapeKind::O));
        assert_eq!(board.block_at(0, 5), Block::Piece(ShapeKind::O));
        assert_eq!(board.block_at(1, 4), Block::Piece(ShapeKind::O));
        assert_eq!(board.block_at(1, 5), Block::Piece(ShapeKind::O));
        assert_eq!(occupied_cells(&board), 4);
    }

    #[test]
    fn lock_above_the_board_reports_top_out_without_writes() {
        let mut board = Board::EMPTY;
        let above = ActivePiece::spawn(ShapeKind::O).up();
        assert!(board.lock_piece(&above).is_err());
        // Scanning top row first means the negative row aborts before any
        // cell lands on the board.
        assert_eq!(occupied_cells(&board), 0);
    }

    #[test]
    fn clear_lines_removes_a_single_full_row() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, 19, ShapeKind::I);
        board.rows[18][3] = Block::Piece(ShapeKind::T);

        assert_eq!(board.clear_lines(), 1);
        // The surviving cell shifted down one row.
        assert_eq!(board.block_at(19, 3), Block::Piece(ShapeKind::T));
        assert_eq!(occupied_cells(&board), 1);
    }

    #[test]
    fn clear_lines_keeps_relative_order_of_survivors() {
        let mut board = Board::EMPTY;
        // Full rows at 16 and 18, markers at 15 and 17.
        fill_row(&mut board, 16, ShapeKind::I);
        fill_row(&mut board, 18, ShapeKind::I);
        board.rows[15][0] = Block::Piece(ShapeKind::S);
        board.rows[17][0] = Block::Piece(ShapeKind::Z);
        board.rows[19][0] = Block::Piece(ShapeKind::L);

        assert_eq!(board.clear_lines(), 2);
        assert_eq!(board.block_at(17, 0), Block::Piece(ShapeKind::S));
        assert_eq!(board.block_at(18, 0), Block::Piece(ShapeKind::Z));
        assert_eq!(board.block_at(19, 0), Block::Piece(ShapeKind::L));
        assert_eq!(occupied_cells(&board), 3);
    }

    #[test]
    fn clear_lines_prepends_empty_rows_at_the_top() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, 0, ShapeKind::I);
        fill_row(&mut board, 19, ShapeKind::I);

        assert_eq!(board.clear_lines(), 2);
        assert_eq!(occupied_cells(&board), 0);
        assert_eq!(board.rows().count(), BOARD_HEIGHT);
    }

    #[test]
    fn clear_lines_ignores_partial_rows() {
        let mut board = Board::EMPTY;
        for col in 0..BOARD_WIDTH - 1 {
            board.rows[19][col] = Block::Piece(ShapeKind::I);
        }
        assert_eq!(board.clear_lines(), 0);
        assert_eq!(occupied_cells(&board), BOARD_WIDTH - 1);
    }

    #[test]
    fn fill_piece_as_skips_cells_above_the_board() {
        let mut board = Board::EMPTY;
        let straddling = ActivePiece::spawn(ShapeKind::O).up();
        board.fill_piece_as(&straddling, Block::Ghost);
        // Only the bottom half of the piece is on the board.
        assert_eq!(board.block_at(0, 4), Block::Ghost);
        assert_eq!(board.block_at(0, 5), Block::Ghost);
        assert_eq!(occupied_cells(&board), 2);
    }
}
