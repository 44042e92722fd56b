//! Board module - the grid of locked cells plus scoring.
//!
//! Row-major flat storage: cell `(x, y)` lives at `y * cols + x`, with 0 for
//! empty and 1..=4 for a locked color. The board owns collision testing,
//! piece locking, completed-row compaction, and the score/level counters the
//! clears drive.

use crate::core::piece::Piece;
use crate::types::EMPTY_CELL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
    score: u32,
    level: u32,
}

impl Board {
    /// Create an empty board. Dimensions are fixed for the board's lifetime;
    /// a zero dimension is a construction bug and panics here rather than
    /// surfacing later as index arithmetic.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be non-zero");
        Self {
            rows,
            cols,
            cells: vec![EMPTY_CELL; rows * cols],
            score: 0,
            level: 1,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cumulative score: one point per cleared row.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Difficulty tier: starts at 1 and increments every 10 score points.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Row-major view of the grid.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows {
            return None;
        }
        Some(y as usize * self.cols + x as usize)
    }

    /// Cell value at `(x, y)`, or `None` out of bounds.
    pub fn get(&self, x: i16, y: i16) -> Option<u8> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Write a cell value. Returns false (and writes nothing) out of bounds.
    pub fn set(&mut self, x: i16, y: i16, value: u8) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(v) if v != EMPTY_CELL)
    }

    /// True if any block of `piece` is past the bottom, outside a side wall,
    /// or on a locked cell. Rows above the top edge are implicitly free, so a
    /// freshly spawned piece may overlap the top border without colliding.
    pub fn collides(&self, piece: &Piece) -> bool {
        for (x, y) in piece.blocks() {
            if y >= self.rows as i16 || x < 0 || x >= self.cols as i16 {
                return true;
            }
            if y < 0 {
                continue;
            }
            if self.cells[y as usize * self.cols + x as usize] != EMPTY_CELL {
                return true;
            }
        }
        false
    }

    /// Commit a piece's cells into the grid. Blocks that fall outside the
    /// grid are dropped silently; callers are expected to have passed a
    /// collision check first.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.blocks() {
            self.set(x, y, piece.color);
        }
    }

    fn is_row_completed(&self, y: usize) -> bool {
        let start = y * self.cols;
        self.cells[start..start + self.cols]
            .iter()
            .all(|&cell| cell != EMPTY_CELL)
    }

    /// Remove row `y`: rows above shift down one, an empty row appears at the
    /// top.
    fn remove_row(&mut self, y: usize) {
        for row in (1..=y).rev() {
            let src = (row - 1) * self.cols;
            let dst = row * self.cols;
            self.cells.copy_within(src..src + self.cols, dst);
        }
        self.cells[..self.cols].fill(EMPTY_CELL);
    }

    fn bump_score(&mut self) {
        self.score += 1;
        if self.score % 10 == 0 {
            self.level += 1;
        }
    }

    /// Clear every completed row, scoring one point each.
    ///
    /// Each pass scans bottom-to-top over rows `rows-1 ..= 1`; row 0 is never
    /// eligible for clearing. Removing a row during the scan shifts the rows
    /// above it past indices already visited, so passes repeat until one
    /// clears nothing. Returns the total number of rows cleared.
    pub fn clear_completed_rows(&mut self) -> u32 {
        let mut total = 0;
        loop {
            let mut cleared_this_pass = 0;
            for y in (1..self.rows).rev() {
                if self.is_row_completed(y) {
                    self.remove_row(y);
                    self.bump_score();
                    cleared_this_pass += 1;
                }
            }
            if cleared_this_pass == 0 {
                break;
            }
            total += cleared_this_pass;
        }
        total
    }

    /// Empty the grid and reset score to 0, level to 1.
    pub fn reset(&mut self) {
        self.cells.fill(EMPTY_CELL);
        self.score = 0;
        self.level = 1;
    }

    #[cfg(test)]
    pub fn fill_row(&mut self, y: usize, color: u8) {
        let start = y * self.cols;
        self.cells[start..start + self.cols].fill(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    fn single_block(x: i16, y: i16) -> Piece {
        // O piece occupies offsets 1,2,5,6: cells (x+1..x+2, y..y+1).
        Piece::new(ShapeKind::O, 1, x, y)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(19, 15);
        assert_eq!(board.rows(), 19);
        assert_eq!(board.cols(), 15);
        assert!(board.cells().iter().all(|&c| c == EMPTY_CELL));
        assert_eq!(board.score(), 0);
        assert_eq!(board.level(), 1);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_dimension_panics() {
        let _ = Board::new(0, 10);
    }

    #[test]
    fn test_collides_side_walls_and_floor() {
        let board = Board::new(19, 15);

        // O blocks span columns x+1..=x+2 and rows y..=y+1.
        assert!(!board.collides(&single_block(0, 0)));
        assert!(board.collides(&single_block(-2, 0)), "left wall");
        assert!(board.collides(&single_block(13, 0)), "right wall");
        assert!(board.collides(&single_block(0, 18)), "floor");
        assert!(!board.collides(&single_block(0, 17)));
    }

    #[test]
    fn test_collides_on_locked_cell() {
        let mut board = Board::new(19, 15);
        board.set(5, 10, 3);
        assert!(board.collides(&single_block(4, 9)));
        assert!(!board.collides(&single_block(4, 7)));
    }

    #[test]
    fn test_rows_above_top_are_free() {
        let board = Board::new(19, 15);
        // Anchor above the top edge: blocks land on rows -3 and -2.
        assert!(!board.collides(&single_block(0, -3)));
    }

    #[test]
    fn test_lock_writes_piece_color() {
        let mut board = Board::new(19, 15);
        let piece = Piece::new(ShapeKind::O, 4, 3, 10);
        board.lock(&piece);
        assert_eq!(board.get(4, 10), Some(4));
        assert_eq!(board.get(5, 10), Some(4));
        assert_eq!(board.get(4, 11), Some(4));
        assert_eq!(board.get(5, 11), Some(4));
        assert_eq!(board.get(3, 10), Some(EMPTY_CELL));
    }

    #[test]
    fn test_lock_out_of_range_is_silent() {
        let mut board = Board::new(19, 15);
        let piece = Piece::new(ShapeKind::O, 2, -1, -1);
        board.lock(&piece);
        // Only the in-range block (0, 0) lands.
        assert_eq!(board.get(0, 0), Some(2));
        assert_eq!(board.cells().iter().filter(|&&c| c != EMPTY_CELL).count(), 1);
    }

    #[test]
    fn test_clear_noop_without_completed_rows() {
        let mut board = Board::new(19, 15);
        board.set(0, 18, 1);
        board.set(7, 12, 2);
        let before = board.clone();
        assert_eq!(board.clear_completed_rows(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_single_row_scores_and_shifts() {
        let mut board = Board::new(19, 15);
        board.fill_row(18, 1);
        board.set(3, 17, 2);

        assert_eq!(board.clear_completed_rows(), 1);
        assert_eq!(board.score(), 1);
        assert_eq!(board.level(), 1);
        // The partial row above shifted down.
        assert_eq!(board.get(3, 18), Some(2));
        assert_eq!(board.get(3, 17), Some(EMPTY_CELL));
    }

    #[test]
    fn test_clear_multiple_rows_in_one_call() {
        let mut board = Board::new(19, 15);
        for y in 15..19 {
            board.fill_row(y, 1);
        }
        assert_eq!(board.clear_completed_rows(), 4);
        assert_eq!(board.score(), 4);
        assert!(board.cells().iter().all(|&c| c == EMPTY_CELL));
    }

    #[test]
    fn test_clear_separated_rows() {
        let mut board = Board::new(19, 15);
        board.fill_row(18, 1);
        board.fill_row(16, 2);
        board.set(0, 17, 3);

        assert_eq!(board.clear_completed_rows(), 2);
        assert_eq!(board.score(), 2);
        // The lone block between the two cleared rows ends up on the floor.
        assert_eq!(board.get(0, 18), Some(3));
    }

    #[test]
    fn test_row_zero_never_clears() {
        let mut board = Board::new(19, 15);
        board.fill_row(0, 1);
        assert_eq!(board.clear_completed_rows(), 0);
        assert_eq!(board.score(), 0);
        assert!((0..board.cols()).all(|x| board.is_occupied(x as i16, 0)));
    }

    #[test]
    fn test_row_zero_content_clears_after_shifting_down() {
        let mut board = Board::new(19, 15);
        board.fill_row(0, 1);
        board.fill_row(18, 2);
        // Clearing the bottom row shifts the full top row to row 1, where the
        // descending scan reaches it later in the same pass.
        assert_eq!(board.clear_completed_rows(), 2);
        assert!(board.cells().iter().all(|&c| c == EMPTY_CELL));
    }

    #[test]
    fn test_level_bumps_every_ten_points() {
        let mut board = Board::new(19, 15);
        for i in 0..9 {
            board.fill_row(18, 1);
            board.clear_completed_rows();
            assert_eq!(board.score(), i + 1);
            assert_eq!(board.level(), 1);
        }
        board.fill_row(18, 1);
        board.clear_completed_rows();
        assert_eq!(board.score(), 10);
        assert_eq!(board.level(), 2);
    }

    #[test]
    fn test_level_matches_score_formula() {
        let mut board = Board::new(19, 15);
        for _ in 0..25 {
            board.fill_row(18, 1);
            board.clear_completed_rows();
            assert_eq!(board.level(), 1 + board.score() / 10);
        }
    }

    #[test]
    fn test_minimal_board_pins_row_zero_exclusion() {
        // On a 1-row board every row is row 0, so nothing ever clears.
        let mut board = Board::new(1, 4);
        board.fill_row(0, 1);
        assert_eq!(board.clear_completed_rows(), 0);
        assert_eq!(board.score(), 0);
    }

    #[test]
    fn test_minimal_clearing_board() {
        // Smallest board whose bottom row can clear: 2 rows, 4 columns.
        let mut board = Board::new(2, 4);
        for x in 0..3 {
            board.set(x, 1, 1);
        }
        assert_eq!(board.clear_completed_rows(), 0, "row has a gap");

        board.set(3, 1, 2);
        assert_eq!(board.clear_completed_rows(), 1);
        assert_eq!(board.score(), 1);
        assert_eq!(board.level(), 1);
        assert!(board.cells().iter().all(|&c| c == EMPTY_CELL));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut board = Board::new(19, 15);
        board.fill_row(18, 1);
        board.clear_completed_rows();
        board.set(2, 2, 3);

        board.reset();
        assert!(board.cells().iter().all(|&c| c == EMPTY_CELL));
        assert_eq!(board.score(), 0);
        assert_eq!(board.level(), 1);
    }
}
