use std::time::{Duration, Instant};

use rand::Rng;

use crate::constants::GRAVITY_INTERVAL;
use crate::game::board::Board;
use crate::game::piece::{Piece, PieceKind};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Playing,
    GameOver,
}

/// One game session: the grid, the single active piece and the gravity
/// clock. Owned by the loop in `main` and mutated from one thread only.
pub struct Game {
    pub board: Board,
    pub piece: Piece,
    pub state: GameState,
    pub drop_timer: Instant,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            piece: Piece::new(random_kind()),
            state: GameState::Playing,
            drop_timer: Instant::now(),
        }
    }

    /// Try to shift the active piece by `(dx, dy)`. The move is committed,
    /// and reported as such, only when the target origin is collision-free;
    /// otherwise the piece is left exactly where it was.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        if self
            .board
            .collides(&self.piece.shape, self.piece.x + dx, self.piece.y + dy)
        {
            return false;
        }
        self.piece.x += dx;
        self.piece.y += dy;
        true
    }

    /// Turn the active piece a quarter-turn clockwise. The turn is rejected
    /// outright when the rotated matrix collides at the current origin;
    /// there is no kick search.
    pub fn try_rotate(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        let candidate = self.piece.rotated();
        if self.board.collides(&candidate, self.piece.x, self.piece.y) {
            return false;
        }
        self.piece.shape = candidate;
        true
    }

    /// Commit the active piece to the grid and bring in the next one. Either
    /// step can end the session: an overflowing placement or a blocked spawn
    /// means the stack has reached the top.
    pub fn lock_piece(&mut self) {
        if !self.board.place(&self.piece) {
            self.state = GameState::GameOver;
            return;
        }
        self.spawn_piece();
    }

    /// Put a uniformly random piece into play at the spawn origin. A spawn
    /// footprint that is already blocked ends the session on the spot.
    pub fn spawn_piece(&mut self) {
        let piece = Piece::new(random_kind());
        if self.board.collides(&piece.shape, piece.x, piece.y) {
            self.state = GameState::GameOver;
        }
        self.piece = piece;
    }

    /// Advance the gravity clock: once per interval the piece is forced one
    /// row down, and a piece that can no longer fall is locked in.
    pub fn update(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        let now = Instant::now();
        if now.duration_since(self.drop_timer) >= Duration::from_millis(GRAVITY_INTERVAL) {
            self.drop_timer = now;
            if !self.try_move(0, 1) {
                self.lock_piece();
            }
        }
    }
}

fn random_kind() -> PieceKind {
    let mut rng = rand::thread_rng();
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
    use crate::game::board::Cell;

    /// Fill board rows `top` and `top + 1` completely with O pieces.
    fn fill_two_rows(game: &mut Game, top: i32) {
        for x in (0..BOARD_WIDTH as i32).step_by(2) {
            let mut o = Piece::new(PieceKind::O);
            o.x = x;
            o.y = top;
            assert!(game.board.place(&o));
        }
    }

    #[test]
    fn a_clear_move_commits_the_exact_delta() {
        let mut game = Game::new();
        game.piece = Piece::new(PieceKind::T);
        let (x, y) = (game.piece.x, game.piece.y);

        assert!(game.try_move(1, 0));
        assert!(game.try_move(0, 1));
        assert_eq!((game.piece.x, game.piece.y), (x + 1, y + 1));
    }

    #[test]
    fn a_blocked_move_leaves_the_piece_untouched() {
        let mut game = Game::new();
        game.piece = Piece::new(PieceKind::O); // occupies columns 3..5

        for _ in 0..3 {
            assert!(game.try_move(-1, 0));
        }
        // Flush against the left wall now.
        assert!(!game.try_move(-1, 0));
        assert_eq!((game.piece.x, game.piece.y), (0, 0));
    }

    #[test]
    fn a_blocked_rotation_leaves_the_shape_untouched() {
        let mut game = Game::new();
        game.piece = Piece::new(PieceKind::I);

        // Rotating the bar upright would sweep through (5, 2); occupy it.
        let mut o = Piece::new(PieceKind::O);
        o.x = 4;
        o.y = 2;
        assert!(game.board.place(&o));

        assert!(!game.try_rotate());
        assert_eq!(game.piece.shape, PieceKind::I.shape());
    }

    #[test]
    fn rotation_commits_when_clear() {
        let mut game = Game::new();
        game.piece = Piece::new(PieceKind::T);

        assert!(game.try_rotate());
        assert_eq!(game.piece.shape, Piece::new(PieceKind::T).rotated());
    }

    #[test]
    fn locking_fills_the_grid_and_respawns() {
        let mut game = Game::new();
        let mut piece = Piece::new(PieceKind::I);
        piece.y = 18; // bar in matrix row 1 rests on the floor
        game.piece = piece;

        game.lock_piece();

        for x in 3..=6 {
            assert_eq!(game.board.cell(x, BOARD_HEIGHT - 1), Cell::Filled(PieceKind::I));
        }
        assert_eq!(game.state, GameState::Playing);
        assert_eq!((game.piece.x, game.piece.y), (3, 0));
    }

    #[test]
    fn a_blocked_spawn_ends_the_session_without_touching_the_grid() {
        let mut game = Game::new();
        fill_two_rows(&mut game, 0);
        let before = game.board.clone();

        game.spawn_piece();

        assert_eq!(game.state, GameState::GameOver);
        assert_eq!(game.board, before);
    }

    #[test]
    fn no_moves_apply_after_game_over() {
        let mut game = Game::new();
        game.state = GameState::GameOver;
        let (x, y) = (game.piece.x, game.piece.y);

        assert!(!game.try_move(0, 1));
        assert!(!game.try_rotate());
        assert_eq!((game.piece.x, game.piece.y), (x, y));
    }
}
