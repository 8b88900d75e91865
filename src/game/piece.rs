use ratatui::style::Color;

use crate::constants::{PIECE_SIZE, SPAWN_X};

/// Occupancy matrix of one piece, row-major.
pub type Shape = [[bool; PIECE_SIZE]; PIECE_SIZE];

/// The seven canonical piece identities, each tied to a fixed shape and
/// display color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Canonical spawn orientation. Each shape sits in the top rows of its
    /// matrix so a fresh piece enters flush with the top of the board.
    pub fn shape(self) -> Shape {
        const O: bool = false;
        const X: bool = true;
        match self {
            PieceKind::I => [
                [O, O, O, O],
                [X, X, X, X],
                [O, O, O, O],
                [O, O, O, O],
            ],
            PieceKind::O => [
                [X, X, O, O],
                [X, X, O, O],
                [O, O, O, O],
                [O, O, O, O],
            ],
            PieceKind::T => [
                [O, X, O, O],
                [X, X, X, O],
                [O, O, O, O],
                [O, O, O, O],
            ],
            PieceKind::J => [
                [O, O, X, O],
                [X, X, X, O],
                [O, O, O, O],
                [O, O, O, O],
            ],
            PieceKind::L => [
                [X, O, O, O],
                [X, X, X, O],
                [O, O, O, O],
                [O, O, O, O],
            ],
            PieceKind::S => [
                [O, X, X, O],
                [X, X, O, O],
                [O, O, O, O],
                [O, O, O, O],
            ],
            PieceKind::Z => [
                [X, X, O, O],
                [O, X, X, O],
                [O, O, O, O],
                [O, O, O, O],
            ],
        }
    }

    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::T => Color::Magenta,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::LightYellow,
            PieceKind::S => Color::Green,
            PieceKind::Z => Color::Red,
        }
    }
}

/// The one active piece: a kind, its current occupancy matrix and the
/// board-relative origin of that matrix's top-left corner.
#[derive(Clone, Copy, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// A fresh piece of the given kind at the spawn origin.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: kind.shape(),
            x: SPAWN_X,
            y: 0,
        }
    }

    /// The occupancy matrix turned a quarter-turn clockwise: transpose, then
    /// reverse each row. The caller decides whether the turn is committed.
    pub fn rotated(&self) -> Shape {
        let mut rotated = [[false; PIECE_SIZE]; PIECE_SIZE];
        for i in 0..PIECE_SIZE {
            for j in 0..PIECE_SIZE {
                rotated[j][PIECE_SIZE - 1 - i] = self.shape[i][j];
            }
        }
        rotated
    }

    /// Board coordinates of every occupied cell at the current origin,
    /// recomputed on each call.
    pub fn blocks(&self) -> Vec<(i32, i32)> {
        let mut blocks = Vec::new();
        for (i, row) in self.shape.iter().enumerate() {
            for (j, &filled) in row.iter().enumerate() {
                if filled {
                    blocks.push((self.x + j as i32, self.y + i as i32));
                }
            }
        }
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            let cells = kind
                .shape()
                .iter()
                .flatten()
                .filter(|&&filled| filled)
                .count();
            assert_eq!(cells, 4, "{kind:?}");
        }
    }

    #[test]
    fn four_clockwise_turns_restore_the_shape() {
        for kind in PieceKind::ALL {
            let mut piece = Piece::new(kind);
            for _ in 0..4 {
                piece.shape = piece.rotated();
            }
            assert_eq!(piece.shape, kind.shape(), "{kind:?}");
        }
    }

    #[test]
    fn clockwise_turn_of_the_i_piece() {
        let mut piece = Piece::new(PieceKind::I);
        piece.shape = piece.rotated();

        // The horizontal bar in matrix row 1 becomes a vertical bar in
        // matrix column 2.
        let mut expected = [[false; PIECE_SIZE]; PIECE_SIZE];
        for row in &mut expected {
            row[2] = true;
        }
        assert_eq!(piece.shape, expected);
    }

    #[test]
    fn blocks_project_through_the_origin() {
        let mut piece = Piece::new(PieceKind::O);
        piece.x = 4;
        piece.y = 7;
        assert_eq!(piece.blocks(), vec![(4, 7), (5, 7), (4, 8), (5, 8)]);
    }

    #[test]
    fn pieces_spawn_centered_at_the_top() {
        for kind in PieceKind::ALL {
            let piece = Piece::new(kind);
            assert_eq!(piece.x, 3);
            assert_eq!(piece.y, 0);
        }
    }
}
