pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// Side length of a piece's occupancy matrix.
pub const PIECE_SIZE: usize = 4;

/// Column where a new piece enters the board, centered for a 4-wide matrix.
pub const SPAWN_X: i32 = (BOARD_WIDTH as i32 - PIECE_SIZE as i32) / 2;

// Timing (in milliseconds)
pub const GRAVITY_INTERVAL: u64 = 500; // forced one-row drop
pub const FRAME_POLL: u64 = 16; // input poll timeout per frame, ~60 fps
