//! Terminal falling-block puzzle game.
//!
//! The playable binary lives in `main.rs`; everything it drives is exposed
//! here so the game logic can be exercised without a terminal attached.

pub mod constants;
pub mod game;
pub mod input;
pub mod ui;
