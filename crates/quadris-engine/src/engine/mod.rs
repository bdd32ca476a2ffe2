//! Game logic built on top of the core data structures.
//!
//! - [`GameState`] - The whole game: board, active piece, next piece, stats,
//!   pause and game-over flags, and every command that mutates them
//! - [`GameStats`] - Score, cleared lines, and the derived level and fall
//!   interval
//! - [`ShapeFeeder`] - The random shape stream
//!
//! # Game flow
//!
//! 1. Construct a [`GameState`] (optionally with a fixed seed)
//! 2. Feed it commands from input events and [`GameState::tick`] from a timer
//! 3. A piece that fails to move down locks immediately; full rows clear and
//!    the next piece spawns
//! 4. The game ends when a locking piece does not fit below the top edge
//!
//! # Example
//!
//! ```
//! use quadris_engine::GameState;
//!
//! let mut game = GameState::with_seed(42);
//! let _ = game.try_move_left();
//! let _ = game.try_rotate();
//! game.hard_drop();
//!
//! assert!(!game.is_game_over());
//! ```

pub use self::{game_state::*, game_stats::*, shape_feeder::*};

mod game_state;
mod game_stats;
mod shape_feeder;
