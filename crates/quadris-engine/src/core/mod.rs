//! Core data structures: shape definitions, the active piece, and the board.

pub use self::{board::*, shape::*};

mod board;
mod shape;
