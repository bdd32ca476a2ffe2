pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece does not fit at the requested position")]
pub struct InvalidPlacementError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece locked above the top of the board")]
pub struct TopOutError;
