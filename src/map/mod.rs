mod cell;
mod error;
mod grid;
mod position;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use position::{Direction, Position};
