pub mod action;
pub mod board;
pub mod cell;
pub mod consts;
pub mod errors;
pub mod notation;
pub mod position;

pub mod prelude {
    pub use super::action::Action;
    pub use super::board::{Board, EmptyCells, Rays, Status};
    pub use super::cell::Cell;
    pub use super::consts::*;
    pub use super::errors::EngineError;
    pub use super::notation::{BoardFile, MoveString};
    pub use super::position::{Offset, Position, DIRECTIONS};
}
