//! Board model: slots, piece movement, bear-off eligibility, validation.
//!
//! The board is a fixed array of 28 slots (24 points plus a bar and a
//! borne-off tray per player). Every mutation goes through
//! [`Board::apply_move`]; the fifteen-pieces-per-player invariant is checked
//! on demand by [`Board::validate`].

pub mod slot;
pub mod model;
pub mod tally;
mod render;

pub use slot::Slot;
pub use model::{Board, SLOT_COUNT};
pub use tally::PieceTally;
