//! Core types: players, dice, moves, RNG, configuration.
//!
//! This module contains the building blocks shared by the board, the rules,
//! the turn state machine and the AI.

pub mod player;
pub mod rng;
pub mod dice;
pub mod moves;
pub mod config;

pub use player::{Player, PlayerMap, PIECES_PER_PLAYER, POINT_COUNT};
pub use rng::{GameRng, GameRngState};
pub use dice::{Credits, Dice};
pub use moves::{Move, MoveRecord, Source, Target};
pub use config::GameConfig;
