//! # tavla
//!
//! A Tavla (backgammon) engine: board model, move legality, the turn state
//! machine, and AI opponents up to a dice-averaging minimax search.
//!
//! ## Design Principles
//!
//! 1. **Queries, not errors**: Legality is a query. Illegal moves and
//!    out-of-phase commands return `false`/`None` and change nothing.
//!
//! 2. **Value semantics**: `Board` is a fixed 28-slot array, cheap to clone.
//!    Search branches work on copies, never on the live game.
//!
//! 3. **Injected randomness**: Dice and AI choices draw from a seeded
//!    `GameRng`, so sessions and matches replay exactly.
//!
//! ## Modules
//!
//! - `core`: Players, dice, moves, RNG, configuration
//! - `board`: Slots, the board model, piece accounting, text rendering
//! - `rules`: Legal move generation and game outcome
//! - `eval`: Static position evaluator
//! - `game`: Turn state machine, statistics, snapshots, self-play
//! - `ai`: Random, greedy, mixed and minimax strategies
//! - `error`: Errors at the restore and validation boundaries
//!
//! ## Example
//!
//! ```
//! use tavla::{Game, GameConfig, Strategy};
//!
//! let mut game = Game::new(GameConfig::new().with_seed(7));
//! let mut ai = Strategy::greedy();
//!
//! let played = game.play_turn(&mut ai);
//! assert!(played.len() <= 4);
//! assert!(game.board().validate().is_ok());
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod eval;
pub mod game;
pub mod ai;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap, PIECES_PER_PLAYER, POINT_COUNT,
    GameRng, GameRngState,
    Credits, Dice,
    Move, MoveRecord, Source, Target,
    GameConfig,
};

pub use crate::board::{Board, PieceTally, Slot, SLOT_COUNT};

pub use crate::rules::{can_move, legal_moves, outcome, Outcome};

pub use crate::eval::{evaluate, evaluate_with, EvalWeights};

pub use crate::game::{
    Game, GameStats, GameSnapshot, GameSummary, Phase,
    MatchConfig, MatchResult, play_match,
};

pub use crate::ai::{
    AiPlayer, Difficulty, MinimaxSearch, SearchConfig, SearchStats, Strategy,
    greedy_score, WIN_SCORE,
};

pub use crate::error::{BoardError, SnapshotError};
