//! Static position evaluator.
//!
//! A fixed linear combination of board features, scored from one player's
//! perspective. The greedy AI does not use it; the minimax search scores
//! every leaf with it.

pub mod weights;
pub mod evaluator;

pub use weights::EvalWeights;
pub use evaluator::{evaluate, evaluate_with};
