//! Evaluation module for Gomoku positions
//!
//! Two heuristics behind one [`Evaluator`]:
//! - Line potential: run-length table over every stone
//! - Threat/priority: winning rows, pairs and a blocking priority

pub mod heuristic;
pub mod patterns;

pub use heuristic::{
    count_potential_winning_rows, count_threats, extends_opponent_line, line_potential,
    threat_priority, Evaluator,
};
pub use patterns::{LineWeights, ThreatWeights};
