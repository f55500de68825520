mod node;
mod solver;

pub use node::Node;
pub use solver::{Solution, Solver, SolverError};

use crate::board::Board;
use crate::heuristic::Heuristic;

/// Runs a full uncapped search session from `start` to `goal` with the given
/// heuristic.
pub fn solve(start: Board, goal: Board, heuristic: Heuristic) -> Result<Solution, SolverError> {
    Solver::new(Node::root(start), goal, heuristic).process()
}
