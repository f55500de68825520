use std::collections::HashSet;
use std::rc::Rc;

use thiserror::Error;

use super::node::Node;
use crate::board::Board;
use crate::heuristic::Heuristic;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SolverError {
    #[error("open set exhausted after {iterations} iterations without reaching the goal")]
    OpenSetExhausted {
        iterations: usize,
        /// The expanded board that came closest to the goal, with its
        /// heuristic value.
        best_board: Board,
        best_h: u32,
    },

    #[error("iteration limit of {limit} reached before the goal")]
    IterationLimit {
        limit: usize,
        best_board: Board,
        best_h: u32,
    },
}

/// A successful search outcome.
pub struct Solution {
    /// The goal node; the full move sequence hangs off its predecessor links.
    pub node: Rc<Node>,
    /// Path cost of the solution, i.e. the goal node's move count. The f-cost
    /// of the goal equals its g-cost because the heuristic vanishes there.
    pub cost: u32,
    /// How many nodes the search expanded before reaching the goal.
    pub iterations: usize,
}

impl Solution {
    /// The solution path in start -> ... -> goal order.
    pub fn path(&self) -> Vec<Board> {
        let mut boards: Vec<Board> = Node::path_to_root(&self.node)
            .iter()
            .map(|node| *node.board())
            .collect();
        boards.reverse();
        boards
    }
}

/// Best-first search over board states.
///
/// One instance runs one session: it exclusively owns its open and closed
/// collections and holds the goal board and heuristic choice for the whole
/// run. [Solver::process] consumes the instance.
pub struct Solver {
    goal: Board,
    heuristic: Heuristic,
    iteration_limit: Option<usize>,
    // The frontier, kept as a plain list that is re-sorted by (f, h) each
    // iteration. The sort is stable, so nodes with equal costs are expanded
    // in insertion order.
    open: Vec<Rc<Node>>,
    // Boards that have been expanded. A board in here is never put back on
    // the frontier, even if a cheaper path to it turns up later.
    closed: HashSet<Board>,
}

impl Solver {
    pub fn new(start: Rc<Node>, goal: Board, heuristic: Heuristic) -> Self {
        Solver {
            goal,
            heuristic,
            iteration_limit: None,
            open: vec![start],
            closed: HashSet::new(),
        }
    }

    /// A session that gives up with [SolverError::IterationLimit] after
    /// expanding `limit` nodes without reaching the goal.
    pub fn with_iteration_limit(
        start: Rc<Node>,
        goal: Board,
        heuristic: Heuristic,
        limit: usize,
    ) -> Self {
        Solver {
            iteration_limit: Some(limit),
            ..Self::new(start, goal, heuristic)
        }
    }

    fn h_cost(&self, node: &Node) -> u32 {
        self.heuristic.evaluate(node.board(), &self.goal)
    }

    fn f_cost(&self, node: &Node) -> u32 {
        node.g_cost() + self.h_cost(node)
    }

    /// Runs the search to its terminal outcome: the goal was reached, the
    /// whole reachable state space was expanded, or the iteration limit was
    /// hit. Both failures carry the closest approach to the goal seen so far.
    pub fn process(mut self) -> Result<Solution, SolverError> {
        let mut iterations = 0;
        // The open set starts out holding exactly the root.
        let mut best = (*self.open[0].board(), self.h_cost(&self.open[0]));

        loop {
            self.sort_open();
            if self.open.is_empty() {
                return Err(SolverError::OpenSetExhausted {
                    iterations,
                    best_board: best.0,
                    best_h: best.1,
                });
            }
            let current = self.open.remove(0);
            self.closed.insert(*current.board());

            let h = self.h_cost(&current);
            if h < best.1 {
                best = (*current.board(), h);
            }

            if *current.board() == self.goal {
                return Ok(Solution {
                    cost: self.f_cost(&current),
                    iterations,
                    node: current,
                });
            }

            if let Some(limit) = self.iteration_limit {
                if iterations >= limit {
                    return Err(SolverError::IterationLimit {
                        limit,
                        best_board: best.0,
                        best_h: best.1,
                    });
                }
            }

            for child in Node::expand(&current, &self.goal) {
                if self.closed.contains(child.board()) {
                    continue;
                }
                if self.open.iter().any(|node| node.board() == child.board()) {
                    continue;
                }
                self.open.push(child);
            }
            iterations += 1;
        }
    }

    fn sort_open(&mut self) {
        let goal = self.goal;
        let heuristic = self.heuristic;
        self.open.sort_by_key(|node| {
            let h = heuristic.evaluate(node.board(), &goal);
            (node.g_cost() + h, h)
        });
    }
}
