mod board;
mod generator;
mod heuristic;
mod moves;
mod solver;

pub use board::{Board, BoardError};
pub use generator::{generate, scramble};
pub use heuristic::{manhattan_sum, out_of_position_sum, Heuristic};
pub use moves::{apply_move, legal_moves, ordered_moves, Move, MoveError};
pub use solver::{solve, Node, Solution, Solver, SolverError};
