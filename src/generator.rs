use rand::seq::SliceRandom;

use crate::board::{Board, BLANK, NUM_TILES};
use crate::moves::{apply_move, legal_moves, Move};

/// Generates a uniformly random board that can reach [Board::goal] through
/// legal moves.
pub fn generate() -> Board {
    let mut rng = rand::thread_rng();
    let mut tiles: [u8; NUM_TILES] = std::array::from_fn(|i| i as u8);
    loop {
        tiles.shuffle(&mut rng);
        if is_solvable(&tiles) {
            return Board::new(tiles);
        }
    }
}

/// Walks `steps` random legal moves away from `board`, never immediately
/// undoing the previous move. The result is at most `steps` moves from
/// `board`.
pub fn scramble(board: &Board, steps: usize) -> Board {
    let mut rng = rand::thread_rng();
    let mut current = *board;
    let mut last: Option<Move> = None;
    for _ in 0..steps {
        let candidates: Vec<Move> = legal_moves(&current)
            .into_iter()
            .filter(|&mv| last != Some(mv.opposite()))
            .collect();
        // There are always at least two legal moves, so excluding the
        // backtracking one leaves at least one candidate.
        let mv = *candidates.choose(&mut rng).unwrap();
        current = apply_move(&current, mv).unwrap();
        last = Some(mv);
    }
    current
}

// A permutation of an odd-width grid reaches the goal iff its inversion count
// is even. The goal layout 0..9 has zero inversions.
fn is_solvable(tiles: &[u8; NUM_TILES]) -> bool {
    count_inversions(tiles) % 2 == 0
}

fn count_inversions(tiles: &[u8; NUM_TILES]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != BLANK)
        .map(|(i, &tile)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&later| later != BLANK && later < tile)
                .count()
        })
        .sum()
}
