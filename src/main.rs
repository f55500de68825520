use eightpuzzle::{Board, Heuristic, Node, Solver};

fn main() {
    let start = Board::new([7, 2, 4, 5, 0, 6, 8, 3, 1]);
    println!("Start board:\n{}", start);
    let solver = Solver::with_iteration_limit(Node::root(start), Board::goal(), Heuristic::Manhattan, 100);
    match solver.process() {
        Ok(solution) => println!(
            "Goal reached after {} iterations, path cost {}",
            solution.iterations, solution.cost
        ),
        Err(err) => println!("Search gave up: {}", err),
    }
}
