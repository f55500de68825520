use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::board::Board;
use crate::moves::ordered_moves;

/// A vertex of the search tree: a board together with the number of moves it
/// took to get there and a link back to the board it was reached from.
pub struct Node {
    board: Board,
    g_cost: u32,
    previous: Option<Rc<Node>>,
    // Strong links only run child -> parent, so a retained path keeps its
    // ancestors alive while dropped subtrees are reclaimed. The recorded
    // children are weak for that reason; holding them strongly would close a
    // reference cycle.
    children: RefCell<Vec<Weak<Node>>>,
}

impl Node {
    /// The root of a search tree: zero moves taken, no predecessor.
    pub fn root(board: Board) -> Rc<Self> {
        Rc::new(Node {
            board,
            g_cost: 0,
            previous: None,
            children: RefCell::new(Vec::new()),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves from the start board to this node.
    pub fn g_cost(&self) -> u32 {
        self.g_cost
    }

    pub fn previous(&self) -> Option<&Rc<Node>> {
        self.previous.as_ref()
    }

    /// The successors recorded by earlier [Node::expand] calls that are still
    /// alive.
    pub fn children(&self) -> Vec<Rc<Node>> {
        self.children
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect()
    }

    /// Materializes one successor of `node` per legal move, ordered by
    /// [ordered_moves](crate::moves::ordered_moves). Every child carries
    /// `g_cost + 1` and links back to `node`.
    ///
    /// Each call generates and records a fresh batch; calling it twice
    /// records the successors twice.
    pub fn expand(node: &Rc<Node>, goal: &Board) -> Vec<Rc<Node>> {
        let successors: Vec<Rc<Node>> = ordered_moves(&node.board, goal)
            .into_iter()
            .map(|(_, board)| {
                Rc::new(Node {
                    board,
                    g_cost: node.g_cost + 1,
                    previous: Some(Rc::clone(node)),
                    children: RefCell::new(Vec::new()),
                })
            })
            .collect();
        node.children
            .borrow_mut()
            .extend(successors.iter().map(Rc::downgrade));
        successors
    }

    /// The chain of nodes from `node` back to the root, inclusive, in
    /// node -> ... -> root order.
    pub fn path_to_root(node: &Rc<Node>) -> Vec<Rc<Node>> {
        let mut path = vec![Rc::clone(node)];
        let mut current = Rc::clone(node);
        loop {
            let previous = match current.previous {
                Some(ref previous) => Rc::clone(previous),
                None => break,
            };
            path.push(Rc::clone(&previous));
            current = previous;
        }
        path
    }
}

// Two nodes are the same search state iff their boards match, regardless of
// the path that reached them.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("board", &self.board)
            .field("g_cost", &self.g_cost)
            .finish()
    }
}
