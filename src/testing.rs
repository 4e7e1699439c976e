//! Small grid problems shared by the unit tests.
//!
//! All grids are 5x5 with cell `id = x + 5 * y`, starting in cell 0.

use std::cell::{Cell, RefCell};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::lifecycle::StopHandle;
use crate::traits::{BidirectionalProblem, HeuristicProblem, Problem, TreeProblem};

pub(crate) const SIZE: usize = 5;

fn neighbours(id: usize, moves: &[(isize, isize)]) -> Vec<usize> {
    let (x, y) = ((id % SIZE) as isize, (id / SIZE) as isize);
    moves
        .iter()
        .map(|(dx, dy)| (x + dx, y + dy))
        .filter(|&(x, y)| x >= 0 && y >= 0 && x < SIZE as isize && y < SIZE as isize)
        .map(|(x, y)| x as usize + SIZE * y as usize)
        .collect()
}

const RIGHT_DOWN: [(isize, isize); 2] = [(1, 0), (0, 1)];
const LEFT_UP: [(isize, isize); 2] = [(-1, 0), (0, -1)];
const FOUR: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Records the order of expansions and optionally stops the search
/// after a number of expansions.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    order: RefCell<Vec<usize>>,
    expansions: Cell<usize>,
    stop_after: Option<usize>,
    handle: RefCell<Option<StopHandle>>,
}

impl Recorder {
    fn record(&self, id: usize) {
        if id == 0 {
            self.order.borrow_mut().clear();
        }
        self.order.borrow_mut().push(id);
        self.expansions.set(self.expansions.get() + 1);
        if Some(self.expansions.get()) == self.stop_after {
            if let Some(handle) = self.handle.borrow().as_ref() {
                handle.stop();
            }
        }
    }
}

/// Access to the recorder of a fixture.
pub(crate) trait Recorded {
    fn recorder(&self) -> &Recorder;

    fn order(&self) -> Vec<usize> {
        self.recorder().order.borrow().clone()
    }

    fn expansions(&self) -> usize {
        self.recorder().expansions.get()
    }

    /// Lets the problem stop its search.
    fn attach(&self, handle: StopHandle) {
        *self.recorder().handle.borrow_mut() = Some(handle);
    }
}

/// A grid with plain cell ids as states, moving right and down.
///
/// The depth of a cell is its distance from cell 0. Backwards,
/// the grid moves left and up.
#[derive(Debug, Default)]
pub(crate) struct Grid {
    start: Option<usize>,
    goal: Option<usize>,
    recorder: Recorder,
}

impl Grid {
    pub(crate) fn new(start: usize, goal: Option<usize>) -> Self {
        Grid {
            start: Some(start),
            goal,
            recorder: Recorder::default(),
        }
    }

    pub(crate) fn empty() -> Self {
        Grid::default()
    }

    pub(crate) fn stopping_after(mut self, expansions: usize) -> Self {
        self.recorder.stop_after = Some(expansions);
        self
    }
}

impl Recorded for Grid {
    fn recorder(&self) -> &Recorder {
        &self.recorder
    }
}

impl Problem for Grid {
    type State = usize;

    fn initial(&self) -> Option<usize> {
        self.start
    }

    fn is_goal(&self, state: &usize) -> bool {
        Some(*state) == self.goal
    }

    fn expand(&self, state: &usize) -> Vec<usize> {
        self.recorder.record(*state);
        neighbours(*state, &RIGHT_DOWN)
    }
}

impl TreeProblem for Grid {
    fn depth(&self, state: &usize) -> usize {
        state % SIZE + state / SIZE
    }
}

impl BidirectionalProblem for Grid {
    fn goal(&self) -> Option<usize> {
        self.goal
    }

    fn implode(&self, state: &usize) -> Vec<usize> {
        neighbours(*state, &LEFT_UP)
    }
}

/// A grid cell reached along a path. Identity is the cell id only.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) id: usize,
    pub(crate) depth: usize,
    pub(crate) cost: f64,
    parent: Option<Rc<Node>>,
}

impl Node {
    fn root(id: usize) -> Self {
        Node {
            id,
            depth: 0,
            cost: 0.0,
            parent: None,
        }
    }

    fn child(parent: &Node, id: usize) -> Self {
        let (x, y) = ((id % SIZE) as f64, (id / SIZE) as f64);
        Node {
            id,
            depth: parent.depth + 1,
            cost: parent.cost + 0.5 * (x - y).abs() + 1.0,
            parent: Some(Rc::new(parent.clone())),
        }
    }

    /// Cell ids from this node back to the root.
    pub(crate) fn path(&self) -> Vec<usize> {
        let mut path = vec![self.id];
        let mut current = self.parent.as_ref();
        while let Some(node) = current {
            path.push(node.id);
            current = node.parent.as_ref();
        }
        path
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A grid of path-carrying nodes. Entering cell `(x, y)` costs
/// `0.5 * |x - y| + 1`, the heuristic is the Manhattan distance
/// to the goal cell.
#[derive(Debug, Default)]
pub(crate) struct PathGrid {
    start: Option<usize>,
    goal: usize,
    four_way: bool,
    recorder: Recorder,
}

impl PathGrid {
    /// Moves right and down only.
    pub(crate) fn new(start: usize, goal: usize) -> Self {
        PathGrid {
            start: Some(start),
            goal,
            four_way: false,
            recorder: Recorder::default(),
        }
    }

    /// Moves right, down, left and up.
    pub(crate) fn four_way(start: usize, goal: usize) -> Self {
        PathGrid {
            four_way: true,
            ..PathGrid::new(start, goal)
        }
    }

    pub(crate) fn empty() -> Self {
        PathGrid::default()
    }

    pub(crate) fn stopping_after(mut self, expansions: usize) -> Self {
        self.recorder.stop_after = Some(expansions);
        self
    }
}

impl Recorded for PathGrid {
    fn recorder(&self) -> &Recorder {
        &self.recorder
    }
}

impl Problem for PathGrid {
    type State = Node;

    fn initial(&self) -> Option<Node> {
        self.start.map(Node::root)
    }

    fn is_goal(&self, state: &Node) -> bool {
        state.id == self.goal
    }

    fn expand(&self, state: &Node) -> Vec<Node> {
        self.recorder.record(state.id);
        let moves: &[(isize, isize)] = if self.four_way { &FOUR } else { &RIGHT_DOWN };
        neighbours(state.id, moves)
            .into_iter()
            .map(|id| Node::child(state, id))
            .collect()
    }
}

impl TreeProblem for PathGrid {
    fn depth(&self, state: &Node) -> usize {
        state.depth
    }
}

impl HeuristicProblem for PathGrid {
    fn g(&self, state: &Node) -> f64 {
        state.cost
    }

    fn h(&self, state: &Node) -> f64 {
        let dx = (self.goal % SIZE) as f64 - (state.id % SIZE) as f64;
        let dy = (self.goal / SIZE) as f64 - (state.id / SIZE) as f64;
        dx.abs() + dy.abs()
    }
}
