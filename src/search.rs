use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};

use crate::grid::{CellState, GridModel, Position};

/// Outcome of a single search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    InProgress,
    Found,
    Unreachable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Uninitialized,
    Running,
    Found,
    Unreachable,
}

/// Manhattan distance, admissible for 4-directional unit-cost movement.
pub fn heuristic(a: Position, b: Position) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierNode {
    priority: usize,
    seq: u64,
    position: Position,
}

// BinaryHeap is a max-heap, so the ordering is flipped to pop the lowest
// f-score first, with insertion order as a stable tie-break. The position
// comparison keeps Ord consistent with Eq.
impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Incremental A* over a [`GridModel`].
///
/// The search advances exactly one expansion per [`step`](Self::step) call
/// so a render loop can draw the grid between calls. Cells are annotated
/// through [`GridModel::set_cell_state`] as the frontier grows and nodes
/// are finalized.
///
/// The frontier may hold duplicate entries for one coordinate: an improving
/// relaxation pushes a fresh entry at the updated f-score and stale entries
/// are skipped at pop time, with the visited set as the authoritative
/// finalization guard.
pub struct IncrementalSearch {
    frontier: BinaryHeap<FrontierNode>,
    visited: HashSet<Position>,
    came_from: HashMap<Position, Position>,
    g_score: HashMap<Position, usize>,
    f_score: HashMap<Position, usize>,
    path: Vec<Position>,
    start: Position,
    end: Position,
    seq: u64,
    status: SearchStatus,
}

impl Default for IncrementalSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl IncrementalSearch {
    pub fn new() -> Self {
        Self {
            frontier: BinaryHeap::new(),
            visited: HashSet::new(),
            came_from: HashMap::new(),
            g_score: HashMap::new(),
            f_score: HashMap::new(),
            path: Vec::new(),
            start: (0, 0),
            end: (0, 0),
            seq: 0,
            status: SearchStatus::Uninitialized,
        }
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Reconstructed path from end back towards start, excluding start.
    /// Empty until the search terminates in [`StepResult::Found`].
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn g_score(&self, pos: Position) -> Option<usize> {
        self.g_score.get(&pos).copied()
    }

    pub fn f_score(&self, pos: Position) -> Option<usize> {
        self.f_score.get(&pos).copied()
    }

    pub fn is_visited(&self, pos: Position) -> bool {
        self.visited.contains(&pos)
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of finalized expansions so far.
    pub fn expanded(&self) -> usize {
        self.visited.len()
    }

    /// Rebuilds the search state for a fresh run and clears old annotations
    /// from the grid, preserving walls. Valid from any state.
    pub fn initialize(&mut self, grid: &mut GridModel, start: Position, end: Position) {
        self.frontier.clear();
        self.visited.clear();
        self.came_from.clear();
        self.g_score.clear();
        self.f_score.clear();
        self.path.clear();
        self.seq = 0;
        self.start = start;
        self.end = end;

        grid.clear_annotations();

        self.g_score.insert(start, 0);
        self.f_score.insert(start, heuristic(start, end));
        self.push(heuristic(start, end), start);

        self.status = SearchStatus::Running;

        debug!("Search initialized from {:?} to {:?}", start, end);
    }

    /// Performs one expansion. After termination further calls are no-ops
    /// returning the last terminal result; before `initialize` the frontier
    /// is empty and the search reports [`StepResult::Unreachable`].
    pub fn step(&mut self, grid: &mut GridModel) -> StepResult {
        match self.status {
            SearchStatus::Found => return StepResult::Found,
            SearchStatus::Unreachable => return StepResult::Unreachable,
            _ => {}
        }

        let current = loop {
            match self.frontier.pop() {
                None => {
                    self.status = SearchStatus::Unreachable;
                    debug!("Frontier exhausted, {:?} is unreachable", self.end);
                    return StepResult::Unreachable;
                }
                Some(node) => {
                    // stale duplicate entries are dropped here
                    if !self.visited.contains(&node.position) {
                        break node.position;
                    }
                }
            }
        };

        trace!("Expanding {:?}", current);

        if current != self.start && current != self.end {
            grid.set_cell_state(current, CellState::Current);
        }

        if current == self.end {
            self.reconstruct_path(grid);
            self.status = SearchStatus::Found;
            debug!("Path found, {} steps", self.path.len());
            return StepResult::Found;
        }

        self.visited.insert(current);

        let tentative = self.g_score[&current] + 1;

        for neighbor in grid.neighbors(current) {
            if self.visited.contains(&neighbor) {
                continue;
            }

            if tentative >= self.g_score.get(&neighbor).copied().unwrap_or(usize::MAX) {
                continue;
            }

            self.came_from.insert(neighbor, current);
            self.g_score.insert(neighbor, tentative);

            let priority = tentative + heuristic(neighbor, self.end);

            self.f_score.insert(neighbor, priority);
            self.push(priority, neighbor);

            grid.set_cell_state(neighbor, CellState::Frontier);
        }

        if current != self.start {
            grid.set_cell_state(current, CellState::Visited);
        }

        StepResult::InProgress
    }

    fn push(&mut self, priority: usize, position: Position) {
        self.frontier.push(FrontierNode {
            priority,
            seq: self.seq,
            position,
        });

        self.seq += 1;
    }

    fn reconstruct_path(&mut self, grid: &mut GridModel) {
        self.path.clear();

        let mut current = self.end;

        while let Some(&previous) = self.came_from.get(&current) {
            self.path.push(current);
            current = previous;
        }

        for &pos in &self.path {
            grid.set_cell_state(pos, CellState::Path);
        }
    }
}
