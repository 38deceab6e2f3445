use core::str::FromStr;

use log::debug;

/// Grid coordinate as (column, row).
pub type Position = (usize, usize);

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum CellState {
    Empty,
    Wall,
    Visited,
    Frontier,
    Path,
    Current,
}

#[derive(Debug, Copy, Clone)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (raw_width, raw_height) = s.split_once('x').ok_or(format!("invalid format: {}", s))?;

        let width = raw_width
            .parse::<usize>()
            .map_err(|_| format!("invalid width: {}", raw_width))?;
        let height = raw_height
            .parse::<usize>()
            .map_err(|_| format!("invalid height: {}", raw_height))?;

        Ok(Size { width, height })
    }
}

/// Cell-state container for the pathfinding grid.
///
/// All mutations silently reject invalid input: out-of-range clicks and
/// attempts to annotate the start, end or a wall cell are no-ops.
pub struct GridModel {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
    cell_size: usize,
    start: Position,
    end: Position,
}

pub struct GridIter<'a> {
    grid: &'a GridModel,
    pos: usize,
}

impl GridModel {
    pub fn new(width: usize, height: usize, cell_size: usize) -> Self {
        Self {
            cells: vec![CellState::Empty; width * height],
            width,
            height,
            cell_size,
            start: (0, 0),
            end: (width.saturating_sub(1), height.saturating_sub(1)),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> usize {
        self.width * self.height
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn is_valid(&self, (x, y): Position) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, pos: Position) -> Option<CellState> {
        if self.is_valid(pos) {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.get(pos) == Some(CellState::Wall)
    }

    fn index(&self, (x, y): Position) -> usize {
        x + y * self.width
    }

    pub fn set_start(&mut self, pos: Position) {
        if self.is_valid(pos) && !self.is_wall(pos) {
            self.start = pos;
        } else {
            debug!("Rejected start marker at {:?}", pos);
        }
    }

    pub fn set_end(&mut self, pos: Position) {
        if self.is_valid(pos) && !self.is_wall(pos) {
            self.end = pos;
        } else {
            debug!("Rejected end marker at {:?}", pos);
        }
    }

    /// Flips a cell between empty and wall. The start and end cells are
    /// protected, and search annotations are left as they are.
    pub fn toggle_wall(&mut self, pos: Position) {
        if !self.is_valid(pos) || pos == self.start || pos == self.end {
            debug!("Rejected wall toggle at {:?}", pos);
            return;
        }

        let index = self.index(pos);

        match self.cells[index] {
            CellState::Empty => self.cells[index] = CellState::Wall,
            CellState::Wall => self.cells[index] = CellState::Empty,
            _ => {}
        }
    }

    /// Sole mutation path used by the search engine. Walls and the start
    /// and end cells are never overwritten.
    pub fn set_cell_state(&mut self, pos: Position, state: CellState) {
        if !self.is_valid(pos) || pos == self.start || pos == self.end {
            return;
        }

        let index = self.index(pos);

        if self.cells[index] == CellState::Wall {
            return;
        }

        self.cells[index] = state;
    }

    /// Full clear, walls included.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Clears search annotations back to empty, keeping walls.
    pub fn clear_annotations(&mut self) {
        for cell in self.cells.iter_mut() {
            if *cell != CellState::Wall {
                *cell = CellState::Empty;
            }
        }
    }

    /// Maps a pixel coordinate to the cell underneath it. No bounds clamp;
    /// the caller validates the result. Floor division keeps negative
    /// pixels out of bounds instead of folding them into cell 0.
    pub fn pixel_to_grid(&self, x: i32, y: i32) -> Position {
        (
            x.div_euclid(self.cell_size as i32) as usize,
            y.div_euclid(self.cell_size as i32) as usize,
        )
    }

    pub fn neighbor(&self, (x, y): Position, direction: Direction) -> Option<Position> {
        match direction {
            Direction::Up => {
                if y == 0 {
                    None
                } else {
                    Some((x, y - 1))
                }
            }
            Direction::Down => {
                if y + 1 >= self.height {
                    None
                } else {
                    Some((x, y + 1))
                }
            }
            Direction::Left => {
                if x == 0 {
                    None
                } else {
                    Some((x - 1, y))
                }
            }
            Direction::Right => {
                if x + 1 >= self.width {
                    None
                } else {
                    Some((x + 1, y))
                }
            }
        }
    }

    /// Walkable orthogonal neighbors, enumerated down, right, up, left for
    /// reproducible expansion order.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut output = Vec::with_capacity(4);

        for direction in [
            Direction::Down,
            Direction::Right,
            Direction::Up,
            Direction::Left,
        ] {
            if let Some(next) = self.neighbor(pos, direction) {
                if !self.is_wall(next) {
                    output.push(next);
                }
            }
        }

        output
    }

    pub fn iter(&self) -> GridIter {
        GridIter { grid: self, pos: 0 }
    }
}

impl<'a> IntoIterator for &'a GridModel {
    type Item = (usize, usize, CellState);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for GridIter<'a> {
    type Item = (usize, usize, CellState);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.grid.cells.len() {
            None
        } else {
            let x = self.pos % self.grid.width;
            let y = self.pos / self.grid.width;
            let value = self.grid.cells[self.pos];

            self.pos += 1;

            Some((x, y, value))
        }
    }
}
