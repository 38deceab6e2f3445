use astar_visualizer::grid::{CellState, GridModel, Size};

#[test]
fn toggle_wall_flips_empty_and_wall() {
    let mut grid = GridModel::new(5, 5, 20);

    grid.toggle_wall((2, 2));
    assert_eq!(grid.get((2, 2)), Some(CellState::Wall));

    grid.toggle_wall((2, 2));
    assert_eq!(grid.get((2, 2)), Some(CellState::Empty));
}

#[test]
fn toggle_wall_rejects_markers_and_out_of_bounds() {
    let mut grid = GridModel::new(5, 5, 20);
    grid.set_start((0, 0));
    grid.set_end((4, 4));

    grid.toggle_wall((0, 0));
    grid.toggle_wall((4, 4));
    grid.toggle_wall((5, 0));

    assert_eq!(grid.get((0, 0)), Some(CellState::Empty));
    assert_eq!(grid.get((4, 4)), Some(CellState::Empty));
    assert_eq!(grid.get((5, 0)), None);
}

#[test]
fn toggle_wall_leaves_annotations_alone() {
    let mut grid = GridModel::new(5, 5, 20);

    grid.set_cell_state((1, 1), CellState::Visited);
    grid.toggle_wall((1, 1));

    assert_eq!(grid.get((1, 1)), Some(CellState::Visited));
}

#[test]
fn markers_reject_walls_and_out_of_bounds() {
    let mut grid = GridModel::new(5, 5, 20);

    grid.toggle_wall((3, 3));
    grid.set_start((3, 3));
    grid.set_end((9, 9));

    assert_eq!(grid.start(), (0, 0));
    assert_eq!(grid.end(), (4, 4));

    grid.set_start((1, 2));
    assert_eq!(grid.start(), (1, 2));
}

#[test]
fn set_cell_state_guards_walls_and_markers() {
    let mut grid = GridModel::new(5, 5, 20);
    grid.set_start((0, 0));
    grid.set_end((4, 4));
    grid.toggle_wall((2, 2));

    grid.set_cell_state((0, 0), CellState::Visited);
    grid.set_cell_state((4, 4), CellState::Visited);
    grid.set_cell_state((2, 2), CellState::Visited);
    grid.set_cell_state((7, 7), CellState::Visited);

    assert_eq!(grid.get((0, 0)), Some(CellState::Empty));
    assert_eq!(grid.get((4, 4)), Some(CellState::Empty));
    assert_eq!(grid.get((2, 2)), Some(CellState::Wall));

    grid.set_cell_state((1, 1), CellState::Frontier);
    assert_eq!(grid.get((1, 1)), Some(CellState::Frontier));
}

#[test]
fn reset_clears_walls_but_clear_annotations_keeps_them() {
    let mut grid = GridModel::new(5, 5, 20);

    grid.toggle_wall((2, 2));
    grid.set_cell_state((1, 1), CellState::Visited);

    grid.clear_annotations();
    assert_eq!(grid.get((1, 1)), Some(CellState::Empty));
    assert_eq!(grid.get((2, 2)), Some(CellState::Wall));

    grid.reset();
    assert_eq!(grid.get((2, 2)), Some(CellState::Empty));
}

#[test]
fn pixel_to_grid_divides_without_clamping() {
    let grid = GridModel::new(5, 5, 20);

    assert_eq!(grid.pixel_to_grid(0, 0), (0, 0));
    assert_eq!(grid.pixel_to_grid(45, 19), (2, 0));
    assert_eq!(grid.pixel_to_grid(99, 99), (4, 4));

    let outside = grid.pixel_to_grid(1000, 0);
    assert_eq!(outside, (50, 0));
    assert!(!grid.is_valid(outside));
}

#[test]
fn negative_pixels_stay_out_of_bounds() {
    let mut grid = GridModel::new(5, 5, 20);

    // floor division, so a click just off the window edge is invalid
    // rather than landing in column/row 0
    let pos = grid.pixel_to_grid(-5, 45);

    assert!(!grid.is_valid(pos));

    grid.toggle_wall(pos);
    assert_eq!(grid.get((0, 2)), Some(CellState::Empty));

    assert!(!grid.is_valid(grid.pixel_to_grid(-20, 0)));
    assert!(!grid.is_valid(grid.pixel_to_grid(0, -1)));
}

#[test]
fn neighbors_enumerate_down_right_up_left() {
    let grid = GridModel::new(3, 3, 20);

    assert_eq!(grid.neighbors((1, 1)), vec![(1, 2), (2, 1), (1, 0), (0, 1)]);

    // corners only get their in-bounds neighbors
    assert_eq!(grid.neighbors((0, 0)), vec![(0, 1), (1, 0)]);
}

#[test]
fn neighbors_exclude_walls() {
    let mut grid = GridModel::new(3, 3, 20);

    grid.toggle_wall((1, 2));

    assert_eq!(grid.neighbors((1, 1)), vec![(2, 1), (1, 0), (0, 1)]);
}

#[test]
fn size_parses_width_by_height() {
    let size: Size = "40x30".parse().unwrap();

    assert_eq!(size.width, 40);
    assert_eq!(size.height, 30);

    assert!("40".parse::<Size>().is_err());
    assert!("x30".parse::<Size>().is_err());
    assert!("40xthirty".parse::<Size>().is_err());
}
