use crate::grid::Position;

/// User input translated from the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Left click: add or remove a wall.
    ToggleWall(Position),

    /// Shift + click: move the start marker.
    SetStart(Position),

    /// Ctrl + click: move the end marker.
    SetEnd(Position),

    /// Space: start the search, or pause/resume a running one.
    ToggleRun,

    /// R: reset the grid and the search together.
    Reset,

    /// Window close or escape.
    Quit,
}
