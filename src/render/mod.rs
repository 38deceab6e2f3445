pub mod events;

#[cfg(feature = "visual")]
pub mod sdl_renderer;

#[cfg(feature = "image-output")]
pub mod image_renderer;

pub use events::InputEvent;

use crate::grid::GridModel;

/// Rendering backends driven by the application loop.
pub trait Renderer {
    type Error;

    /// Drain pending user input, translated to grid coordinates.
    fn poll_input(&mut self, grid: &GridModel) -> Vec<InputEvent> {
        let _ = grid;
        Vec::new()
    }

    /// Redraw with the current grid state.
    fn update(&mut self, grid: &GridModel) -> Result<(), Self::Error> {
        let _ = grid;
        Ok(())
    }

    /// Final render once the driver is done (e.g. save to file).
    fn finalize(&mut self, grid: &GridModel) -> Result<(), Self::Error>;
}
