use super::Renderer;
use crate::grid::{CellState, GridModel};

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use log::info;
use std::path::PathBuf;

/// Saves the final grid state as an image.
pub struct ImageRenderer {
    path: PathBuf,
}

fn cell_color(state: CellState) -> Rgba<u8> {
    match state {
        CellState::Empty => Rgba([255, 255, 255, 255]),
        CellState::Wall => Rgba([0, 0, 0, 255]),
        CellState::Visited => Rgba([150, 150, 255, 255]),
        CellState::Frontier => Rgba([0, 255, 0, 255]),
        CellState::Path => Rgba([255, 255, 0, 255]),
        CellState::Current => Rgba([255, 0, 0, 255]),
    }
}

impl ImageRenderer {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn cell_rect(pos: (usize, usize), cell_size: usize) -> Rect {
        Rect::at((pos.0 * cell_size) as i32, (pos.1 * cell_size) as i32)
            .of_size(cell_size as u32, cell_size as u32)
    }
}

impl Renderer for ImageRenderer {
    type Error = String;

    fn finalize(&mut self, grid: &GridModel) -> Result<(), Self::Error> {
        let cell_size = grid.cell_size();
        let mut canvas = RgbaImage::from_pixel(
            (grid.width() * cell_size) as u32,
            (grid.height() * cell_size) as u32,
            Rgba([255, 255, 255, 255]),
        );

        for (x, y, state) in grid {
            draw_filled_rect_mut(
                &mut canvas,
                Self::cell_rect((x, y), cell_size),
                cell_color(state),
            );
        }

        draw_filled_rect_mut(
            &mut canvas,
            Self::cell_rect(grid.start(), cell_size),
            Rgba([0, 0, 255, 255]),
        );
        draw_filled_rect_mut(
            &mut canvas,
            Self::cell_rect(grid.end(), cell_size),
            Rgba([255, 0, 255, 255]),
        );

        canvas.save(&self.path).map_err(|e| e.to_string())?;

        info!("Saved {}", self.path.display());

        Ok(())
    }
}
