use super::{InputEvent, Renderer};
use crate::grid::{CellState, GridModel, Size};

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, KeyboardUtil, Mod};
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::{FullscreenType, Window};
use sdl2::EventPump;

/// SDL2-based interactive renderer for the pathfinding grid.
pub struct SdlRenderer {
    canvas: Canvas<Window>,
    events: EventPump,
    keyboard: KeyboardUtil,
}

#[derive(Debug, Clone, Copy)]
pub struct SdlConfig {
    pub window_size: Size,
    pub vsync: bool,
    pub fullscreen: bool,
}

fn cell_color(state: CellState) -> Color {
    match state {
        CellState::Empty => Color::RGB(255, 255, 255),
        CellState::Wall => Color::RGB(0, 0, 0),
        CellState::Visited => Color::RGB(150, 150, 255),
        CellState::Frontier => Color::RGB(0, 255, 0),
        CellState::Path => Color::RGB(255, 255, 0),
        CellState::Current => Color::RGB(255, 0, 0),
    }
}

fn marker_rect(pos: (usize, usize), cell_size: usize) -> Rect {
    Rect::new(
        (pos.0 * cell_size) as i32,
        (pos.1 * cell_size) as i32,
        cell_size as u32,
        cell_size as u32,
    )
}

impl SdlRenderer {
    pub fn new(config: SdlConfig) -> Result<Self, String> {
        let context = sdl2::init()?;
        let video = context.video()?;

        let mut window = video
            .window(
                "A* Pathfinding",
                config.window_size.width as u32,
                config.window_size.height as u32,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        if config.fullscreen {
            window.set_fullscreen(FullscreenType::True)?;
        }

        if window.fullscreen_state() != FullscreenType::Off {
            context.mouse().show_cursor(false);
        }

        let mut builder = window.into_canvas().target_texture();

        if config.vsync {
            builder = builder.present_vsync();
        }

        let canvas = builder.build().map_err(|e| e.to_string())?;
        let events = context.event_pump()?;
        let keyboard = context.keyboard();

        Ok(Self {
            canvas,
            events,
            keyboard,
        })
    }

    fn draw_grid(&mut self, grid: &GridModel) -> Result<(), String> {
        let cell_size = grid.cell_size();

        self.canvas.set_draw_color(Color::RGB(255, 255, 255));
        self.canvas.clear();

        for (x, y, state) in grid {
            let rect = Rect::new(
                (x * cell_size) as i32,
                (y * cell_size) as i32,
                cell_size as u32,
                cell_size as u32,
            );

            self.canvas.set_draw_color(cell_color(state));
            self.canvas.fill_rect(rect)?;

            self.canvas.set_draw_color(Color::RGB(100, 100, 100));
            self.canvas.draw_rect(rect)?;
        }

        self.canvas.set_draw_color(Color::RGB(0, 0, 255));
        self.canvas.fill_rect(marker_rect(grid.start(), cell_size))?;

        self.canvas.set_draw_color(Color::RGB(255, 0, 255));
        self.canvas.fill_rect(marker_rect(grid.end(), cell_size))?;

        self.canvas.present();

        Ok(())
    }
}

impl Renderer for SdlRenderer {
    type Error = String;

    fn poll_input(&mut self, grid: &GridModel) -> Vec<InputEvent> {
        let mut output = Vec::new();

        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => output.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    ..
                } => output.push(InputEvent::ToggleRun),
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    ..
                } => output.push(InputEvent::Reset),
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    let pos = grid.pixel_to_grid(x, y);

                    if !grid.is_valid(pos) {
                        continue;
                    }

                    let keymod = self.keyboard.mod_state();

                    if keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD) {
                        output.push(InputEvent::SetStart(pos));
                    } else if keymod.intersects(Mod::LCTRLMOD | Mod::RCTRLMOD) {
                        output.push(InputEvent::SetEnd(pos));
                    } else {
                        output.push(InputEvent::ToggleWall(pos));
                    }
                }
                _ => {}
            }
        }

        output
    }

    fn update(&mut self, grid: &GridModel) -> Result<(), Self::Error> {
        self.draw_grid(grid)
    }

    fn finalize(&mut self, grid: &GridModel) -> Result<(), Self::Error> {
        self.draw_grid(grid)
    }
}
