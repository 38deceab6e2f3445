use crate::cli::AppConfig;
use crate::grid::{GridModel, Position, Size};
use crate::render::Renderer;
use crate::search::{IncrementalSearch, StepResult};

#[cfg(feature = "visual")]
use crate::render::sdl_renderer::{SdlConfig, SdlRenderer};
#[cfg(feature = "visual")]
use crate::render::InputEvent;

#[cfg(feature = "image-output")]
use crate::render::image_renderer::ImageRenderer;

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::time::Duration;

/// Marker placement matching the original layout, falling back to corner
/// cells on grids too small for the (5, 5) inset.
fn default_markers(width: usize, height: usize) -> (Position, Position) {
    if width > 10 && height > 10 {
        ((5, 5), (width - 5, height - 5))
    } else {
        ((0, 0), (width - 1, height - 1))
    }
}

pub struct App {
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let Size { width, height } = self.config.grid_size;
        let mut grid = GridModel::new(width, height, self.config.cell_size);

        let (default_start, default_end) = default_markers(width, height);

        grid.set_start(self.config.start.unwrap_or(default_start));
        grid.set_end(self.config.end.unwrap_or(default_end));

        let mut search = IncrementalSearch::new();
        let mut renderers = self.create_renderers()?;

        #[cfg(feature = "visual")]
        if self.config.renderer.visual {
            return self.run_interactive(&mut grid, &mut search, &mut renderers);
        }

        self.run_headless(&mut grid, &mut search, &mut renderers)
    }

    fn create_renderers(
        &self,
    ) -> Result<Vec<Box<dyn Renderer<Error = String>>>, Box<dyn std::error::Error>> {
        let mut renderers: Vec<Box<dyn Renderer<Error = String>>> = Vec::new();

        #[cfg(feature = "visual")]
        if self.config.renderer.visual {
            let window_size = Size {
                width: self.config.grid_size.width * self.config.cell_size,
                height: self.config.grid_size.height * self.config.cell_size,
            };

            let sdl_config = SdlConfig {
                window_size,
                vsync: self.config.renderer.vsync,
                fullscreen: self.config.renderer.fullscreen,
            };

            renderers.push(Box::new(SdlRenderer::new(sdl_config)?));
        }

        #[cfg(feature = "image-output")]
        if let Some(output_path) = &self.config.output_path {
            renderers.push(Box::new(ImageRenderer::new(output_path.clone())));
        }

        Ok(renderers)
    }

    fn run_headless(
        &self,
        grid: &mut GridModel,
        search: &mut IncrementalSearch,
        renderers: &mut [Box<dyn Renderer<Error = String>>],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (start, end) = (grid.start(), grid.end());

        info!(
            "Searching {}x{} grid from {:?} to {:?}",
            grid.width(),
            grid.height(),
            start,
            end
        );

        search.initialize(grid, start, end);

        let progress = ProgressBar::new(grid.size() as u64);
        progress.enable_steady_tick(Duration::from_millis(200));
        progress.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>5}/{len}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );

        let result = loop {
            match search.step(grid) {
                StepResult::InProgress => progress.inc(1),
                result => break result,
            }
        };

        progress.finish_and_clear();

        self.report(grid, search, result);

        for renderer in renderers.iter_mut() {
            renderer.finalize(grid)?;
        }

        Ok(())
    }

    #[cfg(feature = "visual")]
    fn run_interactive(
        &self,
        grid: &mut GridModel,
        search: &mut IncrementalSearch,
        renderers: &mut [Box<dyn Renderer<Error = String>>],
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!("Left click: add/remove wall");
        info!("Shift + click: set start");
        info!("Ctrl + click: set end");
        info!("Space: start/pause algorithm");
        info!("R: reset grid");

        let frame_time = Duration::from_secs_f32(1.0 / self.config.renderer.fps as f32);

        let mut started = false;
        let mut paused = false;
        let mut finished = false;

        'main: loop {
            for renderer in renderers.iter_mut() {
                for event in renderer.poll_input(grid) {
                    match event {
                        InputEvent::Quit => break 'main,
                        InputEvent::ToggleWall(pos) => grid.toggle_wall(pos),
                        InputEvent::SetStart(pos) => grid.set_start(pos),
                        InputEvent::SetEnd(pos) => grid.set_end(pos),
                        InputEvent::ToggleRun => {
                            if !started {
                                let (start, end) = (grid.start(), grid.end());

                                search.initialize(grid, start, end);
                                started = true;
                                paused = false;
                                finished = false;
                            } else {
                                paused = !paused;
                            }
                        }
                        InputEvent::Reset => {
                            grid.reset();
                            *search = IncrementalSearch::new();
                            started = false;
                            paused = false;
                            finished = false;
                        }
                    }
                }
            }

            if started && !paused && !finished {
                match search.step(grid) {
                    StepResult::InProgress => {}
                    result => {
                        self.report(grid, search, result);
                        finished = true;
                    }
                }
            }

            for renderer in renderers.iter_mut() {
                renderer.update(grid)?;
            }

            std::thread::sleep(frame_time);
        }

        for renderer in renderers.iter_mut() {
            renderer.finalize(grid)?;
        }

        Ok(())
    }

    fn report(&self, grid: &GridModel, search: &IncrementalSearch, result: StepResult) {
        match result {
            StepResult::Found => info!(
                "Path found after {} expansions, {} steps long",
                search.expanded(),
                search.path().len()
            ),
            StepResult::Unreachable => warn!(
                "No path exists between {:?} and {:?}",
                grid.start(),
                grid.end()
            ),
            StepResult::InProgress => {}
        }
    }
}
