use crate::grid::{Position, Size};
use std::path::PathBuf;
use structopt::clap::Shell;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

fn parse_position(s: &str) -> Result<Position, String> {
    let (raw_x, raw_y) = s.split_once(',').ok_or(format!("invalid format: {}", s))?;

    let x = raw_x
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid column: {}", raw_x))?;
    let y = raw_y
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid row: {}", raw_y))?;

    Ok((x, y))
}

#[derive(Debug)]
pub struct RendererConfig {
    #[cfg(feature = "visual")]
    pub visual: bool,
    #[cfg(feature = "visual")]
    pub vsync: bool,
    #[cfg(feature = "visual")]
    pub fullscreen: bool,
    #[cfg(feature = "visual")]
    pub fps: u32,
}

#[derive(Debug)]
pub struct AppConfig {
    pub grid_size: Size,
    pub cell_size: usize,
    pub start: Option<Position>,
    pub end: Option<Position>,
    pub output_path: Option<PathBuf>,
    pub renderer: RendererConfig,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "A* Visualizer",
    about = "Interactive step-by-step visualization of A* grid pathfinding"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(parse(from_os_str), help = "Save the final grid as an image")]
    output: Option<PathBuf>,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "40x30",
        help = "Grid size in cells"
    )]
    grid_size: Size,

    #[structopt(short, long, default_value = "20", help = "Cell size in pixels")]
    cell_size: usize,

    #[structopt(
        parse(try_from_str = parse_position),
        long,
        help = "Start marker, e.g. 5,5"
    )]
    start: Option<Position>,

    #[structopt(
        parse(try_from_str = parse_position),
        long,
        help = "End marker, e.g. 35,25"
    )]
    end: Option<Position>,

    #[cfg(feature = "visual")]
    #[structopt(short = "V", long, help = "Open a window for interactive visualisation")]
    visual: bool,

    #[cfg(feature = "visual")]
    #[structopt(long, help = "Turns on vsync")]
    vsync: bool,

    #[cfg(feature = "visual")]
    #[structopt(short, long, help = "Runs the application in full screen")]
    fullscreen: bool,

    #[cfg(feature = "visual")]
    #[structopt(
        long,
        default_value = "60",
        help = "Frames (and search steps) per second"
    )]
    fps: u32,

    #[structopt(long, possible_values = &Shell::variants(), case_insensitive = true, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, &'static str> {
        if self.grid_size.width == 0 || self.grid_size.height == 0 {
            return Err("Grid size must be at least 1x1");
        }

        if self.cell_size == 0 {
            return Err("Cell size must be at least 1 pixel");
        }

        for marker in [self.start, self.end].into_iter().flatten() {
            if marker.0 >= self.grid_size.width || marker.1 >= self.grid_size.height {
                return Err("Marker is outside the grid");
            }
        }

        #[cfg(feature = "visual")]
        if self.fps == 0 {
            return Err("Fps must be at least 1");
        }

        Ok(AppConfig {
            grid_size: self.grid_size,
            cell_size: self.cell_size,
            start: self.start,
            end: self.end,
            output_path: self.output,
            renderer: RendererConfig {
                #[cfg(feature = "visual")]
                visual: self.visual,
                #[cfg(feature = "visual")]
                vsync: self.vsync,
                #[cfg(feature = "visual")]
                fullscreen: self.fullscreen,
                #[cfg(feature = "visual")]
                fps: self.fps,
            },
        })
    }
}
