pub mod grid;
pub mod render;
pub mod search;

#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod cli;
