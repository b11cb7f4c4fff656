pub mod constants;
mod helpers;
pub mod phase;
pub mod layout;
pub mod color;
pub mod convection;
pub mod frame;
pub mod clock;
pub mod backdrop;
pub mod error;

// Raster output
pub mod raster;
pub mod png_exporter;
pub mod gif_exporter;

#[cfg(test)]
mod frame_test;

pub use clock::{AnimationClock, FrameSink, PhaseClock};
pub use frame::{CssFrame, DiagramSnapshot, Frame};
pub use phase::Phase;
