//! Runs the star counter in a `winit` window.
//!
//! Frames are composed in software with `tiny-skia` and
//! presented through `softbuffer`.

mod app;
mod frame;
mod presenter;

pub use app::run;
pub use frame::Frame;
pub use presenter::Presenter;

pub extern crate winit;

/// An error that prevents the window from starting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Settings(#[from] starfill::Error),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("no drawing surface is available for the window")]
    SurfaceUnavailable,
    #[error("frame of {width}x{height} pixels is too large for the window surface")]
    FrameTooLarge { width: u32, height: u32 },
}
