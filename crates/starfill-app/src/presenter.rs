use softbuffer::GraphicsContext;
use winit::window::Window;

use crate::{Error, Frame};

/// Wraps a `winit::Window`. Allows presenting a [`Frame`]
/// to the window surface.
///
/// The Presenter owns the window so that the surface is
/// dropped before it.
pub struct Presenter {
    context: GraphicsContext<Window>,
}

impl Presenter {
    /// Acquires a software drawing surface for `window`.
    pub fn new(window: Window) -> Result<Self, Error> {
        // SAFETY: the graphics context takes ownership of the window,
        // so the window outlives the surface created for it.
        let context =
            unsafe { GraphicsContext::new(window) }.map_err(|_| Error::SurfaceUnavailable)?;
        Ok(Self { context })
    }

    /// Presents a frame to the window.
    ///
    /// `Frame::new` guarantees both dimensions fit in a `u16`.
    pub fn present(&mut self, frame: &Frame) {
        self.context.set_buffer(
            &frame.to_argb(),
            frame.width() as u16,
            frame.height() as u16,
        );
    }

    /// Gets the inner window.
    pub fn window(&self) -> &Window {
        self.context.window()
    }
}
