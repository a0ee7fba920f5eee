/// An error caused by degenerate animation settings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("star count must be at least 1")]
    ZeroStarCount,
    #[error("animation duration must be nonzero")]
    ZeroDuration,
    #[error("frame rate must be at least 1 frame per second")]
    ZeroFrameRate,
    #[error("canvas of {width}x{height} pixels has no area")]
    EmptyCanvas { width: u32, height: u32 },
}
