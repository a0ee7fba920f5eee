use std::time::Duration;

use crate::{Color, Error};

/// Parameters of the star counter.
///
/// The defaults reproduce the classic demo: a 400x400 canvas
/// filling with 1000 stars over ten seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Side length of the square canvas, in pixels.
    pub canvas_size: u32,
    /// Width of the vertical progress bar, in pixels.
    pub bar_width: u32,
    /// Number of stars painted by the end of a run.
    pub star_count: u32,
    /// Wall-clock length of a run.
    pub duration: Duration,
    /// How many times per second the counter advances.
    pub frame_rate: u32,
    /// Seed of the star placement sequence.
    pub seed: u64,
    pub background: Color,
    pub star_color: Color,
    pub track_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_size: 400,
            bar_width: 20,
            star_count: 1_000,
            duration: Duration::from_secs(10),
            frame_rate: 60,
            seed: 42,
            background: Color::INDIA_INK,
            star_color: Color::GOLD,
            track_color: Color::rgb(58, 63, 77),
        }
    }
}

impl Settings {
    pub fn with_canvas_size(mut self, canvas_size: u32) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    pub fn with_bar_width(mut self, bar_width: u32) -> Self {
        self.bar_width = bar_width;
        self
    }

    pub fn with_star_count(mut self, star_count: u32) -> Self {
        self.star_count = star_count;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Time between two consecutive ticks.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    /// Size of the whole window contents: the canvas
    /// with the bar to its right.
    pub fn frame_size(&self) -> (u32, u32) {
        (self.canvas_size + self.bar_width, self.canvas_size)
    }

    /// Rejects settings the animation cannot run with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.star_count == 0 {
            return Err(Error::ZeroStarCount);
        }
        if self.duration.is_zero() {
            return Err(Error::ZeroDuration);
        }
        if self.frame_rate == 0 {
            return Err(Error::ZeroFrameRate);
        }
        if self.canvas_size == 0 {
            return Err(Error::EmptyCanvas {
                width: self.canvas_size,
                height: self.canvas_size,
            });
        }
        Ok(())
    }
}
