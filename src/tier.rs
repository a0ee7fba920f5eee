use crate::Color;

/// One of the four color bands of the progress bar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Red,
    Orange,
    Yellow,
    Green,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Red, Tier::Orange, Tier::Yellow, Tier::Green];

    /// Picks the tier for a normalized progress value.
    ///
    /// Each threshold belongs to the higher band: `0.2` is already
    /// orange. Values outside `[0, 1]` are clamped, and NaN is
    /// treated as no progress.
    pub fn for_progress(progress: f64) -> Self {
        let progress = if progress.is_nan() {
            0.
        } else {
            progress.clamp(0., 1.)
        };

        if progress < 0.2 {
            Tier::Red
        } else if progress < 0.4 {
            Tier::Orange
        } else if progress < 0.6 {
            Tier::Yellow
        } else {
            Tier::Green
        }
    }

    /// Position of the tier, from 0 (red) to 3 (green).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The style class applied to the bar in this tier.
    pub fn style_class(self) -> &'static str {
        match self {
            Tier::Red => "red-bar",
            Tier::Orange => "orange-bar",
            Tier::Yellow => "yellow-bar",
            Tier::Green => "green-bar",
        }
    }

    /// Fill color of the bar in this tier.
    pub fn color(self) -> Color {
        match self {
            Tier::Red => Color::RED,
            Tier::Orange => Color::ORANGE,
            Tier::Yellow => Color::YELLOW,
            Tier::Green => Color::GREEN,
        }
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::Red
    }
}
