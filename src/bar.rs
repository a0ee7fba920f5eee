use crate::Tier;

/// State of the vertical progress bar.
///
/// Holds the bound progress value and the style tier last
/// applied to it. Drawing is left to the frontend.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VerticalBar {
    progress: f64,
    tier: Tier,
}

impl VerticalBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the normalized progress, clamped to `[0, 1]`.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = if progress.is_nan() {
            0.
        } else {
            progress.clamp(0., 1.)
        };
    }

    /// Replaces the style tier. Tiers are mutually exclusive.
    pub fn apply_tier(&mut self, tier: Tier) {
        self.tier = tier;
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Height of the filled part of a bar `track_height` pixels tall.
    pub fn fill_height(&self, track_height: u32) -> u32 {
        (self.progress * f64::from(track_height)).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_height_follows_progress() {
        let mut bar = VerticalBar::new();
        assert_eq!(bar.fill_height(400), 0);

        bar.set_progress(0.5);
        assert_eq!(bar.fill_height(400), 200);

        bar.set_progress(1.5);
        assert_eq!(bar.progress(), 1.);
        assert_eq!(bar.fill_height(400), 400);
    }

    #[test]
    fn starts_red() {
        assert_eq!(VerticalBar::new().tier(), Tier::Red);
    }
}
