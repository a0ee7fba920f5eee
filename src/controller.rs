use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use instant::Instant;

use crate::{
    Error, EventKind, ProgressAnimator, ProgressEvent, Settings, StarField, Tick, Tier,
    VerticalBar,
};

/// Wires the animator to the star field and the progress bar.
///
/// Every change of the counter paints the newly due stars and
/// restyles the bar. A click clears the canvas and starts over.
pub struct AppController {
    animator: ProgressAnimator,
    stars: Rc<RefCell<StarField>>,
    bar: Rc<RefCell<VerticalBar>>,
    pending: Option<Tick>,
}

impl AppController {
    pub fn new(settings: &Settings) -> Result<Self, Error> {
        let mut animator = ProgressAnimator::from_settings(settings)?;
        let stars = Rc::new(RefCell::new(StarField::new(
            settings.canvas_size,
            settings.canvas_size,
            settings.seed,
            settings.background,
            settings.star_color,
        )?));
        let bar = Rc::new(RefCell::new(VerticalBar::new()));

        {
            let stars = Rc::clone(&stars);
            animator.subscribe(EventKind::Changed, move |event| {
                if let ProgressEvent::Changed { old, new } = *event {
                    // Drops back to zero on reset paint nothing.
                    if new > old {
                        stars.borrow_mut().add_points(new - old);
                    }
                }
            });
        }
        {
            let bar = Rc::clone(&bar);
            let target = f64::from(animator.target());
            animator.subscribe(EventKind::Changed, move |event| {
                if let ProgressEvent::Changed { new, .. } = *event {
                    let progress = f64::from(new) / target;
                    let mut bar = bar.borrow_mut();
                    bar.set_progress(progress);
                    bar.apply_tier(Tier::for_progress(progress));
                }
            });
        }

        Ok(Self {
            animator,
            stars,
            bar,
            pending: None,
        })
    }

    /// Starts a run at `now`, superseding any run in flight.
    pub fn start(&mut self, now: Instant) {
        self.pending = Some(self.animator.start(now));
    }

    /// Clears the canvas and stops the animation at 0.
    pub fn reset(&mut self) {
        self.stars.borrow_mut().clear();
        self.animator.reset();
        self.pending = None;
    }

    /// Handles a click: clear, reset, then start again.
    pub fn restart(&mut self, now: Instant) {
        log::info!("Restarting star counter");
        self.reset();
        self.start(now);
    }

    /// Fires the pending tick if it is due by `now`.
    ///
    /// Returns whether the visible state changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let tick = match self.pending {
            Some(tick) if tick.due() <= now => tick,
            _ => return false,
        };
        let before = self.animator.value();
        self.pending = self.animator.fire(tick, now);
        self.animator.value() != before
    }

    /// When the host should next call [`advance`](Self::advance),
    /// or `None` if the animation is idle.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|tick| tick.due())
    }

    pub fn value(&self) -> u32 {
        self.animator.value()
    }

    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    pub fn animator(&self) -> &ProgressAnimator {
        &self.animator
    }

    pub fn stars(&self) -> Ref<StarField> {
        self.stars.borrow()
    }

    pub fn bar(&self) -> Ref<VerticalBar> {
        self.bar.borrow()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn small_settings() -> Settings {
        Settings::default()
            .with_canvas_size(50)
            .with_star_count(100)
            .with_duration(Duration::from_secs(1))
            .with_frame_rate(20)
    }

    #[test]
    fn stars_track_the_counter() {
        let mut controller = AppController::new(&small_settings()).unwrap();
        let start = Instant::now();
        controller.start(start);

        assert!(controller.advance(start + Duration::from_millis(500)));
        assert_eq!(controller.value(), 50);
        assert_eq!(controller.stars().paint_count(), 50);
        assert_eq!(controller.bar().progress(), 0.5);
        assert_eq!(controller.bar().tier(), Tier::Yellow);
    }

    #[test]
    fn nothing_happens_before_the_deadline() {
        let mut controller = AppController::new(&small_settings()).unwrap();
        let start = Instant::now();
        controller.start(start);

        assert_eq!(controller.next_deadline(), Some(start + Duration::from_millis(50)));
        assert!(!controller.advance(start + Duration::from_millis(10)));
        assert_eq!(controller.value(), 0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut controller = AppController::new(&small_settings()).unwrap();
        let start = Instant::now();
        controller.start(start);
        controller.advance(start + Duration::from_millis(700));
        assert_eq!(controller.bar().tier(), Tier::Green);

        controller.reset();
        assert_eq!(controller.value(), 0);
        assert!(controller.stars().is_clear());
        assert_eq!(controller.stars().paint_count(), 0);
        assert_eq!(controller.bar().progress(), 0.);
        assert_eq!(controller.bar().tier(), Tier::Red);
        assert_eq!(controller.next_deadline(), None);
        assert!(!controller.advance(start + Duration::from_secs(5)));
    }

    #[test]
    fn restart_begins_from_an_empty_canvas() {
        let mut controller = AppController::new(&small_settings()).unwrap();
        let start = Instant::now();
        controller.start(start);
        controller.advance(start + Duration::from_millis(300));
        assert_eq!(controller.stars().paint_count(), 30);

        let click = start + Duration::from_millis(400);
        controller.restart(click);
        assert_eq!(controller.value(), 0);
        assert!(controller.stars().is_clear());
        assert!(controller.is_running());

        controller.advance(click + Duration::from_millis(200));
        assert_eq!(controller.value(), 20);
        assert_eq!(controller.stars().paint_count(), 20);
    }
}
