use std::time::Duration;

use instant::Instant;

use crate::{Error, EventKind, Listeners, ProgressEvent, Settings};

/// Identifies one run of the animator.
///
/// Every call to [`ProgressAnimator::start`] allocates a new id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(pub(crate) u64);

/// A scheduled update of the counter.
///
/// The host delivers a `Tick` back to [`ProgressAnimator::fire`]
/// once its due time has passed. Ticks belonging to a run that
/// has since been reset or superseded are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    run: RunId,
    due: Instant,
}

impl Tick {
    pub fn run(&self) -> RunId {
        self.run
    }

    pub fn due(&self) -> Instant {
        self.due
    }
}

struct Run {
    id: RunId,
    started: Instant,
}

/// Drives an integer counter linearly from 0 to a target
/// over a fixed duration.
///
/// At elapsed time `t` the counter reads `floor(target * min(t / duration, 1))`.
/// The animator does not own a timer; it hands out [`Tick`]s spaced
/// one frame interval apart and the host fires them.
pub struct ProgressAnimator {
    target: u32,
    duration: Duration,
    interval: Duration,

    value: u32,
    run: Option<Run>,
    runs_started: u64,

    listeners: Listeners,
}

impl ProgressAnimator {
    pub fn new(target: u32, duration: Duration, interval: Duration) -> Self {
        Self {
            target,
            duration,
            interval,
            value: 0,
            run: None,
            runs_started: 0,
            listeners: Listeners::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, Error> {
        settings.validate()?;
        Ok(Self::new(
            settings.star_count,
            settings.duration,
            settings.frame_interval(),
        ))
    }

    /// Registers a listener for events of the given kind.
    pub fn subscribe(&mut self, kind: EventKind, listener: impl FnMut(&ProgressEvent) + 'static) {
        self.listeners.subscribe(kind, listener);
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// The counter normalized to `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.target == 0 {
            1.
        } else {
            f64::from(self.value) / f64::from(self.target)
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.run.as_ref().map(|run| run.id)
    }

    /// The counter value after `elapsed` time into a run.
    pub fn value_at(&self, elapsed: Duration) -> u32 {
        if elapsed >= self.duration {
            return self.target;
        }
        let scaled = u128::from(self.target) * elapsed.as_nanos() / self.duration.as_nanos();
        scaled as u32
    }

    /// Begins a new run at `now` and returns its first tick.
    ///
    /// A run already in flight is cancelled and the counter
    /// returns to 0 before the new run begins.
    pub fn start(&mut self, now: Instant) -> Tick {
        if let Some(run) = &self.run {
            log::debug!("Superseding run {:?}", run.id);
        }
        self.reset();

        self.runs_started += 1;
        let id = RunId(self.runs_started);
        self.run = Some(Run { id, started: now });
        log::debug!(
            "Run {:?} counting to {} over {:?}",
            id,
            self.target,
            self.duration
        );
        self.listeners.emit(ProgressEvent::Started { run: id });

        Tick {
            run: id,
            due: now + self.interval,
        }
    }

    /// Stops any run in flight and sets the counter to 0.
    ///
    /// Emits at most one change, straight to 0. Resetting an
    /// idle animator at 0 emits nothing.
    pub fn reset(&mut self) {
        if let Some(run) = self.run.take() {
            self.listeners.emit(ProgressEvent::Cancelled { run: run.id });
        }
        self.set_value(0);
    }

    /// Delivers a scheduled tick at time `now`.
    ///
    /// Returns the next tick to schedule, or `None` once the run has
    /// completed or if `tick` belongs to a run that is no longer current.
    pub fn fire(&mut self, tick: Tick, now: Instant) -> Option<Tick> {
        let started = match &self.run {
            Some(run) if run.id == tick.run => run.started,
            _ => {
                log::trace!("Dropping stale tick of run {:?}", tick.run);
                return None;
            }
        };

        // A host clock that stepped backwards must not lower the counter.
        let value = self
            .value_at(now.saturating_duration_since(started))
            .max(self.value);
        self.set_value(value);

        if value >= self.target {
            self.run = None;
            log::debug!("Run {:?} complete", tick.run);
            self.listeners
                .emit(ProgressEvent::Completed { run: tick.run });
            None
        } else {
            Some(Tick {
                run: tick.run,
                due: (tick.due + self.interval).max(now),
            })
        }
    }

    fn set_value(&mut self, new: u32) {
        let old = self.value;
        if old != new {
            self.value = new;
            self.listeners.emit(ProgressEvent::Changed { old, new });
        }
    }
}
