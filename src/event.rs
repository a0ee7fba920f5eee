use ahash::AHashMap;

use crate::RunId;

/// A notification emitted by the [`ProgressAnimator`](crate::ProgressAnimator).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A new run began at value 0.
    Started { run: RunId },
    /// The counter moved from `old` to `new`.
    Changed { old: u32, new: u32 },
    /// The counter reached its target.
    Completed { run: RunId },
    /// The run was stopped before reaching its target.
    Cancelled { run: RunId },
}

impl ProgressEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ProgressEvent::Started { .. } => EventKind::Started,
            ProgressEvent::Changed { .. } => EventKind::Changed,
            ProgressEvent::Completed { .. } => EventKind::Completed,
            ProgressEvent::Cancelled { .. } => EventKind::Cancelled,
        }
    }
}

/// Discriminant of a [`ProgressEvent`], used to subscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Started,
    Changed,
    Completed,
    Cancelled,
}

type Listener = Box<dyn FnMut(&ProgressEvent)>;

/// Subscribers grouped by event kind.
///
/// Listeners run synchronously, in registration order.
#[derive(Default)]
pub struct Listeners {
    by_kind: AHashMap<EventKind, Vec<Listener>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: EventKind, listener: impl FnMut(&ProgressEvent) + 'static) {
        self.by_kind
            .entry(kind)
            .or_default()
            .push(Box::new(listener));
    }

    pub fn emit(&mut self, event: ProgressEvent) {
        if let Some(listeners) = self.by_kind.get_mut(&event.kind()) {
            for listener in listeners {
                listener(&event);
            }
        }
    }

    /// Number of listeners subscribed to `kind`.
    pub fn count(&self, kind: EventKind) -> usize {
        self.by_kind.get(&kind).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn listeners_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();

        for name in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            listeners.subscribe(EventKind::Changed, move |event| {
                log.borrow_mut().push((name, *event));
            });
        }

        listeners.emit(ProgressEvent::Changed { old: 0, new: 4 });

        let change = ProgressEvent::Changed { old: 0, new: 4 };
        assert_eq!(
            *log.borrow(),
            [("first", change), ("second", change), ("third", change)]
        );
    }

    #[test]
    fn events_only_reach_their_kind() {
        let hits = Rc::new(RefCell::new(0));
        let mut listeners = Listeners::new();
        {
            let hits = Rc::clone(&hits);
            listeners.subscribe(EventKind::Completed, move |_| *hits.borrow_mut() += 1);
        }

        listeners.emit(ProgressEvent::Changed { old: 1, new: 2 });
        listeners.emit(ProgressEvent::Started { run: RunId(1) });
        assert_eq!(*hits.borrow(), 0);

        listeners.emit(ProgressEvent::Completed { run: RunId(1) });
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(listeners.count(EventKind::Completed), 1);
        assert_eq!(listeners.count(EventKind::Cancelled), 0);
    }
}
