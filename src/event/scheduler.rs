//! Timed transitions.
//!
//! A [`Scheduler`] runs an animation block and calls a completion once the
//! duration has elapsed. [`Timeline`] is a virtual clock the host (or a test)
//! advances frame by frame; [`ImmediateScheduler`] completes synchronously.

use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Property changes applied at the start of a transition.
pub type Animations = Box<dyn FnOnce()>;
/// Runs when the transition ends. The flag is `true` if it ran to the end.
pub type Completion = Box<dyn FnOnce(bool)>;

/// "After duration" primitive for the toggle choreography.
pub trait Scheduler {
    fn animate(&self, duration: Duration, animations: Animations, completion: Completion);
}

/// Completes every transition immediately (reduced motion).
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn animate(&self, _duration: Duration, animations: Animations, completion: Completion) {
        animations();
        completion(true);
    }
}

struct Pending {
    deadline: Duration,
    seq: u64,
    completion: Completion,
}

/// Virtual clock. Completions fire from [`advance`](Timeline::advance) in
/// deadline order; ties keep scheduling order.
#[derive(Default)]
pub struct Timeline {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move the clock forward by `elapsed` and run every completion that
    /// became due, including ones scheduled by earlier completions within
    /// the same window. Returns how many ran.
    pub fn advance(&self, elapsed: Duration) -> usize {
        let target = self.now.get() + elapsed;
        let mut ran = 0;
        while let Some(next) = self.pop_due(target) {
            self.now.set(next.deadline);
            (next.completion)(true);
            ran += 1;
        }
        self.now.set(target);
        ran
    }

    /// Advance until nothing is pending.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let deadline = self.pending.borrow().iter().map(|p| p.deadline).min();
            let Some(deadline) = deadline else {
                return ran;
            };
            ran += self.advance(deadline.saturating_sub(self.now.get()));
        }
    }

    fn pop_due(&self, target: Duration) -> Option<Pending> {
        let mut pending = self.pending.borrow_mut();
        let index = pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= target)
            .min_by_key(|(_, p)| (p.deadline, p.seq))
            .map(|(index, _)| index)?;
        Some(pending.remove(index))
    }
}

impl Scheduler for Timeline {
    fn animate(&self, duration: Duration, animations: Animations, completion: Completion) {
        animations();
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        log::trace!("scheduled completion #{seq} in {duration:?}");
        self.pending.borrow_mut().push(Pending {
            deadline: self.now.get() + duration,
            seq,
            completion,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    fn recorder() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn immediate_runs_both_in_order() {
        let log = recorder();
        let (a, b) = (log.clone(), log.clone());
        ImmediateScheduler.animate(
            Duration::from_millis(400),
            Box::new(move || a.borrow_mut().push("animate".into())),
            Box::new(move |finished| b.borrow_mut().push(format!("done {finished}"))),
        );
        assert_eq!(*log.borrow(), vec!["animate", "done true"]);
    }

    #[test]
    fn timeline_defers_completion() {
        let timeline = Timeline::new();
        let log = recorder();
        let (a, b) = (log.clone(), log.clone());
        timeline.animate(
            Duration::from_millis(400),
            Box::new(move || a.borrow_mut().push("animate".into())),
            Box::new(move |_| b.borrow_mut().push("done".into())),
        );
        assert_eq!(*log.borrow(), vec!["animate"]);
        assert_eq!(timeline.advance(Duration::from_millis(399)), 0);
        assert_eq!(timeline.advance(Duration::from_millis(1)), 1);
        assert_eq!(*log.borrow(), vec!["animate", "done"]);
        assert_eq!(timeline.now(), Duration::from_millis(400));
    }

    #[test]
    fn completions_fire_in_deadline_order() {
        let timeline = Timeline::new();
        let log = recorder();
        for (name, ms) in [("slow", 300), ("fast", 100), ("tie", 100)] {
            let log = log.clone();
            timeline.animate(
                Duration::from_millis(ms),
                Box::new(|| {}),
                Box::new(move |_| log.borrow_mut().push(name.into())),
            );
        }
        assert_eq!(timeline.advance(Duration::from_secs(1)), 3);
        assert_eq!(*log.borrow(), vec!["fast", "tie", "slow"]);
    }

    #[test]
    fn nested_scheduling_within_window() {
        let timeline = Rc::new(Timeline::new());
        let log = recorder();
        let (inner_timeline, outer_log) = (timeline.clone(), log.clone());
        timeline.animate(
            Duration::from_millis(100),
            Box::new(|| {}),
            Box::new(move |_| {
                outer_log.borrow_mut().push("first".into());
                let log = outer_log.clone();
                inner_timeline.animate(
                    Duration::from_millis(100),
                    Box::new(|| {}),
                    Box::new(move |_| log.borrow_mut().push("second".into())),
                );
            }),
        );
        assert_eq!(timeline.advance(Duration::from_millis(150)), 1);
        assert_eq!(timeline.pending_count(), 1);
        assert_eq!(timeline.advance(Duration::from_millis(50)), 1);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn run_until_idle_drains_chains() {
        let timeline = Rc::new(Timeline::new());
        let inner = timeline.clone();
        timeline.animate(
            Duration::from_millis(400),
            Box::new(|| {}),
            Box::new(move |_| inner.animate(Duration::from_millis(400), Box::new(|| {}), Box::new(|_| {}))),
        );
        assert_eq!(timeline.run_until_idle(), 2);
        assert_eq!(timeline.now(), Duration::from_millis(800));
        assert_eq!(timeline.pending_count(), 0);
    }
}
