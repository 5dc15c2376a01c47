//! Timer app - the single owner of all tracker and dialog state.
//!
//! Input tasks and the tick timer never touch this state. They enqueue
//! [`Event`]s, and one consumer feeds them through [`TimerApp::handle`]
//! strictly in arrival order, then redraws from [`TimerApp::snapshot`] and
//! [`TimerApp::dialog_view`].

use crate::config::TICK_QUANTUM_MS;
use crate::dialog::{DialogController, DialogView, Transition};
use crate::tracker::{Snapshot, Tracker};
use crate::ui::InputEvent;

/// Everything the dispatch loop consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Decoded knob or button input.
    Input(InputEvent),
    /// One tick quantum has elapsed.
    Tick,
}

impl From<InputEvent> for Event {
    fn from(input: InputEvent) -> Self {
        Event::Input(input)
    }
}

/// Result of handling one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    Input(Transition),
    /// Tick consumed; `running` is false when nothing was timing.
    Ticked { running: bool },
}

impl Outcome {
    /// Whether the screen is now out of date.
    pub fn needs_redraw(&self) -> bool {
        match self {
            Outcome::Input(_) => true,
            Outcome::Ticked { running } => *running,
        }
    }
}

pub struct TimerApp<const N: usize> {
    tracker: Tracker<N>,
    dialog: DialogController,
    quantum_ms: u64,
}

impl<const N: usize> TimerApp<N> {
    /// Fresh state with the default tick quantum.
    pub fn new(names: [&'static str; N]) -> Self {
        Self::with_quantum(names, TICK_QUANTUM_MS)
    }

    pub fn with_quantum(names: [&'static str; N], quantum_ms: u64) -> Self {
        Self {
            tracker: Tracker::new(names),
            dialog: DialogController::new(),
            quantum_ms,
        }
    }

    pub fn handle(&mut self, event: Event) -> Outcome {
        match event {
            Event::Input(input) => Outcome::Input(self.dialog.handle(&mut self.tracker, input)),
            Event::Tick => {
                self.tracker.tick(self.quantum_ms);
                Outcome::Ticked {
                    running: self.tracker.running().is_some(),
                }
            }
        }
    }

    /// Handle a batch in order. Returns true if any event needs a redraw.
    pub fn drain<I>(&mut self, events: I) -> bool
    where
        I: IntoIterator<Item = Event>,
    {
        events
            .into_iter()
            .fold(false, |redraw, event| self.handle(event).needs_redraw() | redraw)
    }

    pub fn snapshot(&self) -> Snapshot<N> {
        self.tracker.snapshot()
    }

    /// `None` while no confirmation is pending.
    pub fn dialog_view(&self) -> Option<DialogView> {
        self.dialog.view(&self.tracker)
    }

    pub fn tracker(&self) -> &Tracker<N> {
        &self.tracker
    }

    pub fn quantum_ms(&self) -> u64 {
        self.quantum_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{Action, PendingAction};

    fn app() -> TimerApp<3> {
        TimerApp::new(["A", "B", "C"])
    }

    #[test]
    fn tick_uses_configured_quantum() {
        let mut a = TimerApp::with_quantum(["A", "B"], 250);
        a.drain([Event::Input(InputEvent::Confirm); 2]);
        a.handle(Event::Tick);
        a.handle(Event::Tick);
        assert_eq!(a.snapshot().activities[0].current_ms(), 500);
    }

    #[test]
    fn idle_tick_needs_no_redraw() {
        let mut a = app();
        let outcome = a.handle(Event::Tick);
        assert_eq!(outcome, Outcome::Ticked { running: false });
        assert!(!outcome.needs_redraw());
    }

    #[test]
    fn running_tick_needs_redraw() {
        let mut a = app();
        a.drain([Event::Input(InputEvent::Confirm); 2]);
        assert!(a.handle(Event::Tick).needs_redraw());
    }

    #[test]
    fn every_input_needs_redraw() {
        let mut a = app();
        for input in [
            InputEvent::RotateRight,
            InputEvent::Confirm,
            InputEvent::RotateRight,
            InputEvent::RotateLeft,
            InputEvent::Confirm,
        ] {
            assert!(a.handle(input.into()).needs_redraw());
        }
    }

    #[test]
    fn drain_reports_any_redraw() {
        let mut a = app();
        assert!(!a.drain([Event::Tick, Event::Tick]));
        assert!(a.drain([Event::Tick, Event::Input(InputEvent::RotateLeft), Event::Tick]));
        assert_eq!(a.snapshot().cursor, 2);
    }

    #[test]
    fn ticks_interleave_with_dialog() {
        let mut a = app();
        a.drain([Event::Input(InputEvent::Confirm); 2]);
        // Dialog open for a stop while time keeps running.
        a.handle(InputEvent::Confirm.into());
        a.drain([Event::Tick, Event::Tick, Event::Tick]);
        assert_eq!(a.snapshot().activities[0].current_ms(), 300);

        let outcome = a.handle(InputEvent::Confirm.into());
        assert_eq!(
            outcome,
            Outcome::Input(Transition::Committed(PendingAction {
                action: Action::Stop,
                target: 0
            }))
        );
        assert_eq!(a.snapshot().activities[0].total_ms(), 300);
        assert_eq!(a.dialog_view(), None);
    }
}
