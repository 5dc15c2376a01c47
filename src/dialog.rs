//! Confirmation dialog controller.
//!
//! Sits between knob/button input and the tracker. Nothing starts or
//! stops without an explicit Yes:
//!
//! ```text
//!            Confirm (open, choice = Yes)
//!   Idle ─────────────────────────────────▶ Confirming
//!    ▲  ◀─────────────────────────────────    │  Rotate: Yes ◀ / ▶ No
//!    │     Confirm (commit on Yes,            │
//!    │              drop on No)               │
//!    └── Rotate: move cursor                  ┘
//! ```

use crate::tracker::{Action, Direction, PendingAction, Tracker};
use crate::ui::InputEvent;

/// Highlighted dialog button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Choice {
    #[default]
    Yes,
    No,
}

/// A dialog on screen, waiting for Confirm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Confirmation {
    pub pending: PendingAction,
    pub choice: Choice,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialogState {
    #[default]
    Idle,
    Confirming(Confirmation),
}

/// Prompt content; the renderer turns it into text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Prompt {
    pub action: Action,
    pub name: &'static str,
}

/// What the renderer needs to draw the dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DialogView {
    pub prompt: Prompt,
    pub choice: Choice,
}

/// Visible effect of one input event. Every variant needs a redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Selection moved; holds the new cursor.
    CursorMoved(usize),
    /// Dialog opened for this action, Yes highlighted.
    Opened(PendingAction),
    /// Highlight set while the dialog is open.
    Highlighted(Choice),
    /// User said Yes and the tracker applied the action.
    Committed(PendingAction),
    /// Dialog closed without touching the tracker. `stale` is set when the
    /// target changed state after the dialog opened.
    Cancelled { stale: bool },
}

#[derive(Default)]
pub struct DialogController {
    state: DialogState,
}

impl DialogController {
    pub const fn new() -> Self {
        Self {
            state: DialogState::Idle,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Confirming(_))
    }

    /// Apply one input event.
    pub fn handle<const N: usize>(
        &mut self,
        tracker: &mut Tracker<N>,
        event: InputEvent,
    ) -> Transition {
        match (self.state, event) {
            (DialogState::Idle, InputEvent::RotateLeft) => {
                tracker.move_cursor(Direction::Left);
                Transition::CursorMoved(tracker.cursor())
            }
            (DialogState::Idle, InputEvent::RotateRight) => {
                tracker.move_cursor(Direction::Right);
                Transition::CursorMoved(tracker.cursor())
            }
            (DialogState::Idle, InputEvent::Confirm) => self.open(tracker),
            (DialogState::Confirming(mut confirmation), InputEvent::RotateLeft) => {
                confirmation.choice = Choice::Yes;
                self.state = DialogState::Confirming(confirmation);
                Transition::Highlighted(Choice::Yes)
            }
            (DialogState::Confirming(mut confirmation), InputEvent::RotateRight) => {
                confirmation.choice = Choice::No;
                self.state = DialogState::Confirming(confirmation);
                Transition::Highlighted(Choice::No)
            }
            (DialogState::Confirming(confirmation), InputEvent::Confirm) => {
                self.state = DialogState::Idle;
                match confirmation.choice {
                    Choice::Yes => commit(tracker, confirmation.pending),
                    Choice::No => {
                        debug!("Dialog dismissed");
                        Transition::Cancelled { stale: false }
                    }
                }
            }
        }
    }

    /// The open dialog, resolved against the tracker's activity names.
    pub fn view<const N: usize>(&self, tracker: &Tracker<N>) -> Option<DialogView> {
        let DialogState::Confirming(confirmation) = self.state else {
            return None;
        };
        let activity = tracker.activity(confirmation.pending.target).ok()?;
        Some(DialogView {
            prompt: Prompt {
                action: confirmation.pending.action,
                name: activity.name(),
            },
            choice: confirmation.choice,
        })
    }

    fn open<const N: usize>(&mut self, tracker: &Tracker<N>) -> Transition {
        let cursor = tracker.cursor();
        let pending = match tracker.begin_toggle(cursor) {
            Ok(pending) => pending,
            Err(e) => {
                // The cursor is always in range; stay idle if it somehow isn't.
                warn!("Cannot open dialog: {}", e);
                debug_assert!(false, "cursor out of range");
                return Transition::Cancelled { stale: false };
            }
        };

        self.state = DialogState::Confirming(Confirmation {
            pending,
            choice: Choice::Yes,
        });
        debug!("Dialog opened: {} {}", pending.action, pending.target);
        Transition::Opened(pending)
    }
}

/// Apply a confirmed action, unless the target no longer matches it.
fn commit<const N: usize>(tracker: &mut Tracker<N>, pending: PendingAction) -> Transition {
    let Ok(activity) = tracker.activity(pending.target) else {
        return Transition::Cancelled { stale: true };
    };

    let still_valid = match pending.action {
        Action::Start => !activity.is_running(),
        Action::Stop => activity.is_running(),
    };
    if !still_valid {
        warn!(
            "Dropping stale {} for {}",
            pending.action,
            activity.name()
        );
        return Transition::Cancelled { stale: true };
    }

    let result = match pending.action {
        Action::Start => tracker.commit_start(pending.target),
        Action::Stop => tracker.commit_stop(pending.target),
    };

    match result {
        Ok(()) => Transition::Committed(pending),
        Err(e) => {
            warn!("Commit failed: {}", e);
            debug_assert!(false, "re-validated commit failed");
            Transition::Cancelled { stale: true }
        }
    }
}
