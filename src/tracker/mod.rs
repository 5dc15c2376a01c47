//! Activity tracker - the timer state behind the dial.
//!
//! Owns a fixed list of activities, the selection cursor, and the index
//! of the single running activity. Start/stop go through two phases:
//!
//! 1. **begin** - a pure query describing what would happen, used to
//!    fill in a confirmation dialog.
//! 2. **commit** - applies the change once the user said Yes.
//!
//! At most one activity runs at a time. Starting another one folds the
//! previous session into its total first.

mod activity;


pub use activity::Activity;

use crate::error::{Error, Result};
use crate::ui::input_logic::{select_next, select_prev};

/// Knob rotation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Left,
    Right,
}

/// What a confirmed dialog will do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    Start,
    Stop,
}

/// An action bound to the activity it targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendingAction {
    pub action: Action,
    pub target: usize,
}

/// Read-only copy of the tracker for the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot<const N: usize> {
    pub activities: [Activity; N],
    pub cursor: usize,
    pub running: Option<usize>,
}

impl<const N: usize> Snapshot<N> {
    /// The running activity, if any.
    pub fn active(&self) -> Option<&Activity> {
        self.running.map(|i| &self.activities[i])
    }
}

pub struct Tracker<const N: usize> {
    activities: [Activity; N],
    cursor: usize,
    running: Option<usize>,
}

impl<const N: usize> Tracker<N> {
    const NON_EMPTY: () = assert!(N > 0, "tracker needs at least one activity");

    /// Create a tracker with every activity stopped and the cursor on the
    /// first one.
    pub fn new(names: [&'static str; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        debug_assert!(names_unique(&names), "activity names must be unique");

        Self {
            activities: names.map(Activity::new),
            cursor: 0,
            running: None,
        }
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the running activity.
    pub fn running(&self) -> Option<usize> {
        self.running
    }

    pub fn activity(&self, index: usize) -> Result<&Activity> {
        self.activities.get(index).ok_or(Error::InvalidIndex(index))
    }

    /// Move the selection one step, wrapping at both ends.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = match direction {
            Direction::Left => select_prev(self.cursor, N),
            Direction::Right => select_next(self.cursor, N),
        };
        debug!("Cursor -> {}", self.cursor);
    }

    /// Describe starting the activity at `index`. Does not change state.
    pub fn begin_start(&self, index: usize) -> Result<PendingAction> {
        self.activity(index)?;
        Ok(PendingAction {
            action: Action::Start,
            target: index,
        })
    }

    /// Describe stopping the activity at `index`. Does not change state.
    pub fn begin_stop(&self, index: usize) -> Result<PendingAction> {
        self.activity(index)?;
        Ok(PendingAction {
            action: Action::Stop,
            target: index,
        })
    }

    /// Stop for the running activity, start for anything else.
    pub fn begin_toggle(&self, index: usize) -> Result<PendingAction> {
        if self.activity(index)?.is_running() {
            self.begin_stop(index)
        } else {
            self.begin_start(index)
        }
    }

    /// Make `index` the running activity.
    ///
    /// Whatever ran before is stopped first. Starting the activity that is
    /// already running leaves its session untouched.
    pub fn commit_start(&mut self, index: usize) -> Result<()> {
        self.activity(index)?;

        match self.running {
            Some(current) if current == index => return Ok(()),
            Some(previous) => {
                let session = self.activities[previous].stop();
                info!(
                    "Stopped {} after {} ms",
                    self.activities[previous].name(),
                    session
                );
            }
            None => {}
        }

        self.activities[index].start();
        self.running = Some(index);
        info!("Started {}", self.activities[index].name());
        Ok(())
    }

    /// Stop the running activity at `index`, folding its session into the total.
    pub fn commit_stop(&mut self, index: usize) -> Result<()> {
        if !self.activity(index)?.is_running() {
            return Err(Error::NotRunning(index));
        }

        let session = self.activities[index].stop();
        self.running = None;
        info!(
            "Stopped {} after {} ms",
            self.activities[index].name(),
            session
        );
        Ok(())
    }

    /// Advance the running activity by one quantum. No-op when idle.
    pub fn tick(&mut self, quantum_ms: u64) {
        if let Some(index) = self.running {
            self.activities[index].advance(quantum_ms);
        }
    }

    pub fn snapshot(&self) -> Snapshot<N> {
        Snapshot {
            activities: self.activities,
            cursor: self.cursor,
            running: self.running,
        }
    }
}

fn names_unique(names: &[&str]) -> bool {
    names
        .iter()
        .enumerate()
        .all(|(i, a)| names[i + 1..].iter().all(|b| a != b))
}
