//! A single timeable activity.

/// Milliseconds per minute, for list labels.
const MS_PER_MINUTE: u64 = 60 * 1000;

/// One named task with its accumulated and in-progress time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Activity {
    name: &'static str,
    total_ms: u64,
    current_ms: u64,
    running: bool,
}

impl Activity {
    /// Create a stopped activity with no recorded time.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            total_ms: 0,
            current_ms: 0,
            running: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Time accumulated over all completed sessions (ms).
    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    /// Time accrued in the session in progress (ms). Zero when stopped.
    pub fn current_ms(&self) -> u64 {
        self.current_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whole minutes shown next to the name in the activity list.
    ///
    /// Completed and in-progress minutes are counted separately, so a
    /// partial minute from each never adds up to an extra one.
    pub fn elapsed_minutes(&self) -> u64 {
        self.total_ms / MS_PER_MINUTE + self.current_ms / MS_PER_MINUTE
    }

    pub(super) fn start(&mut self) {
        self.running = true;
        self.current_ms = 0;
    }

    /// Fold the current session into the total and clear the running flag.
    /// Returns the length of the session that just ended.
    pub(super) fn stop(&mut self) -> u64 {
        let session = self.current_ms;
        self.total_ms = self.total_ms.saturating_add(session);
        self.current_ms = 0;
        self.running = false;
        session
    }

    pub(super) fn advance(&mut self, quantum_ms: u64) {
        self.current_ms = self.current_ms.saturating_add(quantum_ms);
    }
}
