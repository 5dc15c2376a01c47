//! Unified error type for dialtrack.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (with the `defmt` feature) for efficient
//! on-target logging.

/// Invariant violations reported by the activity tracker.
///
/// Never shown to the user. The dialog controller re-validates before
/// committing, so hitting one of these is a wiring bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Index outside `[0, activity count)`.
    InvalidIndex(usize),

    /// Tried to stop an activity that is not running.
    NotRunning(usize),
}

pub type Result<T> = core::result::Result<T, Error>;
