//! Application-wide constants and compile-time configuration.
//!
//! All activity names, timing parameters, and pin assignments live here
//! so they can be tuned in one place.

// Activities

/// Number of activities on the dial.
pub const ACTIVITY_COUNT: usize = 5;

/// Activity labels, in dial order. Must be unique.
pub const ACTIVITY_NAMES: [&str; ACTIVITY_COUNT] = ["Work", "Study", "Exercise", "Reading", "Break"];

/// Longest activity name we can render (bytes).
pub const ACTIVITY_NAME_MAX: usize = 16;

// Timing

/// Time added to the running activity per tick (ms).
pub const TICK_QUANTUM_MS: u64 = 100;

/// Depth of the input/tick event channel drained by the UI task.
pub const EVENT_QUEUE_DEPTH: usize = 8;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Knob A (QDEC)  → P0.31
//   Knob B (QDEC)  → P0.30
//   Knob push      → P0.24
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Quadrature counts per physical detent on the knob.
pub const KNOB_COUNTS_PER_DETENT: i16 = 1;

// Display

/// Rows of the activity list visible at once (selection in the middle).
pub const LIST_VISIBLE_ROWS: usize = 3;

/// Vertical pitch of one text row on the OLED (px).
pub const ROW_HEIGHT_PX: i32 = 10;
