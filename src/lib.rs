//! Library interface for dialtrack.
//!
//! Holds the hardware-independent core - activity tracker, confirmation
//! dialog, event dispatch, and text layout - so it can be tested on the
//! host (no embedded hardware required).
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and drives this crate from its UI task.

#![cfg_attr(not(test), no_std)]

// This must go first so the logging macros are visible to every module.
mod fmt;

pub mod app;
pub mod config;
pub mod dialog;
pub mod error;
pub mod tracker;
pub mod view;

pub use app::{Event, Outcome, TimerApp};
pub use error::Error;

// ═══════════════════════════════════════════════════════════════════════════
// UI input Re-exports
// ═══════════════════════════════════════════════════════════════════════════

#[path = "ui/input_logic.rs"]
mod ui_input_logic_impl;

pub mod ui {
    /// Abstract input events, already decoded from the knob and button.
    ///
    /// Simplified to what a rotary dial with a push switch can express:
    ///   - RotateLeft/RotateRight: one detent either way
    ///   - Confirm: knob pressed
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum InputEvent {
        RotateLeft,
        RotateRight,
        Confirm,
    }

    pub mod input_logic {
        pub use crate::ui_input_logic_impl::{knob_steps, select_next, select_prev};
    }
}

/// The tracker as configured for the device.
pub type DeviceApp = TimerApp<{ config::ACTIVITY_COUNT }>;

/// Build the app with the configured activity list.
pub fn device_app() -> DeviceApp {
    TimerApp::new(config::ACTIVITY_NAMES)
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
