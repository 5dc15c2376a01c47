//! Integration tests for dialtrack host-testable logic.
//!
//! Drives the app only through queued events, the way the firmware's
//! UI task does.

use dialtrack::app::{Event, Outcome};
use dialtrack::dialog::{Choice, Transition};
use dialtrack::tracker::{Action, PendingAction};
use dialtrack::ui::InputEvent::{Confirm, RotateLeft, RotateRight};
use dialtrack::{device_app, view, DeviceApp};

fn ticks(app: &mut DeviceApp, count: usize) {
    for _ in 0..count {
        app.handle(Event::Tick);
    }
}

/// Open a dialog on the cursor and answer Yes.
fn confirm_yes(app: &mut DeviceApp) -> Outcome {
    app.handle(Confirm.into());
    app.handle(Confirm.into())
}

#[test]
fn start_first_activity_from_fresh_boot() {
    let mut app = device_app();

    let opened = app.handle(Confirm.into());
    assert_eq!(
        opened,
        Outcome::Input(Transition::Opened(PendingAction {
            action: Action::Start,
            target: 0
        }))
    );
    let dialog = app.dialog_view().expect("dialog should be open");
    assert_eq!(dialog.choice, Choice::Yes);
    assert_eq!(view::prompt_text(&dialog.prompt).as_str(), "Start Work?");

    app.handle(Confirm.into());
    let snap = app.snapshot();
    assert!(snap.activities[0].is_running());
    assert_eq!(snap.activities[0].current_ms(), 0);
    assert!(app.dialog_view().is_none());
}

#[test]
fn tick_advances_running_session_only() {
    let mut app = device_app();
    confirm_yes(&mut app);
    ticks(&mut app, 25);
    assert_eq!(app.snapshot().activities[0].current_ms(), 2500);

    app.handle(Event::Tick);
    let snap = app.snapshot();
    assert_eq!(snap.activities[0].current_ms(), 2600);
    assert_eq!(snap.activities[0].total_ms(), 0);
}

#[test]
fn switching_activity_folds_previous_session() {
    let mut app = device_app();
    confirm_yes(&mut app);
    ticks(&mut app, 30);

    app.handle(RotateRight.into());
    let opened = app.handle(Confirm.into());
    assert_eq!(
        opened,
        Outcome::Input(Transition::Opened(PendingAction {
            action: Action::Start,
            target: 1
        }))
    );
    app.handle(Confirm.into());

    let snap = app.snapshot();
    assert!(!snap.activities[0].is_running());
    assert_eq!(snap.activities[0].total_ms(), 3000);
    assert_eq!(snap.activities[0].current_ms(), 0);
    assert!(snap.activities[1].is_running());
    assert_eq!(snap.activities[1].current_ms(), 0);
    assert_eq!(snap.running, Some(1));
}

#[test]
fn declining_stop_leaves_activity_running() {
    let mut app = device_app();
    app.drain([Event::Input(RotateRight), Event::Input(RotateRight)]);
    confirm_yes(&mut app);
    ticks(&mut app, 12);

    let opened = app.handle(Confirm.into());
    assert_eq!(
        opened,
        Outcome::Input(Transition::Opened(PendingAction {
            action: Action::Stop,
            target: 2
        }))
    );
    assert_eq!(
        app.handle(RotateRight.into()),
        Outcome::Input(Transition::Highlighted(Choice::No))
    );
    assert_eq!(
        app.handle(Confirm.into()),
        Outcome::Input(Transition::Cancelled { stale: false })
    );

    let snap = app.snapshot();
    assert!(app.dialog_view().is_none());
    assert!(snap.activities[2].is_running());
    assert_eq!(snap.activities[2].current_ms(), 1200);
}

#[test]
fn cursor_wraps_from_last_to_first() {
    let mut app = device_app();
    app.drain([Event::Input(RotateRight); 4]);
    assert_eq!(app.snapshot().cursor, 4);
    app.handle(RotateRight.into());
    assert_eq!(app.snapshot().cursor, 0);
}

#[test]
fn dialog_gates_all_mutation_until_confirm() {
    let mut app = device_app();
    app.handle(RotateLeft.into());
    app.handle(Confirm.into());
    let opened_at = app.snapshot();

    app.drain([
        Event::Input(RotateRight),
        Event::Input(RotateLeft),
        Event::Input(RotateRight),
        Event::Input(RotateLeft),
    ]);
    assert_eq!(app.snapshot(), opened_at);
    assert_eq!(app.dialog_view().map(|d| d.choice), Some(Choice::Yes));

    app.handle(Confirm.into());
    assert_eq!(app.snapshot().running, Some(4));
}

#[test]
fn stop_commits_session_into_total() {
    let mut app = device_app();
    confirm_yes(&mut app);
    ticks(&mut app, 7);

    let outcome = confirm_yes(&mut app);
    assert_eq!(
        outcome,
        Outcome::Input(Transition::Committed(PendingAction {
            action: Action::Stop,
            target: 0
        }))
    );
    let snap = app.snapshot();
    assert_eq!(snap.running, None);
    assert_eq!(snap.activities[0].total_ms(), 700);
    assert_eq!(view::active_task_label(&snap).as_str(), "No Active Task");
}

#[test]
fn dialog_state_is_idle_after_every_close() {
    let mut app = device_app();
    for answer_no in [false, true, false] {
        app.handle(Confirm.into());
        if answer_no {
            app.handle(RotateRight.into());
        }
        app.handle(Confirm.into());
        assert!(app.dialog_view().is_none());
    }
    // Started, declined stop, then stopped.
    assert_eq!(app.snapshot().running, None);
}
