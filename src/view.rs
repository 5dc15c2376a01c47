//! Text and layout helpers for the renderer.
//!
//! Pure functions over [`Snapshot`] and [`DialogView`] so the OLED code
//! only has to place strings. All strings are fixed-capacity; anything
//! that does not fit is truncated.

use core::fmt::Write;

use heapless::String;

use crate::dialog::{Choice, DialogView, Prompt};
use crate::tracker::{Action, Activity, Snapshot};

/// Capacity of every rendered line.
pub const LINE_CAPACITY: usize = 32;

pub type Line = String<LINE_CAPACITY>;

/// List entry: `"Work [12m]"`.
pub fn activity_label(activity: &Activity) -> Line {
    let mut s = Line::new();
    let _ = write!(s, "{} [{}m]", activity.name(), activity.elapsed_minutes());
    s
}

/// Header over the time panel.
pub fn active_task_label<const N: usize>(snapshot: &Snapshot<N>) -> Line {
    let mut s = Line::new();
    match snapshot.active() {
        Some(active) => {
            let _ = write!(s, "Active: {}", active.name());
        }
        None => {
            let _ = s.push_str("No Active Task");
        }
    }
    s
}

/// Time panel: the running activity's session clock.
pub fn session_panel<const N: usize>(snapshot: &Snapshot<N>) -> Line {
    match snapshot.active() {
        Some(active) => clock(active.current_ms()),
        None => {
            let mut s = Line::new();
            let _ = s.push_str("No Active Session");
            s
        }
    }
}

/// `HH:MM:SS` from milliseconds. Hours keep counting past 99.
pub fn clock(ms: u64) -> Line {
    let secs = ms / 1000;
    let mut s = Line::new();
    let _ = write!(
        s,
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    );
    s
}

/// Dialog question: `"Start Work?"` / `"Stop Work?"`.
pub fn prompt_text(prompt: &Prompt) -> Line {
    let verb = match prompt.action {
        Action::Start => "Start",
        Action::Stop => "Stop",
    };
    let mut s = Line::new();
    let _ = write!(s, "{} {}?", verb, prompt.name);
    s
}

/// Button captions with the highlighted one bracketed.
pub fn choice_labels(view: &DialogView) -> (&'static str, &'static str) {
    match view.choice {
        Choice::Yes => ("[Yes]", " No "),
        Choice::No => (" Yes ", "[No]"),
    }
}

/// Position of `index` relative to the cursor on a circular list.
///
/// The selected row is 0; neighbours are negative above and positive
/// below, wrapping so the list scrolls forever in both directions.
pub fn row_offset(index: usize, cursor: usize, len: usize) -> i32 {
    let len = len as i32;
    let half = len / 2;
    let mut offset = index as i32 - cursor as i32;
    if offset < -half {
        offset += len;
    }
    if offset > half {
        offset -= len;
    }
    offset
}

/// Indices of the rows to draw, top to bottom, with the cursor centred.
///
/// `R` should be odd. Rows that would repeat an activity (short lists)
/// are left out.
pub fn visible_rows<const N: usize, const R: usize>(
    snapshot: &Snapshot<N>,
) -> heapless::Vec<(i32, usize), R> {
    let reach = (R / 2) as i32;
    let mut rows: heapless::Vec<(i32, usize), R> = heapless::Vec::new();
    for offset in -reach..=reach {
        let hit = (0..N).find(|&i| row_offset(i, snapshot.cursor, N) == offset);
        if let Some(index) = hit {
            let _ = rows.push((offset, index));
        }
    }
    rows
}
