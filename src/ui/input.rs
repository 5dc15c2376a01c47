//! Dial input - rotary encoder and push switch.
//!
//! - Knob   - QDEC peripheral, one event per detent
//! - Button - knob push switch (active-low with internal pull-up)
//!
//! Both tasks only translate hardware activity into [`InputEvent`]s and
//! queue them; no timer state is touched here.

use crate::ui::EventSender;
use dialtrack::config::{BUTTON_DEBOUNCE_MS, KNOB_COUNTS_PER_DETENT, TICK_QUANTUM_MS};
use dialtrack::ui::input_logic::knob_steps;
use dialtrack::ui::InputEvent;
use dialtrack::Event;
use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_nrf::qdec::{Instance, Qdec};
use embassy_time::{Duration, Ticker, Timer};

/// Run the push-switch polling loop.
///
/// Waits for the pin to go low (pressed), debounces, sends `Confirm`,
/// then waits for release before repeating.
pub async fn button_task(pin: AnyPin, tx: EventSender) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            info!("Button: confirm");
            tx.send(Event::Input(InputEvent::Confirm)).await;

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}

/// Read the encoder and emit one rotate event per detent.
pub async fn knob_task<T: Instance>(mut qdec: Qdec<'static, T>, tx: EventSender) -> ! {
    let mut residue: i16 = 0;

    loop {
        residue = residue.saturating_add(qdec.read().await);

        if let Some((event, steps)) = knob_steps(residue, KNOB_COUNTS_PER_DETENT) {
            info!("Knob: {} x{}", event, steps);
            residue %= KNOB_COUNTS_PER_DETENT.max(1);
            for _ in 0..steps {
                tx.send(Event::Input(event)).await;
            }
        }
    }
}

/// Emit a tick every quantum.
pub async fn tick_task(tx: EventSender) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(TICK_QUANTUM_MS));
    loop {
        ticker.next().await;
        tx.send(Event::Tick).await;
    }
}
