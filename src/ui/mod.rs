//! User interface subsystem - OLED display + rotary dial.
//!
//! Input tasks push [`Event`]s into one channel; the UI task is the only
//! consumer and the only owner of the [`TimerApp`]. It drains whatever is
//! queued, then redraws once if anything changed.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Input**: QDEC rotary encoder + push switch with debouncing

pub mod display;
pub mod input;

use dialtrack::config::EVENT_QUEUE_DEPTH;
use dialtrack::{DeviceApp, Event};
use defmt::{debug, info};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

/// Queue between producers (knob, button, ticker) and the UI task.
pub type EventChannel = Channel<CriticalSectionRawMutex, Event, EVENT_QUEUE_DEPTH>;
pub type EventSender = Sender<'static, CriticalSectionRawMutex, Event, EVENT_QUEUE_DEPTH>;
pub type EventReceiver = Receiver<'static, CriticalSectionRawMutex, Event, EVENT_QUEUE_DEPTH>;

/// Run the dispatch loop forever.
pub async fn ui_task<I2C>(
    mut app: DeviceApp,
    mut screen: display::Display<I2C>,
    rx: EventReceiver,
) -> !
where
    I2C: embedded_hal::i2c::I2c,
{
    info!("UI: ready");
    display::draw(&mut screen, &app.snapshot(), app.dialog_view().as_ref());

    loop {
        let first = rx.receive().await;
        let mut redraw = app.handle(first).needs_redraw();

        // Apply everything already queued before paying for a flush.
        while let Ok(event) = rx.try_receive() {
            redraw |= app.handle(event).needs_redraw();
        }

        if redraw {
            debug!("UI: redraw");
            display::draw(&mut screen, &app.snapshot(), app.dialog_view().as_ref());
        }
    }
}
