//! dialtrack firmware entry point (nRF52840).
//!
//! Task layout:
//!
//! ```text
//!   knob_task ──┐
//!  button_task ─┼──▶ EVENTS (channel) ──▶ ui_task ──▶ SSD1306
//!   tick_task ──┘                           owns TimerApp
//! ```
//!
//! Producers only enqueue; `ui_task` is the single consumer, so all
//! tracker and dialog state lives on one task with no locking.

#![no_std]
#![no_main]

mod ui;

use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::peripherals::{QDEC, TWISPI0};
use embassy_nrf::qdec::{self, Qdec};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::channel::Channel;
use ui::EventChannel;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    QDEC => qdec::InterruptHandler<peripherals::QDEC>;
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

static EVENTS: EventChannel = Channel::new();

#[embassy_executor::task]
async fn knob(qdec: Qdec<'static, QDEC>) {
    ui::input::knob_task(qdec, EVENTS.sender()).await
}

#[embassy_executor::task]
async fn button(pin: AnyPin) {
    ui::input::button_task(pin, EVENTS.sender()).await
}

#[embassy_executor::task]
async fn ticker() {
    ui::input::tick_task(EVENTS.sender()).await
}

#[embassy_executor::task]
async fn ui_main(screen: ui::display::Display<Twim<'static, TWISPI0>>) {
    ui::ui_task(dialtrack::device_app(), screen, EVENTS.receiver()).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("dialtrack starting");

    let qdec = Qdec::new(p.QDEC, Irqs, p.P0_31, p.P0_30, qdec::Config::default());
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let screen = ui::display::init(i2c);

    spawner.must_spawn(ui_main(screen));
    spawner.must_spawn(knob(qdec));
    spawner.must_spawn(button(p.P0_24.degrade()));
    spawner.must_spawn(ticker());
}
