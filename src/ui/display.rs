//! SSD1306 OLED display wrapper.
//!
//! Screen layout (128×64, 6×10 font):
//! ```text
//! y=10  Active: Work          <- active task header
//! y=22  00:12:34              <- session clock / "No Active Session"
//! y=36    Break [0m]          <- row above the selection
//! y=46  > Work [12m] *        <- selection (running marked with *)
//! y=56    Study [3m]          <- row below
//! ```
//! The confirmation dialog is drawn as a framed box over the list.

use dialtrack::config::{LIST_VISIBLE_ROWS, ROW_HEIGHT_PX};
use dialtrack::dialog::DialogView;
use dialtrack::tracker::Snapshot;
use dialtrack::view;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Baseline of the selected list row.
const LIST_CENTER_Y: i32 = 46;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Redraw the whole screen from the current state.
pub fn draw<I2C, const N: usize>(
    display: &mut Display<I2C>,
    snapshot: &Snapshot<N>,
    dialog: Option<&DialogView>,
) where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    draw_time_panel(display, snapshot);
    draw_activity_list(display, snapshot);
    if let Some(dialog) = dialog {
        draw_dialog(display, dialog);
    }

    let _ = display.flush();
}

fn draw_time_panel<I2C, const N: usize>(display: &mut Display<I2C>, snapshot: &Snapshot<N>)
where
    I2C: embedded_hal::i2c::I2c,
{
    let header = view::active_task_label(snapshot);
    let _ = Text::new(header.as_str(), Point::new(0, 10), text_style()).draw(display);

    let panel = view::session_panel(snapshot);
    let _ = Text::new(panel.as_str(), Point::new(0, 22), text_style()).draw(display);
}

fn draw_activity_list<I2C, const N: usize>(display: &mut Display<I2C>, snapshot: &Snapshot<N>)
where
    I2C: embedded_hal::i2c::I2c,
{
    for (offset, index) in view::visible_rows::<N, LIST_VISIBLE_ROWS>(snapshot) {
        let activity = &snapshot.activities[index];
        let marker = if offset == 0 { "> " } else { "  " };
        let running = if activity.is_running() { " *" } else { "" };

        let mut line: view::Line = view::Line::new();
        let _ = line.push_str(marker);
        let _ = line.push_str(view::activity_label(activity).as_str());
        let _ = line.push_str(running);

        let y = LIST_CENTER_Y + offset * ROW_HEIGHT_PX;
        let _ = Text::new(line.as_str(), Point::new(0, y), text_style()).draw(display);
    }
}

fn draw_dialog<I2C>(display: &mut Display<I2C>, dialog: &DialogView)
where
    I2C: embedded_hal::i2c::I2c,
{
    let frame: PrimitiveStyle<BinaryColor> = PrimitiveStyleBuilder::new()
        .stroke_color(BinaryColor::On)
        .stroke_width(1)
        .fill_color(BinaryColor::Off)
        .build();
    let _ = Rectangle::new(Point::new(8, 28), Size::new(112, 34))
        .into_styled(frame)
        .draw(display);

    let prompt = view::prompt_text(&dialog.prompt);
    let _ = Text::new(prompt.as_str(), Point::new(14, 40), text_style()).draw(display);

    let (yes, no) = view::choice_labels(dialog);
    let _ = Text::new(yes, Point::new(20, 56), text_style()).draw(display);
    let _ = Text::new(no, Point::new(76, 56), text_style()).draw(display);
}
