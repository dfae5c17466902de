//! Screen renderer: turns the core view model into framebuffer ink.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_9X15},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use cuecard_core::{
    config::LabelAlign,
    render::Screen,
    text_policy::write_u16_ascii,
};

use crate::display::{Frame, HEIGHT, WIDTH};

pub trait FrameRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut Frame);
}

/// Default presenter renderer: slide label in its configured corner,
/// note lines at their pre-computed positions, and an explicit
/// diagnostic when no slide resolves.
#[derive(Debug, Default)]
pub struct NotesRenderer;

impl NotesRenderer {
    pub const fn new() -> Self {
        Self
    }
}

impl FrameRenderer for NotesRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut Frame) {
        frame.clear();

        match screen {
            Screen::Notes { plan } => {
                let label_align = match plan.label_align {
                    LabelAlign::Left => Alignment::Left,
                    LabelAlign::Right => Alignment::Right,
                };
                draw_text(frame, plan.label.text, plan.label.x, plan.label.y, label_align);

                for line in plan.lines.iter() {
                    draw_text(frame, line.text, line.x, line.y, Alignment::Left);
                }
            }
            Screen::NoSlide {
                requested,
                deck_empty,
            } => {
                let line1 = if deck_empty { "DECK EMPTY" } else { "NO SLIDE" };

                let mut digits = [0u8; 5];
                let len = write_u16_ascii(requested, &mut digits);
                let mut line2 = heapless::String::<16>::new();
                let _ = line2.push_str("INDEX ");
                let _ = line2.push_str(core::str::from_utf8(&digits[..len]).unwrap_or("?"));

                let center_x = (WIDTH / 2) as i32;
                let center_y = (HEIGHT / 2) as i32;
                draw_text(frame, line1, center_x, center_y - 18, Alignment::Center);
                draw_text(frame, &line2, center_x, center_y + 4, Alignment::Center);
            }
        }
    }
}

fn draw_text(frame: &mut Frame, text: &str, x: i32, y: i32, alignment: Alignment) {
    let ink = MonoTextStyle::new(&FONT_9X15, BinaryColor::On);
    let style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Top)
        .build();

    let _ = Text::with_text_style(text, Point::new(x, y), ink, style).draw(frame);
}
