use druid::Color;
use image::Rgba;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Rgb(pub(crate) u8, pub(crate) u8, pub(crate) u8);

impl Rgb {
    pub(crate) const fn to_color(self) -> Color {
        Color::rgb8(self.0, self.1, self.2)
    }

    pub(crate) fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.0, self.1, self.2, 255])
    }
}

pub(crate) const CANVAS_BACKGROUND: Rgb = Rgb(0xFF, 0xFF, 0xFF);
pub(crate) const GRID: Rgb = Rgb(0xDE, 0xE2, 0xE6);
pub(crate) const AXIS: Rgb = Rgb(0x49, 0x50, 0x57);
pub(crate) const CELL: Rgb = Rgb(0x00, 0x7B, 0xFF);
pub(crate) const IDEAL_LINE: Rgb = Rgb(0xDC, 0x35, 0x45);
pub(crate) const CELL_LABEL: Rgb = Rgb(0xAD, 0xB5, 0xBD);
pub(crate) const CELL_LABEL_AXIS: Rgb = Rgb(0x49, 0x50, 0x57);
pub(crate) const CELL_LABEL_HIGHLIGHTED: Rgb = Rgb(0xFF, 0xFF, 0xFF);
pub(crate) const TEXT: Rgb = Rgb(0x21, 0x25, 0x29);

pub(crate) const CELL_INSET: f64 = 2.0;
pub(crate) const IDEAL_LINE_WIDTH: f64 = 3.0;
pub(crate) const IDEAL_LINE_DASH: &[f64] = &[10.0, 5.0];
pub(crate) const CELL_LABEL_SIZE: f64 = 5.0;
pub(crate) const AXIS_LABEL_SIZE: f64 = 7.0;
