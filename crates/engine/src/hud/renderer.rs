use serde::Serialize;

use super::inventory::GemColor;
use super::status_bar::FaceIcon;

/// Font slot in the game's graphics container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FontId(pub u8);

/// Font the status bar draws every number and the location text with.
pub const STATUS_FONT: FontId = FontId(3);

/// The 16-colour EGA palette, in palette-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EgaColor {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Brown,
    LightGray,
    DarkGray,
    BrightBlue,
    BrightGreen,
    BrightCyan,
    BrightRed,
    BrightMagenta,
    BrightYellow,
    BrightWhite,
}

impl EgaColor {
    pub fn palette_index(self) -> u8 {
        self as u8
    }
}

/// 2D pictures the status bar places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Picture {
    StatusBar,
    Face(FaceIcon),
    /// Small radar gem shown for each collected gem.
    RadarGem(GemColor),
}

/// Drawing surface the status bar is composed onto. Later calls paint over
/// earlier ones.
pub trait StatusRenderer {
    fn render_picture(&mut self, picture: Picture, x: u16, y: u16);

    fn render_text_centered(&mut self, text: &str, font: FontId, color: EgaColor, x: u16, y: u16);

    /// Draws `value` right-aligned in a field `digit_width` digits wide.
    fn render_number(
        &mut self,
        value: u16,
        font: FontId,
        digit_width: u8,
        color: EgaColor,
        x: u16,
        y: u16,
    );
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCall {
    Picture {
        picture: Picture,
        x: u16,
        y: u16,
    },
    TextCentered {
        text: String,
        font: FontId,
        color: EgaColor,
        x: u16,
        y: u16,
    },
    Number {
        value: u16,
        font: FontId,
        digit_width: u8,
        color: EgaColor,
        x: u16,
        y: u16,
    },
}

/// Renderer that only remembers what it was asked to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl StatusRenderer for RecordingRenderer {
    fn render_picture(&mut self, picture: Picture, x: u16, y: u16) {
        self.calls.push(DrawCall::Picture { picture, x, y });
    }

    fn render_text_centered(&mut self, text: &str, font: FontId, color: EgaColor, x: u16, y: u16) {
        self.calls.push(DrawCall::TextCentered {
            text: text.to_string(),
            font,
            color,
            x,
            y,
        });
    }

    fn render_number(
        &mut self,
        value: u16,
        font: FontId,
        digit_width: u8,
        color: EgaColor,
        x: u16,
        y: u16,
    ) {
        self.calls.push(DrawCall::Number {
            value,
            font,
            digit_width,
            color,
            x,
            y,
        });
    }
}

/// Text a fixed-width number field shows: right-aligned, space padded, and
/// keeping only the lowest `digit_width` digits when the value overflows.
pub fn format_number_field(value: u16, digit_width: u8) -> String {
    let width = usize::from(digit_width);
    let digits = value.to_string();
    let start = digits.len().saturating_sub(width);
    format!("{:>width$}", &digits[start..])
}
