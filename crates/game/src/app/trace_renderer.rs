use engine::{format_number_field, EgaColor, FontId, Picture, StatusRenderer};
use tracing::debug;

/// Headless status-bar target: every draw call becomes a `debug!` event.
#[derive(Debug, Default)]
pub(crate) struct TraceRenderer {
    calls: usize,
}

impl TraceRenderer {
    pub(crate) fn take_call_count(&mut self) -> usize {
        std::mem::take(&mut self.calls)
    }
}

impl StatusRenderer for TraceRenderer {
    fn render_picture(&mut self, picture: Picture, x: u16, y: u16) {
        self.calls += 1;
        debug!(picture = ?picture, x, y, "status_picture");
    }

    fn render_text_centered(&mut self, text: &str, font: FontId, color: EgaColor, x: u16, y: u16) {
        self.calls += 1;
        debug!(text, font = font.0, color = ?color, x, y, "status_text");
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
        self.calls += 1;
        let field = format_number_field(value, digit_width);
        debug!(
            value,
            field = %field,
            font = font.0,
            color = ?color,
            x,
            y,
            "status_number"
        );
    }
}
