mod inventory;
mod renderer;
mod status_bar;

pub use inventory::{BonusKind, GemColor, KeyColor, PlayerInventory, SCROLL_COUNT};
pub use renderer::{
    format_number_field, DrawCall, EgaColor, FontId, Picture, RecordingRenderer, StatusRenderer,
    STATUS_FONT,
};
pub use status_bar::{draw_status_bar, face_for_health, FaceIcon, PlayerStatus};
