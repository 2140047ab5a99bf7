use serde::{Deserialize, Serialize};

use super::inventory::{BonusKind, GemColor, KeyColor, PlayerInventory, SCROLL_COUNT};
use super::renderer::{EgaColor, Picture, StatusRenderer, STATUS_FONT};

const STATUS_BAR_ORIGIN: (u16, u16) = (0, 120);
const HEALTH_NUMBER_AT: (u16, u16) = (74, 176);
const HEALTH_DIGITS: u8 = 3;
const FACE_AT: (u16, u16) = (64, 134);
const SCROLL_ORIGIN: (u16, u16) = (209, 150);
const SCROLL_COLUMN_STEP: u16 = 8;
const SCROLL_ROW_STEP: u16 = 10;
const SCROLLS_PER_ROW: usize = 4;
const COUNTER_DIGITS: u8 = 2;
const KEY_NUMBERS_AT: [(KeyColor, u16, u16); 4] = [
    (KeyColor::Red, 160, 149),
    (KeyColor::Yellow, 184, 176),
    (KeyColor::Green, 184, 149),
    (KeyColor::Blue, 160, 176),
];
const BONUS_NUMBERS_AT: [(BonusKind, u16, u16); 3] = [
    (BonusKind::Bolt, 134, 137),
    (BonusKind::Nuke, 134, 155),
    (BonusKind::Potion, 134, 173),
];
const GEM_ORIGIN: (u16, u16) = (256, 173);
const GEM_STEP: u16 = 8;
const LOCATION_TEXT_AT: (u16, u16) = (160, 121);

/// Face portrait, 1 (healthy) through 5 (dead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceIcon {
    Face1,
    Face2,
    Face3,
    Face4,
    Face5,
}

impl FaceIcon {
    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    /// Percentage. Negative values display as 0.
    pub health: i16,
    pub location_message: String,
    pub inventory: PlayerInventory,
}

pub fn face_for_health(health: i16) -> FaceIcon {
    match health.max(0) {
        76..=i16::MAX => FaceIcon::Face1,
        51..=75 => FaceIcon::Face2,
        26..=50 => FaceIcon::Face3,
        1..=25 => FaceIcon::Face4,
        _ => FaceIcon::Face5,
    }
}

/// Composes one frame of the status bar. Holds no state between frames.
pub fn draw_status_bar(renderer: &mut impl StatusRenderer, status: &PlayerStatus) {
    let (x, y) = STATUS_BAR_ORIGIN;
    renderer.render_picture(Picture::StatusBar, x, y);

    draw_health(renderer, status.health);
    draw_scrolls(renderer, &status.inventory);
    draw_keys(renderer, &status.inventory);
    draw_bonus(renderer, &status.inventory);
    draw_gems(renderer, &status.inventory);

    let (x, y) = LOCATION_TEXT_AT;
    renderer.render_text_centered(
        &status.location_message,
        STATUS_FONT,
        EgaColor::BrightYellow,
        x,
        y,
    );
}

fn draw_health(renderer: &mut impl StatusRenderer, health: i16) {
    let percentage = health.max(0).unsigned_abs();
    let (x, y) = HEALTH_NUMBER_AT;
    renderer.render_number(
        percentage,
        STATUS_FONT,
        HEALTH_DIGITS,
        EgaColor::BrightYellow,
        x,
        y,
    );
    let (x, y) = FACE_AT;
    renderer.render_picture(Picture::Face(face_for_health(health)), x, y);
}

fn draw_scrolls(renderer: &mut impl StatusRenderer, inventory: &PlayerInventory) {
    for index in (0..SCROLL_COUNT).filter(|index| inventory.has_scroll(*index)) {
        let column = (index % SCROLLS_PER_ROW) as u16;
        let row = u16::from(index >= SCROLLS_PER_ROW);
        let x = SCROLL_ORIGIN.0 + column * SCROLL_COLUMN_STEP;
        let y = SCROLL_ORIGIN.1 + row * SCROLL_ROW_STEP;
        renderer.render_number(index as u16 + 1, STATUS_FONT, 1, EgaColor::Black, x, y);
    }
}

fn draw_keys(renderer: &mut impl StatusRenderer, inventory: &PlayerInventory) {
    for (color, x, y) in KEY_NUMBERS_AT {
        renderer.render_number(
            inventory.keys(color),
            STATUS_FONT,
            COUNTER_DIGITS,
            EgaColor::BrightYellow,
            x,
            y,
        );
    }
}

fn draw_bonus(renderer: &mut impl StatusRenderer, inventory: &PlayerInventory) {
    for (kind, x, y) in BONUS_NUMBERS_AT {
        renderer.render_number(
            inventory.bonus(kind),
            STATUS_FONT,
            COUNTER_DIGITS,
            EgaColor::BrightYellow,
            x,
            y,
        );
    }
}

fn draw_gems(renderer: &mut impl StatusRenderer, inventory: &PlayerInventory) {
    for (slot, color) in GemColor::ALL.into_iter().enumerate() {
        if inventory.has_gem(color) {
            let x = GEM_ORIGIN.0 + slot as u16 * GEM_STEP;
            renderer.render_picture(Picture::RadarGem(color), x, GEM_ORIGIN.1);
        }
    }
}
