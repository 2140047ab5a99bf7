use serde::{Deserialize, Serialize};

pub const SCROLL_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyColor {
    Red,
    Yellow,
    Green,
    Blue,
}

impl KeyColor {
    pub const ALL: [Self; 4] = [Self::Red, Self::Yellow, Self::Green, Self::Blue];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusKind {
    Bolt,
    Nuke,
    Potion,
}

/// Gems in radar order; the status bar lays them out left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GemColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl GemColor {
    pub const ALL: [Self; 5] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Purple,
    ];
}

/// What the player carries, as far as the status bar is concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerInventory {
    scrolls: [bool; SCROLL_COUNT],
    keys: [u16; 4],
    bolts: u16,
    nukes: u16,
    potions: u16,
    gems: [bool; 5],
}

impl PlayerInventory {
    /// Scroll `index` is zero-based; out-of-range indices are never owned.
    pub fn has_scroll(&self, index: usize) -> bool {
        self.scrolls.get(index).copied().unwrap_or(false)
    }

    pub fn set_scroll(&mut self, index: usize, owned: bool) {
        if let Some(slot) = self.scrolls.get_mut(index) {
            *slot = owned;
        }
    }

    pub fn keys(&self, color: KeyColor) -> u16 {
        self.keys[color as usize]
    }

    pub fn set_keys(&mut self, color: KeyColor, count: u16) {
        self.keys[color as usize] = count;
    }

    pub fn bonus(&self, kind: BonusKind) -> u16 {
        match kind {
            BonusKind::Bolt => self.bolts,
            BonusKind::Nuke => self.nukes,
            BonusKind::Potion => self.potions,
        }
    }

    pub fn set_bonus(&mut self, kind: BonusKind, count: u16) {
        let slot = match kind {
            BonusKind::Bolt => &mut self.bolts,
            BonusKind::Nuke => &mut self.nukes,
            BonusKind::Potion => &mut self.potions,
        };
        *slot = count;
    }

    pub fn has_gem(&self, color: GemColor) -> bool {
        self.gems[color as usize]
    }

    pub fn set_gem(&mut self, color: GemColor, owned: bool) {
        self.gems[color as usize] = owned;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_indices_outside_range_are_ignored() {
        let mut inventory = PlayerInventory::default();
        inventory.set_scroll(7, true);
        inventory.set_scroll(8, true);
        assert!(inventory.has_scroll(7));
        assert!(!inventory.has_scroll(8));
    }

    #[test]
    fn counters_are_independent() {
        let mut inventory = PlayerInventory::default();
        inventory.set_keys(KeyColor::Green, 3);
        inventory.set_bonus(BonusKind::Nuke, 9);
        inventory.set_gem(GemColor::Purple, true);

        assert_eq!(inventory.keys(KeyColor::Green), 3);
        assert_eq!(inventory.keys(KeyColor::Red), 0);
        assert_eq!(inventory.bonus(BonusKind::Nuke), 9);
        assert_eq!(inventory.bonus(BonusKind::Bolt), 0);
        assert!(inventory.has_gem(GemColor::Purple));
        assert!(!inventory.has_gem(GemColor::Red));
    }

    #[test]
    fn partial_json_fills_missing_fields_with_defaults() {
        let inventory: PlayerInventory =
            serde_json::from_value(serde_json::json!({ "bolts": 4 })).expect("inventory");
        assert_eq!(inventory.bonus(BonusKind::Bolt), 4);
        assert!(!inventory.has_scroll(0));
    }
}
