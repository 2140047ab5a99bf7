use serde::Serialize;

/// Stable actor identifier, independent of the tile codes that spawn it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ArchetypeId(pub u16);

impl ArchetypeId {
    pub const PLAYER: Self = Self(0);

    pub const BONUS_BOLT: Self = Self(10);
    pub const BONUS_NUKE: Self = Self(11);
    pub const BONUS_POTION: Self = Self(12);
    pub const BONUS_CHEST: Self = Self(13);
    pub const BONUS_WATER_CHEST: Self = Self(14);
    pub const BONUS_FREEZE_TIME: Self = Self(15);

    pub const KEY_RED: Self = Self(20);
    pub const KEY_YELLOW: Self = Self(21);
    pub const KEY_GREEN: Self = Self(22);
    pub const KEY_BLUE: Self = Self(23);
    pub const KEY_RED_2: Self = Self(24);

    pub const SCROLL_1: Self = Self(30);
    pub const SCROLL_2: Self = Self(31);
    pub const SCROLL_3: Self = Self(32);
    pub const SCROLL_4: Self = Self(33);
    pub const SCROLL_5: Self = Self(34);
    pub const SCROLL_6: Self = Self(35);
    pub const SCROLL_7: Self = Self(36);
    pub const SCROLL_8: Self = Self(37);

    pub const GEM_RED: Self = Self(40);
    pub const GEM_GREEN: Self = Self(41);
    pub const GEM_BLUE: Self = Self(42);
    pub const GEM_YELLOW: Self = Self(43);
    pub const GEM_PURPLE: Self = Self(44);

    pub const TOMB_1: Self = Self(50);
    pub const TOMB_2: Self = Self(51);
    pub const TOMB_3: Self = Self(52);

    pub const WARP_PORTAL_1: Self = Self(60);
    pub const WARP_PORTAL_2: Self = Self(61);
    pub const WARP_PORTAL_3: Self = Self(62);
    pub const WARP_PORTAL_4: Self = Self(63);
    pub const WARP_PORTAL_5: Self = Self(64);
    pub const WARP_PIT: Self = Self(65);

    pub const RED_DEMON: Self = Self(100);
    pub const BAT: Self = Self(101);
    pub const DEMON: Self = Self(102);
    pub const TROLL: Self = Self(103);
    pub const ORC: Self = Self(104);
    pub const WET_MAN: Self = Self(105);
    pub const EYE: Self = Self(106);
    pub const MAGE: Self = Self(107);
    pub const NEMESIS: Self = Self(108);
    pub const SPOOK: Self = Self(109);
    pub const ZOMBIE: Self = Self(110);
    pub const SKELETON: Self = Self(111);
    pub const WALL_SKELETON: Self = Self(112);
}

/// Behavior program an archetype is bound to. The runtime dispatches on this
/// tag; nothing in the spawn pass depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorKind {
    Player,
    /// Picked up on touch.
    Bonus,
    Decoration,
    Warp,
    /// Walks toward the player.
    Chase,
    /// Chases and fires projectiles.
    Ranged,
    /// Dormant until its activation delay has elapsed.
    Ambush,
}

impl BehaviorKind {
    pub fn is_monster(self) -> bool {
        matches!(self, Self::Chase | Self::Ranged | Self::Ambush)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorArchetype {
    pub id: ArchetypeId,
    pub name: &'static str,
    pub sprite: &'static str,
    pub behavior: BehaviorKind,
    pub hit_points: u16,
    pub speed: u16,
    pub blocking: bool,
}
