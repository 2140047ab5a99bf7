use crate::content::ArchetypeId;

use super::delay::{RandomDelay, SPOOK_RANDOM_DELAY, WET_MAN_RANDOM_DELAY, ZOMBIE_RANDOM_DELAY};
use super::difficulty::Difficulty;

/// Monster families whose tiered tile codes share a single archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MonsterKind {
    RedDemon,
    Nemesis,
    Bat,
    Demon,
    Troll,
    Orc,
    Eye,
    Mage,
    Skeleton,
    WetMan,
    Spook,
    Zombie,
    WallSkeleton,
}

/// How a monster's activation delay is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AmbushTiming {
    Immediate,
    Random(RandomDelay),
    /// Hint from the floor tile below, else random.
    HintBelow(RandomDelay),
    /// Hint from the floor tile below, else staggered random.
    HintBelowStaggered(RandomDelay),
    /// Hint from the floor tile at an adjacent anchor wall, else staggered
    /// random.
    HintAtWallStaggered(RandomDelay),
}

impl MonsterKind {
    pub(crate) fn archetype(self) -> ArchetypeId {
        match self {
            Self::RedDemon => ArchetypeId::RED_DEMON,
            Self::Nemesis => ArchetypeId::NEMESIS,
            Self::Bat => ArchetypeId::BAT,
            Self::Demon => ArchetypeId::DEMON,
            Self::Troll => ArchetypeId::TROLL,
            Self::Orc => ArchetypeId::ORC,
            Self::Eye => ArchetypeId::EYE,
            Self::Mage => ArchetypeId::MAGE,
            Self::Skeleton => ArchetypeId::SKELETON,
            Self::WetMan => ArchetypeId::WET_MAN,
            Self::Spook => ArchetypeId::SPOOK,
            Self::Zombie => ArchetypeId::ZOMBIE,
            Self::WallSkeleton => ArchetypeId::WALL_SKELETON,
        }
    }

    pub(crate) fn timing(self) -> AmbushTiming {
        match self {
            Self::WetMan => AmbushTiming::Random(WET_MAN_RANDOM_DELAY),
            Self::Spook => AmbushTiming::HintBelow(SPOOK_RANDOM_DELAY),
            Self::Zombie => AmbushTiming::HintBelowStaggered(ZOMBIE_RANDOM_DELAY),
            Self::WallSkeleton => AmbushTiming::HintAtWallStaggered(ZOMBIE_RANDOM_DELAY),
            _ => AmbushTiming::Immediate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TileSpawn {
    /// Sets the player start facing `quadrant * 90` degrees.
    PlayerStart { quadrant: u16 },
    Static(ArchetypeId),
    /// Chest or water chest, depending on the level.
    Chest,
    Monster(MonsterKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TileRule {
    pub(crate) spawn: TileSpawn,
    pub(crate) required: Difficulty,
}

impl TileRule {
    fn always(spawn: TileSpawn) -> Self {
        Self {
            spawn,
            required: Difficulty::Easy,
        }
    }

    fn monster(kind: MonsterKind, required: Difficulty) -> Self {
        Self {
            spawn: TileSpawn::Monster(kind),
            required,
        }
    }

    pub(crate) fn allows(self, difficulty: Difficulty) -> bool {
        self.required <= difficulty
    }
}

/// Decodes a floor tile code. `None` means the cell spawns nothing.
pub(crate) fn decode_tile(tile: u16) -> Option<TileRule> {
    use Difficulty::{Easy, Hard, Normal};
    use MonsterKind::*;

    let rule = match tile {
        1..=4 => TileRule::always(TileSpawn::PlayerStart {
            quadrant: tile - 1,
        }),
        5 => TileRule::always(TileSpawn::Static(ArchetypeId::BONUS_BOLT)),
        6 => TileRule::always(TileSpawn::Static(ArchetypeId::BONUS_NUKE)),
        7 => TileRule::always(TileSpawn::Static(ArchetypeId::BONUS_POTION)),
        8 => TileRule::always(TileSpawn::Static(ArchetypeId::KEY_RED)),
        9 => TileRule::always(TileSpawn::Static(ArchetypeId::KEY_YELLOW)),
        10 => TileRule::always(TileSpawn::Static(ArchetypeId::KEY_GREEN)),
        11 => TileRule::always(TileSpawn::Static(ArchetypeId::KEY_BLUE)),
        12..=19 => TileRule::always(TileSpawn::Static(ArchetypeId(
            ArchetypeId::SCROLL_1.0 + (tile - 12),
        ))),
        21 => TileRule::always(TileSpawn::Chest),
        29 => TileRule::always(TileSpawn::Static(ArchetypeId::KEY_RED_2)),
        31..=35 => TileRule::always(TileSpawn::Static(ArchetypeId(
            ArchetypeId::WARP_PORTAL_1.0 + (tile - 31),
        ))),
        46 => TileRule::always(TileSpawn::Static(ArchetypeId::TOMB_1)),
        47 => TileRule::always(TileSpawn::Static(ArchetypeId::TOMB_2)),
        48 => TileRule::always(TileSpawn::Static(ArchetypeId::TOMB_3)),
        54 => TileRule::always(TileSpawn::Static(ArchetypeId::WARP_PIT)),
        57 => TileRule::always(TileSpawn::Static(ArchetypeId::BONUS_FREEZE_TIME)),
        58 => TileRule::always(TileSpawn::Static(ArchetypeId::GEM_RED)),
        59 => TileRule::always(TileSpawn::Static(ArchetypeId::GEM_GREEN)),
        60 => TileRule::always(TileSpawn::Static(ArchetypeId::GEM_BLUE)),
        61 => TileRule::always(TileSpawn::Static(ArchetypeId::GEM_YELLOW)),
        62 => TileRule::always(TileSpawn::Static(ArchetypeId::GEM_PURPLE)),

        20 | 24 | 30 => TileRule::monster(RedDemon, Easy),
        28 => TileRule::monster(Nemesis, Easy),

        25 => TileRule::monster(Bat, Easy),
        38 => TileRule::monster(Bat, Normal),
        43 => TileRule::monster(Bat, Hard),

        26 => TileRule::monster(Demon, Easy),
        39 => TileRule::monster(Demon, Normal),
        44 => TileRule::monster(Demon, Hard),

        22 => TileRule::monster(Troll, Easy),
        36 => TileRule::monster(Troll, Normal),
        41 => TileRule::monster(Troll, Hard),

        23 => TileRule::monster(Orc, Easy),
        37 => TileRule::monster(Orc, Normal),
        42 => TileRule::monster(Orc, Hard),

        27 => TileRule::monster(Mage, Easy),
        40 => TileRule::monster(Mage, Normal),
        45 => TileRule::monster(Mage, Hard),

        49 => TileRule::monster(Spook, Easy),
        50 => TileRule::monster(Spook, Normal),
        51 => TileRule::monster(Spook, Hard),

        52 => TileRule::monster(Zombie, Easy),
        53 => TileRule::monster(Zombie, Normal),

        55 => TileRule::monster(Skeleton, Easy),
        56 => TileRule::monster(Skeleton, Normal),

        63 => TileRule::monster(WetMan, Easy),
        64 => TileRule::monster(WetMan, Normal),
        65 => TileRule::monster(WetMan, Hard),

        66 => TileRule::monster(Eye, Easy),
        67 => TileRule::monster(Eye, Normal),
        68 => TileRule::monster(Eye, Hard),

        69 => TileRule::monster(WallSkeleton, Easy),
        70 => TileRule::monster(WallSkeleton, Normal),
        71 => TileRule::monster(WallSkeleton, Hard),

        _ => return None,
    };
    Some(rule)
}
