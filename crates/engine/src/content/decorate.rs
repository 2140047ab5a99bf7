use super::archetype::{ActorArchetype, ArchetypeId, BehaviorKind};

const MONSTER_SPEED_SLOW: u16 = 1500;
const MONSTER_SPEED_NORMAL: u16 = 2500;
const MONSTER_SPEED_FAST: u16 = 4000;

fn bonus(id: ArchetypeId, name: &'static str, sprite: &'static str) -> ActorArchetype {
    ActorArchetype {
        id,
        name,
        sprite,
        behavior: BehaviorKind::Bonus,
        hit_points: 0,
        speed: 0,
        blocking: false,
    }
}

fn scenery(
    id: ArchetypeId,
    name: &'static str,
    sprite: &'static str,
    behavior: BehaviorKind,
) -> ActorArchetype {
    ActorArchetype {
        id,
        name,
        sprite,
        behavior,
        hit_points: 0,
        speed: 0,
        blocking: behavior == BehaviorKind::Decoration,
    }
}

fn monster(
    id: ArchetypeId,
    name: &'static str,
    sprite: &'static str,
    behavior: BehaviorKind,
    hit_points: u16,
    speed: u16,
) -> ActorArchetype {
    ActorArchetype {
        id,
        name,
        sprite,
        behavior,
        hit_points,
        speed,
        blocking: true,
    }
}

/// Every archetype Catacomb Abyss levels can produce, plus the player.
pub fn abyss_archetypes() -> Vec<ActorArchetype> {
    use BehaviorKind::{Ambush, Chase, Decoration, Ranged, Warp};

    vec![
        ActorArchetype {
            id: ArchetypeId::PLAYER,
            name: "player",
            sprite: "player",
            behavior: BehaviorKind::Player,
            hit_points: 100,
            speed: MONSTER_SPEED_FAST,
            blocking: true,
        },
        bonus(ArchetypeId::BONUS_BOLT, "bolt", "bonus/bolt"),
        bonus(ArchetypeId::BONUS_NUKE, "nuke", "bonus/nuke"),
        bonus(ArchetypeId::BONUS_POTION, "potion", "bonus/potion"),
        bonus(ArchetypeId::BONUS_CHEST, "chest", "bonus/chest"),
        bonus(
            ArchetypeId::BONUS_WATER_CHEST,
            "water_chest",
            "bonus/water_chest",
        ),
        bonus(
            ArchetypeId::BONUS_FREEZE_TIME,
            "freeze_time",
            "bonus/freeze_time",
        ),
        bonus(ArchetypeId::KEY_RED, "key_red", "bonus/key_red"),
        bonus(ArchetypeId::KEY_YELLOW, "key_yellow", "bonus/key_yellow"),
        bonus(ArchetypeId::KEY_GREEN, "key_green", "bonus/key_green"),
        bonus(ArchetypeId::KEY_BLUE, "key_blue", "bonus/key_blue"),
        bonus(ArchetypeId::KEY_RED_2, "key_red_2", "bonus/key_red"),
        bonus(ArchetypeId::SCROLL_1, "scroll_1", "bonus/scroll"),
        bonus(ArchetypeId::SCROLL_2, "scroll_2", "bonus/scroll"),
        bonus(ArchetypeId::SCROLL_3, "scroll_3", "bonus/scroll"),
        bonus(ArchetypeId::SCROLL_4, "scroll_4", "bonus/scroll"),
        bonus(ArchetypeId::SCROLL_5, "scroll_5", "bonus/scroll"),
        bonus(ArchetypeId::SCROLL_6, "scroll_6", "bonus/scroll"),
        bonus(ArchetypeId::SCROLL_7, "scroll_7", "bonus/scroll"),
        bonus(ArchetypeId::SCROLL_8, "scroll_8", "bonus/scroll"),
        bonus(ArchetypeId::GEM_RED, "gem_red", "bonus/gem_red"),
        bonus(ArchetypeId::GEM_GREEN, "gem_green", "bonus/gem_green"),
        bonus(ArchetypeId::GEM_BLUE, "gem_blue", "bonus/gem_blue"),
        bonus(ArchetypeId::GEM_YELLOW, "gem_yellow", "bonus/gem_yellow"),
        bonus(ArchetypeId::GEM_PURPLE, "gem_purple", "bonus/gem_purple"),
        scenery(ArchetypeId::TOMB_1, "tomb_1", "scenery/tomb1", Decoration),
        scenery(ArchetypeId::TOMB_2, "tomb_2", "scenery/tomb2", Decoration),
        scenery(ArchetypeId::TOMB_3, "tomb_3", "scenery/tomb3", Decoration),
        scenery(ArchetypeId::WARP_PORTAL_1, "warp_portal_1", "warp/portal", Warp),
        scenery(ArchetypeId::WARP_PORTAL_2, "warp_portal_2", "warp/portal", Warp),
        scenery(ArchetypeId::WARP_PORTAL_3, "warp_portal_3", "warp/portal", Warp),
        scenery(ArchetypeId::WARP_PORTAL_4, "warp_portal_4", "warp/portal", Warp),
        scenery(ArchetypeId::WARP_PORTAL_5, "warp_portal_5", "warp/portal", Warp),
        scenery(ArchetypeId::WARP_PIT, "warp_pit", "warp/pit", Warp),
        monster(
            ArchetypeId::RED_DEMON,
            "red_demon",
            "monsters/red_demon",
            Chase,
            50,
            MONSTER_SPEED_NORMAL,
        ),
        monster(
            ArchetypeId::BAT,
            "bat",
            "monsters/bat",
            Chase,
            1,
            MONSTER_SPEED_FAST,
        ),
        monster(
            ArchetypeId::DEMON,
            "demon",
            "monsters/demon",
            Chase,
            50,
            MONSTER_SPEED_NORMAL,
        ),
        monster(
            ArchetypeId::TROLL,
            "troll",
            "monsters/troll",
            Chase,
            14,
            MONSTER_SPEED_NORMAL,
        ),
        monster(
            ArchetypeId::ORC,
            "orc",
            "monsters/orc",
            Chase,
            3,
            MONSTER_SPEED_SLOW,
        ),
        monster(
            ArchetypeId::WET_MAN,
            "wet_man",
            "monsters/wet_man",
            Ambush,
            18,
            MONSTER_SPEED_NORMAL,
        ),
        monster(
            ArchetypeId::EYE,
            "eye",
            "monsters/eye",
            Ranged,
            15,
            MONSTER_SPEED_SLOW,
        ),
        monster(
            ArchetypeId::MAGE,
            "mage",
            "monsters/mage",
            Ranged,
            5,
            MONSTER_SPEED_NORMAL,
        ),
        monster(
            ArchetypeId::NEMESIS,
            "nemesis",
            "monsters/nemesis",
            Ranged,
            100,
            MONSTER_SPEED_NORMAL,
        ),
        monster(
            ArchetypeId::SPOOK,
            "spook",
            "monsters/spook",
            Ambush,
            3,
            MONSTER_SPEED_NORMAL,
        ),
        monster(
            ArchetypeId::ZOMBIE,
            "zombie",
            "monsters/zombie",
            Ambush,
            14,
            MONSTER_SPEED_SLOW,
        ),
        monster(
            ArchetypeId::SKELETON,
            "skeleton",
            "monsters/skeleton",
            Chase,
            12,
            MONSTER_SPEED_NORMAL,
        ),
        monster(
            ArchetypeId::WALL_SKELETON,
            "wall_skeleton",
            "monsters/wall_skeleton",
            Ambush,
            12,
            MONSTER_SPEED_NORMAL,
        ),
    ]
}
