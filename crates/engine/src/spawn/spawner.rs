use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::content::{ArchetypeId, DecorationTable};
use crate::level::{LevelGrid, PlayerStart, Vec2, NO_TILE};

use super::actor::{SpawnSummary, SpawnedActor};
use super::delay::{hint_delay, DelayRoll, RngRoll, StaggerAccumulator, StaggerPolicy};
use super::difficulty::Difficulty;
use super::tiles::{decode_tile, AmbushTiming, MonsterKind, TileSpawn};

/// Neighbours scanned for a wall-skeleton anchor: up, down, left, right.
const WALL_NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
/// Wall codes a wall skeleton can emerge from.
const ANCHOR_WALL_TILES: [u16; 7] = [6, 7, 8, 41, 42, 43, 44];

/// Walks a level grid once and installs the actors its floor tiles ask for.
///
/// Owns the stagger base shared by zombies and wall skeletons. With a
/// scripted [`DelayRoll`] a pass is fully deterministic.
pub struct ActorSpawner<'t, R> {
    table: &'t DecorationTable,
    roll: R,
    stagger: StaggerAccumulator,
    policy: StaggerPolicy,
}

impl<'t> ActorSpawner<'t, RngRoll<StdRng>> {
    pub fn seeded(table: &'t DecorationTable, seed: u64) -> Self {
        Self::new(table, RngRoll::seeded(seed))
    }

    pub fn from_os_rng(table: &'t DecorationTable) -> Self {
        Self::new(table, RngRoll::from_os_rng())
    }
}

impl<'t, R: DelayRoll> ActorSpawner<'t, R> {
    pub fn new(table: &'t DecorationTable, roll: R) -> Self {
        Self {
            table,
            roll,
            stagger: StaggerAccumulator::default(),
            policy: StaggerPolicy::default(),
        }
    }

    pub fn with_stagger_policy(mut self, policy: StaggerPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn stagger_policy(&self) -> StaggerPolicy {
        self.policy
    }

    pub fn stagger_base(&self) -> u16 {
        self.stagger.base()
    }

    pub fn reset_stagger(&mut self) {
        self.stagger.reset();
    }

    /// Tears down any actors already on `level`, then populates every cell in
    /// row-major order. Never fails: unknown codes, gated tiers and
    /// archetypes missing from the table leave the slot empty.
    pub fn populate(&mut self, level: &mut LevelGrid, difficulty: Difficulty) -> SpawnSummary {
        if self.policy == StaggerPolicy::ResetPerLevel {
            self.stagger.reset();
        }
        level.clear_actors();

        let mut summary = SpawnSummary::default();
        for y in 0..level.height() {
            for x in 0..level.width() {
                self.populate_cell(level, difficulty, x, y, &mut summary);
            }
        }

        info!(
            level = level.name(),
            difficulty = %difficulty,
            spawned = summary.spawned,
            skipped_by_difficulty = summary.skipped_by_difficulty,
            unmapped = summary.unmapped,
            player_starts = summary.player_starts,
            stagger_base = self.stagger.base(),
            "level_populated"
        );
        summary
    }

    fn populate_cell(
        &mut self,
        level: &mut LevelGrid,
        difficulty: Difficulty,
        x: u16,
        y: u16,
        summary: &mut SpawnSummary,
    ) {
        let tile = level.floor_tile(i32::from(x), i32::from(y));
        let Some(rule) = decode_tile(tile) else {
            // High-byte-only tiles are delay hints for a neighbour.
            if tile & 0x00ff != NO_TILE {
                summary.unmapped += 1;
                debug!(x, y, tile, "spawn_tile_unmapped");
            }
            return;
        };
        if !rule.allows(difficulty) {
            summary.skipped_by_difficulty += 1;
            debug!(
                x,
                y,
                tile,
                required = %rule.required,
                "spawn_skipped_by_difficulty"
            );
            return;
        }

        let actor = match rule.spawn {
            TileSpawn::PlayerStart { quadrant } => {
                summary.player_starts += 1;
                if summary.player_starts > 1 {
                    warn!(
                        level = level.name(),
                        x,
                        y,
                        "player_start_repeated_last_wins"
                    );
                }
                *level.player_mut() = PlayerStart {
                    position: Vec2::cell_center(x, y),
                    angle_degrees: f32::from(quadrant) * 90.0,
                };
                return;
            }
            TileSpawn::Static(archetype) => SpawnedActor::at_cell(archetype, x, y),
            TileSpawn::Chest => {
                let archetype = if level.is_water_level() {
                    ArchetypeId::BONUS_WATER_CHEST
                } else {
                    ArchetypeId::BONUS_CHEST
                };
                SpawnedActor::at_cell(archetype, x, y)
            }
            TileSpawn::Monster(kind) => self.spawn_monster(level, kind, x, y),
        };
        self.install(level, actor, x, y, summary);
    }

    fn spawn_monster(&mut self, level: &LevelGrid, kind: MonsterKind, x: u16, y: u16) -> SpawnedActor {
        let actor = SpawnedActor::at_cell(kind.archetype(), x, y);
        match self.activation_delay(level, kind.timing(), i32::from(x), i32::from(y)) {
            Some(ticks) => actor.with_activation_delay(ticks),
            None => actor,
        }
    }

    fn activation_delay(
        &mut self,
        level: &LevelGrid,
        timing: AmbushTiming,
        x: i32,
        y: i32,
    ) -> Option<u16> {
        let ticks = match timing {
            AmbushTiming::Immediate => return None,
            AmbushTiming::Random(random) => random.draw(&mut self.roll),
            AmbushTiming::HintBelow(random) => hint_delay(level.floor_tile(x, y + 1))
                .unwrap_or_else(|| random.draw(&mut self.roll)),
            AmbushTiming::HintBelowStaggered(random) => {
                match hint_delay(level.floor_tile(x, y + 1)) {
                    Some(ticks) => ticks,
                    None => {
                        let increment = random.draw(&mut self.roll);
                        self.stagger.stagger(increment)
                    }
                }
            }
            AmbushTiming::HintAtWallStaggered(random) => {
                match hint_delay(anchor_wall_floor_tile(level, x, y)) {
                    Some(ticks) => ticks,
                    None => {
                        let increment = random.draw(&mut self.roll);
                        self.stagger.stagger(increment)
                    }
                }
            }
        };
        Some(ticks)
    }

    fn install(
        &self,
        level: &mut LevelGrid,
        actor: SpawnedActor,
        x: u16,
        y: u16,
        summary: &mut SpawnSummary,
    ) {
        if !self.table.contains(actor.archetype) {
            summary.missing_archetype += 1;
            warn!(
                x,
                y,
                archetype = actor.archetype.0,
                "spawn_archetype_missing_from_table"
            );
            return;
        }
        let Some(index) = level.index_of(i32::from(x), i32::from(y)) else {
            return;
        };
        if let Some(slot) = level.blocking_actors_mut().get_mut(index) {
            *slot = Some(actor);
            summary.spawned += 1;
        }
    }
}

/// Floor tile at the last orthogonal neighbour whose wall is an anchor wall,
/// or [`NO_TILE`] when none is.
fn anchor_wall_floor_tile(level: &LevelGrid, x: i32, y: i32) -> u16 {
    WALL_NEIGHBOR_OFFSETS
        .iter()
        .rev()
        .map(|(dx, dy)| (x + dx, y + dy))
        .find(|(nx, ny)| ANCHOR_WALL_TILES.contains(&level.wall_tile(*nx, *ny)))
        .map_or(NO_TILE, |(nx, ny)| level.floor_tile(nx, ny))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::content::{abyss_archetypes, BehaviorKind};

    const HARD_BAT: u16 = 43;
    const NORMAL_BAT: u16 = 38;
    const BASE_BAT: u16 = 25;
    const ZOMBIE: u16 = 52;
    const SPOOK: u16 = 49;
    const WET_MAN: u16 = 63;
    const WALL_SKELETON: u16 = 69;
    const CHEST: u16 = 21;

    /// Fails the test if the pass consults randomness at all.
    struct NoRoll;

    impl DelayRoll for NoRoll {
        fn roll(&mut self, spread: u16) -> u16 {
            panic!("unexpected random roll with spread {spread}");
        }
    }

    struct ScriptedRoll {
        rolls: VecDeque<u16>,
        spreads: Vec<u16>,
    }

    impl ScriptedRoll {
        fn new(rolls: &[u16]) -> Self {
            Self {
                rolls: rolls.iter().copied().collect(),
                spreads: Vec::new(),
            }
        }
    }

    impl DelayRoll for ScriptedRoll {
        fn roll(&mut self, spread: u16) -> u16 {
            self.spreads.push(spread);
            self.rolls.pop_front().expect("scripted roll exhausted")
        }
    }

    fn table() -> DecorationTable {
        DecorationTable::abyss().expect("abyss table")
    }

    fn level(width: u16, height: u16, floor: Vec<u16>) -> LevelGrid {
        let walls = vec![0; floor.len()];
        LevelGrid::new("test", width, height, floor, walls).expect("grid")
    }

    fn level_with_walls(width: u16, height: u16, floor: Vec<u16>, walls: Vec<u16>) -> LevelGrid {
        LevelGrid::new("test", width, height, floor, walls).expect("grid")
    }

    fn centered(tile: u16) -> LevelGrid {
        let mut floor = vec![0; 9];
        floor[4] = tile;
        level(3, 3, floor)
    }

    fn delays(level: &LevelGrid) -> Vec<u16> {
        level
            .blocking_actors()
            .iter()
            .flatten()
            .filter_map(|actor| actor.activation_delay)
            .collect()
    }

    #[test]
    fn hard_bat_spawns_only_on_hard() {
        let table = table();

        let mut normal = centered(HARD_BAT);
        let summary = ActorSpawner::new(&table, NoRoll).populate(&mut normal, Difficulty::Normal);
        assert_eq!(normal.actor_count(), 0);
        assert_eq!(summary.skipped_by_difficulty, 1);

        let mut hard = centered(HARD_BAT);
        ActorSpawner::new(&table, NoRoll).populate(&mut hard, Difficulty::Hard);
        assert_eq!(hard.actor_count(), 1);
        let bat = hard.actor_at(1, 1).expect("bat");
        assert_eq!(bat.archetype, ArchetypeId::BAT);
        assert_eq!(bat.position, Vec2 { x: 1.5, y: 1.5 });
        assert_eq!(bat.angle_degrees, 0.0);
        assert_eq!(bat.activation_delay, None);
    }

    #[test]
    fn tier_gating_holds_for_every_difficulty() {
        let table = table();
        for difficulty in Difficulty::ALL {
            for (tile, required) in [
                (BASE_BAT, Difficulty::Easy),
                (NORMAL_BAT, Difficulty::Normal),
                (HARD_BAT, Difficulty::Hard),
            ] {
                let mut grid = centered(tile);
                ActorSpawner::new(&table, NoRoll).populate(&mut grid, difficulty);
                let spawned = grid.actor_at(1, 1).is_some();
                assert_eq!(
                    spawned,
                    difficulty >= required,
                    "tile={tile} difficulty={difficulty}"
                );
            }
        }
    }

    #[test]
    fn tiered_codes_spawn_the_same_archetype() {
        let table = table();
        let mut grid = level(3, 1, vec![BASE_BAT, NORMAL_BAT, HARD_BAT]);
        ActorSpawner::new(&table, NoRoll).populate(&mut grid, Difficulty::Hard);
        for x in 0..3 {
            assert_eq!(
                grid.actor_at(x, 0).map(|actor| actor.archetype),
                Some(ArchetypeId::BAT)
            );
        }
    }

    #[test]
    fn player_start_sets_position_and_cardinal_angle() {
        let table = table();
        for (tile, angle) in [(1, 0.0), (2, 90.0), (3, 180.0), (4, 270.0)] {
            let mut grid = level(3, 2, vec![0, 0, 0, 0, 0, tile]);
            let summary = ActorSpawner::new(&table, NoRoll).populate(&mut grid, Difficulty::Easy);
            assert_eq!(grid.actor_count(), 0, "tile={tile}");
            assert_eq!(summary.player_starts, 1);
            assert_eq!(
                *grid.player(),
                PlayerStart {
                    position: Vec2 { x: 2.5, y: 1.5 },
                    angle_degrees: angle,
                }
            );
        }
    }

    #[test]
    fn repeated_player_start_keeps_last_seen() {
        let table = table();
        let mut grid = level(2, 2, vec![2, 0, 0, 4]);
        let summary = ActorSpawner::new(&table, NoRoll).populate(&mut grid, Difficulty::Easy);
        assert_eq!(summary.player_starts, 2);
        assert_eq!(grid.player().position, Vec2 { x: 1.5, y: 1.5 });
        assert_eq!(grid.player().angle_degrees, 270.0);
    }

    #[test]
    fn chest_variant_follows_water_flag() {
        let table = table();
        for (water, expected) in [
            (true, ArchetypeId::BONUS_WATER_CHEST),
            (false, ArchetypeId::BONUS_CHEST),
        ] {
            let mut grid = centered(CHEST).with_water(water);
            ActorSpawner::new(&table, NoRoll).populate(&mut grid, Difficulty::Easy);
            assert_eq!(
                grid.actor_at(1, 1).map(|actor| actor.archetype),
                Some(expected)
            );
        }
    }

    #[test]
    fn pickups_spawn_at_cell_center_with_zero_angle() {
        let table = table();
        let mut grid = level(4, 1, vec![5, 8, 29, 62]);
        ActorSpawner::new(&table, NoRoll).populate(&mut grid, Difficulty::Easy);
        let expected = [
            ArchetypeId::BONUS_BOLT,
            ArchetypeId::KEY_RED,
            ArchetypeId::KEY_RED_2,
            ArchetypeId::GEM_PURPLE,
        ];
        for (x, archetype) in expected.into_iter().enumerate() {
            let actor = grid.actor_at(x as i32, 0).expect("pickup");
            assert_eq!(actor.archetype, archetype);
            assert_eq!(actor.position, Vec2::cell_center(x as u16, 0));
            assert_eq!(actor.angle_degrees, 0.0);
        }
    }

    #[test]
    fn zombie_uses_hint_below_without_randomness() {
        let table = table();
        let mut grid = level(1, 2, vec![ZOMBIE, 0x0700]);
        ActorSpawner::new(&table, NoRoll).populate(&mut grid, Difficulty::Easy);
        let zombie = grid.actor_at(0, 0).expect("zombie");
        assert_eq!(zombie.archetype, ArchetypeId::ZOMBIE);
        assert_eq!(zombie.activation_delay, Some(7 * 30));
    }

    #[test]
    fn hint_does_not_advance_stagger() {
        let table = table();
        let mut grid = level(1, 2, vec![ZOMBIE, 0x0200]);
        let mut spawner = ActorSpawner::new(&table, NoRoll);
        spawner.populate(&mut grid, Difficulty::Easy);
        assert_eq!(spawner.stagger_base(), 0);
    }

    #[test]
    fn zombie_on_bottom_row_falls_back_to_random() {
        let table = table();
        let mut grid = level(1, 1, vec![ZOMBIE]);
        let mut spawner = ActorSpawner::new(&table, ScriptedRoll::new(&[15]));
        spawner.populate(&mut grid, Difficulty::Easy);
        assert_eq!(delays(&grid), vec![135]);
        assert_eq!(spawner.roll.spreads, vec![240]);
    }

    #[test]
    fn random_zombie_delays_stagger_then_wrap() {
        let table = table();
        let mut grid = level(6, 1, vec![ZOMBIE; 6]);
        let mut spawner = ActorSpawner::new(&table, ScriptedRoll::new(&[0; 6]));
        spawner.populate(&mut grid, Difficulty::Easy);

        let observed = delays(&grid);
        assert_eq!(observed, vec![120, 240, 360, 480, 600, 120]);
        assert!(observed[..5].windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(spawner.stagger_base(), 120);
    }

    #[test]
    fn zombies_and_wall_skeletons_share_the_stagger() {
        let table = table();
        let mut grid = level(3, 1, vec![ZOMBIE, WALL_SKELETON, ZOMBIE]);
        let mut spawner = ActorSpawner::new(&table, ScriptedRoll::new(&[10, 20, 30]));
        spawner.populate(&mut grid, Difficulty::Easy);
        assert_eq!(delays(&grid), vec![130, 130 + 140, 130 + 140 + 150]);
    }

    #[test]
    fn wall_skeleton_reads_hint_beside_anchor_wall() {
        let table = table();
        #[rustfmt::skip]
        let floor = vec![
            0, 0x0400, 0,
            0, WALL_SKELETON, 0,
            0, 0x0900, 0,
        ];
        #[rustfmt::skip]
        let walls = vec![
            0, 41, 0,
            0, 0, 0,
            0, 0, 0,
        ];
        let mut grid = level_with_walls(3, 3, floor, walls);
        ActorSpawner::new(&table, NoRoll).populate(&mut grid, Difficulty::Easy);
        let skeleton = grid.actor_at(1, 1).expect("wall skeleton");
        assert_eq!(skeleton.archetype, ArchetypeId::WALL_SKELETON);
        assert_eq!(skeleton.activation_delay, Some(4 * 30));
    }

    #[test]
    fn wall_skeleton_prefers_last_anchor_in_scan_order() {
        let table = table();
        #[rustfmt::skip]
        let floor = vec![
            0, 0x0400, 0,
            0x0200, WALL_SKELETON, 0x0300,
            0, 0, 0,
        ];
        #[rustfmt::skip]
        let walls = vec![
            0, 6, 0,
            7, 0, 44,
            0, 0, 0,
        ];
        let mut grid = level_with_walls(3, 3, floor, walls);
        ActorSpawner::new(&table, NoRoll).populate(&mut grid, Difficulty::Easy);
        assert_eq!(delays(&grid), vec![3 * 30]);
    }

    #[test]
    fn wall_skeleton_ignores_floor_below_without_anchor_wall() {
        let table = table();
        #[rustfmt::skip]
        let floor = vec![
            WALL_SKELETON, 0,
            0x0500, 0,
        ];
        #[rustfmt::skip]
        let walls = vec![
            0, 12,
            0, 0,
        ];
        let mut grid = level_with_walls(2, 2, floor, walls);
        let mut spawner = ActorSpawner::new(&table, ScriptedRoll::new(&[0]));
        spawner.populate(&mut grid, Difficulty::Easy);
        assert_eq!(delays(&grid), vec![120]);
    }

    #[test]
    fn spook_random_delay_is_not_staggered() {
        let table = table();
        let mut grid = level(2, 1, vec![SPOOK, SPOOK]);
        let mut spawner = ActorSpawner::new(&table, ScriptedRoll::new(&[5, 5]));
        spawner.populate(&mut grid, Difficulty::Easy);
        assert_eq!(delays(&grid), vec![125, 125]);
        assert_eq!(spawner.roll.spreads, vec![300, 300]);
        assert_eq!(spawner.stagger_base(), 0);
    }

    #[test]
    fn wet_man_always_rolls_even_with_hint_below() {
        let table = table();
        let mut grid = level(1, 2, vec![WET_MAN, 0x0500]);
        let mut spawner = ActorSpawner::new(&table, ScriptedRoll::new(&[42]));
        spawner.populate(&mut grid, Difficulty::Easy);
        assert_eq!(delays(&grid), vec![342]);
    }

    #[test]
    fn non_ambush_monsters_have_no_delay() {
        let table = table();
        let mut grid = level(4, 1, vec![20, 22, 28, 55]);
        ActorSpawner::new(&table, NoRoll).populate(&mut grid, Difficulty::Easy);
        assert_eq!(grid.actor_count(), 4);
        assert!(delays(&grid).is_empty());
    }

    #[test]
    fn stagger_policy_controls_cross_level_carry() {
        let table = table();

        let mut reset = ActorSpawner::new(&table, ScriptedRoll::new(&[0, 0]));
        let mut first = level(1, 1, vec![ZOMBIE]);
        let mut second = level(1, 1, vec![ZOMBIE]);
        reset.populate(&mut first, Difficulty::Easy);
        reset.populate(&mut second, Difficulty::Easy);
        assert_eq!(delays(&second), vec![120]);

        let mut carry = ActorSpawner::new(&table, ScriptedRoll::new(&[0, 0]))
            .with_stagger_policy(StaggerPolicy::CarryAcrossLevels);
        let mut first = level(1, 1, vec![ZOMBIE]);
        let mut second = level(1, 1, vec![ZOMBIE]);
        carry.populate(&mut first, Difficulty::Easy);
        carry.populate(&mut second, Difficulty::Easy);
        assert_eq!(delays(&second), vec![240]);
    }

    #[test]
    fn unmapped_codes_leave_slots_empty() {
        let table = table();
        let mut grid = level(4, 1, vec![0, 72, 0x0300, 200]);
        let summary = ActorSpawner::new(&table, NoRoll).populate(&mut grid, Difficulty::Hard);
        assert_eq!(grid.actor_count(), 0);
        assert_eq!(summary.unmapped, 2);
    }

    #[test]
    fn archetypes_missing_from_table_are_skipped() {
        let reduced: Vec<_> = abyss_archetypes()
            .into_iter()
            .filter(|archetype| archetype.behavior != BehaviorKind::Chase)
            .collect();
        let table = DecorationTable::from_archetypes(reduced).expect("reduced table");
        let mut grid = level(2, 1, vec![BASE_BAT, 5]);
        let summary = ActorSpawner::new(&table, NoRoll).populate(&mut grid, Difficulty::Easy);
        assert_eq!(summary.missing_archetype, 1);
        assert_eq!(summary.spawned, 1);
        assert!(grid.actor_at(0, 0).is_none());
    }

    #[test]
    fn every_code_yields_at_most_one_actor_per_cell() {
        let table = table();
        let floor: Vec<u16> = (0..72).collect();
        let mut grid = level(8, 9, floor);
        let mut spawner = ActorSpawner::seeded(&table, 99);
        let summary = spawner.populate(&mut grid, Difficulty::Hard);

        // 72 codes minus the empty tile and four player starts.
        assert_eq!(summary.spawned, 67);
        assert_eq!(grid.actor_count(), summary.spawned);
        assert_eq!(grid.blocking_actors().len(), 72);
        assert_eq!(summary.player_starts, 4);
    }

    #[test]
    fn repopulating_tears_down_previous_actors() {
        let table = table();
        let mut grid = level(3, 1, vec![BASE_BAT, NORMAL_BAT, HARD_BAT]);
        let mut spawner = ActorSpawner::new(&table, NoRoll);
        spawner.populate(&mut grid, Difficulty::Hard);
        assert_eq!(grid.actor_count(), 3);
        spawner.populate(&mut grid, Difficulty::Easy);
        assert_eq!(grid.actor_count(), 1);
    }

    #[test]
    fn seeded_spawners_reproduce_delays() {
        let table = table();
        let floor = vec![ZOMBIE, SPOOK, WET_MAN, WALL_SKELETON, ZOMBIE, 53];
        let mut first = level(6, 1, floor.clone());
        let mut second = level(6, 1, floor);
        ActorSpawner::seeded(&table, 1234).populate(&mut first, Difficulty::Normal);
        ActorSpawner::seeded(&table, 1234).populate(&mut second, Difficulty::Normal);
        assert_eq!(delays(&first), delays(&second));
        assert_eq!(delays(&first).len(), 6);
    }
}
