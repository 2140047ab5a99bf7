use serde::Serialize;

use crate::content::{ArchetypeId, DecorationTable};
use crate::level::{LevelGrid, PlayerStart, Vec2};

use super::difficulty::Difficulty;

/// Runtime instance installed into a level slot by the spawn pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpawnedActor {
    pub archetype: ArchetypeId,
    pub position: Vec2,
    pub angle_degrees: f32,
    /// Ticks before an ambush monster's behavior program wakes up.
    pub activation_delay: Option<u16>,
}

impl SpawnedActor {
    pub fn at_cell(archetype: ArchetypeId, x: u16, y: u16) -> Self {
        Self {
            archetype,
            position: Vec2::cell_center(x, y),
            angle_degrees: 0.0,
            activation_delay: None,
        }
    }

    pub fn with_activation_delay(mut self, ticks: u16) -> Self {
        self.activation_delay = Some(ticks);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SpawnSummary {
    pub spawned: usize,
    pub skipped_by_difficulty: usize,
    pub unmapped: usize,
    pub missing_archetype: usize,
    pub player_starts: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpawnDumpEntry {
    pub x: u16,
    pub y: u16,
    pub archetype_id: ArchetypeId,
    pub archetype: &'static str,
    pub activation_delay: Option<u16>,
}

/// Serializable picture of a populated level, for regression diffs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpawnDump {
    pub level: String,
    pub difficulty: Difficulty,
    pub player: PlayerStart,
    pub summary: SpawnSummary,
    pub actors: Vec<SpawnDumpEntry>,
}

impl SpawnDump {
    pub fn capture(
        level: &LevelGrid,
        table: &DecorationTable,
        difficulty: Difficulty,
        summary: SpawnSummary,
    ) -> Self {
        let width = usize::from(level.width());
        let actors = level
            .blocking_actors()
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|actor| (index, actor)))
            .map(|(index, actor)| SpawnDumpEntry {
                x: (index % width) as u16,
                y: (index / width) as u16,
                archetype_id: actor.archetype,
                archetype: table
                    .lookup(actor.archetype)
                    .map(|archetype| archetype.name)
                    .unwrap_or("unknown"),
                activation_delay: actor.activation_delay,
            })
            .collect();
        Self {
            level: level.name().to_string(),
            difficulty,
            player: *level.player(),
            summary,
            actors,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
