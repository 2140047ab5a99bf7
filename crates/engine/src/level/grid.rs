use serde::Serialize;
use thiserror::Error;

use crate::spawn::SpawnedActor;

/// Returned for any lookup outside the grid.
pub const NO_TILE: u16 = 0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn cell_center(x: u16, y: u16) -> Self {
        Self {
            x: f32::from(x) + 0.5,
            y: f32::from(y) + 0.5,
        }
    }
}

/// Where the player enters the level. Exists before the spawn pass and is
/// overwritten by player-start tiles rather than allocated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PlayerStart {
    pub position: Vec2,
    pub angle_degrees: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelGridError {
    #[error("level dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u16, height: u16 },
    #[error("{plane} tile count mismatch: expected {expected}, got {actual}")]
    TileCountMismatch {
        plane: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Floor and wall planes of one level plus the actor slots populated from them.
///
/// Cell `(x, y)` lives at index `y * width + x` in every plane. Floor tiles
/// carry spawn intent in the low byte and an optional delay hint in the high
/// byte.
#[derive(Debug, Clone)]
pub struct LevelGrid {
    name: String,
    width: u16,
    height: u16,
    floor: Vec<u16>,
    walls: Vec<u16>,
    water: bool,
    actors: Vec<Option<SpawnedActor>>,
    player: PlayerStart,
}

impl LevelGrid {
    pub fn new(
        name: impl Into<String>,
        width: u16,
        height: u16,
        floor: Vec<u16>,
        walls: Vec<u16>,
    ) -> Result<Self, LevelGridError> {
        if width == 0 || height == 0 {
            return Err(LevelGridError::EmptyDimensions { width, height });
        }
        let expected = usize::from(width) * usize::from(height);
        for (plane, actual) in [("floor", floor.len()), ("wall", walls.len())] {
            if actual != expected {
                return Err(LevelGridError::TileCountMismatch {
                    plane,
                    expected,
                    actual,
                });
            }
        }
        Ok(Self {
            name: name.into(),
            width,
            height,
            floor,
            walls,
            water: false,
            actors: vec![None; expected],
            player: PlayerStart::default(),
        })
    }

    pub fn with_water(mut self, water: bool) -> Self {
        self.water = water;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn is_water_level(&self) -> bool {
        self.water
    }

    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some(y as usize * usize::from(self.width) + x as usize)
    }

    pub fn floor_tile(&self, x: i32, y: i32) -> u16 {
        self.index_of(x, y)
            .and_then(|index| self.floor.get(index).copied())
            .unwrap_or(NO_TILE)
    }

    pub fn wall_tile(&self, x: i32, y: i32) -> u16 {
        self.index_of(x, y)
            .and_then(|index| self.walls.get(index).copied())
            .unwrap_or(NO_TILE)
    }

    pub fn floor_tiles(&self) -> &[u16] {
        &self.floor
    }

    pub fn blocking_actors(&self) -> &[Option<SpawnedActor>] {
        &self.actors
    }

    pub fn blocking_actors_mut(&mut self) -> &mut [Option<SpawnedActor>] {
        &mut self.actors
    }

    pub fn actor_at(&self, x: i32, y: i32) -> Option<&SpawnedActor> {
        self.index_of(x, y)
            .and_then(|index| self.actors.get(index))
            .and_then(Option::as_ref)
    }

    pub fn actor_count(&self) -> usize {
        self.actors.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn player(&self) -> &PlayerStart {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerStart {
        &mut self.player
    }

    /// Level teardown: drops every slot actor and forgets the player start.
    pub fn clear_actors(&mut self) {
        self.actors.iter_mut().for_each(|slot| *slot = None);
        self.player = PlayerStart::default();
    }
}
