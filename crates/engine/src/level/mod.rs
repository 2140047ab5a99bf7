mod grid;
mod validate;

pub use grid::{LevelGrid, LevelGridError, PlayerStart, Vec2, NO_TILE};
pub use validate::{validate_player_starts, LevelValidationError, PLAYER_START_TILES};
