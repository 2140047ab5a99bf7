use std::ops::RangeInclusive;

use thiserror::Error;

use super::grid::LevelGrid;

/// Floor codes that place the player, facing 0/90/180/270 degrees.
pub const PLAYER_START_TILES: RangeInclusive<u16> = 1..=4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelValidationError {
    #[error("level '{level}' has no player start tile")]
    MissingPlayerStart { level: String },
    #[error("level '{level}' has {count} player start tiles; first at ({x},{y})")]
    MultiplePlayerStarts {
        level: String,
        count: usize,
        x: u16,
        y: u16,
    },
}

/// Load-time check that a level has exactly one player start.
pub fn validate_player_starts(level: &LevelGrid) -> Result<(u16, u16), LevelValidationError> {
    let width = level.width();
    let mut starts = level
        .floor_tiles()
        .iter()
        .enumerate()
        .filter(|(_, tile)| PLAYER_START_TILES.contains(*tile))
        .map(|(index, _)| {
            let width = usize::from(width);
            ((index % width) as u16, (index / width) as u16)
        });

    let Some(first) = starts.next() else {
        return Err(LevelValidationError::MissingPlayerStart {
            level: level.name().to_string(),
        });
    };
    let extra = starts.count();
    if extra > 0 {
        return Err(LevelValidationError::MultiplePlayerStarts {
            level: level.name().to_string(),
            count: extra + 1,
            x: first.0,
            y: first.1,
        });
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_with_floor(floor: Vec<u16>) -> LevelGrid {
        let walls = vec![0; floor.len()];
        LevelGrid::new("crypt", 3, 2, floor, walls).expect("grid")
    }

    #[test]
    fn single_start_is_accepted() {
        let level = level_with_floor(vec![0, 0, 0, 0, 3, 0]);
        assert_eq!(validate_player_starts(&level), Ok((1, 1)));
    }

    #[test]
    fn missing_start_is_rejected() {
        let level = level_with_floor(vec![0, 5, 0, 0, 25, 0]);
        assert_eq!(
            validate_player_starts(&level),
            Err(LevelValidationError::MissingPlayerStart {
                level: "crypt".to_string()
            })
        );
    }

    #[test]
    fn multiple_starts_are_rejected() {
        let level = level_with_floor(vec![0, 1, 0, 4, 0, 2]);
        assert_eq!(
            validate_player_starts(&level),
            Err(LevelValidationError::MultiplePlayerStarts {
                level: "crypt".to_string(),
                count: 3,
                x: 1,
                y: 0,
            })
        );
    }
}
