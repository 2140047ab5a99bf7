use std::fs;
use std::path::{Path, PathBuf};

use engine::{LevelGrid, LevelGridError};
use serde::Deserialize;
use thiserror::Error;

pub(crate) const LEVEL_FIXTURE_EXTENSION: &str = "json";

/// Development level format: plain row-major tile planes in JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct LevelFixture {
    name: String,
    width: u16,
    height: u16,
    #[serde(default)]
    water: bool,
    floor: Vec<u16>,
    walls: Vec<u16>,
}

#[derive(Debug, Error)]
pub(crate) enum LevelFixtureError {
    #[error("failed to read level fixture {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse level fixture {} at {at}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        at: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("level fixture {} is not a valid grid: {source}", .path.display())]
    Grid {
        path: PathBuf,
        #[source]
        source: LevelGridError,
    },
}

pub(crate) fn fixture_path(levels_dir: &Path, name: &str) -> PathBuf {
    levels_dir.join(format!("{name}.{LEVEL_FIXTURE_EXTENSION}"))
}

pub(crate) fn load_level_fixture(path: &Path) -> Result<LevelGrid, LevelFixtureError> {
    let raw = fs::read_to_string(path).map_err(|source| LevelFixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_level_fixture(&raw, path)
}

pub(crate) fn parse_level_fixture(raw: &str, path: &Path) -> Result<LevelGrid, LevelFixtureError> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    let fixture: LevelFixture =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|error| {
            let at = match error.path().to_string() {
                at if at.is_empty() || at == "." => "root".to_string(),
                at => at,
            };
            LevelFixtureError::Parse {
                path: path.to_path_buf(),
                at,
                source: error.into_inner(),
            }
        })?;

    let LevelFixture {
        name,
        width,
        height,
        water,
        floor,
        walls,
    } = fixture;
    LevelGrid::new(name, width, height, floor, walls)
        .map(|grid| grid.with_water(water))
        .map_err(|source| LevelFixtureError::Grid {
            path: path.to_path_buf(),
            source,
        })
}
