use std::fs;
use std::path::{Path, PathBuf};

use engine::{
    draw_status_bar, validate_player_starts, ActorSpawner, AppPaths, DecorationTable,
    DecorationTableError, DelayRoll, Difficulty, LevelGrid, LevelGridError, LevelValidationError,
    PlayerStatus, SpawnDump, SpawnSummary, StatusRenderer,
};
use thiserror::Error;
use tracing::{info, warn};

use super::bootstrap::SessionConfig;
use super::demo_level::demo_level;
use super::level_fixture::{fixture_path, load_level_fixture, LevelFixtureError};
use super::trace_renderer::TraceRenderer;

const SPAWN_DUMP_DIR: &str = "spawns";
const STARTING_HEALTH: i16 = 100;

#[derive(Debug, Error)]
pub(crate) enum SessionError {
    #[error(transparent)]
    Table(#[from] DecorationTableError),
    #[error("failed to build demo level: {0}")]
    DemoLevel(#[source] LevelGridError),
    #[error(transparent)]
    Fixture(#[from] LevelFixtureError),
    #[error(transparent)]
    Validation(#[from] LevelValidationError),
    #[error("failed to encode spawn dump for level '{level}': {source}")]
    EncodeDump {
        level: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write spawn dump {}: {source}", .path.display())]
    WriteDump {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LevelReport {
    pub(crate) name: String,
    pub(crate) summary: SpawnSummary,
    pub(crate) status_draw_calls: usize,
    pub(crate) dump_path: Option<PathBuf>,
}

/// Loads every configured level, populates it and draws its first status bar.
pub(crate) fn run_session(
    config: &SessionConfig,
    paths: &AppPaths,
) -> Result<Vec<LevelReport>, SessionError> {
    let table = DecorationTable::abyss()?;
    let levels = load_levels(config, paths)?;
    let spawner = match config.spawn_seed {
        Some(seed) => ActorSpawner::seeded(&table, seed),
        None => ActorSpawner::from_os_rng(&table),
    };
    let mut spawner = spawner.with_stagger_policy(config.stagger);
    let mut renderer = TraceRenderer::default();

    levels
        .into_iter()
        .map(|level| play_level(&mut spawner, &table, level, config, paths, &mut renderer))
        .collect()
}

fn load_levels(config: &SessionConfig, paths: &AppPaths) -> Result<Vec<LevelGrid>, SessionError> {
    if config.levels.is_empty() {
        info!("no_levels_configured_using_demo");
        let level = demo_level().map_err(SessionError::DemoLevel)?;
        validate_player_starts(&level)?;
        return Ok(vec![level]);
    }

    config
        .levels
        .iter()
        .map(|name| {
            let path = fixture_path(&paths.levels_dir, name);
            let level = load_level_fixture(&path)?;
            validate_player_starts(&level)?;
            info!(
                fixture = %path.display(),
                level = level.name(),
                width = level.width(),
                height = level.height(),
                water = level.is_water_level(),
                "level_fixture_loaded"
            );
            Ok(level)
        })
        .collect()
}

fn play_level<R: DelayRoll>(
    spawner: &mut ActorSpawner<'_, R>,
    table: &DecorationTable,
    mut level: LevelGrid,
    config: &SessionConfig,
    paths: &AppPaths,
    renderer: &mut TraceRenderer,
) -> Result<LevelReport, SessionError> {
    let summary = spawner.populate(&mut level, config.difficulty);
    if summary.missing_archetype > 0 {
        warn!(
            level = level.name(),
            missing = summary.missing_archetype,
            "level_has_actors_without_archetype"
        );
    }

    let dump_path = if config.dump_spawns {
        let dump = SpawnDump::capture(&level, table, config.difficulty, summary);
        Some(write_spawn_dump(&dump, &paths.cache_dir)?)
    } else {
        None
    };

    let status = PlayerStatus {
        health: STARTING_HEALTH,
        location_message: level.name().to_string(),
        ..PlayerStatus::default()
    };
    let status_draw_calls = draw_frame(renderer, &status);

    info!(
        level = level.name(),
        spawned = summary.spawned,
        status_draw_calls,
        dump = ?dump_path,
        "level_ready"
    );
    Ok(LevelReport {
        name: level.name().to_string(),
        summary,
        status_draw_calls,
        dump_path,
    })
}

fn draw_frame(renderer: &mut TraceRenderer, status: &PlayerStatus) -> usize {
    draw_status_bar(renderer, status);
    renderer.take_call_count()
}

fn write_spawn_dump(dump: &SpawnDump, cache_dir: &Path) -> Result<PathBuf, SessionError> {
    let dir = cache_dir.join(SPAWN_DUMP_DIR);
    let path = dir.join(dump_file_name(&dump.level, dump.difficulty));
    let json = dump
        .to_json_pretty()
        .map_err(|source| SessionError::EncodeDump {
            level: dump.level.clone(),
            source,
        })?;
    fs::create_dir_all(&dir).map_err(|source| SessionError::WriteDump {
        path: dir.clone(),
        source,
    })?;
    fs::write(&path, json).map_err(|source| SessionError::WriteDump {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn dump_file_name(level: &str, difficulty: Difficulty) -> String {
    let stem: String = level
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.{difficulty}.json")
}
