use engine::{Difficulty, StaggerPolicy};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DIFFICULTY_ENV_VAR: &str = "CATACOMB_DIFFICULTY";
const SPAWN_SEED_ENV_VAR: &str = "CATACOMB_SPAWN_SEED";
const STAGGER_ENV_VAR: &str = "CATACOMB_STAGGER";
const LEVELS_ENV_VAR: &str = "CATACOMB_LEVELS";
const DUMP_SPAWNS_ENV_VAR: &str = "CATACOMB_DUMP_SPAWNS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SessionConfig {
    pub(crate) difficulty: Difficulty,
    /// `None` seeds delays from OS entropy.
    pub(crate) spawn_seed: Option<u64>,
    pub(crate) stagger: StaggerPolicy,
    /// Fixture names under `assets/levels/`; empty runs the built-in demo level.
    pub(crate) levels: Vec<String>,
    pub(crate) dump_spawns: bool,
}

pub(crate) struct AppWiring {
    pub(crate) config: SessionConfig,
}

pub(crate) fn build_app() -> AppWiring {
    init_tracing();
    info!("=== Catacomb Abyss Startup ===");

    let config = config_from_lookup(|var| std::env::var(var).ok());
    info!(
        difficulty = %config.difficulty,
        spawn_seed = ?config.spawn_seed,
        stagger = ?config.stagger,
        levels = config.levels.len(),
        dump_spawns = config.dump_spawns,
        "session_config"
    );
    AppWiring { config }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn config_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SessionConfig {
    let defaults = SessionConfig::default();
    SessionConfig {
        difficulty: parse_or_default(lookup(DIFFICULTY_ENV_VAR), DIFFICULTY_ENV_VAR, |raw| {
            raw.parse::<Difficulty>().ok()
        })
        .unwrap_or(defaults.difficulty),
        spawn_seed: parse_or_default(lookup(SPAWN_SEED_ENV_VAR), SPAWN_SEED_ENV_VAR, |raw| {
            raw.trim().parse::<u64>().ok()
        }),
        stagger: parse_or_default(lookup(STAGGER_ENV_VAR), STAGGER_ENV_VAR, parse_stagger)
            .unwrap_or(defaults.stagger),
        levels: lookup(LEVELS_ENV_VAR)
            .map(|raw| parse_level_list(&raw))
            .unwrap_or_default(),
        dump_spawns: parse_or_default(lookup(DUMP_SPAWNS_ENV_VAR), DUMP_SPAWNS_ENV_VAR, parse_flag)
            .unwrap_or(defaults.dump_spawns),
    }
}

/// Unset or blank values yield `None` quietly; unparseable ones warn first.
fn parse_or_default<T>(
    raw: Option<String>,
    var: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = parse(&raw);
    if parsed.is_none() {
        warn!(var, value = %raw, "invalid_env_value_using_default");
    }
    parsed
}

fn parse_stagger(raw: &str) -> Option<StaggerPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "reset" => Some(StaggerPolicy::ResetPerLevel),
        "carry" => Some(StaggerPolicy::CarryAcrossLevels),
        _ => None,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_level_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}
