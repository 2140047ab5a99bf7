mod actor;
mod delay;
mod difficulty;
mod spawner;
mod tiles;

pub use actor::{SpawnDump, SpawnDumpEntry, SpawnSummary, SpawnedActor};
pub use delay::{DelayRoll, RngRoll, StaggerPolicy};
pub use difficulty::{Difficulty, DifficultyParseError};
pub use spawner::ActorSpawner;
