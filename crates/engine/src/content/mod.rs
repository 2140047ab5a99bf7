mod archetype;
mod decorate;
mod table;

pub use archetype::{ActorArchetype, ArchetypeId, BehaviorKind};
pub use decorate::abyss_archetypes;
pub use table::{DecorationTable, DecorationTableError};
