use std::collections::HashMap;

use thiserror::Error;

use crate::sprite_keys::{validate_sprite_key, SpriteKeyError};

use super::archetype::{ActorArchetype, ArchetypeId};
use super::decorate::abyss_archetypes;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecorationTableError {
    #[error("archetype id {id} is defined more than once ('{first}' and '{second}')")]
    DuplicateId {
        id: u16,
        first: &'static str,
        second: &'static str,
    },
    #[error("archetype '{name}' has invalid sprite key '{sprite}': {source}")]
    InvalidSpriteKey {
        name: &'static str,
        sprite: &'static str,
        #[source]
        source: SpriteKeyError,
    },
}

/// Read-only archetype registry, built once per game session.
#[derive(Debug, Default, Clone)]
pub struct DecorationTable {
    archetypes: Vec<ActorArchetype>,
    index_by_id: HashMap<ArchetypeId, usize>,
}

impl DecorationTable {
    pub fn from_archetypes(archetypes: Vec<ActorArchetype>) -> Result<Self, DecorationTableError> {
        let mut index_by_id = HashMap::with_capacity(archetypes.len());
        for (index, archetype) in archetypes.iter().enumerate() {
            validate_sprite_key(archetype.sprite).map_err(|source| {
                DecorationTableError::InvalidSpriteKey {
                    name: archetype.name,
                    sprite: archetype.sprite,
                    source,
                }
            })?;
            if let Some(previous) = index_by_id.insert(archetype.id, index) {
                return Err(DecorationTableError::DuplicateId {
                    id: archetype.id.0,
                    first: archetypes[previous].name,
                    second: archetype.name,
                });
            }
        }
        Ok(Self {
            archetypes,
            index_by_id,
        })
    }

    pub fn abyss() -> Result<Self, DecorationTableError> {
        Self::from_archetypes(abyss_archetypes())
    }

    pub fn lookup(&self, id: ArchetypeId) -> Option<&ActorArchetype> {
        self.index_by_id
            .get(&id)
            .and_then(|index| self.archetypes.get(*index))
    }

    pub fn contains(&self, id: ArchetypeId) -> bool {
        self.index_by_id.contains_key(&id)
    }

    pub fn archetypes(&self) -> &[ActorArchetype] {
        &self.archetypes
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}
