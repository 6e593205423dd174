// The fixed universe of draftable teams.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of draft slots on the board. The catalog always holds exactly
/// this many teams, so a finished draft is a permutation of the catalog.
pub const SLOT_COUNT: usize = 12;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog must contain exactly 12 teams, got {count}")]
    WrongCount { count: usize },

    #[error("duplicate team id `{id}` in catalog")]
    DuplicateId { id: String },

    #[error("team entry {index} has an empty id")]
    EmptyId { index: usize },
}

/// A single draftable team. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Unique short token used in the persisted order (e.g. "crabs").
    pub id: String,
    /// Display name shown on the board and in exports.
    pub name: String,
    /// Opaque asset locator for the team logo. Carried, never interpreted.
    pub logo: String,
}

/// Ordered, fixed set of twelve teams with O(1) lookup by id.
///
/// Built once at startup from config and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    teams: Vec<TeamRecord>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, validating cardinality and id uniqueness.
    pub fn new(teams: Vec<TeamRecord>) -> Result<Self, CatalogError> {
        if teams.len() != SLOT_COUNT {
            return Err(CatalogError::WrongCount { count: teams.len() });
        }

        let mut by_id = HashMap::with_capacity(teams.len());
        for (index, team) in teams.iter().enumerate() {
            if team.id.is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if by_id.insert(team.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: team.id.clone(),
                });
            }
        }

        Ok(Catalog { teams, by_id })
    }

    /// All teams in catalog order.
    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    /// Look up a team by id.
    pub fn get(&self, id: &str) -> Option<&TeamRecord> {
        self.by_id.get(id).map(|&i| &self.teams[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Team ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.teams.iter().map(|t| t.id.as_str())
    }
}
