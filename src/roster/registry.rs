//! Roster providers.
//!
//! The battle engine looks combatants up through `RosterProvider`. `Roster`
//! is the in-memory registry; `FnRoster` adapts a lookup closure.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::combatant::{Combatant, CombatantId, Stats};

/// Errors raised while building a roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("combatant {0} registered twice")]
    DuplicateId(CombatantId),

    #[error("combatant {id} has a zero {stat} stat")]
    InvalidStat { id: CombatantId, stat: &'static str },
}

/// Source of combatant records by id.
pub trait RosterProvider {
    /// Look up a combatant. `None` if the id is unknown.
    fn combatant(&self, id: CombatantId) -> Option<Combatant>;

    /// Number of entries. Catalog ids are expected to span `1..=len`.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory roster keyed by `CombatantId`.
///
/// ## Example
///
/// ```
/// use creature_duel::roster::{Combatant, CombatantId, Roster, RosterProvider, Stats};
///
/// let mut roster = Roster::new();
/// roster
///     .register(Combatant::new(CombatantId::new(1), "Bulbasaur", Stats::uniform(45)))
///     .unwrap();
///
/// assert_eq!(roster.len(), 1);
/// assert!(roster.combatant(CombatantId::new(1)).is_some());
/// assert!(roster.combatant(CombatantId::new(2)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Roster {
    combatants: FxHashMap<CombatantId, Combatant>,
}

impl Roster {
    /// Create a new empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a combatant.
    ///
    /// Rejects duplicate ids and zero stats.
    pub fn register(&mut self, combatant: Combatant) -> Result<(), RosterError> {
        if let Some(stat) = combatant.stats.first_zero() {
            return Err(RosterError::InvalidStat {
                id: combatant.id,
                stat,
            });
        }
        if self.combatants.contains_key(&combatant.id) {
            return Err(RosterError::DuplicateId(combatant.id));
        }
        self.combatants.insert(combatant.id, combatant);
        Ok(())
    }

    /// Get a combatant by ID.
    #[must_use]
    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.get(&id)
    }

    /// All registered ids in ascending order.
    pub fn ids(&self) -> Vec<CombatantId> {
        let mut ids: Vec<_> = self.combatants.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over all combatants (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.values()
    }

    /// Build a roster from the remote catalog's JSON listing.
    ///
    /// Each entry looks like
    /// `{"id": 1, "name": {"english": "Bulbasaur"}, "base": {"HP": 45,
    /// "Attack": 49, "Defense": 49, "Sp. Attack": 65, "Sp. Defense": 65,
    /// "Speed": 45}}`. Other fields are ignored.
    pub fn from_catalog_json(json: &str) -> Result<Self, RosterError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        let mut roster = Self::new();
        for entry in entries {
            roster.register(entry.into())?;
        }
        tracing::debug!(count = roster.len(), "loaded roster from catalog");
        Ok(roster)
    }
}

impl RosterProvider for Roster {
    fn combatant(&self, id: CombatantId) -> Option<Combatant> {
        self.get(id).cloned()
    }

    fn len(&self) -> usize {
        self.combatants.len()
    }
}

/// Roster backed by a lookup closure.
pub struct FnRoster<F> {
    lookup: F,
    len: usize,
}

impl<F> FnRoster<F>
where
    F: Fn(CombatantId) -> Option<Combatant>,
{
    pub fn new(len: usize, lookup: F) -> Self {
        Self { lookup, len }
    }
}

impl<F> RosterProvider for FnRoster<F>
where
    F: Fn(CombatantId) -> Option<Combatant>,
{
    fn combatant(&self, id: CombatantId) -> Option<Combatant> {
        (self.lookup)(id)
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[derive(Deserialize)]
struct CatalogEntry {
    id: u32,
    name: CatalogName,
    base: CatalogBase,
}

#[derive(Deserialize)]
struct CatalogName {
    english: String,
}

#[derive(Deserialize)]
struct CatalogBase {
    #[serde(rename = "HP")]
    hp: u32,
    #[serde(rename = "Attack")]
    attack: u32,
    #[serde(rename = "Defense")]
    defense: u32,
    #[serde(rename = "Sp. Attack")]
    special_attack: u32,
    #[serde(rename = "Sp. Defense")]
    special_defense: u32,
    #[serde(rename = "Speed")]
    speed: u32,
}

impl From<CatalogEntry> for Combatant {
    fn from(entry: CatalogEntry) -> Self {
        let base = entry.base;
        Combatant::new(
            CombatantId::new(entry.id),
            entry.name.english,
            Stats {
                hp: base.hp,
                attack: base.attack,
                defense: base.defense,
                special_attack: base.special_attack,
                special_defense: base.special_defense,
                speed: base.speed,
            },
        )
    }
}
