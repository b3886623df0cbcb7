//! The roster store: canonical in-memory collection of party members.
//!
//! A `Roster` owns the authoritative player list for a campaign. It is a
//! plain value constructed once at startup and handed by reference to
//! whatever needs it; there is no global instance. All mutation routes
//! through its methods, and callers re-query after mutating (the store
//! issues no change notifications).

use crate::item::Item;
use crate::player::{Player, PlayerId, PointPool};
use crate::sample_data;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// In-memory store of party members, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster seeded with the sample party. The seed collection
    /// itself is cloned and never mutated by later operations.
    pub fn with_sample_party() -> Self {
        Self::from_players(sample_data::sample_party())
    }

    /// Create a roster from an existing collection, preserving order.
    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// All players in insertion order, seed entries first.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by id. Absence is a normal outcome, not an error.
    /// When duplicate ids exist, returns the first match.
    pub fn player_by_id(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| &player.id == id)
    }

    /// Mutable lookup by id, for in-place edits that bypass
    /// [`update_player`](Self::update_player).
    pub fn player_by_id_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| &player.id == id)
    }

    /// Append a player to the roster.
    ///
    /// No uniqueness check is made on the id: adding a duplicate id keeps
    /// both entries, and lookups resolve to the first. Callers that care
    /// must generate fresh ids ([`PlayerId::generate`]).
    pub fn add_player(&mut self, player: Player) {
        debug!(name = %player.name, id = %player.id, "player added");
        self.players.push(player);
    }

    /// Merge a partial update over the first player matching `id`.
    ///
    /// Fields absent from the update are left untouched. Returns `false`
    /// and performs no mutation when no player matches.
    pub fn update_player(&mut self, id: &PlayerId, update: PlayerUpdate) -> bool {
        match self.player_by_id_mut(id) {
            Some(player) => {
                update.apply(player);
                debug!(name = %player.name, id = %player.id, "player updated");
                true
            }
            None => false,
        }
    }

    /// Remove the first player matching `id`. Returns whether a removal
    /// occurred; duplicates beyond the first are left in place.
    pub fn delete_player(&mut self, id: &PlayerId) -> bool {
        match self.players.iter().position(|player| &player.id == id) {
            Some(index) => {
                let removed = self.players.remove(index);
                debug!(name = %removed.name, id = %removed.id, "player deleted");
                true
            }
            None => false,
        }
    }

    /// Current roster size.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// A partial player record, merged field-by-field over an existing entry.
///
/// `None` fields are left untouched by [`Roster::update_player`]. The id is
/// deliberately not updatable; deleting and re-adding is the way to re-key
/// a player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub class: Option<String>,
    pub race: Option<String>,
    pub level: Option<u32>,
    pub backstory: Option<String>,
    pub current_location: Option<String>,
    pub health_points: Option<PointPool>,
    pub mana_points: Option<PointPool>,
    pub items: Option<Vec<Item>>,
    pub avatar: Option<String>,
}

impl PlayerUpdate {
    /// An update that touches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = Some(race.into());
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = Some(backstory.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.current_location = Some(location.into());
        self
    }

    pub fn with_health(mut self, current: i32, max: i32) -> Self {
        self.health_points = Some(PointPool::new(current, max));
        self
    }

    pub fn with_mana(mut self, current: i32, max: i32) -> Self {
        self.mana_points = Some(PointPool::new(current, max));
        self
    }

    /// Replace the whole inventory.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Merge this update into `player`, overwriting only the set fields.
    pub fn apply(self, player: &mut Player) {
        if let Some(name) = self.name {
            player.name = name;
        }
        if let Some(class) = self.class {
            player.class = class;
        }
        if let Some(race) = self.race {
            player.race = race;
        }
        if let Some(level) = self.level {
            player.level = level;
        }
        if let Some(backstory) = self.backstory {
            player.backstory = backstory;
        }
        if let Some(location) = self.current_location {
            player.current_location = location;
        }
        if let Some(health) = self.health_points {
            player.health_points = health;
        }
        if let Some(mana) = self.mana_points {
            player.mana_points = mana;
        }
        if let Some(items) = self.items {
            player.items = items;
        }
        if let Some(avatar) = self.avatar {
            player.avatar = Some(avatar);
        }
    }
}
