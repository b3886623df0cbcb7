//! Builder for creating new party members.
//!
//! Mirrors the add-player flow: name, class, race, and current location are
//! required (whitespace-only input counts as missing), everything else
//! falls back to the form defaults. Malformed numeric input is coerced via
//! the `*_input` helpers rather than rejected, matching the form's
//! parse-or-default behaviour; the roster itself validates nothing.

use crate::item::Item;
use crate::player::{Player, PlayerId, PointPool};
use thiserror::Error;

/// Default character level for new players.
pub const DEFAULT_LEVEL: u32 = 1;

/// Default health pool for new players.
pub const DEFAULT_MAX_HEALTH: i32 = 50;

/// Error from player building.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    #[error("player name is required")]
    MissingName,
    #[error("player class is required")]
    MissingClass,
    #[error("player race is required")]
    MissingRace,
    #[error("current location is required")]
    MissingLocation,
}

/// Builder for new players.
#[derive(Debug, Clone)]
pub struct PlayerBuilder {
    name: Option<String>,
    class: Option<String>,
    race: Option<String>,
    location: Option<String>,
    level: u32,
    backstory: String,
    health: PointPool,
    mana: PointPool,
    items: Vec<Item>,
    avatar: Option<String>,
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        Self {
            name: None,
            class: None,
            race: None,
            location: None,
            level: DEFAULT_LEVEL,
            backstory: String::new(),
            health: PointPool::full(DEFAULT_MAX_HEALTH),
            mana: PointPool::none(),
            items: Vec::new(),
            avatar: None,
        }
    }
}

impl PlayerBuilder {
    /// Create a new builder with the form defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the player's name. Required.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the player's class. Required.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the player's race. Required.
    pub fn race(mut self, race: impl Into<String>) -> Self {
        self.race = Some(race.into());
        self
    }

    /// Set the player's current location. Required.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the character level.
    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Set the level from raw form text, falling back to the default on
    /// malformed input.
    pub fn level_input(self, input: &str) -> Self {
        let level = input.trim().parse().unwrap_or(DEFAULT_LEVEL);
        self.level(level)
    }

    /// Set the backstory.
    pub fn backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = backstory.into();
        self
    }

    /// Set the health pool.
    pub fn health(mut self, current: i32, max: i32) -> Self {
        self.health = PointPool::new(current, max);
        self
    }

    /// Set the health pool from raw form text, falling back to the default
    /// on malformed input.
    pub fn health_input(self, current: &str, max: &str) -> Self {
        let current = current.trim().parse().unwrap_or(DEFAULT_MAX_HEALTH);
        let max = max.trim().parse().unwrap_or(DEFAULT_MAX_HEALTH);
        self.health(current, max)
    }

    /// Set the mana pool. Leave unset (or pass `0, 0`) for characters with
    /// no mana.
    pub fn mana(mut self, current: i32, max: i32) -> Self {
        self.mana = PointPool::new(current, max);
        self
    }

    /// Set the mana pool from raw form text, falling back to no pool on
    /// malformed input.
    pub fn mana_input(self, current: &str, max: &str) -> Self {
        let current = current.trim().parse().unwrap_or(0);
        let max = max.trim().parse().unwrap_or(0);
        self.mana(current, max)
    }

    /// Append an item to the starting inventory.
    pub fn add_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Set the avatar reference.
    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Build the player, generating a fresh id.
    ///
    /// Text fields are whitespace-trimmed; required fields that are unset
    /// or blank yield the matching [`BuilderError`].
    pub fn build(self) -> Result<Player, BuilderError> {
        let name = required(self.name, BuilderError::MissingName)?;
        let class = required(self.class, BuilderError::MissingClass)?;
        let race = required(self.race, BuilderError::MissingRace)?;
        let location = required(self.location, BuilderError::MissingLocation)?;

        Ok(Player {
            id: PlayerId::generate(),
            name,
            class,
            race,
            level: self.level,
            backstory: self.backstory.trim().to_string(),
            current_location: location,
            health_points: self.health,
            mana_points: self.mana,
            items: self.items,
            avatar: self.avatar,
        })
    }
}

fn required(field: Option<String>, error: BuilderError) -> Result<String, BuilderError> {
    match field {
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(error)
            } else {
                Ok(trimmed.to_string())
            }
        }
        None => Err(error),
    }
}
