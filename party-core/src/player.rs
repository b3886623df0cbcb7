//! Party member model: identity, stats, location, and inventory.

use crate::item::{Item, ItemId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a player.
///
/// Ids are caller-generated strings (the creation flow historically used
/// millisecond timestamps). The roster does not enforce uniqueness; see
/// [`crate::Roster::add_player`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wrap an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A current/max pair tracking a depletable stat pool.
///
/// `max == 0` means the character has no such pool at all (a martial
/// character with no mana, for example) and presentation suppresses it.
/// The roster never enforces `0 <= current <= max`; the clamped mutators
/// here are for callers that want that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PointPool {
    pub current: i32,
    pub max: i32,
}

impl PointPool {
    pub fn new(current: i32, max: i32) -> Self {
        Self { current, max }
    }

    /// A pool filled to its maximum.
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    /// The absent pool (`0/0`).
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether this character has no such pool at all.
    pub fn is_absent(&self) -> bool {
        self.max == 0
    }

    /// Fill fraction in `0.0..=1.0`; absent pools report 0.
    pub fn ratio(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        (self.current as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    /// Fill percentage in `0.0..=100.0`.
    pub fn percent(&self) -> f32 {
        self.ratio() * 100.0
    }

    /// Subtract points, clamping at zero. Returns the points actually lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let old = self.current;
        self.current = (self.current - amount).max(0);
        old - self.current
    }

    /// Add points, clamping at max. Returns the points actually gained.
    pub fn restore(&mut self, amount: i32) -> i32 {
        let old = self.current;
        self.current = (self.current + amount).min(self.max);
        self.current - old
    }
}

impl std::fmt::Display for PointPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// Coarse health classification used for status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthTier {
    /// Above 70% health.
    Healthy,
    /// Between 30% and 70%.
    Wounded,
    /// At or below 30%.
    Critical,
}

impl HealthTier {
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio > 0.7 {
            HealthTier::Healthy
        } else if ratio > 0.3 {
            HealthTier::Wounded
        } else {
            HealthTier::Critical
        }
    }

    /// Hex colour used when rendering a health bar in this tier.
    pub fn color(&self) -> &'static str {
        match self {
            HealthTier::Healthy => "#4CAF50",
            HealthTier::Wounded => "#FF9800",
            HealthTier::Critical => "#F44336",
        }
    }
}

/// A tracked adventurer: stats, narrative metadata, and inventory.
///
/// Items are owned exclusively by their player and kept in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub class: String,
    pub race: String,
    /// Character level, at least 1.
    pub level: u32,
    pub backstory: String,
    pub current_location: String,
    pub health_points: PointPool,
    pub mana_points: PointPool,
    pub items: Vec<Item>,
    pub avatar: Option<String>,
}

impl Player {
    /// Create a player with default stats: level 1, 50/50 health, no mana,
    /// empty backstory, no items.
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        class: impl Into<String>,
        race: impl Into<String>,
        current_location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class: class.into(),
            race: race.into(),
            level: 1,
            backstory: String::new(),
            current_location: current_location.into(),
            health_points: PointPool::full(50),
            mana_points: PointPool::none(),
            items: Vec::new(),
            avatar: None,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = backstory.into();
        self
    }

    pub fn with_health(mut self, current: i32, max: i32) -> Self {
        self.health_points = PointPool::new(current, max);
        self
    }

    pub fn with_mana(mut self, current: i32, max: i32) -> Self {
        self.mana_points = PointPool::new(current, max);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// One-line character summary, e.g. `"Level 6 Wood Elf Druid"`.
    pub fn summary(&self) -> String {
        format!("Level {} {} {}", self.level, self.race, self.class)
    }

    /// Whether this character has a mana pool worth displaying.
    pub fn has_mana_pool(&self) -> bool {
        !self.mana_points.is_absent()
    }

    /// Health tier for status display.
    pub fn health_tier(&self) -> HealthTier {
        HealthTier::from_ratio(self.health_points.ratio())
    }

    /// Total carried quantity across all inventory stacks.
    pub fn total_item_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Look up an inventory item by id.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }
}
