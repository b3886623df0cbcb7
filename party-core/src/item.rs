//! Inventory items carried by party members.
//!
//! Items live inside a player's inventory and are never tracked
//! independently by the roster store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for an item.
///
/// Ids are caller-supplied strings and only need to be unique within the
/// owning player's inventory; global uniqueness is not guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
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

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Broad category of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Armor,
    Consumable,
    Misc,
}

impl ItemType {
    /// Get the display name for this item type.
    pub fn name(&self) -> &'static str {
        match self {
            ItemType::Weapon => "Weapon",
            ItemType::Armor => "Armor",
            ItemType::Consumable => "Consumable",
            ItemType::Misc => "Misc",
        }
    }

    pub fn all() -> &'static [ItemType] {
        &[
            ItemType::Weapon,
            ItemType::Armor,
            ItemType::Consumable,
            ItemType::Misc,
        ]
    }
}

/// Desirability tier of an item. Display-only; nothing in the roster
/// enforces or depends on the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Get the display name for this rarity.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Hex colour used when rendering this rarity.
    pub fn color(&self) -> &'static str {
        match self {
            Rarity::Common => "#9E9E9E",
            Rarity::Uncommon => "#4CAF50",
            Rarity::Rare => "#2196F3",
            Rarity::Epic => "#9C27B0",
            Rarity::Legendary => "#FF9800",
        }
    }

    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ]
    }
}

/// An inventory entry owned by exactly one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub item_type: ItemType,
    pub description: String,
    pub quantity: u32,
    pub rarity: Rarity,
}

impl Item {
    /// Create a new item with a generated id, quantity 1, and common rarity.
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
            item_type,
            description: String::new(),
            quantity: 1,
            rarity: Rarity::Common,
        }
    }

    /// Replace the generated id with a caller-supplied one.
    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the stack size.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set the rarity tier.
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
