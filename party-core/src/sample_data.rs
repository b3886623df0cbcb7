//! Fixed sample party used to seed new rosters.
//!
//! The static collection is never handed out directly; [`sample_party`]
//! clones it so store mutations can never reach the seed.

use crate::item::{Item, ItemType, Rarity};
use crate::player::Player;

lazy_static::lazy_static! {
    /// The sample party.
    pub static ref SAMPLE_PLAYERS: Vec<Player> = vec![
        Player::new("1", "Elandra Moonwhisper", "Druid", "Wood Elf", "The Whispering Glade")
            .with_level(6)
            .with_health(38, 52)
            .with_mana(44, 60)
            .with_backstory(
                "Raised by the circle of the Whispering Glade after her village \
                 burned, Elandra speaks for the old forest and trusts beasts more \
                 than townsfolk.",
            )
            .with_item(
                Item::new("Oakheart Staff", ItemType::Weapon)
                    .with_id("101")
                    .with_description("A gnarled staff cut from a lightning-struck oak.")
                    .with_rarity(Rarity::Rare),
            )
            .with_item(
                Item::new("Cloak of the Wildwood", ItemType::Armor)
                    .with_id("102")
                    .with_description("Leaves woven into the weave shift with the seasons.")
                    .with_rarity(Rarity::Uncommon),
            )
            .with_item(
                Item::new("Healing Salve", ItemType::Consumable)
                    .with_id("103")
                    .with_description("A pungent balm that closes shallow wounds.")
                    .with_quantity(3),
            ),
        Player::new("2", "Borin Ironfist", "Fighter", "Mountain Dwarf", "Kraghammer")
            .with_level(7)
            .with_health(61, 68)
            .with_backstory(
                "Last smith of the Ironfist forge-hold, sworn to reclaim the \
                 anvil his clan lost to the duergar.",
            )
            .with_item(
                Item::new("Warhammer of the Deep Forge", ItemType::Weapon)
                    .with_id("201")
                    .with_description("Still warm to the touch, as if fresh from the coals.")
                    .with_rarity(Rarity::Legendary),
            )
            .with_item(
                Item::new("Dented Tower Shield", ItemType::Armor)
                    .with_id("202")
                    .with_description("Every dent has a story; Borin tells them all.")
                    .with_rarity(Rarity::Rare),
            )
            .with_item(
                Item::new("Iron Rations", ItemType::Misc)
                    .with_id("203")
                    .with_description("Dwarven trail bread. Edible, technically.")
                    .with_quantity(5),
            ),
        Player::new("3", "Seraphine Duskveil", "Sorcerer", "Human", "The Floating Market")
            .with_level(5)
            .with_health(24, 31)
            .with_mana(18, 72)
            .with_backstory(
                "A storm broke over her cradle and never quite left; Seraphine \
                 bargains in secrets and owes at least three of them.",
            )
            .with_item(
                Item::new("Ember Wand", ItemType::Weapon)
                    .with_id("301")
                    .with_description("Sputters harmless sparks when its wielder lies.")
                    .with_rarity(Rarity::Epic),
            )
            .with_item(
                Item::new("Mana Crystal", ItemType::Consumable)
                    .with_id("302")
                    .with_description("Shatter to recover a surge of spent power.")
                    .with_quantity(2)
                    .with_rarity(Rarity::Rare),
            ),
    ];
}

/// An owned copy of the sample party, safe to hand to a roster.
pub fn sample_party() -> Vec<Player> {
    SAMPLE_PLAYERS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elandra_has_three_items() {
        let elandra = SAMPLE_PLAYERS
            .iter()
            .find(|p| p.name.starts_with("Elandra"))
            .unwrap();
        assert_eq!(elandra.items.len(), 3);
        assert!(elandra.has_mana_pool());
    }

    #[test]
    fn test_party_includes_manaless_martial() {
        assert!(SAMPLE_PLAYERS.iter().any(|p| !p.has_mana_pool()));
    }

    #[test]
    fn test_seed_ids_unique() {
        let mut ids: Vec<_> = SAMPLE_PLAYERS.iter().map(|p| p.id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), SAMPLE_PLAYERS.len());
    }

    #[test]
    fn test_sample_party_is_a_copy() {
        let mut party = sample_party();
        party.clear();
        assert!(!SAMPLE_PLAYERS.is_empty());
    }

    #[test]
    fn test_seed_players_fully_populated() {
        for player in SAMPLE_PLAYERS.iter() {
            assert!(player.level >= 1);
            assert!(!player.name.is_empty());
            assert!(!player.class.is_empty());
            assert!(!player.race.is_empty());
            assert!(!player.current_location.is_empty());
            assert!(!player.backstory.is_empty());
            assert!(!player.items.is_empty());
        }
    }
}
