//! Integration tests for the roster store.
//!
//! These tests exercise the public CRUD surface end to end:
//! - Add / lookup / update / delete round trips
//! - Not-found behaviour (absent lookups, false-returning mutations)
//! - Count bookkeeping across mutations
//! - Duplicate-id behaviour (documented, deliberately unguarded)
//! - The seeded sample party

use party_core::{Item, ItemType, Player, PlayerBuilder, PlayerId, PlayerUpdate, Roster};

fn goliath(id: &str, name: &str) -> Player {
    Player::new(id, name, "Barbarian", "Goliath", "Emon")
}

// =============================================================================
// BASIC CRUD
// =============================================================================

#[test]
fn test_add_then_get_round_trip() {
    let mut roster = Roster::new();
    let player = goliath("7", "Grog").with_level(4);
    let expected = player.clone();

    roster.add_player(player);

    assert_eq!(roster.player_by_id(&"7".into()), Some(&expected));
}

#[test]
fn test_absent_id_is_not_an_error() {
    let mut roster = Roster::new();
    roster.add_player(goliath("1", "Grog"));

    let ghost: PlayerId = "does-not-exist".into();
    assert!(roster.player_by_id(&ghost).is_none());
    assert!(!roster.delete_player(&ghost));
    assert!(!roster.update_player(&ghost, PlayerUpdate::new().with_level(20)));

    // The miss left everything untouched
    assert_eq!(roster.player_count(), 1);
    assert_eq!(roster.player_by_id(&"1".into()).unwrap().level, 1);
}

#[test]
fn test_count_tracks_mutations() {
    let mut roster = Roster::new();
    assert_eq!(roster.player_count(), 0);

    roster.add_player(goliath("1", "Grog"));
    assert_eq!(roster.player_count(), 1);

    roster.add_player(goliath("2", "Pike"));
    assert_eq!(roster.player_count(), 2);

    assert!(roster.delete_player(&"1".into()));
    assert_eq!(roster.player_count(), 1);

    assert!(!roster.delete_player(&"1".into()));
    assert_eq!(roster.player_count(), 1);
}

// =============================================================================
// PARTIAL UPDATE
// =============================================================================

#[test]
fn test_update_touches_only_named_fields() {
    let mut roster = Roster::new();
    roster.add_player(
        goliath("1", "Grog")
            .with_level(4)
            .with_health(55, 70)
            .with_backstory("Strongest of the herd.")
            .with_item(Item::new("Bloodaxe", ItemType::Weapon)),
    );
    let before = roster.player_by_id(&"1".into()).unwrap().clone();

    assert!(roster.update_player(&"1".into(), PlayerUpdate::new().with_level(5)));

    let after = roster.player_by_id(&"1".into()).unwrap();
    assert_eq!(after.level, 5);
    assert_eq!(after.id, before.id);
    assert_eq!(after.name, before.name);
    assert_eq!(after.class, before.class);
    assert_eq!(after.race, before.race);
    assert_eq!(after.backstory, before.backstory);
    assert_eq!(after.current_location, before.current_location);
    assert_eq!(after.health_points, before.health_points);
    assert_eq!(after.mana_points, before.mana_points);
    assert_eq!(after.items, before.items);
    assert_eq!(after.avatar, before.avatar);
}

#[test]
fn test_update_can_replace_inventory() {
    let mut roster = Roster::new();
    roster.add_player(goliath("1", "Grog").with_item(Item::new("Bloodaxe", ItemType::Weapon)));

    let new_items = vec![
        Item::new("Titanstone Knuckles", ItemType::Weapon).with_id("k1"),
        Item::new("Ale Tankard", ItemType::Misc).with_id("t1"),
    ];
    assert!(roster.update_player(&"1".into(), PlayerUpdate::new().with_items(new_items.clone())));

    assert_eq!(roster.player_by_id(&"1".into()).unwrap().items, new_items);
}

// =============================================================================
// DUPLICATE IDS (documented behaviour, deliberately unguarded)
// =============================================================================

#[test]
fn test_duplicate_ids_both_persist_and_first_wins() {
    let mut roster = Roster::new();
    roster.add_player(goliath("1", "Grog"));
    roster.add_player(goliath("1", "Grog's Double"));

    assert_eq!(roster.player_count(), 2);

    // Lookup resolves to the first entry
    assert_eq!(roster.player_by_id(&"1".into()).unwrap().name, "Grog");

    // Both entries are visible in the full collection
    let matching: Vec<_> = roster
        .players()
        .iter()
        .filter(|p| p.id == "1".into())
        .collect();
    assert_eq!(matching.len(), 2);

    // Delete removes only the first; the double remains
    assert!(roster.delete_player(&"1".into()));
    assert_eq!(roster.player_by_id(&"1".into()).unwrap().name, "Grog's Double");
}

// =============================================================================
// SEEDED SAMPLE PARTY
// =============================================================================

#[test]
fn test_seeded_roster_matches_sample_party() {
    let roster = Roster::with_sample_party();
    assert_eq!(roster.player_count(), party_core::sample_party().len());

    let elandra = roster
        .players()
        .iter()
        .find(|p| p.name.starts_with("Elandra"))
        .expect("sample party includes Elandra");
    assert_eq!(elandra.items.len(), 3);
}

#[test]
fn test_add_then_delete_against_seed() {
    let mut roster = Roster::with_sample_party();
    let seeded = roster.player_count();

    roster.add_player(goliath("99", "Grog"));
    assert_eq!(roster.player_count(), seeded + 1);
    assert_eq!(roster.player_by_id(&"99".into()).unwrap().name, "Grog");

    assert!(roster.delete_player(&"99".into()));
    assert_eq!(roster.player_count(), seeded);
    assert!(roster.player_by_id(&"99".into()).is_none());
}

#[test]
fn test_seed_entries_come_first() {
    let mut roster = Roster::with_sample_party();
    roster.add_player(goliath("99", "Grog"));

    let players = roster.players();
    assert!(players[..players.len() - 1]
        .iter()
        .zip(party_core::sample_party().iter())
        .all(|(live, seed)| live.id == seed.id));
    assert_eq!(players.last().unwrap().name, "Grog");
}

#[test]
fn test_rosters_do_not_share_seed_state() {
    let mut first = Roster::with_sample_party();
    let second = Roster::with_sample_party();

    assert!(first.update_player(&"1".into(), PlayerUpdate::new().with_location("Ashen Vale")));
    assert!(first.delete_player(&"2".into()));

    // The second roster (and any future seeding) is unaffected
    assert_eq!(second.player_count(), party_core::sample_party().len());
    assert_eq!(
        second.player_by_id(&"1".into()).unwrap().current_location,
        "The Whispering Glade"
    );

    let third = Roster::with_sample_party();
    assert!(third.player_by_id(&"2".into()).is_some());
}

// =============================================================================
// BUILDER TO STORE FLOW
// =============================================================================

#[test]
fn test_created_player_lands_in_roster() {
    let mut roster = Roster::with_sample_party();
    let before = roster.player_count();

    let pike = PlayerBuilder::new()
        .name("Pike Trickfoot")
        .class("Cleric")
        .race("Gnome")
        .location("Westruun")
        .level_input("3")
        .health_input("22", "25")
        .mana_input("30", "30")
        .add_item(Item::new("Holy Symbol", ItemType::Misc))
        .build()
        .expect("complete form builds");
    let id = pike.id.clone();

    roster.add_player(pike);

    assert_eq!(roster.player_count(), before + 1);
    let stored = roster.player_by_id(&id).unwrap();
    assert_eq!(stored.summary(), "Level 3 Gnome Cleric");
    assert!(stored.has_mana_pool());
    assert_eq!(stored.total_item_quantity(), 1);
}
