//! Print an overview of the seeded sample party.
//!
//! Run with: `cargo run -p party-core --example party_overview`

use party_core::Roster;

fn main() {
    let roster = Roster::with_sample_party();

    println!("Party roster ({} members)\n", roster.player_count());
    for player in roster.players() {
        println!("{} — {}", player.name, player.summary());
        println!("  Location: {}", player.current_location);
        println!(
            "  HP: {} ({:?})",
            player.health_points,
            player.health_tier()
        );
        if player.has_mana_pool() {
            println!("  MP: {}", player.mana_points);
        }
        println!("  Carrying {} item(s):", player.total_item_quantity());
        for item in &player.items {
            println!(
                "    [{}] {} x{} ({})",
                item.rarity.name(),
                item.name,
                item.quantity,
                item.item_type.name()
            );
        }
        println!();
    }
}
