//! Party roster tracking for tabletop role-playing campaigns.
//!
//! This crate provides:
//! - A [`Roster`] store owning the canonical in-memory party collection
//! - [`Player`] and [`Item`] models with display helpers
//! - A [`PlayerBuilder`] mirroring the add-player creation flow
//! - A fixed sample party for seeding new rosters
//!
//! The store is single-threaded and pull-based: it issues no change
//! notifications, and callers re-query after any mutation.
//!
//! # Quick Start
//!
//! ```
//! use party_core::{PlayerBuilder, PlayerUpdate, Roster};
//!
//! let mut roster = Roster::with_sample_party();
//!
//! let grog = PlayerBuilder::new()
//!     .name("Grog Strongjaw")
//!     .class("Barbarian")
//!     .race("Goliath")
//!     .location("Emon")
//!     .build()?;
//! let id = grog.id.clone();
//! roster.add_player(grog);
//!
//! assert!(roster.update_player(&id, PlayerUpdate::new().with_level(2)));
//! assert_eq!(roster.player_by_id(&id).unwrap().level, 2);
//! assert!(roster.delete_player(&id));
//! # Ok::<(), party_core::BuilderError>(())
//! ```

pub mod item;
pub mod player;
pub mod player_builder;
pub mod roster;
pub mod sample_data;

// Primary public API
pub use item::{Item, ItemId, ItemType, Rarity};
pub use player::{HealthTier, Player, PlayerId, PointPool};
pub use player_builder::{BuilderError, PlayerBuilder};
pub use roster::{PlayerUpdate, Roster};
pub use sample_data::sample_party;
