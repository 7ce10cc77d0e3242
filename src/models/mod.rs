//! Data models for the Packwise application
//!
//! This module contains the core domain models organized by concern:
//! - Item: Packable items, their identifiers and categories
//! - Profile: Destination and activity profiles referencing items
//! - Trip: Trip requests and the recommended items produced for them

pub mod item;
pub mod profile;
pub mod trip;

// Re-export all public types for convenient access
pub use item::{Category, ItemId, PackableItem, UnknownItemId};
pub use profile::{ActivityProfile, Climate, DestinationProfile, ItemRef};
pub use trip::{InclusionReason, RecommendedItem, Season, TripRequest};
