//! Packwise - smart packing assistant
//!
//! This library recommends packing lists from a trip description
//! (destination type, duration, activities and season) and tracks packing
//! progress on a checklist.

pub mod api;
pub mod catalog;
pub mod checklist;
pub mod config;
pub mod engine;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod session;
pub mod web;

// Re-export core types for public API
pub use catalog::Catalog;
pub use checklist::{Checklist, TripSummary};
pub use config::PackwiseConfig;
pub use engine::{PackingEngine, generate};
pub use error::PackwiseError;
pub use form::TripForm;
pub use models::{ItemId, PackableItem, RecommendedItem, Season, TripRequest};
pub use session::{View, ViewController};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PackwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
