pub mod category;
pub mod config;
pub mod error;
pub mod graph;
pub mod profile;
pub mod ranking;
pub mod string_normalization;
pub mod taxonomy;
pub mod traversal;

// Re-export commonly used items
pub use category::{CategoryResolver, UNCLASSIFIED};
pub use config::{RecommendationConfig, SessionConfig};
pub use error::GraphError;
pub use graph::{ConnectionReason, SocialGraph};
pub use profile::{Profile, ProfileId, RawRecord};
pub use ranking::{Recommendations, merge, rank, recommend};
pub use string_normalization::MISSING;
pub use taxonomy::{InterestTaxonomy, LocationEquivalence};
pub use traversal::{
    Algorithm, ScoredProfile, TraversalResult, enumerate_reachable, enumerate_within_depth,
    find_best_path,
};
