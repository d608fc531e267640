use crate::taxonomy::{InterestGroups, InterestTaxonomy, LocationEquivalence};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default number of suggestions kept per list.
pub const DEFAULT_TOP_N: usize = 30;
/// Default hop bound of the depth-first enumeration.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Side-channel configuration document. Keys other than `locations` and
/// `interest_groups` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Location label to region key.
    #[serde(default)]
    pub locations: IndexMap<String, String>,
    /// Supplemental interest groups, merged over the built-in ones.
    #[serde(default)]
    pub interest_groups: InterestGroups,
}

impl SessionConfig {
    pub fn location_equivalence(&self) -> LocationEquivalence {
        LocationEquivalence::new(&self.locations)
    }

    pub fn interest_taxonomy(&self) -> InterestTaxonomy {
        InterestTaxonomy::merged(&self.interest_groups)
    }
}

/// Parameters of one recommendation session.
#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    /// Keep at most this many entries per ranked list
    pub top_n: usize,
    /// Depth bound for the depth-first enumeration
    pub max_depth: usize,
}

impl RecommendationConfig {
    pub fn new(top_n: usize, max_depth: usize) -> Self {
        Self { top_n, max_depth }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
