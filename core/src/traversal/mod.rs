pub mod best_path;
pub mod bfs;
pub mod dfs;
pub mod utils;

pub use best_path::find_best_path;
pub use bfs::enumerate_reachable;
pub use dfs::enumerate_within_depth;
pub use utils::{PathResult, ScoredProfile};

use crate::graph::SocialGraph;
use serde::{Deserialize, Serialize};

/// Enumeration strategy used to collect scored candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }

    /// Runs the enumeration from `start`. Only `Dfs` honors `max_depth`.
    pub fn enumerate<'g>(
        &self,
        graph: &'g SocialGraph,
        start: &str,
        max_depth: usize,
    ) -> TraversalResult<'g> {
        match self {
            Algorithm::Bfs => enumerate_reachable(graph, start),
            Algorithm::Dfs => enumerate_within_depth(graph, start, max_depth),
        }
    }
}

impl From<&str> for Algorithm {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "dfs" => Algorithm::Dfs,
            _ => Algorithm::Bfs,
        }
    }
}

impl From<String> for Algorithm {
    fn from(value: String) -> Self {
        Algorithm::from(value.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct TraversalResult<'g> {
    /// Candidates with a positive score, in visit order
    pub recommendations: Vec<ScoredProfile<'g>>,
    pub stats: TraversalStats,
}

#[derive(Debug, Clone)]
pub struct TraversalStats {
    pub profiles_visited: usize,
    pub duration_ms: u64,
}

impl<'g> TraversalResult<'g> {
    pub fn new(
        recommendations: Vec<ScoredProfile<'g>>,
        profiles_visited: usize,
        duration_ms: u64,
    ) -> Self {
        Self {
            recommendations,
            stats: TraversalStats {
                profiles_visited,
                duration_ms,
            },
        }
    }

    pub fn total_found(&self) -> usize {
        self.recommendations.len()
    }
}
