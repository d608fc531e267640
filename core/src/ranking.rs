use crate::config::RecommendationConfig;
use crate::graph::SocialGraph;
use crate::profile::ProfileId;
use crate::traversal::{Algorithm, ScoredProfile, TraversalStats, find_best_path};
use indexmap::IndexMap;
use std::time::Instant;
use tracing::info;

/// Highest score first; ties keep their input order. At most `limit`
/// entries survive.
pub fn rank<'g>(mut results: Vec<ScoredProfile<'g>>, limit: usize) -> Vec<ScoredProfile<'g>> {
    // sort_by is stable
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);
    results
}

/// Concatenates result sets and keeps one entry per profile id. A later
/// entry overwrites the score of an earlier one but not its position.
pub fn merge<'g, I>(result_sets: I) -> Vec<ScoredProfile<'g>>
where
    I: IntoIterator<Item = Vec<ScoredProfile<'g>>>,
{
    let mut merged: IndexMap<&'g str, ScoredProfile<'g>> = IndexMap::new();

    for result in result_sets.into_iter().flatten() {
        merged.insert(result.id(), result);
    }

    merged.into_values().collect()
}

/// Everything one session produces for the current user.
#[derive(Debug, Clone)]
pub struct Recommendations<'g> {
    /// Merged breadth-first and depth-first candidates, ranked
    pub combined: Vec<ScoredProfile<'g>>,
    pub breadth_first: Vec<ScoredProfile<'g>>,
    pub depth_first: Vec<ScoredProfile<'g>>,
    pub top_match: Option<ScoredProfile<'g>>,
    /// Ids from the user to the top match, `None` when unreachable
    pub path_to_top_match: Option<Vec<ProfileId>>,
    pub breadth_first_stats: TraversalStats,
    pub depth_first_stats: TraversalStats,
    pub duration_ms: u64,
}

impl<'g> Recommendations<'g> {
    /// Ranked list produced by one enumeration alone.
    pub fn ranked_by(&self, algorithm: Algorithm) -> &[ScoredProfile<'g>] {
        match algorithm {
            Algorithm::Bfs => &self.breadth_first,
            Algorithm::Dfs => &self.depth_first,
        }
    }

    pub fn stats_for(&self, algorithm: Algorithm) -> &TraversalStats {
        match algorithm {
            Algorithm::Bfs => &self.breadth_first_stats,
            Algorithm::Dfs => &self.depth_first_stats,
        }
    }
}

/// Runs both enumerations from `user_id`, merges and ranks them, then
/// searches the best path to the top match.
pub fn recommend<'g>(
    graph: &'g SocialGraph,
    user_id: &str,
    config: &RecommendationConfig,
) -> Recommendations<'g> {
    let session_timer = Instant::now();

    let breadth_first = Algorithm::Bfs.enumerate(graph, user_id, config.max_depth);
    let depth_first = Algorithm::Dfs.enumerate(graph, user_id, config.max_depth);

    let combined = rank(
        merge([
            breadth_first.recommendations.clone(),
            depth_first.recommendations.clone(),
        ]),
        config.top_n,
    );

    let top_match = combined.first().copied();
    let path_to_top_match = top_match.and_then(|best| {
        let (path, _, _) = find_best_path(graph, user_id, best.id());
        path
    });

    let duration_ms = session_timer.elapsed().as_millis() as u64;
    info!(
        user_id,
        candidates = combined.len(),
        top_match = top_match.map(|best| best.id()),
        duration_ms,
        "recommendation session finished"
    );

    Recommendations {
        combined,
        breadth_first: rank(breadth_first.recommendations, config.top_n),
        depth_first: rank(depth_first.recommendations, config.top_n),
        top_match,
        path_to_top_match,
        breadth_first_stats: breadth_first.stats,
        depth_first_stats: depth_first.stats,
        duration_ms,
    }
}
