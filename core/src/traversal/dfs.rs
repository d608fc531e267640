use super::TraversalResult;
use super::utils::{ScoredProfile, score_candidate};
use crate::graph::SocialGraph;
use crate::profile::ProfileId;
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::debug;

/// Stack-based walk that scores profiles up to `max_depth` hops from
/// `start`. Profiles at `max_depth` are scored but not expanded.
///
/// A profile is marked visited when first pushed, so its recorded depth is
/// the depth of whichever path reached it first, not the shortest one. A
/// profile two hops away by one route and one hop by another can therefore
/// end up unexpanded at the bound.
pub fn enumerate_within_depth<'g>(
    graph: &'g SocialGraph,
    start: &str,
    max_depth: usize,
) -> TraversalResult<'g> {
    let search_timer = Instant::now();

    let Some(start_profile) = graph.profile(start) else {
        return TraversalResult::new(vec![], 0, 0);
    };

    let mut stack: Vec<(ProfileId, usize)> = vec![(start.to_string(), 0)];
    let mut visited: FxHashSet<ProfileId> = FxHashSet::default();
    visited.insert(start.to_string());

    let mut recommendations: Vec<ScoredProfile<'g>> = Vec::new();

    while let Some((current, depth)) = stack.pop() {
        if current != start {
            recommendations.extend(score_candidate(graph, start_profile, &current));
        }

        if depth >= max_depth {
            continue;
        }

        for neighbor in graph.neighbors(&current) {
            if visited.insert(neighbor.clone()) {
                stack.push((neighbor.clone(), depth + 1));
            }
        }
    }

    let duration_ms = search_timer.elapsed().as_millis() as u64;
    debug!(
        start,
        max_depth,
        visited = visited.len(),
        found = recommendations.len(),
        duration_ms,
        "depth-bounded enumeration finished"
    );

    TraversalResult::new(recommendations, visited.len(), duration_ms)
}
