use super::TraversalResult;
use super::utils::{ScoredProfile, score_candidate};
use crate::graph::SocialGraph;
use crate::profile::ProfileId;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::time::Instant;
use tracing::debug;

/// Scores every profile reachable from `start`, at any depth. Each profile
/// is visited once; `start` itself is never scored.
pub fn enumerate_reachable<'g>(graph: &'g SocialGraph, start: &str) -> TraversalResult<'g> {
    let search_timer = Instant::now();

    let Some(start_profile) = graph.profile(start) else {
        return TraversalResult::new(vec![], 0, 0);
    };

    let mut bfs_state = BfsState::new(start);
    let mut recommendations: Vec<ScoredProfile<'g>> = Vec::new();

    while let Some(current) = bfs_state.queue.pop_front() {
        if current != start {
            recommendations.extend(score_candidate(graph, start_profile, &current));
        }

        for neighbor in graph.neighbors(&current) {
            bfs_state.visit_neighbor(neighbor);
        }
    }

    let duration_ms = search_timer.elapsed().as_millis() as u64;
    debug!(
        start,
        visited = bfs_state.visited.len(),
        found = recommendations.len(),
        duration_ms,
        "breadth-first enumeration finished"
    );

    TraversalResult::new(recommendations, bfs_state.visited.len(), duration_ms)
}

struct BfsState {
    queue: VecDeque<ProfileId>,
    visited: FxHashSet<ProfileId>,
}

impl BfsState {
    fn new(start: &str) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start.to_string());
        visited.insert(start.to_string());

        Self { queue, visited }
    }

    fn visit_neighbor(&mut self, neighbor: &ProfileId) {
        if self.visited.insert(neighbor.clone()) {
            self.queue.push_back(neighbor.clone());
        }
    }
}
