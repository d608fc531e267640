use super::utils::{PathResult, reconstruct_path};
use crate::graph::SocialGraph;
use crate::profile::ProfileId;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};
use tracing::debug;

#[derive(Clone, PartialEq, Eq)]
struct FrontierNode {
    hops: usize,
    sequence: u64,
    profile: ProfileId,
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; equal hop counts pop in discovery order.
        other
            .hops
            .cmp(&self.hops)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

struct SearchState {
    heap: BinaryHeap<FrontierNode>,
    hop_counts: FxHashMap<ProfileId, usize>,
    parent_map: FxHashMap<ProfileId, ProfileId>,
    finalized: FxHashSet<ProfileId>,
    next_sequence: u64,
}

impl SearchState {
    fn new(start: &str) -> Self {
        let mut state = Self {
            heap: BinaryHeap::new(),
            hop_counts: FxHashMap::default(),
            parent_map: FxHashMap::default(),
            finalized: FxHashSet::default(),
            next_sequence: 0,
        };
        state.hop_counts.insert(start.to_string(), 0);
        state.push(start.to_string(), 0);
        state
    }

    fn push(&mut self, profile: ProfileId, hops: usize) {
        self.heap.push(FrontierNode {
            hops,
            sequence: self.next_sequence,
            profile,
        });
        self.next_sequence += 1;
    }

    fn visit_neighbor(&mut self, neighbor: &ProfileId, current: &ProfileId, current_hops: usize) {
        if self.finalized.contains(neighbor) {
            return;
        }

        // Every edge costs one hop.
        let new_hops = current_hops + 1;
        if let Some(&existing_hops) = self.hop_counts.get(neighbor) {
            if new_hops >= existing_hops {
                return;
            }
        }

        self.hop_counts.insert(neighbor.clone(), new_hops);
        self.parent_map.insert(neighbor.clone(), current.clone());
        self.push(neighbor.clone(), new_hops);
    }
}

/// Minimum-hop path from `start` to `goal`, both included. The frontier is
/// a priority queue keyed on path length, so weighted edges can be added
/// without changing the search.
pub fn find_best_path(graph: &SocialGraph, start: &str, goal: &str) -> PathResult {
    let search_timer = Instant::now();

    if !graph.contains(start) || !graph.contains(goal) {
        return (None, 0, 0.0);
    }

    let mut state = SearchState::new(start);

    while let Some(FrontierNode {
        hops,
        profile: current,
        ..
    }) = state.heap.pop()
    {
        if current == goal {
            let path = reconstruct_path(&state.parent_map, start, goal);
            let elapsed_time = search_timer.elapsed().as_secs_f64();
            debug!(start, goal, hops, finalized = state.finalized.len(), "best path found");
            return (Some(path), state.finalized.len(), elapsed_time);
        }

        if !state.finalized.insert(current.clone()) {
            continue;
        }

        for neighbor in graph.neighbors(&current) {
            state.visit_neighbor(neighbor, &current, hops);
        }
    }

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    debug!(start, goal, finalized = state.finalized.len(), "goal unreachable");
    (None, state.finalized.len(), elapsed_time)
}
