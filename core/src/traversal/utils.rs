use crate::graph::SocialGraph;
use crate::profile::{Profile, ProfileId};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Path from start to goal inclusive (or `None` when unreachable), number
/// of finalized profiles, elapsed seconds.
pub type PathResult = (Option<Vec<ProfileId>>, usize, f64);

/// A candidate together with its compatibility score against the start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredProfile<'g> {
    pub profile: &'g Profile,
    pub score: u32,
}

impl<'g> ScoredProfile<'g> {
    pub fn id(&self) -> &'g str {
        self.profile.id()
    }
}

/// Scores `candidate` against `start`, keeping it only when the score is
/// positive.
pub fn score_candidate<'g>(
    graph: &'g SocialGraph,
    start: &'g Profile,
    candidate_id: &str,
) -> Option<ScoredProfile<'g>> {
    let candidate = graph.profile(candidate_id)?;
    let score = graph.score(start, candidate);
    (score > 0).then_some(ScoredProfile {
        profile: candidate,
        score,
    })
}

pub fn reconstruct_path(
    parent_map: &FxHashMap<ProfileId, ProfileId>,
    start: &str,
    target: &str,
) -> Vec<ProfileId> {
    let mut path = vec![target.to_string()];
    let mut current_node = target;

    while current_node != start {
        let parent_node = &parent_map[current_node];
        path.push(parent_node.clone());
        current_node = parent_node;
    }

    path.reverse();
    path
}
