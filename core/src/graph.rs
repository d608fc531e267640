use crate::error::GraphError;
use crate::profile::{Profile, ProfileId};
use crate::string_normalization::MISSING;
use crate::taxonomy::{InterestTaxonomy, LocationEquivalence};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

pub type Adjacency = FxHashMap<ProfileId, BTreeSet<ProfileId>>;

/// Why a new profile was connected to an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionReason {
    SameLocation,
    EquivalentLocation,
    SharedInterest,
    SameProfessionCategory,
}

/// Profiles plus the symmetric "connected to" relation between them.
#[derive(Debug, Clone)]
pub struct SocialGraph {
    profiles: FxHashMap<ProfileId, Profile>,
    adjacency: Adjacency,
    location_equivalence: LocationEquivalence,
    interest_taxonomy: InterestTaxonomy,
    current_user: Option<ProfileId>,
}

impl SocialGraph {
    /// Builds the graph from the whole population. Declared connections are
    /// made symmetric; references to unknown ids or to the profile itself
    /// are dropped.
    pub fn new(
        population: Vec<Profile>,
        location_equivalence: LocationEquivalence,
        interest_taxonomy: InterestTaxonomy,
    ) -> Self {
        let mut profiles = FxHashMap::with_capacity_and_hasher(population.len(), Default::default());

        for profile in population {
            if profile.id() == MISSING {
                warn!(name = %profile.name, "skipping profile without an id");
                continue;
            }
            if let Some(previous) = profiles.insert(profile.id().to_string(), profile) {
                warn!(id = previous.id(), "duplicate profile id, keeping the last record");
            }
        }

        let mut adjacency: Adjacency = profiles
            .keys()
            .map(|id| (id.clone(), BTreeSet::new()))
            .collect();

        let mut dropped_references = 0usize;
        for (id, profile) in &profiles {
            for friend_id in profile.known_connection_ids() {
                if friend_id == id {
                    debug!(id = %id, "dropping connection to self");
                    dropped_references += 1;
                    continue;
                }
                if !profiles.contains_key(friend_id) {
                    debug!(id = %id, friend_id = %friend_id, "dropping connection to unknown profile");
                    dropped_references += 1;
                    continue;
                }
                link(&mut adjacency, id, friend_id);
            }
        }

        let edge_count = adjacency.values().map(BTreeSet::len).sum::<usize>() / 2;
        info!(
            profiles = profiles.len(),
            edges = edge_count,
            dropped_references,
            "social graph built"
        );

        Self {
            profiles,
            adjacency,
            location_equivalence,
            interest_taxonomy,
            current_user: None,
        }
    }

    /// Adds the current user and connects it to every existing profile it
    /// has something in common with. Accepted once per graph.
    pub fn insert(&mut self, new_profile: Profile) -> Result<&Profile, GraphError> {
        if let Some(existing) = &self.current_user {
            return Err(GraphError::CurrentUserAlreadyInserted(existing.clone()));
        }
        if self.profiles.contains_key(new_profile.id()) {
            return Err(GraphError::DuplicateProfile(new_profile.id().to_string()));
        }

        let new_id = new_profile.id().to_string();
        let matches: Vec<(ProfileId, ConnectionReason)> = self
            .profiles
            .values()
            .filter_map(|existing| {
                self.connection_reason(&new_profile, existing)
                    .map(|reason| (existing.id().to_string(), reason))
            })
            .collect();

        self.adjacency.insert(new_id.clone(), BTreeSet::new());
        for (existing_id, reason) in &matches {
            debug!(new_id = %new_id, existing_id = %existing_id, ?reason, "connecting new profile");
            link(&mut self.adjacency, &new_id, existing_id);
        }

        info!(id = %new_id, connections = matches.len(), "current user inserted");
        self.profiles.insert(new_id.clone(), new_profile);
        self.current_user = Some(new_id.clone());

        Ok(&self.profiles[&new_id])
    }

    /// First matching criterion that links `new_profile` to `existing`.
    pub fn connection_reason(
        &self,
        new_profile: &Profile,
        existing: &Profile,
    ) -> Option<ConnectionReason> {
        if new_profile.id() == existing.id() {
            return None;
        }

        if new_profile.has_location() && new_profile.location == existing.location {
            return Some(ConnectionReason::SameLocation);
        }

        if let (Some(new_region), Some(existing_region)) = (
            self.location_equivalence.region_of(&new_profile.location),
            self.location_equivalence.region_of(&existing.location),
        ) {
            if new_region == existing_region {
                return Some(ConnectionReason::EquivalentLocation);
            }
        }

        if !new_profile
            .interest_keys()
            .is_disjoint(existing.interest_keys())
        {
            return Some(ConnectionReason::SharedInterest);
        }

        if new_profile.has_profession_category()
            && new_profile.profession_category() == existing.profession_category()
        {
            return Some(ConnectionReason::SameProfessionCategory);
        }

        None
    }

    /// Compatibility of two profiles. Symmetric in its arguments; missing
    /// attributes never earn points.
    pub fn score(&self, a: &Profile, b: &Profile) -> u32 {
        let mut score = 0;

        if a.has_location() && a.location == b.location {
            score += 1;
        }

        if a.has_profession_category() && a.profession_category() == b.profession_category() {
            score += 1;
        }

        if self.has_mutual_connection(a.id(), b.id()) {
            score += 1;
        }

        let (a_tags, b_tags) = (a.interest_keys(), b.interest_keys());
        score += 2 * a_tags.intersection(b_tags).count() as u32;

        if self.has_same_group_different_interest(a, b) {
            score += 1;
        }

        score
    }

    fn has_mutual_connection(&self, a: &str, b: &str) -> bool {
        match (self.adjacency.get(a), self.adjacency.get(b)) {
            (Some(a_neighbors), Some(b_neighbors)) => !a_neighbors.is_disjoint(b_neighbors),
            _ => false,
        }
    }

    /// True when some group holds tags of both profiles but none in common.
    /// The scan stops at the first such group, so the bonus counts once.
    fn has_same_group_different_interest(&self, a: &Profile, b: &Profile) -> bool {
        self.interest_taxonomy.member_sets().any(|members| {
            let a_in: BTreeSet<&String> = a
                .interest_keys()
                .iter()
                .filter(|tag| members.contains(*tag))
                .collect();
            let b_in: BTreeSet<&String> = b
                .interest_keys()
                .iter()
                .filter(|tag| members.contains(*tag))
                .collect();
            !a_in.is_empty() && !b_in.is_empty() && a_in.is_disjoint(&b_in)
        })
    }

    /// Profiles adjacent to both `a` and `b`, ordered by id.
    pub fn mutual_connections(&self, a: &str, b: &str) -> Vec<&Profile> {
        match (self.adjacency.get(a), self.adjacency.get(b)) {
            (Some(a_neighbors), Some(b_neighbors)) => a_neighbors
                .intersection(b_neighbors)
                .filter_map(|id| self.profiles.get(id))
                .collect(),
            _ => vec![],
        }
    }

    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.profiles.contains_key(id)
    }

    /// Neighbors of `id` in ascending id order; empty for unknown ids.
    pub fn neighbors<'g>(&'g self, id: &str) -> impl Iterator<Item = &'g ProfileId> + use<'g> {
        self.adjacency.get(id).into_iter().flatten()
    }

    pub fn are_connected(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(b))
    }

    pub fn degree(&self, id: &str) -> usize {
        self.adjacency.get(id).map_or(0, BTreeSet::len)
    }

    pub fn current_user(&self) -> Option<&Profile> {
        self.current_user.as_deref().and_then(|id| self.profiles.get(id))
    }

    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn interest_taxonomy(&self) -> &InterestTaxonomy {
        &self.interest_taxonomy
    }

    pub fn location_equivalence(&self) -> &LocationEquivalence {
        &self.location_equivalence
    }
}

/// Records `a - b` on both sides.
fn link(adjacency: &mut Adjacency, a: &str, b: &str) {
    adjacency.entry(a.to_string()).or_default().insert(b.to_string());
    adjacency.entry(b.to_string()).or_default().insert(a.to_string());
}
