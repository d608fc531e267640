#![allow(dead_code)]

use ketban_core::{
    CategoryResolver, InterestTaxonomy, LocationEquivalence, Profile, RawRecord, ScoredProfile,
    SocialGraph,
};

pub const NEW_USER: &str = "NEW_USER";

pub struct TestRecord(RawRecord);

impl TestRecord {
    pub fn new(id: &str) -> Self {
        Self(RawRecord {
            id: Some(id.to_string()),
            name: Some(format!("user {id}")),
            ..Default::default()
        })
    }

    pub fn location(mut self, location: &str) -> Self {
        self.0.location = Some(location.to_string());
        self
    }

    pub fn interests(mut self, interests: &str) -> Self {
        self.0.interests = Some(interests.to_string());
        self
    }

    pub fn profession(mut self, profession: &str) -> Self {
        self.0.profession = Some(profession.to_string());
        self
    }

    pub fn knows(mut self, ids: &str) -> Self {
        self.0.known_connections = Some(ids.to_string());
        self
    }

    pub fn record(self) -> RawRecord {
        self.0
    }

    pub fn profile(self) -> Profile {
        Profile::from_record(&self.0, &CategoryResolver::default())
    }
}

pub fn build_graph(population: Vec<TestRecord>) -> SocialGraph {
    build_graph_with_locations(population, LocationEquivalence::default())
}

pub fn build_graph_with_locations(
    population: Vec<TestRecord>,
    locations: LocationEquivalence,
) -> SocialGraph {
    let profiles = population.into_iter().map(TestRecord::profile).collect();
    SocialGraph::new(profiles, locations, InterestTaxonomy::default())
}

pub fn assert_symmetric(graph: &SocialGraph) {
    for profile in graph.profiles() {
        for neighbor in graph.neighbors(profile.id()) {
            assert!(
                graph.neighbors(neighbor).any(|back| back == profile.id()),
                "edge {} -> {} has no reverse",
                profile.id(),
                neighbor
            );
        }
    }
}

/// NEW_USER - 1 - 2 - 3 - 4 - 5 chain plus the isolated profile 6.
///
/// Scores against NEW_USER: 1 => 2, 2 => 2, 3 => 0, 4 => 1, 5 => 1, 6 => 1.
pub fn chain_graph() -> SocialGraph {
    let mut graph = build_graph(vec![
        TestRecord::new("1").location("Đà Nẵng").interests("Yoga").knows("2"),
        TestRecord::new("2").location("Huế").interests("Chạy bộ").knows("3"),
        TestRecord::new("3").location("Huế").interests("Đọc sách").knows("4"),
        TestRecord::new("4").location("Huế").interests("Đạp xe").knows("5"),
        TestRecord::new("5").location("Huế").interests("Bơi lội"),
        TestRecord::new("6").location("Cần Thơ").interests("Tập gym"),
    ]);
    graph
        .insert(
            TestRecord::new(NEW_USER)
                .location("Hải Phòng")
                .interests("Yoga")
                .profile(),
        )
        .unwrap();
    graph
}

/// NEW_USER is adjacent to 1 and 2; 1 - 4, 2 - 3 - 4, 4 - 5.
///
/// 5 is three hops away through 1, but the depth-first walk reaches 4
/// through 2 and 3 first.
pub fn detour_graph() -> SocialGraph {
    let mut graph = build_graph(vec![
        TestRecord::new("1").location("Vinh").interests("Làm vườn").knows("4"),
        TestRecord::new("2").location("Huế").interests("Làm vườn").knows("3"),
        TestRecord::new("3").location("Huế").knows("4"),
        TestRecord::new("4").location("Huế").knows("5"),
        TestRecord::new("5").location("Huế").interests("Nấu ăn"),
    ]);
    graph
        .insert(
            TestRecord::new(NEW_USER)
                .location("Hải Phòng")
                .interests("Làm vườn")
                .profile(),
        )
        .unwrap();
    graph
}

pub fn ids<'g>(results: &[ScoredProfile<'g>]) -> Vec<&'g str> {
    results.iter().map(|scored| scored.id()).collect()
}
