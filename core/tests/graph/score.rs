use crate::fixtures::{NEW_USER, TestRecord, build_graph, build_graph_with_locations, chain_graph};
use ketban_core::LocationEquivalence;

fn score_between(population: Vec<TestRecord>, a: &str, b: &str) -> u32 {
    let graph = build_graph(population);
    let (a, b) = (graph.profile(a).unwrap(), graph.profile(b).unwrap());
    let forward = graph.score(a, b);
    assert_eq!(forward, graph.score(b, a), "score must not depend on argument order");
    forward
}

#[test]
fn test_same_location_and_one_shared_interest() {
    let score = score_between(
        vec![
            TestRecord::new("1").location("Huế").interests("Yoga"),
            TestRecord::new("2").location("Huế").interests("Yoga"),
        ],
        "1",
        "2",
    );

    assert_eq!(score, 3);
}

#[test]
fn test_equivalent_locations_earn_no_location_point() {
    let graph = build_graph_with_locations(
        vec![
            TestRecord::new("1").location("Hà Nội"),
            TestRecord::new("2").location("Hanoi"),
        ],
        LocationEquivalence::new([("Hà Nội", "north"), ("Hanoi", "north")]),
    );
    let (ha_noi, hanoi) = (graph.profile("1").unwrap(), graph.profile("2").unwrap());

    assert_eq!(graph.score(ha_noi, hanoi), 0);
    assert_eq!(graph.score(hanoi, ha_noi), 0);
}

#[test]
fn test_edge_from_equivalent_location_earns_no_location_point() {
    let mut graph = build_graph_with_locations(
        vec![TestRecord::new("1").location("Hà Nội")],
        LocationEquivalence::new([("Hà Nội", "north"), ("Hanoi", "north")]),
    );
    graph
        .insert(TestRecord::new(NEW_USER).location("Hanoi").profile())
        .unwrap();
    assert!(graph.are_connected(NEW_USER, "1"));

    let (new_user, ha_noi) = (graph.profile(NEW_USER).unwrap(), graph.profile("1").unwrap());
    assert_eq!(graph.score(new_user, ha_noi), 0);
    assert_eq!(graph.score(ha_noi, new_user), 0);
}

#[test]
fn test_single_mutual_connection() {
    let score = score_between(
        vec![
            TestRecord::new("1").location("Huế").knows("3"),
            TestRecord::new("2").location("Vinh").knows("3"),
            TestRecord::new("3"),
        ],
        "1",
        "2",
    );

    assert_eq!(score, 1);
}

#[test]
fn test_adjacent_profiles_without_mutual_connection_score_zero() {
    let score = score_between(
        vec![TestRecord::new("1").knows("2"), TestRecord::new("2")],
        "1",
        "2",
    );

    assert_eq!(score, 0);
}

#[test]
fn test_professions_in_same_category() {
    let score = score_between(
        vec![
            TestRecord::new("1").profession("Kế toán"),
            TestRecord::new("2").profession("Kiểm toán"),
        ],
        "1",
        "2",
    );

    assert_eq!(score, 1);
}

#[test]
fn test_unclassified_professions_never_match() {
    let score = score_between(
        vec![
            TestRecord::new("1").profession("Phi hành gia"),
            TestRecord::new("2").profession("Phi hành gia"),
        ],
        "1",
        "2",
    );

    assert_eq!(score, 0);
}

#[test]
fn test_missing_attributes_score_nothing() {
    let score = score_between(
        vec![
            TestRecord::new("1").location("-").profession("nan"),
            TestRecord::new("2").location("").profession("-"),
        ],
        "1",
        "2",
    );

    assert_eq!(score, 0);
}

#[test]
fn test_each_shared_interest_scores_two() {
    let score = score_between(
        vec![
            TestRecord::new("1").interests("Yoga; Nấu ăn; Câu cá"),
            TestRecord::new("2").interests("câu cá;YOGA;nấu ăn"),
        ],
        "1",
        "2",
    );

    assert_eq!(score, 6);
}

#[test]
fn test_same_group_different_interest_bonus() {
    let score = score_between(
        vec![
            TestRecord::new("1").interests("Yoga"),
            TestRecord::new("2").interests("Chạy bộ"),
        ],
        "1",
        "2",
    );

    assert_eq!(score, 1);
}

#[test]
fn test_group_bonus_counts_once_across_groups() {
    // Both "Vận động" and "Thư giãn" qualify; the bonus is not additive.
    let score = score_between(
        vec![
            TestRecord::new("1").interests("Yoga; Đọc sách"),
            TestRecord::new("2").interests("Chạy bộ; Nấu ăn"),
        ],
        "1",
        "2",
    );

    assert_eq!(score, 1);
}

#[test]
fn test_group_bonus_alongside_shared_tag_in_other_group() {
    let score = score_between(
        vec![
            TestRecord::new("1").interests("Yoga; Xem phim"),
            TestRecord::new("2").interests("Yoga; Nghe nhạc"),
        ],
        "1",
        "2",
    );

    assert_eq!(score, 3);
}

#[test]
fn test_no_group_bonus_when_group_tags_overlap() {
    let score = score_between(
        vec![
            TestRecord::new("1").interests("Yoga; Chạy bộ"),
            TestRecord::new("2").interests("Yoga"),
        ],
        "1",
        "2",
    );

    assert_eq!(score, 2);
}

#[test]
fn test_score_is_symmetric_for_every_pair() {
    let graph = chain_graph();
    let profiles: Vec<_> = graph.profiles().collect();

    for a in &profiles {
        for b in &profiles {
            assert_eq!(graph.score(a, b), graph.score(b, a), "{} vs {}", a.id(), b.id());
        }
    }
}
