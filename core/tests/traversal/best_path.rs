use crate::fixtures::{NEW_USER, chain_graph, detour_graph};
use ketban_core::find_best_path;

#[test]
fn test_best_path_to_direct_neighbor() {
    let graph = chain_graph();

    let (path, _, _) = find_best_path(&graph, NEW_USER, "1");

    assert_eq!(path.unwrap(), vec![NEW_USER, "1"]);
}

#[test]
fn test_best_path_along_chain() {
    let graph = chain_graph();

    let (path, finalized, _) = find_best_path(&graph, NEW_USER, "5");

    assert_eq!(path.unwrap(), vec![NEW_USER, "1", "2", "3", "4", "5"]);
    assert_eq!(finalized, 5);
}

#[test]
fn test_best_path_takes_minimum_hops() {
    let graph = detour_graph();

    let (path, _, _) = find_best_path(&graph, NEW_USER, "5");

    let path = path.unwrap();
    assert_eq!(path.len() - 1, 3);
    assert_eq!(path, vec![NEW_USER, "1", "4", "5"]);
}

#[test]
fn test_best_path_unreachable_goal() {
    let graph = chain_graph();

    let (path, finalized, _) = find_best_path(&graph, NEW_USER, "6");

    assert!(path.is_none());
    assert_eq!(finalized, 6);
}

#[test]
fn test_best_path_unknown_goal() {
    let graph = chain_graph();

    let (path, finalized, _) = find_best_path(&graph, NEW_USER, "404");

    assert!(path.is_none());
    assert_eq!(finalized, 0);
}

#[test]
fn test_best_path_to_self() {
    let graph = chain_graph();

    let (path, _, _) = find_best_path(&graph, NEW_USER, NEW_USER);

    assert_eq!(path.unwrap(), vec![NEW_USER]);
}

#[test]
fn test_best_path_does_not_mutate_graph() {
    let graph = chain_graph();
    let edges_before = graph.edge_count();

    let _ = find_best_path(&graph, NEW_USER, "5");
    let _ = find_best_path(&graph, NEW_USER, "6");

    assert_eq!(graph.edge_count(), edges_before);
}
