use crate::{args_for, data_dir};
use ketban::{AppError, KetbanApp};
use std::fs;

#[test]
fn test_missing_profiles_file_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();

    let error = KetbanApp::new(&args_for(dir.path(), &[])).err().unwrap();

    assert!(matches!(error, AppError::ProfilesNotFound(_)));
    assert!(error.to_string().contains("profiles.json"));
}

#[test]
fn test_missing_explicit_config_is_fatal() {
    let dir = data_dir(false);
    let missing = dir.path().join("other.json");

    let error = KetbanApp::new(&args_for(dir.path(), &["--config", missing.to_str().unwrap()]))
        .err()
        .unwrap();

    assert!(matches!(error, AppError::ConfigNotFound(_)));
}

#[test]
fn test_default_config_is_optional() {
    let dir = data_dir(false);

    let app = KetbanApp::new(&args_for(dir.path(), &[])).unwrap();

    assert!(app.config_path.is_none());
    assert!(app.load_config().unwrap().locations.is_empty());
}

#[test]
fn test_load_records() {
    let dir = data_dir(true);
    let app = KetbanApp::new(&args_for(dir.path(), &[])).unwrap();

    let records = app.load_records().unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].id.as_deref(), Some("1"));
    assert_eq!(records[3].name.as_deref(), Some("Võ Thị Em"));
}

#[test]
fn test_build_graph_from_files() {
    let dir = data_dir(true);
    let app = KetbanApp::new(&args_for(dir.path(), &[])).unwrap();

    let graph = app.build_graph().unwrap();

    assert_eq!(graph.len(), 4);
    assert!(graph.are_connected("1", "2"));
    assert!(graph.are_connected("3", "2"));
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.location_equivalence().region_of("hanoi"), Some("north"));
    assert!(graph.interest_taxonomy().groups().contains_key("Nghệ thuật"));
}

#[test]
fn test_malformed_profiles_file() {
    let dir = data_dir(false);
    fs::write(dir.path().join("profiles.json"), "{ not json").unwrap();
    let app = KetbanApp::new(&args_for(dir.path(), &[])).unwrap();

    let error = app.build_graph().err().unwrap();

    assert!(matches!(error, AppError::Json { .. }));
}
