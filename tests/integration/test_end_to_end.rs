//! Load a CSV dataset from disk, resolve names, search, and render.

#[path = "../common/mod.rs"]
mod common;

use common::{pid, write_chain_dataset};
use costar_core::config::CostarConfig;
use costar_core::report::PathReport;
use costar_core::search::find_shortest_path;
use costar_loader::load_dataset;
use costar_output::human::HumanFormatter;
use costar_output::json::JsonFormatter;
use costar_output::OutputFormatter;

#[test]
fn test_load_resolve_search_render() {
    let dir = tempfile::tempdir().unwrap();
    write_chain_dataset(dir.path());
    let dataset = load_dataset(dir.path(), &CostarConfig::default()).unwrap();

    let source = dataset.names.lookup("alice");
    let target = dataset.names.lookup("CAROL");
    assert_eq!(source, vec![pid("a")]);
    assert_eq!(target, vec![pid("c")]);

    let path = find_shortest_path(&dataset.store, &source[0], &target[0])
        .unwrap()
        .unwrap();
    let report = PathReport::build(&dataset.store, &source[0], &target[0], Some(&path)).unwrap();
    let out = HumanFormatter.format_path(&report);
    assert_eq!(
        out,
        "2 degrees of separation.\n\
         1: Alice and Bob starred in First\n\
         2: Bob and Carol starred in Second\n"
    );
}

#[test]
fn test_not_connected_renders_and_serializes() {
    let dir = tempfile::tempdir().unwrap();
    write_chain_dataset(dir.path());
    let dataset = load_dataset(dir.path(), &CostarConfig::default()).unwrap();

    let path = find_shortest_path(&dataset.store, &pid("a"), &pid("d")).unwrap();
    assert_eq!(path, None);

    let report = PathReport::build(&dataset.store, &pid("a"), &pid("d"), None).unwrap();
    assert_eq!(HumanFormatter.format_path(&report), "Not connected.\n");

    let json = JsonFormatter.format_path(&report);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["connected"], false);
    assert_eq!(value["target"]["name"], "Dan");
}

#[test]
fn test_self_query_through_loaded_dataset() {
    let dir = tempfile::tempdir().unwrap();
    write_chain_dataset(dir.path());
    let dataset = load_dataset(dir.path(), &CostarConfig::default()).unwrap();

    let path = find_shortest_path(&dataset.store, &pid("b"), &pid("b")).unwrap();
    let report = PathReport::build(&dataset.store, &pid("b"), &pid("b"), path.as_deref()).unwrap();
    assert_eq!(
        HumanFormatter.format_path(&report),
        "0 degrees of separation.\n"
    );
}
