use coursetree::{find_by_folder_name, find_by_name, Node};
use proptest::prelude::*;

use crate::integration::support::portal_forest;

#[test]
fn name_search_is_idempotent() {
    let forest = portal_forest();
    let first = find_by_name("notes", &forest);
    let second = find_by_name("notes", &forest);
    assert_eq!(first, second);
}

#[test]
fn name_search_reports_full_ancestor_path() {
    let forest = portal_forest();
    let matches = find_by_name("notes.pdf", &forest);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].path, vec!["Root", "1 Year", "C - Cycle", "Maths"]);
    assert_eq!(
        matches[0].node.download_link(),
        Some("https://drive.example/dl/notes")
    );
}

#[test]
fn name_search_only_matches_documents_and_text() {
    let forest = portal_forest();
    let ids: Vec<&str> = find_by_name("notes", &forest)
        .iter()
        .map(|m| m.node.id())
        .collect();
    assert_eq!(ids, vec!["notes", "esc-notes"]);
}

#[test]
fn folder_search_returns_outer_match_only() {
    let forest = portal_forest();
    let found = find_by_folder_name("ESC", &forest);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "ESC");
    assert_eq!(found[0].children()[0].name, "ESC-Advanced");
}

#[test]
fn folder_search_clone_does_not_alias_source() {
    let forest = portal_forest();
    let mut found = find_by_folder_name("maths", &forest);
    assert_eq!(found.len(), 1);
    found[0].name = "Renamed".to_string();
    let again = find_by_folder_name("maths", &forest);
    assert_eq!(again[0].name, "Maths");
}

#[test]
fn empty_folder_query_returns_shallowest_folders() {
    let forest = portal_forest();
    let found = find_by_folder_name("", &forest);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), "root");
    assert_eq!(&found[0], &forest[0]);
}

fn flat_forest(names: &[String]) -> Vec<Node> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Node::folder(format!("f{i}"), name.clone(), Vec::new()))
        .collect()
}

proptest! {
    #[test]
    fn folder_match_iff_lowercase_containment(
        names in proptest::collection::vec("[a-zA-Z ]{0,12}", 1..8),
        query in "[a-zA-Z]{0,3}",
    ) {
        let forest = flat_forest(&names);
        let found = find_by_folder_name(&query, &forest);
        let expected: Vec<&str> = forest
            .iter()
            .filter(|n| n.name.to_lowercase().contains(&query.to_lowercase()))
            .map(|n| n.id())
            .collect();
        let actual: Vec<&str> = found.iter().map(|n| n.id()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn containment_is_position_independent(
        prefix in "[a-z]{0,5}",
        needle in "[a-z]{1,4}",
        suffix in "[a-z]{0,5}",
    ) {
        let name = format!("{prefix}{}{suffix}", needle.to_uppercase());
        let forest = vec![Node::folder("only", name, Vec::new())];
        prop_assert_eq!(find_by_folder_name(&needle, &forest).len(), 1);
    }
}
