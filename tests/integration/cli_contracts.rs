use std::fs;

use coursetree::config::IndexConfig;
use coursetree::tooling::cli::{CliContext, Commands, ProfileArgs};
use coursetree::Cycle;
use tempfile::TempDir;

use crate::integration::support::PORTAL_SNAPSHOT;

async fn loaded_context(temp_dir: &TempDir) -> CliContext {
    let snapshot = temp_dir.path().join("tree.json");
    fs::write(&snapshot, PORTAL_SNAPSHOT).unwrap();
    let cli = CliContext::with_config(IndexConfig::default(), Some(snapshot));
    cli.load().await.unwrap();
    cli
}

#[tokio::test]
async fn search_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    let cli = loaded_context(&temp_dir).await;

    let output = cli
        .execute(&Commands::Search {
            query: "notes.pdf".to_string(),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let matches = parsed.as_array().expect("matches array");
    assert_eq!(matches.len(), 1);
    let entry = &matches[0];
    assert_eq!(entry.get("id").and_then(|v| v.as_str()), Some("notes"));
    assert_eq!(entry.get("name").and_then(|v| v.as_str()), Some("notes.pdf"));
    assert_eq!(
        entry.get("mimeType").and_then(|v| v.as_str()),
        Some("application/pdf")
    );
    assert!(entry.get("viewLink").and_then(|v| v.as_str()).is_some());
    assert_eq!(
        entry.get("mime_class").and_then(|v| v.as_str()),
        Some("document")
    );
    let path: Vec<&str> = entry
        .get("path")
        .and_then(|v| v.as_array())
        .expect("path array")
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(path, vec!["Root", "1 Year", "C - Cycle", "Maths"]);
}

#[tokio::test]
async fn folders_json_round_trips_snapshot_shape() {
    let temp_dir = TempDir::new().unwrap();
    let cli = loaded_context(&temp_dir).await;

    let output = cli
        .execute(&Commands::Folders {
            query: "plc".to_string(),
            format: "json".to_string(),
        })
        .unwrap();

    let subtrees = coursetree::tree::parse_forest(output.as_bytes(), 32).unwrap();
    assert_eq!(subtrees.len(), 1);
    assert_eq!(subtrees[0].name, "PLC (22PL15X)");
    assert_eq!(subtrees[0].children()[0].id(), "plc-lab");
}

#[tokio::test]
async fn filter_json_lists_topics_and_forest() {
    let temp_dir = TempDir::new().unwrap();
    let cli = loaded_context(&temp_dir).await;

    let output = cli
        .execute(&Commands::Filter {
            profile: ProfileArgs {
                cycle: Some(Cycle::C),
                year: "1".to_string(),
                selections: vec!["selectedESC=Course 1".to_string()],
                ..ProfileArgs::default()
            },
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let topics = parsed.get("topics").and_then(|v| v.as_array()).unwrap();
    assert_eq!(topics.len(), 6);
    assert!(topics.iter().all(|t| t.as_str() != Some("Course 1")));
    let forest = parsed.get("forest").and_then(|v| v.as_array()).unwrap();
    let names: Vec<&str> = forest
        .iter()
        .filter_map(|n| n.get("name").and_then(|v| v.as_str()))
        .collect();
    assert_eq!(names, vec!["ESC", "PLC (22PL15X)"]);
    assert_eq!(
        parsed.pointer("/profile/cycle").and_then(|v| v.as_str()),
        Some("C")
    );
}

#[tokio::test]
async fn filter_search_electives_flag_appends_selections() {
    let temp_dir = TempDir::new().unwrap();
    let cli = loaded_context(&temp_dir).await;

    let output = cli
        .execute(&Commands::Filter {
            profile: ProfileArgs {
                cycle: Some(Cycle::C),
                selections: vec!["selectedESC=Course 1".to_string()],
                search_electives: true,
                ..ProfileArgs::default()
            },
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let topics = parsed.get("topics").and_then(|v| v.as_array()).unwrap();
    assert_eq!(topics.len(), 7);
    assert_eq!(topics[6].as_str(), Some("Course 1"));
}

#[tokio::test]
async fn filter_without_profile_shows_everything() {
    let temp_dir = TempDir::new().unwrap();
    let cli = loaded_context(&temp_dir).await;

    let output = cli
        .execute(&Commands::Filter {
            profile: ProfileArgs::default(),
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("full snapshot"));
    assert!(output.contains("Question Papers/"));
}

#[tokio::test]
async fn find_ids_and_tree_commands() {
    let temp_dir = TempDir::new().unwrap();
    let cli = loaded_context(&temp_dir).await;

    let found = cli
        .execute(&Commands::Find {
            id: "esc-adv".to_string(),
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&found).unwrap();
    assert_eq!(parsed.get("name").and_then(|v| v.as_str()), Some("ESC-Advanced"));

    let missing = cli
        .execute(&Commands::Find {
            id: "nope".to_string(),
            format: "json".to_string(),
        })
        .unwrap();
    assert_eq!(missing.trim(), "null");

    let ids = cli.execute(&Commands::Ids).unwrap();
    assert_eq!(ids.lines().next(), Some("root"));
    assert_eq!(ids.lines().count(), 13);

    let tree = cli.execute(&Commands::Tree).unwrap();
    assert!(tree.starts_with("Root/\n  1 Year/\n    C - Cycle/\n"));
}

#[tokio::test]
async fn stats_and_topic_validation_json() {
    let temp_dir = TempDir::new().unwrap();
    let cli = loaded_context(&temp_dir).await;

    let stats = cli
        .execute(&Commands::Stats {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stats).unwrap();
    assert_eq!(parsed.get("folders").and_then(|v| v.as_u64()), Some(8));
    assert_eq!(parsed.get("files").and_then(|v| v.as_u64()), Some(5));
    assert_eq!(parsed.get("max_depth").and_then(|v| v.as_u64()), Some(5));
    assert!(parsed
        .get("origin")
        .and_then(|v| v.as_str())
        .unwrap()
        .ends_with("tree.json"));

    let validation = cli
        .execute(&Commands::ValidateTopics {
            cycle: Cycle::C,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&validation).unwrap();
    assert_eq!(parsed.get("checks").and_then(|v| v.as_array()).map(|c| c.len()), Some(6));
    assert_eq!(parsed.get("warnings").and_then(|v| v.as_array()).map(|w| w.len()), Some(4));
}

#[tokio::test]
async fn malformed_snapshot_fails_to_load() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = temp_dir.path().join("tree.json");
    fs::write(&snapshot, r#"[{"id": "x", "mimeType": "application/pdf"}]"#).unwrap();
    let cli = CliContext::with_config(IndexConfig::default(), Some(snapshot));
    let err = cli.load().await.unwrap_err();
    assert!(err.to_string().starts_with("malformed snapshot"));
}

#[test]
fn config_command_renders_toml() {
    let cli = CliContext::with_config(IndexConfig::default(), None);
    let output = cli.execute(&Commands::Config).unwrap();
    assert!(output.contains("[snapshot]"));
    assert!(output.contains("[filter]"));
}
