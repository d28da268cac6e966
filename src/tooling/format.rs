//! Text rendering for CLI output.

use crate::curriculum::TopicValidation;
use crate::search::FileMatch;
use crate::tree::{render_hierarchy, Node, SnapshotStats};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn format_file_matches_text(query: &str, matches: &[FileMatch<'_>]) -> String {
    let mut out = format!(
        "{}\n\n",
        format_section_heading(&format!("Files matching {:?}", query))
    );
    if matches.is_empty() {
        out.push_str("  No matches\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Path", "Type", "View"]);
    for m in matches {
        table.add_row(vec![
            m.node.name.clone(),
            m.display_path(),
            m.node.mime_type().to_string(),
            m.node.view_link().unwrap_or("-").to_string(),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out.push_str(&format!("\n{} match(es)\n", matches.len()));
    out
}

pub fn format_forest_text(title: &str, forest: &[Node]) -> String {
    let mut out = format!("{}\n\n", format_section_heading(title));
    if forest.is_empty() {
        out.push_str("  Nothing found\n");
        return out;
    }
    out.push_str(&render_hierarchy(forest));
    out
}

pub fn format_node_text(node: &Node) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.add_row(vec!["Id", node.id()]);
    table.add_row(vec!["Name", node.name.as_str()]);
    table.add_row(vec!["MIME type", node.mime_type()]);
    let children = node.children().len().to_string();
    if node.is_folder() {
        table.add_row(vec!["Children", children.as_str()]);
    } else {
        table.add_row(vec!["View", node.view_link().unwrap_or("-")]);
        table.add_row(vec!["Download", node.download_link().unwrap_or("-")]);
    }
    format!("{}\n", table)
}

pub fn format_stats_text(stats: &SnapshotStats) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Snapshot"));
    out.push_str(&format!("  Origin: {}\n", stats.origin));
    out.push_str(&format!("  Loaded: {}\n", stats.loaded_at));
    out.push_str(&format!("  Digest: {}...\n\n", &stats.digest[..stats.digest.len().min(12)]));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Roots", "Folders", "Files", "Max depth"]);
    table.add_row(vec![
        stats.roots.to_string(),
        stats.folders.to_string(),
        stats.files.to_string(),
        stats.max_depth.to_string(),
    ]);
    out.push_str(&format!("{}\n", table));
    out
}

pub fn format_topic_validation_text(result: &TopicValidation) -> String {
    let mut out = format!(
        "{}\n\n",
        format_section_heading(&format!("Cycle {} topics", result.cycle))
    );
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Topic", "Subtrees"]);
    for check in &result.checks {
        table.add_row(vec![check.topic.clone(), check.subtrees.to_string()]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!(
        "{}/{} topics found\n",
        result.matched_checks(),
        result.total_checks()
    ));
    for warning in &result.warnings {
        out.push_str(&format!("  {} {}\n", "warning:".yellow(), warning));
    }
    out
}
