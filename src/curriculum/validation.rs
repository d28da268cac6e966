//! Topic table validation against a live snapshot

use crate::curriculum::profile::Cycle;
use crate::curriculum::topics::table_for;
use crate::search::find_by_folder_name;
use crate::tree::node::Node;
use serde::Serialize;
use tracing::warn;

/// Match count for one fixed topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicCheck {
    pub topic: String,
    pub subtrees: usize,
}

/// Result of checking a cycle's topic table against a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicValidation {
    pub cycle: Cycle,
    pub checks: Vec<TopicCheck>,
    pub warnings: Vec<String>,
}

impl TopicValidation {
    fn new(cycle: Cycle) -> Self {
        Self {
            cycle,
            checks: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn total_checks(&self) -> usize {
        self.checks.len()
    }

    pub fn matched_checks(&self) -> usize {
        self.checks.iter().filter(|check| check.subtrees > 0).count()
    }

    /// Whether every fixed topic resolved to at least one folder.
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Run folder search for each fixed topic of `cycle` and report the ones
/// missing from `forest`.
pub fn validate_topics(cycle: Cycle, forest: &[Node]) -> TopicValidation {
    let mut result = TopicValidation::new(cycle);
    for topic in table_for(cycle).fixed {
        let subtrees = find_by_folder_name(topic, forest).len();
        if subtrees == 0 {
            warn!(cycle = %cycle, topic, "Topic has no matching folder in snapshot");
            result
                .warnings
                .push(format!("topic {:?} matches no folder", topic));
        }
        result.checks.push(TopicCheck {
            topic: topic.to_string(),
            subtrees,
        });
    }
    result
}
