//! Per-cycle topic tables

use crate::curriculum::filter::ElectivePolicy;
use crate::curriculum::profile::{Cycle, Profile};

/// Fixed topic folder names and elective selection keys for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicTable {
    pub cycle: Cycle,
    /// Topic folder names searched for every profile of this cycle, in order.
    pub fixed: &'static [&'static str],
    /// Profile keys whose values are appended after the fixed topics.
    pub electives: &'static [&'static str],
}

pub const C_CYCLE: TopicTable = TopicTable {
    cycle: Cycle::C,
    fixed: &[
        "Mathematics",
        "Chemistry",
        "CAED",
        "ESC",
        "ETC",
        "PLC (22PL15X)",
    ],
    electives: &["selectedESC", "selectedETC", "selectedPLC"],
};

pub const P_CYCLE: TopicTable = TopicTable {
    cycle: Cycle::P,
    fixed: &[
        "Mathematics",
        "Physics",
        "BEE",
        "ESC",
        "ETC",
        "PLC (22PL15X)",
    ],
    electives: &["selectedESC", "selectedETC", "selectedPLC"],
};

pub fn table_for(cycle: Cycle) -> &'static TopicTable {
    match cycle {
        Cycle::C => &C_CYCLE,
        Cycle::P => &P_CYCLE,
    }
}

/// Ordered folder queries for `profile`: the cycle's fixed topics, then each
/// non-empty elective selection when electives are appended.
pub fn resolve_topics(profile: &Profile, electives: ElectivePolicy) -> Vec<String> {
    let table = table_for(profile.cycle);
    let mut topics: Vec<String> = table.fixed.iter().map(|t| t.to_string()).collect();
    if electives == ElectivePolicy::Append {
        topics.extend(
            table
                .electives
                .iter()
                .filter_map(|key| profile.selection(key))
                .map(str::to_string),
        );
    }
    topics
}
