//! Curriculum filter over a snapshot forest

use crate::curriculum::profile::Profile;
use crate::curriculum::topics::resolve_topics;
use crate::search::find_by_folder_name;
use crate::tree::node::Node;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// Whether a profile's elective selections are searched as folder names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectivePolicy {
    /// Search the fixed topics only.
    #[default]
    Ignore,
    /// Also search each selected elective label as a folder name.
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub electives: ElectivePolicy,
}

/// Build the forest of subtrees relevant to `profile` with default options.
///
/// See [`build_filtered_forest_with`].
pub fn build_filtered_forest<'a>(profile: Option<&Profile>, forest: &'a [Node]) -> Cow<'a, [Node]> {
    build_filtered_forest_with(profile, forest, &FilterOptions::default())
}

/// Build the forest of subtrees relevant to `profile`.
///
/// With no profile the input forest is returned as is (borrowed). Otherwise
/// each resolved topic is searched with [`find_by_folder_name`] against the
/// full forest and the results are concatenated in topic order. A topic that
/// matches no folder contributes nothing.
pub fn build_filtered_forest_with<'a>(
    profile: Option<&Profile>,
    forest: &'a [Node],
    options: &FilterOptions,
) -> Cow<'a, [Node]> {
    let Some(profile) = profile else {
        return Cow::Borrowed(forest);
    };

    let mut filtered = Vec::new();
    for topic in resolve_topics(profile, options.electives) {
        let subtrees = find_by_folder_name(&topic, forest);
        if subtrees.is_empty() {
            debug!(topic = %topic, cycle = %profile.cycle, "Topic matched no folders");
        }
        filtered.extend(subtrees);
    }

    debug!(
        cycle = %profile.cycle,
        year = %profile.year,
        subtrees = filtered.len(),
        "Curriculum filter complete"
    );
    Cow::Owned(filtered)
}
