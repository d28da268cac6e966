use coursetree::curriculum::topics::C_CYCLE;
use coursetree::curriculum::{
    build_filtered_forest_with, resolve_topics, validate_topics, ElectivePolicy, FilterOptions,
};
use coursetree::{build_filtered_forest, Cycle, Profile};
use std::borrow::Cow;

use crate::integration::support::{portal_forest, portal_forest_with_electives};

#[test]
fn absent_profile_is_a_no_op() {
    let forest = portal_forest();
    let result = build_filtered_forest(None, &forest);
    assert!(matches!(result, Cow::Borrowed(_)));
    assert_eq!(result.as_ref(), forest.as_slice());
}

#[test]
fn c_cycle_profile_searches_only_fixed_topics_by_default() {
    let forest = portal_forest_with_electives();
    let profile = Profile::from_json(
        br#"{"year": "1", "cycle": "C", "selectedESC": "Course 1", "selectedPLC": "Course 2"}"#,
    )
    .unwrap();

    let topics = resolve_topics(&profile, FilterOptions::default().electives);
    assert_eq!(topics, C_CYCLE.fixed);

    // "Course 1" exists as a folder but is an elective label, not a topic.
    let result = build_filtered_forest(Some(&profile), &forest);
    let names: Vec<&str> = result.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["ESC", "PLC (22PL15X)"]);
}

#[test]
fn appending_electives_searches_selection_labels_after_fixed_topics() {
    let forest = portal_forest_with_electives();
    let profile = Profile::new("1", Cycle::C)
        .with_selection("selectedESC", "Course 1")
        .with_selection("selectedPLC", "Course 2");
    let options = FilterOptions {
        electives: ElectivePolicy::Append,
    };

    let topics = resolve_topics(&profile, options.electives);
    assert_eq!(&topics[..6], C_CYCLE.fixed);
    assert_eq!(&topics[6..], ["Course 1", "Course 2"]);

    let result = build_filtered_forest_with(Some(&profile), &forest, &options);
    let ids: Vec<&str> = result.iter().map(|n| n.id()).collect();
    assert_eq!(ids, vec!["esc", "plc", "course1"]);
}

#[test]
fn appending_electives_changes_nothing_when_labels_are_absent() {
    let forest = portal_forest();
    let profile = Profile::new("1", Cycle::C)
        .with_selection("selectedESC", "Course 1")
        .with_selection("selectedPLC", "Course 2");
    let appended = build_filtered_forest_with(
        Some(&profile),
        &forest,
        &FilterOptions {
            electives: ElectivePolicy::Append,
        },
    );
    let ignored = build_filtered_forest(Some(&profile), &forest);
    assert_eq!(appended.as_ref(), ignored.as_ref());
}

#[test]
fn topic_matching_several_folders_contributes_each() {
    let forest = portal_forest();
    let profile = Profile::new("1", Cycle::C).with_selection("selectedETC", "maths");
    let result = build_filtered_forest_with(
        Some(&profile),
        &forest,
        &FilterOptions {
            electives: ElectivePolicy::Append,
        },
    );
    let ids: Vec<&str> = result.iter().map(|n| n.id()).collect();
    assert_eq!(ids, vec!["esc", "plc", "maths"]);
}

#[test]
fn validation_flags_topics_missing_from_snapshot() {
    let forest = portal_forest();
    let result = validate_topics(Cycle::C, &forest);
    assert_eq!(result.matched_checks(), 2);
    assert_eq!(result.warnings.len(), 4);
}
