//! Curriculum filtering
//!
//! Selects the subtrees of a snapshot relevant to a student's curriculum
//! profile (year, cycle and elective choices) by running folder search once
//! per topic in the cycle's topic table.

pub mod filter;
pub mod profile;
pub mod topics;
pub mod validation;

pub use filter::{build_filtered_forest, build_filtered_forest_with, ElectivePolicy, FilterOptions};
pub use profile::{Cycle, Profile};
pub use topics::{resolve_topics, table_for, TopicTable};
pub use validation::{validate_topics, TopicValidation};
