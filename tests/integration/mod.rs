//! Integration tests for the coursetree resource index

mod cli_contracts;
mod curriculum_scenario;
mod search_properties;
mod support;
