//! Student curriculum profile

use crate::error::IndexError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// First-year cycle a student is enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cycle {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "P")]
    P,
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cycle::C => write!(f, "C"),
            Cycle::P => write!(f, "P"),
        }
    }
}

impl FromStr for Cycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "C" | "c" => Ok(Cycle::C),
            "P" | "p" => Ok(Cycle::P),
            other => Err(format!("unknown cycle {:?} (expected C or P)", other)),
        }
    }
}

/// Curriculum profile as stored by the portal.
///
/// Elective choices arrive as `selectedX` keys next to `year` and `cycle`.
/// Every extra key is kept; only the ones listed in the cycle's topic table
/// are ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub year: String,
    pub cycle: Cycle,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl Profile {
    pub fn new(year: impl Into<String>, cycle: Cycle) -> Self {
        Profile {
            year: year.into(),
            cycle,
            extra: BTreeMap::new(),
        }
    }

    /// Record an elective choice under `key` (for example `selectedESC`).
    pub fn with_selection(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra
            .insert(key.into(), serde_json::Value::String(value.into()));
        self
    }

    /// The trimmed, non-empty string stored under `key`, if any.
    pub fn selection(&self, key: &str) -> Option<&str> {
        self.extra
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn from_json(payload: &[u8]) -> Result<Self, IndexError> {
        Ok(serde_json::from_slice(payload)?)
    }

    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let payload = std::fs::read(path)?;
        Self::from_json(&payload)
    }
}
