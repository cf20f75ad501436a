use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Machining process intensity. A fixed enumeration used as an exact-match
/// filter; stored as its kebab-case identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessType {
    Finishing,
    LightCutting,
    MediumCutting,
    Roughing,
}

impl ProcessType {
    pub const ALL: [ProcessType; 4] = [
        ProcessType::Finishing,
        ProcessType::LightCutting,
        ProcessType::MediumCutting,
        ProcessType::Roughing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessType::Finishing => "finishing",
            ProcessType::LightCutting => "light-cutting",
            ProcessType::MediumCutting => "medium-cutting",
            ProcessType::Roughing => "roughing",
        }
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "finishing" => Ok(ProcessType::Finishing),
            "light-cutting" => Ok(ProcessType::LightCutting),
            "medium-cutting" => Ok(ProcessType::MediumCutting),
            "roughing" => Ok(ProcessType::Roughing),
            other => Err(CatalogError::UnknownProcessType(other.to_string())),
        }
    }
}

/// An operating range plus a preferred point. `recommended` is informational
/// metadata; filtering only ever uses `min` and `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub recommended: f64,
    pub max: f64,
}

impl Band {
    pub fn new(min: f64, recommended: f64, max: f64) -> Self {
        Self {
            min,
            recommended,
            max,
        }
    }

    /// Inclusive containment: a value exactly at either boundary matches.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// One chip-breaker geometry with its depth-of-cut and feed-rate ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakerRow {
    pub id: i64,
    pub name: String,
    pub process_type: ProcessType,
    /// Depth of cut (mm).
    pub depth_of_cut: Band,
    /// Feed rate (mm/rev).
    pub feed_rate: Band,
}

/// One insert material with its cutting-speed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRow {
    pub id: i64,
    pub name: String,
    pub process_type: ProcessType,
    /// Descriptive priority tag, passed through unfiltered.
    pub final_priority: String,
    /// Cutting speed (m/min).
    pub cutting_speed: Band,
}

/// Per-search snapshot of the operator's inputs. Absent fields impose no
/// constraint. Constructed per invocation, discarded with the result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QueryInput {
    pub depth_of_cut: Option<f64>,
    pub feed_rate: Option<f64>,
    pub cutting_speed: Option<f64>,
    pub process_type: Option<ProcessType>,
}

impl QueryInput {
    /// How many of the three numeric fields are present.
    pub fn present_numeric(&self) -> usize {
        [self.depth_of_cut, self.feed_rate, self.cutting_speed]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }

    /// How many of all four fields are present.
    pub fn present_total(&self) -> usize {
        self.present_numeric() + usize::from(self.process_type.is_some())
    }
}
