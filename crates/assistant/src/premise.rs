use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shop-floor premise the assistant must respect, kept in a small JSON
/// document next to the catalog. A missing file is an empty premise, not
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Premise {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub details: String,
}

impl Premise {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No premise file at {path:?}, using empty premise");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
