use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Newest release of each brand the milestone tables were authored against.
/// These are the ceilings of the newest rung of each engine ladder; a UA
/// reporting something newer is clamped and flagged as `max: exceed`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatestReleases {
    pub firefox: f64,
    pub chrome: f64,
    pub edge: f64,
    pub opera: f64,
}

impl Default for LatestReleases {
    fn default() -> Self {
        Self {
            firefox: 51.0,
            chrome: 55.0,
            edge: 14.0,
            opera: 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Release {
    Firefox,
    Chrome,
    Edge,
    Opera,
}

impl LatestReleases {
    pub(crate) fn of(&self, release: Release) -> f64 {
        match release {
            Release::Firefox => self.firefox,
            Release::Chrome => self.chrome,
            Release::Edge => self.edge,
            Release::Opera => self.opera,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub latest: LatestReleases,
}

impl DetectorConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
