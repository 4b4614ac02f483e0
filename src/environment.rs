use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The global API surface a classification runs against.
///
/// Paths are dotted property chains rooted at the global scope, e.g.
/// `navigator.permissions`, `performance.now`, `document.pointerLockElement`.
/// Implementations report what exists; they never decide anything.
pub trait Environment {
    /// Whether the property chain `path` exists. `Err` stands for a getter
    /// that failed while being read.
    fn lookup(&self, path: &str) -> Result<bool>;

    /// String-valued properties (`navigator.userAgent`, `navigator.platform`,
    /// `navigator.language`, `navigator.vendor`, `opera.version`, ...).
    fn text(&self, path: &str) -> Option<&str>;

    /// Numeric properties (`screen.width`, `screen.height`).
    fn number(&self, path: &str) -> Option<f64>;

    /// Attempt `document.createEvent('TouchEvent')`.
    fn create_touch_event(&self) -> Result<()>;

    /// Whether a MathML fraction lays out taller than wide.
    fn renders_mathml(&self) -> bool;
}

/// A deterministic [`Environment`] described by data, usually loaded from YAML.
///
/// ```yaml
/// globals: [Proxy, navigator.permissions, document.execCommand]
/// throwing: [navigator.getBattery]
/// text:
///   navigator.userAgent: "Mozilla/5.0 ..."
///   navigator.platform: Win32
/// numbers: { screen.width: 1920, screen.height: 1080 }
/// touch_events: false
/// mathml: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticEnvironment {
    /// Present property paths. A path implies all of its parents.
    pub globals: IndexSet<String>,
    /// Paths whose getter fails when read.
    pub throwing: IndexSet<String>,
    pub text: IndexMap<String, String>,
    pub numbers: IndexMap<String, f64>,
    pub touch_events: bool,
    pub mathml: bool,
}

impl SyntheticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    #[must_use]
    pub fn with(mut self, path: impl Into<String>) -> Self {
        self.globals.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_all<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.globals.extend(paths.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_throwing(mut self, path: impl Into<String>) -> Self {
        self.throwing.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, path: impl Into<String>, value: impl Into<String>) -> Self {
        self.text.insert(path.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_number(mut self, path: impl Into<String>, value: f64) -> Self {
        self.numbers.insert(path.into(), value);
        self
    }

    #[must_use]
    pub fn with_user_agent(self, ua: impl Into<String>) -> Self {
        self.with_text("navigator.userAgent", ua)
    }

    #[must_use]
    pub fn with_platform(self, platform: impl Into<String>) -> Self {
        self.with_text("navigator.platform", platform)
    }

    #[must_use]
    pub fn with_touch_events(mut self, enabled: bool) -> Self {
        self.touch_events = enabled;
        self
    }

    #[must_use]
    pub fn with_mathml(mut self, enabled: bool) -> Self {
        self.mathml = enabled;
        self
    }

    fn is_throwing(&self, path: &str) -> bool {
        self.throwing
            .iter()
            .any(|t| path == t || is_parent_of(t, path))
    }
}

/// `parent` is a strict dotted prefix of `path` (`performance` of `performance.now`).
fn is_parent_of(parent: &str, path: &str) -> bool {
    path.len() > parent.len()
        && path.starts_with(parent)
        && path.as_bytes()[parent.len()] == b'.'
}

impl Environment for SyntheticEnvironment {
    fn lookup(&self, path: &str) -> Result<bool> {
        if self.is_throwing(path) {
            return Err(Error::Probe {
                path: path.to_string(),
                reason: "getter threw".to_string(),
            });
        }
        Ok(self.globals.contains(path) || self.globals.iter().any(|g| is_parent_of(path, g)))
    }

    fn text(&self, path: &str) -> Option<&str> {
        self.text.get(path).map(String::as_str)
    }

    fn number(&self, path: &str) -> Option<f64> {
        self.numbers.get(path).copied()
    }

    fn create_touch_event(&self) -> Result<()> {
        if self.touch_events {
            Ok(())
        } else {
            Err(Error::Probe {
                path: "document.createEvent".to_string(),
                reason: "TouchEvent is not supported".to_string(),
            })
        }
    }

    fn renders_mathml(&self) -> bool {
        self.mathml
    }
}
