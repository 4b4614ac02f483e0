use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineName {
    Trident,
    Gecko,
    Blink,
    Webkit,
    /// Chromium as reported by Android UAs, before Blink is distinguishable.
    Chrome,
    Presto,
    Silk,
    Khtml,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl EngineName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trident => "trident",
            Self::Gecko => "gecko",
            Self::Blink => "blink",
            Self::Webkit => "webkit",
            Self::Chrome => "chrome",
            Self::Presto => "presto",
            Self::Silk => "silk",
            Self::Khtml => "khtml",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for EngineName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
