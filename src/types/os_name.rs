use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsName {
    Windows,
    #[serde(rename = "Windows Phone")]
    WindowsPhone,
    /// Touch-enabled desktop Windows (Surface-class devices).
    #[serde(rename = "Window RT")]
    WindowsRt,
    Xbox,
    #[serde(rename = "iOS")]
    Ios,
    Mac,
    Android,
    Wii,
    PlayStation,
    Symbian,
    Blackberry,
    Linux,
    Unknown,
}

impl OsName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::WindowsPhone => "Windows Phone",
            Self::WindowsRt => "Window RT",
            Self::Xbox => "Xbox",
            Self::Ios => "iOS",
            Self::Mac => "Mac",
            Self::Android => "Android",
            Self::Wii => "Wii",
            Self::PlayStation => "PlayStation",
            Self::Symbian => "Symbian",
            Self::Blackberry => "Blackberry",
            Self::Linux => "Linux",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for OsName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
