use super::{BrowserName, DeviceType, EngineName, OsName};
use serde::{Deserialize, Serialize};

/// Result of one `detect` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub details: Browser,
}

impl Detection {
    pub fn details(&self) -> &Browser {
        &self.details
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Browser {
    pub name: BrowserName,
    pub engine: Engine,
    pub os: Os,
    pub ua: Ua,
    /// Version bounded by the capability milestone table, or
    /// [`UNKNOWN_VERSION`](crate::UNKNOWN_VERSION).
    pub version: f64,
    pub desktop: bool,
    pub mobile: bool,
    pub tablet: bool,
    pub console: bool,
    /// False when the UA lacks the tokens expected for `name`.
    pub trustworthy: bool,
    pub max: Max,
}

impl Browser {
    pub fn is_ie(&self) -> bool {
        self.name == BrowserName::InternetExplorer
    }

    pub fn is_ff(&self) -> bool {
        self.name == BrowserName::Firefox
    }

    pub fn is_opera(&self) -> bool {
        self.name == BrowserName::Opera
    }

    pub fn is_chrome(&self) -> bool {
        self.name == BrowserName::Chrome
    }

    pub fn is_safari(&self) -> bool {
        self.name == BrowserName::Safari
    }

    /// Primary device class. The flags are not mutually exclusive; desktop
    /// wins over mobile, mobile over tablet, tablet over console.
    pub fn device_type(&self) -> DeviceType {
        if self.desktop {
            DeviceType::Desktop
        } else if self.mobile {
            DeviceType::Mobile
        } else if self.tablet {
            DeviceType::Tablet
        } else if self.console {
            DeviceType::Console
        } else {
            DeviceType::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    pub name: EngineName,
    pub version: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Os {
    pub name: OsName,
    pub version: String,
}

/// What the user-agent string itself claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ua {
    pub version: f64,
}

/// Whether the UA reports a newer version than the milestone table resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Max {
    Ok,
    Exceed,
}
