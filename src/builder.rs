use crate::helpers::contains_ignore_ascii_case;
use crate::types::*;
use crate::version::{UNKNOWN_OS_VERSION, UNKNOWN_VERSION};

/// Parts of a [`Browser`] resolved so far. OS resolvers start one, the brand
/// branch completes it, and [`BrowserBuilder::build`] turns it into the
/// final immutable value, filling every unresolved label with "Unknown".
#[derive(Debug, Clone)]
pub(crate) struct BrowserBuilder {
    pub name: Option<BrowserName>,
    pub engine_name: Option<EngineName>,
    pub engine_version: f64,
    pub os_name: Option<OsName>,
    pub os_version: Option<String>,
    pub ua_version: f64,
    pub version: f64,
    pub desktop: bool,
    pub mobile: bool,
    pub tablet: bool,
    pub console: bool,
}

impl Default for BrowserBuilder {
    fn default() -> Self {
        Self {
            name: None,
            engine_name: None,
            engine_version: UNKNOWN_VERSION,
            os_name: None,
            os_version: None,
            ua_version: UNKNOWN_VERSION,
            version: UNKNOWN_VERSION,
            desktop: false,
            mobile: false,
            tablet: false,
            console: false,
        }
    }
}

impl BrowserBuilder {
    pub fn os(mut self, name: OsName, version: impl Into<String>) -> Self {
        self.os_name = Some(name);
        self.os_version = Some(version.into());
        self
    }

    pub fn engine(mut self, name: EngineName, version: f64) -> Self {
        self.engine_name = Some(name);
        self.engine_version = version;
        self
    }

    pub fn build(self, ua: &str) -> Browser {
        let name = self.name.unwrap_or(BrowserName::Unknown);
        let version = if self.version.is_nan() {
            UNKNOWN_VERSION
        } else {
            self.version
        };
        let max = if self.ua_version > version {
            Max::Exceed
        } else {
            Max::Ok
        };

        Browser {
            name,
            engine: Engine {
                name: self.engine_name.unwrap_or(EngineName::Unknown),
                version: self.engine_version,
            },
            os: Os {
                name: self.os_name.unwrap_or(OsName::Unknown),
                version: self
                    .os_version
                    .unwrap_or_else(|| UNKNOWN_OS_VERSION.to_string()),
            },
            ua: Ua {
                version: self.ua_version,
            },
            version,
            desktop: self.desktop,
            mobile: self.mobile,
            tablet: self.tablet,
            console: self.console,
            trustworthy: carries_tokens(ua, name),
            max,
        }
    }
}

/// Every token group of `name` has at least one member in `ua`.
pub(crate) fn carries_tokens(ua: &str, name: BrowserName) -> bool {
    name.canonical_tokens()
        .iter()
        .all(|group| group.iter().any(|t| contains_ignore_ascii_case(ua, t)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_is_all_unknown_and_trusted() {
        let b = BrowserBuilder::default().build("");
        assert_eq!(b.name, BrowserName::Unknown);
        assert_eq!(b.os.name, OsName::Unknown);
        assert_eq!(b.os.version, "-1");
        assert_eq!(b.engine.name, EngineName::Unknown);
        assert_eq!(b.version, UNKNOWN_VERSION);
        assert!(b.trustworthy);
        assert_eq!(b.max, Max::Ok);
    }

    #[test]
    fn exceed_when_ua_is_newer() {
        let b = BrowserBuilder {
            name: Some(BrowserName::Chrome),
            ua_version: 60.0,
            version: 55.0,
            ..Default::default()
        }
        .build("Chrome/60");
        assert_eq!(b.max, Max::Exceed);
        assert!(b.trustworthy);
    }

    #[test]
    fn trust_requires_every_group() {
        assert!(carries_tokens("Mobile Safari iPad", BrowserName::MobileSafari));
        assert!(!carries_tokens("Safari Macintosh", BrowserName::MobileSafari));
        assert!(carries_tokens("Trident/7.0; rv:11.0", BrowserName::InternetExplorer));
        assert!(!carries_tokens("Mozilla/5.0", BrowserName::Firefox));
        assert!(carries_tokens("", BrowserName::Kindle));
    }
}
