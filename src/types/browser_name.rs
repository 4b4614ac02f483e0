use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrowserName {
    #[serde(rename = "Internet Explorer")]
    InternetExplorer,
    Edge,
    Firefox,
    Chrome,
    Opera,
    Safari,
    Android,
    #[serde(rename = "Mobile Safari")]
    MobileSafari,
    #[serde(rename = "Opera Mini")]
    OperaMini,
    #[serde(rename = "Opera Android")]
    OperaAndroid,
    #[serde(rename = "Chrome Android")]
    ChromeAndroid,
    #[serde(rename = "Mobile IE")]
    MobileIe,
    #[serde(rename = "Firefox Android")]
    FirefoxAndroid,
    BlackBerry,
    Kindle,
    #[serde(rename = "iOS Webview")]
    IosWebview,
    NetFront,
    #[serde(rename = "Linux Browser")]
    LinuxBrowser,
    Unknown,
}

impl BrowserName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InternetExplorer => "Internet Explorer",
            Self::Edge => "Edge",
            Self::Firefox => "Firefox",
            Self::Chrome => "Chrome",
            Self::Opera => "Opera",
            Self::Safari => "Safari",
            Self::Android => "Android",
            Self::MobileSafari => "Mobile Safari",
            Self::OperaMini => "Opera Mini",
            Self::OperaAndroid => "Opera Android",
            Self::ChromeAndroid => "Chrome Android",
            Self::MobileIe => "Mobile IE",
            Self::FirefoxAndroid => "Firefox Android",
            Self::BlackBerry => "BlackBerry",
            Self::Kindle => "Kindle",
            Self::IosWebview => "iOS Webview",
            Self::NetFront => "NetFront",
            Self::LinuxBrowser => "Linux Browser",
            Self::Unknown => "Unknown",
        }
    }

    /// Tokens a genuine UA of this brand carries. Every group must be present;
    /// within a group any alternative will do. Brands whose detection relies
    /// on the UA alone have no groups and can never be caught lying.
    pub fn canonical_tokens(&self) -> &'static [&'static [&'static str]] {
        match self {
            Self::Edge => &[&["Edge"]],
            Self::InternetExplorer => &[&["MSIE", "Trident"]],
            Self::Firefox => &[&["Firefox"]],
            Self::Chrome => &[&["Chrome"]],
            Self::Opera => &[&["Opera", "OPR"]],
            Self::Safari => &[&["Safari"]],
            Self::Android => &[&["Android"], &["Mobile"]],
            Self::MobileSafari => &[&["Safari"], &["iPhone", "iPad"]],
            Self::ChromeAndroid => &[&["Chrome"], &["Mobile"]],
            Self::FirefoxAndroid => &[&["Firefox"], &["Mobile"]],
            Self::MobileIe => &[&["MSIE"], &["IEMobile"]],
            Self::IosWebview => &[&["iPhone", "iPad", "iPod"], &["Mobile"]],
            Self::OperaMini => &[&["Opera"], &["Mini"]],
            Self::OperaAndroid => &[&["Opera"], &["Android"]],
            Self::BlackBerry => &[&["BlackBerry", "BB10", "RIM"]],
            Self::Kindle | Self::NetFront | Self::LinuxBrowser | Self::Unknown => &[],
        }
    }
}

impl std::fmt::Display for BrowserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
