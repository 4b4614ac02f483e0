use crate::error::Result;
use aho_corasick::AhoCorasick;
use fancy_regex::Regex;

/// Amazon tablet identifiers; any of them routes a UA to the Kindle family.
pub(crate) const KINDLE_TOKENS: &[&str] = &[
    "Kindle", "Silk", "KFTT", "KFOT", "KFJWA", "KFJWI", "KFSOWI", "KFTHWA", "KFTHWI", "KFAPWA",
    "KFAPWI",
];

/// Pre-compiled user-agent patterns. Each field is one extraction or family
/// check; compiling them once when the detector is built keeps `detect` free
/// of regex compilation and of its failure modes.
pub(crate) struct UaPatterns {
    pub kindle: AhoCorasick,

    // OS family dispatch
    pub microsoft_family: Regex,
    pub apple_family: Regex,
    pub android: Regex,

    // Microsoft
    pub win: Regex,
    pub touch: Regex,
    pub iemobile: Regex,
    pub xbox_one: Regex,
    pub xbox: Regex,
    pub windows_phone_version: Regex,
    pub wp_version: Regex,
    pub windows_nt: Regex,
    pub windows_nt_version: Regex,
    pub windows_9x: Regex,
    pub windows_ce: Regex,

    // Apple
    pub ios_device: Regex,
    pub mac: Regex,
    pub desktop_brand: Regex,
    pub ios_os_version: Regex,
    pub version_float: Regex,
    pub mac_os_x_minor: Regex,

    // Android / Kindle
    pub android_version: Regex,
    pub chrome: Regex,
    pub chrome_version: Regex,
    pub applewebkit: Regex,
    pub applewebkit_version: Regex,
    pub silk: Regex,
    pub silk_version: Regex,

    // Consoles and everything else
    pub wii: Regex,
    pub playstation_4: Regex,
    pub playstation: Regex,
    pub symbian: Regex,
    pub blackberry: Regex,
    pub linux: Regex,

    // Brand versions
    pub opr: Regex,
    pub opr_version: Regex,
    pub edge_version: Regex,
    pub msie_version: Regex,
    pub trident_rv_version: Regex,
    pub firefox_version: Regex,
    pub rv_version: Regex,
    pub presto_version: Regex,
    pub nintendo: Regex,
    pub iemobile_version: Regex,
    pub opera_mini_version: Regex,
    pub opera_version: Regex,
}

impl UaPatterns {
    pub fn compile() -> Result<Self> {
        let mk = |pattern: &str| -> Result<Regex> { Ok(Regex::new(&format!("(?i){}", pattern))?) };
        let kindle = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(KINDLE_TOKENS)?;

        Ok(Self {
            kindle,

            microsoft_family: mk(r"Win|IEMobile")?,
            apple_family: mk(r"Mac|iPhone|iPad|iPod")?,
            android: mk(r"Android")?,

            win: mk(r"Win")?,
            touch: mk(r"Touch")?,
            iemobile: mk(r"IEMobile")?,
            xbox_one: mk(r"XBox One")?,
            xbox: mk(r"Xbox")?,
            windows_phone_version: mk(r"Windows.Phone.(?:os)?\s?(\d\d?\.?\d?\d?)")?,
            wp_version: mk(r"WP(\d\d?\.?\d?\d?)")?,
            windows_nt: mk(r"Windows.NT.")?,
            windows_nt_version: mk(r"Windows.NT.(\d\d?\.?\d?\d?)")?,
            windows_9x: mk(r"Windows.9(\d)")?,
            windows_ce: mk(r"Windows.CE")?,

            ios_device: mk(r"iPhone|iPad|iPod")?,
            mac: mk(r"Mac")?,
            desktop_brand: mk(r"Safari|Firefox|Chrome")?,
            ios_os_version: mk(r"OS.(\d+[._]\d+)")?,
            version_float: mk(r"Version/(\d+\.\d+)")?,
            mac_os_x_minor: mk(r"Mac.OS.X.10.(\d+)")?,

            android_version: mk(r"Android\s(\d+\.\d+)")?,
            chrome: mk(r"Chrome")?,
            chrome_version: mk(r"Chrome/(\d+)")?,
            applewebkit: mk(r"AppleWebKit")?,
            applewebkit_version: mk(r"AppleWebKit/(\d+)")?,
            silk: mk(r"Silk")?,
            silk_version: mk(r"Silk/(\d+)")?,

            wii: mk(r"Wii")?,
            playstation_4: mk(r"PlayStation.4")?,
            playstation: mk(r"PlayStation")?,
            symbian: mk(r"Symbian|Nokia|Series60|S60")?,
            blackberry: mk(r"BlackBerry|BB10|\bRIM\b")?,
            linux: mk(r"Linux")?,

            opr: mk(r"\sOPR/\d+")?,
            opr_version: mk(r"OPR/(\d+\.\d+)")?,
            edge_version: mk(r"Edge/(\d+)")?,
            msie_version: mk(r"MSIE[\s/](\d+)")?,
            trident_rv_version: mk(r"Trident/.*rv:(\d+)")?,
            firefox_version: mk(r"Firefox/(\d+)")?,
            rv_version: mk(r"rv:(\d+)")?,
            presto_version: mk(r"Presto/(\d+\.\d+)")?,
            nintendo: mk(r"Nintendo")?,
            iemobile_version: mk(r"IEMobile/(\d+)")?,
            opera_mini_version: mk(r"Opera Mini/(\d+)")?,
            opera_version: mk(r"Opera/(\d+)")?,
        })
    }

    pub fn is_kindle(&self, ua: &str) -> bool {
        self.kindle.is_match(ua)
    }
}
