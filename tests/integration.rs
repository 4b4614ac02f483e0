use browser_sniffer::{
    BrowserName, Detector, DetectorConfig, DeviceDescription, DeviceType, EngineName, Environment,
    Max, OsName, SyntheticEnvironment, UNKNOWN_VERSION,
};
use fixtures::fixtures;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

static DETECTOR_INSTANCE: OnceLock<Detector> = OnceLock::new();

fn detector() -> &'static Detector {
    DETECTOR_INSTANCE.get_or_init(|| Detector::new().expect("failed to build Detector"))
}

fn load(path: &Path) -> Vec<DetectionFixture> {
    let content = std::fs::read_to_string(path).unwrap();
    serde_yaml::from_str(&content).unwrap()
}

// ---------------------------------------------------------------------------
// Labelled corpus
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct DetectionFixture {
    user_agent: String,
    #[serde(default)]
    environment: SyntheticEnvironment,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    name: BrowserName,
    #[serde(default)]
    version: Option<f64>,
    /// Inclusive bucket for rungs that span several releases.
    #[serde(default)]
    version_range: Option<[f64; 2]>,
    #[serde(default)]
    os: Option<OsFixture>,
    #[serde(default)]
    engine: Option<EngineFixture>,
    #[serde(default)]
    device_type: Option<String>,
    #[serde(default)]
    tablet: Option<bool>,
    #[serde(default)]
    console: Option<bool>,
    #[serde(default)]
    trustworthy: Option<bool>,
    #[serde(default)]
    max: Option<Max>,
}

#[derive(Debug, Deserialize)]
struct OsFixture {
    name: OsName,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EngineFixture {
    name: EngineName,
    #[serde(default)]
    version: Option<f64>,
}

#[fixtures(["tests/fixtures/*.yml"])]
#[test]
fn test_detection_fixtures(path: &std::path::Path) {
    let dd = detector();

    for f in &load(path) {
        let ua = f.user_agent.as_str();
        let b = dd.detect(Some(&f.environment), Some(ua)).details;
        let e = &f.expected;

        assert_eq!(b.name, e.name, "name mismatch for UA: {}", ua);
        if let Some(version) = e.version {
            assert_eq!(b.version, version, "version mismatch for UA: {}", ua);
        }
        if let Some([lo, hi]) = e.version_range {
            assert!(
                (lo..=hi).contains(&b.version),
                "version {} outside [{}, {}] for UA: {}",
                b.version,
                lo,
                hi,
                ua
            );
        }
        if let Some(os) = &e.os {
            assert_eq!(b.os.name, os.name, "os name mismatch for UA: {}", ua);
            if let Some(version) = &os.version {
                assert_eq!(&b.os.version, version, "os version mismatch for UA: {}", ua);
            }
        }
        if let Some(engine) = &e.engine {
            assert_eq!(b.engine.name, engine.name, "engine mismatch for UA: {}", ua);
            if let Some(version) = engine.version {
                assert_eq!(b.engine.version, version, "engine version mismatch for UA: {}", ua);
            }
        }
        if let Some(kind) = &e.device_type {
            let expected = DeviceType::from_str(kind)
                .unwrap_or_else(|| panic!("bad device_type {:?} in {:?}", kind, path));
            assert_eq!(b.device_type(), expected, "device type mismatch for UA: {}", ua);
        }
        if let Some(tablet) = e.tablet {
            assert_eq!(b.tablet, tablet, "tablet flag mismatch for UA: {}", ua);
        }
        if let Some(console) = e.console {
            assert_eq!(b.console, console, "console flag mismatch for UA: {}", ua);
        }
        if let Some(trustworthy) = e.trustworthy {
            assert_eq!(b.trustworthy, trustworthy, "trust mismatch for UA: {}", ua);
        }
        if let Some(max) = e.max {
            assert_eq!(b.max, max, "max mismatch for UA: {}", ua);
        }
    }
}

// ---------------------------------------------------------------------------
// Properties over the corpus
// ---------------------------------------------------------------------------

fn carries_tokens(ua: &str, name: BrowserName) -> bool {
    let ua = ua.to_ascii_lowercase();
    name.canonical_tokens()
        .iter()
        .all(|group| group.iter().any(|t| ua.contains(&t.to_ascii_lowercase())))
}

#[fixtures(["tests/fixtures/*.yml"])]
#[test]
fn test_detection_properties(path: &std::path::Path) {
    let dd = detector();

    for f in &load(path) {
        let ua = f.user_agent.as_str();
        let first = dd.detect(Some(&f.environment), Some(ua));
        let second = dd.detect(Some(&f.environment), Some(ua));
        assert_eq!(first, second, "not idempotent for UA: {}", ua);

        let b = first.details();
        assert_eq!(
            b.trustworthy,
            carries_tokens(ua, b.name),
            "trust does not follow tokens for UA: {}",
            ua
        );
        assert_eq!(
            b.max == Max::Exceed,
            b.ua.version > b.version,
            "max does not follow versions for UA: {}",
            ua
        );
        assert!(b.version >= 0.0 || b.version == UNKNOWN_VERSION);
        assert!(!b.os.version.is_empty());
        assert_eq!(b.is_ie(), b.name == BrowserName::InternetExplorer);
        assert_eq!(b.is_ff(), b.name == BrowserName::Firefox);
        assert_eq!(b.is_opera(), b.name == BrowserName::Opera);
        assert_eq!(b.is_chrome(), b.name == BrowserName::Chrome);
        assert_eq!(b.is_safari(), b.name == BrowserName::Safari);
    }
}

#[fixtures(["tests/fixtures/*.yml"])]
#[test]
fn test_detect_all_matches_detect(path: &std::path::Path) {
    let dd = detector();
    let fixtures = load(path);
    let envs: Vec<SyntheticEnvironment> = fixtures
        .iter()
        .map(|f| f.environment.clone().with_user_agent(f.user_agent.clone()))
        .collect();

    let batch = dd.detect_all(&envs);
    assert_eq!(batch.len(), envs.len());
    for (env, detection) in envs.iter().zip(&batch) {
        assert_eq!(detection, &dd.detect(Some(env), None));
    }
}

// ---------------------------------------------------------------------------
// Degenerate inputs
// ---------------------------------------------------------------------------

#[test]
fn test_failing_getters_read_as_absent() {
    let ua = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/55.0.2883.87 Safari/537.36";
    let healthy = SyntheticEnvironment::new().with_all([
        "document.execCommand",
        "Notification",
        "chrome",
        "CSS",
        "Intl",
        "webkitRequestFileSystem",
        "history.replaceState",
    ]);
    let broken = healthy.clone().with("Proxy").with_throwing("Proxy");

    let a = detector().detect(Some(&healthy), Some(ua)).details;
    let b = detector().detect(Some(&broken), Some(ua)).details;
    assert_eq!(a, b);
    assert_eq!(b.name, BrowserName::Chrome);
    assert_eq!(b.version, 55.0);
}

#[test]
fn test_garbage_user_agents() {
    let env = SyntheticEnvironment::new().with_all(["document.execCommand", "Notification", "Intl"]);
    for ua in ["", " ", "\u{0}\u{1}", "Mozilla/", "Windows NT", "(((((", "OPR/", "Version/."] {
        let b = detector().detect(Some(&env), Some(ua)).details;
        assert!(b.version >= 0.0 || b.version == UNKNOWN_VERSION, "UA: {:?}", ua);
    }
}

// ---------------------------------------------------------------------------
// Configuration and the device description boundary
// ---------------------------------------------------------------------------

#[test]
fn test_config_file() {
    let dd = Detector::from_config_file("tests/config/latest.yml").unwrap();
    assert_eq!(dd.latest().firefox, 60.0);
    assert_eq!(dd.latest().edge, 14.0);

    let env = SyntheticEnvironment::new().with_all([
        "document.execCommand",
        "Notification",
        "InstallTrigger",
        "PushManager",
    ]);
    let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:58.0) Gecko/20100101 Firefox/58.0";
    let b = dd.detect(Some(&env), Some(ua)).details;
    assert_eq!(b.version, 58.0);
    assert_eq!(b.max, Max::Ok);

    assert!(Detector::from_config_file("tests/config/missing.yml").is_err());
    assert!(DetectorConfig::from_yaml_str("latest: newest").is_err());
}

#[test]
fn test_device_description() {
    let ua = "Mozilla/5.0 (iPad; CPU OS 10_3 like Mac OS X) AppleWebKit/603.1.30 (KHTML, like Gecko) Version/10.0 Mobile/14E277 Safari/602.1";
    let env = SyntheticEnvironment::new()
        .with_touch_events(true)
        .with_all(["matchMedia", "speechSynthesis", "CSS.supports"])
        .with_user_agent(ua)
        .with_platform("iPad")
        .with_text("navigator.language", "fr-CA")
        .with_text("navigator.vendor", "Apple Computer, Inc.")
        .with_text("navigator.doNotTrack", "1")
        .with_number("screen.width", 768.0)
        .with_number("screen.height", 1024.0);

    let b = detector().detect(Some(&env), None).details;
    assert_eq!(b.name, BrowserName::MobileSafari);
    assert!(b.tablet && !b.mobile);

    let device = DeviceDescription::new(&b, &env, ua);
    assert_eq!(device.devicetype, 5);
    assert_eq!((device.w, device.h), (768, 1024));
    assert_eq!(device.dnt, 1);
    assert_eq!(device.language, "fr");
    assert_eq!(device.make, "Apple Computer, Inc.");
    assert_eq!(device.os, "iOS");
    assert_eq!(device.osv, "10.3");
    assert_eq!(device.ua, ua);

    let bare = SyntheticEnvironment::new();
    let device = DeviceDescription::new(&b, &bare, ua);
    assert_eq!((device.w, device.h, device.dnt), (0, 0, 0));
    assert_eq!(device.language, "");
    assert_eq!(bare.text("navigator.vendor"), None);
}

#[test]
fn test_serialized_labels() {
    let env = SyntheticEnvironment::new()
        .with_all(["document.execCommand", "navigator.onLine", "MutationObserver"]);
    let ua = "Mozilla/5.0 (Windows NT 6.3; ARM; Trident/7.0; Touch; rv:11.0) like Gecko";
    let detection = detector().detect(Some(&env), Some(ua));
    let yaml = serde_yaml::to_string(&detection).unwrap();
    assert!(yaml.contains("name: Internet Explorer"), "{}", yaml);
    assert!(yaml.contains("name: Window RT"), "{}", yaml);
    assert!(yaml.contains("name: trident"), "{}", yaml);
    assert!(yaml.contains("max: ok"), "{}", yaml);
}
