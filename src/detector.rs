use super::builder::BrowserBuilder;
use super::classifier::{classify, BrowserType};
use super::config::{DetectorConfig, LatestReleases, Release};
use super::engines::*;
use super::environment::{Environment, SyntheticEnvironment};
use super::error::Result;
use super::helpers::*;
use super::os::*;
use super::patterns::UaPatterns;
use super::probe::Probe;
use super::rules::Context;
use super::types::*;
use super::version::{bound, is_unknown, UNKNOWN_OS_VERSION, UNKNOWN_VERSION};
use rayon::prelude::*;
use std::path::Path;

/// Root style property only KHTML (Konqueror) exposes.
const KHTML_USER_INPUT: &str = "document.documentElement.style.KhtmlUserInput";

pub struct Detector {
    patterns: UaPatterns,
    latest: LatestReleases,
}

impl Detector {
    /// Build a detector with the default release table.
    pub fn new() -> Result<Self> {
        Self::with_config(DetectorConfig::default())
    }

    pub fn with_config(config: DetectorConfig) -> Result<Self> {
        Ok(Self {
            patterns: UaPatterns::compile()?,
            latest: config.latest,
        })
    }

    /// Build a detector from a YAML configuration file such as
    ///
    /// ```yaml
    /// latest:
    ///   firefox: 51
    ///   chrome: 55
    /// ```
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(DetectorConfig::from_file(path)?)
    }

    pub fn latest(&self) -> &LatestReleases {
        &self.latest
    }

    /// Classify one environment.
    ///
    /// Without an environment nothing can be probed and only the UA is used.
    /// Without a UA override, `navigator.userAgent` of the environment is read.
    /// Never fails; unresolvable parts come back as "Unknown" or the unknown
    /// version sentinel.
    pub fn detect(&self, env: Option<&dyn Environment>, user_agent: Option<&str>) -> Detection {
        let supplied = env.is_some();
        let empty = SyntheticEnvironment::new();
        let env = env.unwrap_or(&empty);
        let ua = user_agent
            .or_else(|| env.text("navigator.userAgent"))
            .unwrap_or("");

        let ctx = Context {
            probe: Probe::new(env),
            ua,
            patterns: &self.patterns,
            latest: &self.latest,
        };

        // Nothing to feature-detect against; only the OS can be read off the UA.
        let kind = if supplied {
            classify(&ctx)
        } else {
            BrowserType::Unknown
        };
        let details = assemble(&ctx, kind).build(ua);
        tracing::debug!(
            name = %details.name,
            os = %details.os.name,
            device = %details.device_type(),
            version = details.version,
            trustworthy = details.trustworthy,
            "detected"
        );
        Detection { details }
    }

    /// Classify many environments in parallel, each with its own
    /// `navigator.userAgent`. Output order follows input order.
    pub fn detect_all<E: Environment + Sync>(&self, envs: &[E]) -> Vec<Detection> {
        envs.par_iter()
            .map(|env| self.detect(Some(env), None))
            .collect()
    }
}

fn assemble(ctx: &Context<'_>, kind: BrowserType) -> BrowserBuilder {
    match kind {
        BrowserType::Microsoft => microsoft(ctx),
        BrowserType::Firefox => firefox(ctx),
        BrowserType::Chrome => chrome(ctx),
        BrowserType::Opera => opera(ctx),
        BrowserType::Safari => safari(ctx),
        BrowserType::Android => android(ctx),
        BrowserType::SafariMobile => mobile_safari(ctx),
        BrowserType::Webview => webview(ctx),
        BrowserType::Kindle => BrowserBuilder {
            name: Some(BrowserName::Kindle),
            ..kindle_os(ctx)
        },
        BrowserType::BlackBerry => blackberry(ctx),
        BrowserType::ChromeMobile => {
            let p = ctx.patterns;
            ua_trusted(resolve_os(ctx), BrowserName::ChromeAndroid, ctx.ua, &p.chrome_version)
        }
        BrowserType::FirefoxMobile => {
            let p = ctx.patterns;
            let b = resolve_os(ctx).engine(EngineName::Gecko, extract_int(ctx.ua, &p.rv_version, 10));
            ua_trusted(b, BrowserName::FirefoxAndroid, ctx.ua, &p.firefox_version)
        }
        BrowserType::MicrosoftMobile => {
            let p = ctx.patterns;
            let b = ua_trusted(microsoft_os(ctx), BrowserName::MobileIe, ctx.ua, &p.iemobile_version);
            let engine_version = trident_engine_version(b.version);
            b.engine(EngineName::Trident, engine_version)
        }
        BrowserType::OperaMini => {
            let p = ctx.patterns;
            ua_trusted(resolve_os(ctx), BrowserName::OperaMini, ctx.ua, &p.opera_mini_version)
        }
        BrowserType::OperaAndroid => {
            let p = ctx.patterns;
            ua_trusted(resolve_os(ctx), BrowserName::OperaAndroid, ctx.ua, &p.opera_version)
        }
        BrowserType::Unknown | BrowserType::UnknownMobile => unknown(ctx),
    }
}

/// Brands with no usable milestone table: the UA version is taken at face value.
fn ua_trusted(
    mut b: BrowserBuilder,
    name: BrowserName,
    ua: &str,
    re: &fancy_regex::Regex,
) -> BrowserBuilder {
    b.name = Some(name);
    b.ua_version = extract_int(ua, re, 10);
    b.version = b.ua_version;
    b
}

fn microsoft(ctx: &Context<'_>) -> BrowserBuilder {
    let p = ctx.patterns;
    let mut b = microsoft_os(ctx);

    b.ua_version = [&p.edge_version, &p.msie_version, &p.trident_rv_version]
        .into_iter()
        .map(|re| extract_int(ctx.ua, re, 10))
        .find(|v| !is_unknown(*v))
        .unwrap_or(UNKNOWN_VERSION);
    b.version = TRIDENT.resolve(ctx, b.ua_version);
    let engine_version = trident_engine_version(b.version);
    b = b.engine(EngineName::Trident, engine_version);
    b.name = Some(if b.version >= 12.0 {
        BrowserName::Edge
    } else {
        BrowserName::InternetExplorer
    });
    b
}

fn firefox(ctx: &Context<'_>) -> BrowserBuilder {
    let p = ctx.patterns;
    let mut b = resolve_os(ctx).engine(EngineName::Gecko, extract_int(ctx.ua, &p.rv_version, 10));
    b.name = Some(BrowserName::Firefox);
    b.ua_version = extract_int(ctx.ua, &p.firefox_version, 10);
    b.version = GECKO.resolve(ctx, b.ua_version);
    b
}

fn chrome(ctx: &Context<'_>) -> BrowserBuilder {
    let p = ctx.patterns;
    // Blink shipped with Chrome 28, the same release that exposed `CSS`.
    let engine = if ctx.probe.has("CSS") {
        EngineName::Blink
    } else {
        EngineName::Webkit
    };
    let reported = extract_int(ctx.ua, &p.chrome_version, 10);
    let mut b = resolve_os(ctx).engine(engine, reported);
    b.name = Some(BrowserName::Chrome);
    b.ua_version = reported;
    b.version = CHROMIUM.resolve(ctx, reported);
    b
}

fn opera(ctx: &Context<'_>) -> BrowserBuilder {
    let p = ctx.patterns;
    let ua = ctx.ua;
    let mut b = resolve_os(ctx);
    b.name = Some(BrowserName::Opera);

    let presto = extract_float(ua, &p.presto_version);
    b.engine_version = if is_unknown(presto) {
        extract_int(ua, &p.applewebkit_version, 10)
    } else {
        presto
    };

    if ctx.looks_like(&p.nintendo) {
        b.engine_name = Some(EngineName::Presto);
        b.version = 9.0;
        b.console = true;
    } else if let Some(native) = ctx.probe.text("opera.version") {
        // Presto builds report their own version through `opera.version()`.
        b.engine_name = Some(EngineName::Presto);
        b.version = parse_float_prefix(native).unwrap_or(UNKNOWN_VERSION);
        b.ua_version = extract_float(ua, &p.version_float);
    } else {
        let chromium = CHROMIUM.resolve(ctx, extract_int(ua, &p.chrome_version, 10));
        b = b.engine(EngineName::Blink, chromium);
        b.ua_version = extract_float(ua, &p.opr_version);
        b.version = if chromium >= 28.0 {
            bound(
                b.ua_version,
                chromium - OPERA_CHROMIUM_OFFSET,
                ctx.latest.of(Release::Opera),
            )
        } else {
            chromium
        };
    }
    b
}

fn safari(ctx: &Context<'_>) -> BrowserBuilder {
    let p = ctx.patterns;
    let ua = ctx.ua;
    let mut b = resolve_os(ctx)
        .engine(EngineName::Webkit, extract_int(ua, &p.applewebkit_version, 10));
    b.name = Some(BrowserName::Safari);
    b.desktop = true;
    b.ua_version = extract_float(ua, &p.version_float);
    b.version = SAFARI.resolve(ctx, b.ua_version);
    b
}

fn android(ctx: &Context<'_>) -> BrowserBuilder {
    let mut b = android_os(ctx);
    b.name = Some(BrowserName::Android);
    b.version = ANDROID.resolve(ctx, b.ua_version);
    b
}

fn mobile_safari(ctx: &Context<'_>) -> BrowserBuilder {
    let p = ctx.patterns;
    let ua = ctx.ua;
    let mut b = apple_os(ctx).engine(EngineName::Webkit, extract_int(ua, &p.applewebkit_version, 10));
    b.name = Some(BrowserName::MobileSafari);
    let safari = extract_float(ua, &p.version_float);
    if !is_unknown(safari) {
        b.ua_version = safari;
    }
    b.version = SAFARI.resolve(ctx, b.ua_version);
    b
}

/// In-app browser on iOS. The UA carries no `Version/`, so the iOS release
/// stands in for the WebKit release.
fn webview(ctx: &Context<'_>) -> BrowserBuilder {
    let p = ctx.patterns;
    let mut b = apple_os(ctx).engine(
        EngineName::Webkit,
        extract_int(ctx.ua, &p.applewebkit_version, 10),
    );
    b.name = Some(BrowserName::IosWebview);
    b.version = SAFARI.resolve(ctx, b.ua_version);
    b
}

fn blackberry(ctx: &Context<'_>) -> BrowserBuilder {
    let p = ctx.patterns;
    let mut b = resolve_os(ctx);
    b.name = Some(BrowserName::BlackBerry);
    b.ua_version = extract_float(ctx.ua, &p.version_float);
    b.version = b.ua_version;
    b
}

fn unknown(ctx: &Context<'_>) -> BrowserBuilder {
    if ctx.probe.has(KHTML_USER_INPUT) {
        return BrowserBuilder {
            name: Some(BrowserName::LinuxBrowser),
            desktop: true,
            ..Default::default()
        }
        .engine(EngineName::Khtml, UNKNOWN_VERSION)
        .os(OsName::Linux, UNKNOWN_OS_VERSION);
    }

    let b = resolve_os(ctx);
    // Console resolvers name the bundled browser; keep that verdict.
    if b.console && b.name.is_some() {
        return b;
    }
    BrowserBuilder {
        name: None,
        engine_name: None,
        engine_version: UNKNOWN_VERSION,
        ua_version: UNKNOWN_VERSION,
        version: UNKNOWN_VERSION,
        ..b
    }
}
