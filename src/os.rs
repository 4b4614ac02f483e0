use crate::builder::BrowserBuilder;
use crate::engines::{ANDROID, KINDLE};
use crate::helpers::*;
use crate::rules::Context;
use crate::types::{BrowserName, EngineName, OsName};
use crate::version::{format_version, UNKNOWN_OS_VERSION, UNKNOWN_VERSION};

/// NT kernel version → Windows marketing name.
/// From http://msdn.microsoft.com/en-us/library/ms537503(v=vs.85).aspx
const WINDOWS_NT_RELEASES: &[(f64, &str)] = &[
    (10.0, "10.0"),
    (6.3, "8.1"),
    (6.2, "8"),
    (6.1, "7"),
    (6.0, "Vista"),
    (5.2, "2003"),
    (5.1, "XP"),
    (5.01, "2000 SP1"),
    (5.0, "2000"),
    (4.0, "NT"),
];

/// Coarse OS family picked from UA substrings; the families are checked in
/// declaration order and are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OsFamily {
    Microsoft,
    Apple,
    Android,
    Kindle,
    Other,
}

impl OsFamily {
    pub fn of(ctx: &Context<'_>) -> Self {
        let p = ctx.patterns;
        if ctx.looks_like(&p.microsoft_family) {
            Self::Microsoft
        } else if ctx.looks_like(&p.apple_family) {
            Self::Apple
        } else if ctx.looks_like(&p.android) {
            Self::Android
        } else if p.is_kindle(ctx.ua) {
            Self::Kindle
        } else {
            Self::Other
        }
    }
}

/// Resolve OS, device class and whatever the OS branch can tell about the
/// engine from the UA alone.
pub(crate) fn resolve_os(ctx: &Context<'_>) -> BrowserBuilder {
    let family = OsFamily::of(ctx);
    tracing::debug!(?family, "os family");
    match family {
        OsFamily::Microsoft => microsoft_os(ctx),
        OsFamily::Apple => apple_os(ctx),
        OsFamily::Android => android_os(ctx),
        OsFamily::Kindle => kindle_os(ctx),
        OsFamily::Other => other_os(ctx),
    }
}

pub(crate) fn microsoft_os(ctx: &Context<'_>) -> BrowserBuilder {
    let p = ctx.patterns;
    let ua = ctx.ua;
    let iemobile = ctx.looks_like(&p.iemobile);
    let mut b = BrowserBuilder::default();

    if ctx.looks_like(&p.xbox_one) {
        b = b.os(OsName::Xbox, "One");
        b.name = Some(BrowserName::InternetExplorer);
        b.version = 10.0;
        b.console = true;
    } else if ctx.looks_like(&p.xbox) {
        b = b.os(OsName::Xbox, "360");
        b.name = Some(BrowserName::InternetExplorer);
        b.version = 7.0;
        b.console = true;
    } else if iemobile {
        let version = first_capture(&p.windows_phone_version, ua)
            .or_else(|| first_capture(&p.wp_version, ua))
            .unwrap_or(UNKNOWN_OS_VERSION);
        b = b.os(OsName::WindowsPhone, version);
        b.mobile = true;
    } else if ctx.looks_like(&p.windows_nt) {
        let nt = extract_float(ua, &p.windows_nt_version);
        let release = WINDOWS_NT_RELEASES
            .iter()
            .find(|(kernel, _)| *kernel == nt)
            .map_or(UNKNOWN_OS_VERSION, |(_, name)| *name);
        b = b.os(OsName::Windows, release);
        b.desktop = true;
    } else if ctx.looks_like(&p.windows_9x) {
        // 95, 98 and Me are not worth telling apart
        b = b.os(OsName::Windows, "9x");
        b.desktop = true;
    } else if ctx.looks_like(&p.windows_ce) {
        b = b.os(OsName::Windows, "CE");
        b.mobile = true;
    } else {
        b = b.os(OsName::Windows, UNKNOWN_OS_VERSION);
        b.desktop = true;
    }

    // Surface-class devices: touch without being a phone.
    if ctx.looks_like(&p.touch) && !iemobile {
        b.os_name = Some(OsName::WindowsRt);
    }
    b
}

pub(crate) fn apple_os(ctx: &Context<'_>) -> BrowserBuilder {
    let p = ctx.patterns;
    let ua = ctx.ua;
    let platform = ctx.platform();
    let mut b = BrowserBuilder::default();

    // In-app webviews carry none of the desktop browser tokens.
    if ctx.looks_like(&p.ios_device)
        || looks_like(&p.ios_device, platform)
        || !ctx.looks_like(&p.desktop_brand)
    {
        let version = first_capture(&p.ios_os_version, ua)
            .map(|v| v.replace('_', "."))
            .or_else(|| first_capture(&p.version_float, ua).map(str::to_string));
        b.ua_version = version
            .as_deref()
            .and_then(parse_float_prefix)
            .unwrap_or(UNKNOWN_VERSION);
        b = b.os(
            OsName::Ios,
            version.unwrap_or_else(|| UNKNOWN_OS_VERSION.to_string()),
        );

        let device = if platform.is_empty() { ua } else { platform };
        b.tablet = contains_ignore_ascii_case(device, "ipad");
        b.mobile =
            contains_ignore_ascii_case(device, "iphone") || contains_ignore_ascii_case(device, "ipod");
    } else if ctx.looks_like(&p.mac) || looks_like(&p.mac, platform) {
        // "Mac OS X 10_N" has been the UA format since Safari 3.
        let minor = extract_int(ua, &p.mac_os_x_minor, 10);
        if minor > 0.0 {
            b = b.os(OsName::Mac, format!("10.{}", minor as i64));
        }
        b.desktop = true;
    }
    b
}

pub(crate) fn android_os(ctx: &Context<'_>) -> BrowserBuilder {
    let p = ctx.patterns;
    let ua = ctx.ua;
    let mut b = BrowserBuilder {
        ua_version: extract_float(ua, &p.android_version),
        mobile: true,
        ..Default::default()
    };

    b = if ctx.looks_like(&p.chrome) {
        b.engine(EngineName::Chrome, extract_int(ua, &p.chrome_version, 10))
    } else if ctx.looks_like(&p.applewebkit) {
        b.engine(EngineName::Webkit, extract_int(ua, &p.applewebkit_version, 10))
    } else {
        b.engine(EngineName::Unknown, UNKNOWN_VERSION)
    };

    let version = ANDROID.resolve(ctx, b.ua_version);
    b.os(OsName::Android, format_version(version))
}

pub(crate) fn kindle_os(ctx: &Context<'_>) -> BrowserBuilder {
    let p = ctx.patterns;
    let ua = ctx.ua;
    let mut b = BrowserBuilder::default();

    if ctx.looks_like(&p.silk) {
        let silk = extract_int(ua, &p.silk_version, 10);
        b = b.engine(EngineName::Silk, silk);
        b.ua_version = silk;
    } else if ctx.looks_like(&p.applewebkit) {
        b = b.engine(EngineName::Webkit, extract_int(ua, &p.applewebkit_version, 10));
        // a Kindle UA without Silk is something odd; assume the first generation
        b.ua_version = 1.0;
    }

    if contains_ignore_ascii_case(ua, "Version") {
        b.ua_version = extract_float(ua, &p.version_float);
    }

    b.version = KINDLE.resolve(ctx, b.ua_version);
    b.tablet = true;
    b
}

pub(crate) fn other_os(ctx: &Context<'_>) -> BrowserBuilder {
    let p = ctx.patterns;
    let mut b = BrowserBuilder::default();

    if ctx.probe.has("wiiu") {
        b = b.os(OsName::Wii, "U");
        b.name = Some(BrowserName::NetFront);
        b.console = true;
    } else if ctx.looks_like(&p.wii) {
        b = b.os(OsName::Wii, UNKNOWN_OS_VERSION);
        b.name = Some(BrowserName::NetFront);
        b.console = true;
    } else if ctx.looks_like(&p.playstation_4) {
        b = b.os(OsName::PlayStation, "4");
        b.name = Some(BrowserName::NetFront);
        b.console = true;
    } else if ctx.looks_like(&p.playstation) {
        b = b.os(OsName::PlayStation, "3");
        b.console = true;
    } else if ctx.looks_like(&p.symbian) {
        b = b.os(OsName::Symbian, UNKNOWN_OS_VERSION);
        b.mobile = true;
    } else if ctx.looks_like(&p.blackberry) {
        b = b.os(OsName::Blackberry, UNKNOWN_OS_VERSION);
        b.mobile = true;
    } else if ctx.platform() == "X11" || ctx.looks_like(&p.linux) {
        b = b.os(OsName::Linux, UNKNOWN_OS_VERSION);
        b.desktop = true;
    } else {
        b = b.os(OsName::Unknown, UNKNOWN_OS_VERSION);
    }
    b
}
