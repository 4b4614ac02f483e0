use crate::rules::{first_match, Condition, Context, UaToken};
use Condition::{AllOf, Always, AnyOf, Has, Lacks, MathMl, NotUa, Ua};

/// Brand branch picked by feature detection, before any OS or version work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BrowserType {
    // desktop
    Microsoft,
    Firefox,
    Chrome,
    Opera,
    Safari,
    Unknown,
    // mobile
    Kindle,
    ChromeMobile,
    FirefoxMobile,
    MicrosoftMobile,
    OperaMini,
    SafariMobile,
    Webview,
    Android,
    BlackBerry,
    OperaAndroid,
    UnknownMobile,
}

/// Decided by UA alone, whatever the touch signal says.
const CARVE_OUTS: &[(Condition, BrowserType)] = &[(Ua(UaToken::Kindle), BrowserType::Kindle)];

const MOBILE_RULES: &[(Condition, BrowserType)] = &[
    // Surface-class Windows: touch but not a phone
    (
        AllOf(&[Ua(UaToken::Win), Ua(UaToken::Touch), NotUa(UaToken::IeMobile)]),
        BrowserType::Microsoft,
    ),
    (Has("navigator.permissions"), BrowserType::ChromeMobile),
    (Has("ondevicelight"), BrowserType::FirefoxMobile),
    (Has("setImmediate"), BrowserType::MicrosoftMobile),
    (Lacks("matchMedia"), BrowserType::OperaMini),
    (
        AllOf(&[Has("speechSynthesis"), Lacks("Intl")]),
        BrowserType::SafariMobile,
    ),
    (
        AllOf(&[
            AnyOf(&[Has("isFinite"), Has("navigator.connection.type")]),
            MathMl,
        ]),
        BrowserType::Webview,
    ),
    (
        AnyOf(&[Has("isFinite"), Has("navigator.connection.type")]),
        BrowserType::Android,
    ),
    (Lacks("Intl"), BrowserType::BlackBerry),
    (Has("webkitRequestFileSystem"), BrowserType::OperaAndroid),
    (Always, BrowserType::UnknownMobile),
];

const DESKTOP_RULES: &[(Condition, BrowserType)] = &[
    (
        AllOf(&[Lacks("Notification"), Lacks("EventSource"), Has("navigator.onLine")]),
        BrowserType::Microsoft,
    ),
    (Has("InstallTrigger"), BrowserType::Firefox),
    (
        AllOf(&[Has("chrome"), Lacks("opera"), NotUa(UaToken::Opr)]),
        BrowserType::Chrome,
    ),
    (AnyOf(&[Has("opera"), Ua(UaToken::Opr)]), BrowserType::Opera),
    (
        AllOf(&[Lacks("webkitRequestFileSystem"), Lacks("Intl")]),
        BrowserType::Safari,
    ),
    (Always, BrowserType::Unknown),
];

/// Touch-capable and missing the desktop pointer-lock APIs; without touch
/// events, missing `execCommand`.
pub(crate) fn is_mobile(ctx: &Context<'_>) -> bool {
    let probe = ctx.probe;
    if probe.touch_events() {
        probe.lacks("document.exitPointerLock") || probe.lacks("document.mozExitPointerLock")
    } else {
        probe.lacks("document.execCommand")
    }
}

pub(crate) fn classify(ctx: &Context<'_>) -> BrowserType {
    let mobile = is_mobile(ctx);
    let rules = if mobile { MOBILE_RULES } else { DESKTOP_RULES };
    let kind = first_match(CARVE_OUTS, ctx)
        .or_else(|| first_match(rules, ctx))
        .unwrap_or(if mobile {
            BrowserType::UnknownMobile
        } else {
            BrowserType::Unknown
        });
    tracing::debug!(mobile, ?kind, "browser type");
    kind
}
