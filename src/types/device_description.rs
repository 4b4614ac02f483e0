use super::Browser;
use crate::environment::Environment;
use serde::Serialize;

/// Device object of an outgoing bid request, populated from a detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceDescription {
    pub devicetype: u8,
    pub h: u32,
    pub w: u32,
    pub dnt: u8,
    pub language: String,
    pub make: String,
    pub os: String,
    pub osv: String,
    pub ua: String,
}

impl DeviceDescription {
    pub fn new(browser: &Browser, env: &dyn Environment, ua: &str) -> Self {
        let screen = |path: &str| {
            env.number(path)
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map_or(0, |v| v as u32)
        };
        let language = env
            .text("navigator.language")
            .and_then(|l| l.split('-').next())
            .unwrap_or("")
            .to_string();

        Self {
            devicetype: browser.device_type().code(),
            h: screen("screen.height"),
            w: screen("screen.width"),
            dnt: u8::from(do_not_track(env)),
            language,
            make: env.text("navigator.vendor").unwrap_or("").to_string(),
            os: browser.os.name.as_str().to_string(),
            osv: browser.os.version.clone(),
            ua: ua.to_string(),
        }
    }
}

fn do_not_track(env: &dyn Environment) -> bool {
    matches!(env.text("navigator.doNotTrack"), Some("1" | "yes"))
        || env.text("window.doNotTrack") == Some("1")
        || env.text("navigator.msDoNotTrack") == Some("1")
}
