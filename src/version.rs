/// Sentinel for a version that could not be resolved. Every real version is >= 0.
pub const UNKNOWN_VERSION: f64 = -1.0;

/// String form of [`UNKNOWN_VERSION`], used for OS versions.
pub const UNKNOWN_OS_VERSION: &str = "-1";

/// Clamp a UA-reported version into the range a capability milestone allows.
///
/// `floor` is the release that introduced the capability, `ceiling` the newest
/// release the milestone table knows about (`f64::INFINITY` when open-ended).
/// A reported version below the floor (including [`UNKNOWN_VERSION`] and NaN)
/// resolves to the floor.
pub fn bound(reported: f64, floor: f64, ceiling: f64) -> f64 {
    if reported >= floor {
        if reported <= ceiling {
            reported
        } else {
            ceiling
        }
    } else {
        floor
    }
}

pub(crate) fn is_unknown(version: f64) -> bool {
    version < 0.0 || version.is_nan()
}

/// Render a numeric version the way it is reported downstream: integral
/// versions drop the fraction (`5.0` → `"5"`), unknown renders as `"-1"`.
pub fn format_version(version: f64) -> String {
    if is_unknown(version) {
        UNKNOWN_OS_VERSION.to_string()
    } else if version.fract() == 0.0 && version.is_finite() {
        format!("{:.0}", version)
    } else {
        format!("{}", version)
    }
}
