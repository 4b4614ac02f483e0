use crate::version::UNKNOWN_VERSION;
use fancy_regex::Regex;

/// Does `re` match anywhere in `ua`?  Regex runtime errors (backtrack limit)
/// count as no match.
pub(crate) fn looks_like(re: &Regex, ua: &str) -> bool {
    re.is_match(ua).unwrap_or(false)
}

/// Text of capture group 1, if the pattern matched and the group participated.
pub(crate) fn first_capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .ok()
        .flatten()
        .and_then(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Parse the leading integer of capture group 1 in `radix`, or
/// [`UNKNOWN_VERSION`] if the pattern does not match.
pub(crate) fn extract_int(text: &str, re: &Regex, radix: u32) -> f64 {
    first_capture(re, text)
        .and_then(|s| {
            let end = s
                .char_indices()
                .find(|(_, c)| !c.is_digit(radix))
                .map_or(s.len(), |(i, _)| i);
            i64::from_str_radix(&s[..end], radix).ok()
        })
        .map_or(UNKNOWN_VERSION, |v| v as f64)
}

/// Parse the leading decimal number of capture group 1, or
/// [`UNKNOWN_VERSION`] if the pattern does not match.
pub(crate) fn extract_float(text: &str, re: &Regex) -> f64 {
    first_capture(re, text)
        .and_then(parse_float_prefix)
        .unwrap_or(UNKNOWN_VERSION)
}

/// Longest `digits[.digits]` prefix of `s` as a float; trailing junk is ignored.
pub(crate) fn parse_float_prefix(s: &str) -> Option<f64> {
    let mut seen_dot = false;
    let mut end = 0;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() {
            end = i + 1;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
    }
    if end == 0 {
        return None;
    }
    s[..end].parse::<f64>().ok()
}

pub(crate) fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}
