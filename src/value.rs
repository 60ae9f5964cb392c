//! The tagged dynamic value shared by every expression, and its coercion rules.

use std::fmt;

/// The discriminator of a [`V`]. Cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Null,
    Bool,
    Int,
    Float,
    String,
}

/// A tagged dynamic value. Immutable once constructed — every coercion
/// produces a fresh `V` rather than mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub enum V {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl V {
    pub fn tag(&self) -> Tag {
        match self {
            V::Null => Tag::Null,
            V::Bool(_) => Tag::Bool,
            V::Int(_) => Tag::Int,
            V::Float(_) => Tag::Float,
            V::String(_) => Tag::String,
        }
    }

    /// Total: every variant has a defined boolean reading.
    pub fn as_bool(&self) -> bool {
        match self {
            V::Null => false,
            V::Bool(b) => *b,
            V::Int(i) => *i != 0,
            V::Float(f) => *f != 0.0,
            V::String(s) => !s.is_empty() && s != "0",
        }
    }

    /// Infallible coercion to the requested tag. May lose precision.
    pub fn as_tag(&self, tag: Tag) -> V {
        match tag {
            Tag::Null => V::Null,
            Tag::Bool => V::Bool(self.as_bool()),
            Tag::Int => V::Int(self.as_int()),
            Tag::Float => V::Float(self.as_float()),
            Tag::String => V::String(self.as_string()),
        }
    }

    fn as_int(&self) -> i64 {
        match self {
            V::Null => 0,
            V::Bool(b) => *b as i64,
            V::Int(i) => *i,
            V::Float(f) => *f as i64,
            V::String(s) => parse_leading_int(s).unwrap_or(0),
        }
    }

    fn as_float(&self) -> f64 {
        match self {
            V::Null => 0.0,
            V::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            V::Int(i) => *i as f64,
            V::Float(f) => *f,
            V::String(s) => {
                if has_leading_int(s) {
                    parse_leading_int(s).unwrap_or(0) as f64
                } else {
                    parse_leading_float(s).unwrap_or(0.0)
                }
            }
        }
    }

    pub fn as_string(&self) -> String {
        match self {
            V::Null => String::new(),
            V::Bool(b) => {
                if *b {
                    "1".to_string()
                } else {
                    String::new()
                }
            }
            V::Int(i) => i.to_string(),
            V::Float(f) => format_float(*f),
            V::String(s) => s.clone(),
        }
    }

    /// Coerce to a numeric tag (Int or Float), per spec §3:
    /// strings that look like an integer literal become Int; other numeric
    /// strings become Float; anything else becomes Int 0.
    ///
    /// This is the "string-as-number" coercion path and deliberately tests
    /// for a leading integer run (`has_leading_int`, `"12abc"` → Int 12)
    /// rather than the stricter full-match `looks_int` classifier — the two
    /// are different concerns (spec §6 defines `looks_int` as a full match;
    /// the leading-prefix tolerance belongs here, not in the classifier).
    pub fn as_numeric(&self) -> V {
        match self {
            V::Int(_) | V::Float(_) => self.clone(),
            V::String(s) => {
                if has_leading_int(s) {
                    V::Int(parse_leading_int(s).unwrap_or(0))
                } else if is_numeric(s) {
                    V::Float(parse_leading_float(s).unwrap_or(0.0))
                } else {
                    V::Int(0)
                }
            }
            V::Null => V::Int(0),
            V::Bool(b) => V::Int(*b as i64),
        }
    }
}

impl fmt::Display for V {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// Formats a float the way the language's string coercion expects:
/// integral floats print without a trailing `.0`.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NAN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// `looks_int()` per spec §6: the ENTIRE byte string matches `-?[0-9]+` and
/// fits in the Int range — a full match, not a prefix test. `"12abc"` does
/// NOT look like an int under this classifier (see `has_leading_int` for the
/// separate leading-prefix tolerance used by the `as_numeric` coercion path).
pub fn looks_int(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if i < bytes.len() && bytes[i] == b'-' {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start || i != bytes.len() {
        return false;
    }
    s.parse::<i64>().is_ok()
}

/// Leading-prefix variant of `looks_int`, used only by the `as_numeric`/
/// `as_float` coercion paths: a leading `-?[0-9]+` run (trailing non-numeric
/// garbage tolerated, matching the legacy `intval`-style string-as-number
/// promotion in spec §8 scenario 4: `"12abc" == 12`), provided the run isn't
/// itself the start of a longer float/exponent literal (a leading `.` or
/// `e`/`E` right after the digits means the string coerces as a Float
/// instead, via `is_numeric`/`parse_leading_float`).
fn has_leading_int(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if i < bytes.len() && bytes[i] == b'-' {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return false;
    }
    if i < bytes.len() && matches!(bytes[i], b'.' | b'e' | b'E') {
        return false;
    }
    true
}

/// `is_numeric()` — optional sign, digits, optional fractional part, optional
/// decimal exponent. No surrounding whitespace tolerated.
pub fn is_numeric(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    if bytes[i] == b'+' || bytes[i] == b'-' {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut saw_digits = i > digits_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        saw_digits = saw_digits || i > frac_start;
    }

    if !saw_digits {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

/// Parses the leading integer run of a string the way the language's
/// "string-as-number" coercion does: non-numeric strings coerce to 0.
fn parse_leading_int(s: &str) -> Option<i64> {
    let trimmed = leading_numeric_prefix(s, false);
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok().or_else(|| {
        // overflowed i64 from a long digit run — saturate like the
        // machine-width two's-complement model the spec calls for.
        if trimmed.starts_with('-') {
            Some(i64::MIN)
        } else {
            Some(i64::MAX)
        }
    })
}

fn parse_leading_float(s: &str) -> Option<f64> {
    let trimmed = leading_numeric_prefix(s, true);
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Extracts the longest numeric prefix of `s` recognized as an Int (or,
/// when `allow_float`, a Float) literal, mirroring PHP-style leading-numeric
/// string coercion (`"12abc"` → `12`).
fn leading_numeric_prefix(s: &str, allow_float: bool) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;
    if i < bytes.len() && (bytes[i] == b'-' || bytes[i] == b'+') {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return "";
    }
    if allow_float && i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > i + 1 {
            i = j;
        }
    }
    &s[..i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_tag_idempotent() {
        for v in [
            V::Null,
            V::Bool(true),
            V::Int(7),
            V::Float(2.5),
            V::String("12abc".to_string()),
        ] {
            for tag in [Tag::Null, Tag::Bool, Tag::Int, Tag::Float, Tag::String] {
                let once = v.as_tag(tag);
                let twice = once.as_tag(tag);
                assert_eq!(once, twice, "as({tag:?}) not idempotent for {v:?}");
            }
        }
    }

    #[test]
    fn as_numeric_returns_int_or_float() {
        assert_eq!(V::String("12abc".into()).as_numeric(), V::Int(12));
        assert_eq!(V::String("3.5".into()).as_numeric(), V::Float(3.5));
        assert_eq!(V::String("abc".into()).as_numeric(), V::Int(0));
        assert_eq!(V::Bool(true).as_numeric(), V::Int(1));
    }

    #[test]
    fn looks_int_and_is_numeric() {
        // looks_int is a full match (spec §6): trailing garbage disqualifies
        // it, even though the same string still coerces via as_numeric's
        // leading-prefix tolerance (see as_numeric_returns_int_or_float).
        assert!(!looks_int("12abc"));
        assert!(looks_int("42"));
        assert!(looks_int("-42"));
        assert!(!looks_int("3.5"));
        assert!(!looks_int("abc"));
        assert!(is_numeric("3.5e-2"));
        assert!(!is_numeric(" 3.5"));
        assert!(!is_numeric("3.5 "));
    }

    #[test]
    fn loose_comparison_scenario_from_spec() {
        // "12abc" == 12 should promote the string via as_numeric's
        // leading-prefix tolerance to Int 12.
        assert_eq!(V::String("12abc".into()).as_numeric(), V::Int(12));
    }

    #[test]
    fn string_to_string_coercion() {
        assert_eq!(V::Bool(true).as_string(), "1");
        assert_eq!(V::Bool(false).as_string(), "");
        assert_eq!(V::Float(25.0).as_string(), "25");
    }
}
