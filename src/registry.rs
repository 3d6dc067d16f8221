//! Format registry: every textual color grammar the resolver recognizes.
//!
//! The registry is an ordered, read-only, process-wide list of
//! (format tag, pattern) pairs. Registry order does not imply priority;
//! the resolver picks the leftmost match in the input text and breaks
//! equal-offset ties in favor of the later-registered descriptor.
//!
//! Adding a format is a registry insertion: append a descriptor here and
//! register its decoder arm in the resolver's dispatch table. No other
//! component changes.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tag identifying one supported textual color grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// 6 or 3 hex digits, e.g. `ffaa00` or `fa0`. The pattern matches the
    /// digits only, so a leading `#` is tolerated in the surrounding text.
    Hex,
    /// 8 hex digits with a trailing alpha byte, e.g. `ffaa0011`.
    HexAlpha,
    /// `rgb(R, G, B)` with decimal integers and exactly one space after
    /// each comma, e.g. `rgb(239, 104, 255)`.
    Rgb,
    /// `rgba(R, G, B, A)` with a fractional alpha, e.g.
    /// `rgba(239, 104, 255, 0.3)`. The alpha grammar is `0?\.\d+`; it
    /// cannot match `1.0` or bare integers.
    Rgba,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Hex => write!(f, "hex"),
            Format::HexAlpha => write!(f, "hex+alpha"),
            Format::Rgb => write!(f, "rgb()"),
            Format::Rgba => write!(f, "rgba()"),
        }
    }
}

/// One registry entry: a format tag and the pattern recognizing its shape.
#[derive(Debug)]
pub struct FormatDescriptor {
    pub format: Format,
    pub pattern: Regex,
}

/// The process-wide format registry, compiled once on first use.
///
/// Hex comes before HexAlpha so that an 8-digit run, where both grammars
/// match at the same offset, resolves to HexAlpha under the
/// later-registered-wins tie-break.
static REGISTRY: LazyLock<Vec<FormatDescriptor>> = LazyLock::new(|| {
    vec![
        FormatDescriptor {
            format: Format::Hex,
            pattern: Regex::new(r"[0-9a-fA-F]{6}|[0-9a-fA-F]{3}").unwrap(),
        },
        FormatDescriptor {
            format: Format::HexAlpha,
            pattern: Regex::new(r"[0-9a-fA-F]{8}").unwrap(),
        },
        FormatDescriptor {
            format: Format::Rgb,
            pattern: Regex::new(r"rgb\(\d+, \d+, \d+\)").unwrap(),
        },
        FormatDescriptor {
            format: Format::Rgba,
            pattern: Regex::new(r"rgba\(\d+, \d+, \d+, 0?\.\d+\)").unwrap(),
        },
    ]
});

/// The ordered, read-only sequence of registered format descriptors.
pub fn descriptors() -> &'static [FormatDescriptor] {
    &REGISTRY
}
