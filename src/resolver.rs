//! Color resolver: scan input text for the best color candidate, dispatch
//! to the matching format's decoder, and produce a canonical color.
//!
//! Resolution is a stateless, single pass over one input string. The
//! resolved format tag travels inside the [`Match`] from scan to decode,
//! so concurrent or re-entrant calls never observe each other.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::color::Color;
use crate::registry::{self, Format};

/// Error type for resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No substring of the input matched any registered grammar
    #[error("no color found in input text")]
    NoMatch,
    /// A matched span could not be decoded by its format's decoder.
    /// Unreachable when the registry and decoders agree; an occurrence is
    /// an internal-consistency fault, not bad user input.
    #[error("cannot decode '{span}' as {format}")]
    Decode { format: Format, span: String },
}

/// The winning candidate of a scan: the matched format and its half-open
/// byte span within the source text. Produced by [`scan`], consumed by
/// [`decode`], not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub format: Format,
    pub start: usize,
    pub end: usize,
}

/// Locate the best color candidate in `text`.
///
/// Every registered grammar is searched for its first occurrence anywhere
/// in the text. The overall winner is the candidate with the lowest start
/// offset; among candidates starting at the same offset, the
/// later-registered descriptor wins. Returns `None` when no grammar
/// matches.
///
/// Cost is one left-to-right search per format, fine for clipboard-sized
/// input.
pub fn scan(text: &str) -> Option<Match> {
    let mut best: Option<Match> = None;
    for descriptor in registry::descriptors() {
        if let Some(found) = descriptor.pattern.find(text) {
            let wins = match &best {
                // <= so equal-offset ties go to the later-registered format
                Some(current) => found.start() <= current.start,
                None => true,
            };
            if wins {
                best = Some(Match {
                    format: descriptor.format,
                    start: found.start(),
                    end: found.end(),
                });
            }
        }
    }
    best
}

/// Decode the matched span of `text` into a canonical color.
///
/// Dispatches to exactly one decoder by the match's format tag. The
/// dispatch table is total over [`Format`], so adding a format means
/// adding an enum variant, a registry entry, and the decoder arm the
/// compiler then demands here.
pub fn decode(text: &str, matched: &Match) -> Result<Color, ResolveError> {
    let span = &text[matched.start..matched.end];
    decoder_for(matched.format)(span)
}

/// Find the first color in `text` and decode it.
///
/// This is the end-to-end entry point: scan, then decode the winner.
/// A failed scan returns [`ResolveError::NoMatch`]; both failures are
/// terminal for the invocation, there is no retry.
pub fn resolve_color(text: &str) -> Result<Color, ResolveError> {
    let matched = scan(text).ok_or(ResolveError::NoMatch)?;
    decode(text, &matched)
}

type Decoder = fn(&str) -> Result<Color, ResolveError>;

/// Lookup from format tag to decoder.
fn decoder_for(format: Format) -> Decoder {
    match format {
        Format::Hex => decode_hex,
        Format::HexAlpha => decode_hex_alpha,
        Format::Rgb => decode_rgb,
        Format::Rgba => decode_rgba,
    }
}

/// Decode 6 hex digits as `RRGGBB`, alpha fixed to 1.0. A 3-digit span is
/// shorthand: each digit doubles (`fa0` reads as `ffaa00`).
fn decode_hex(span: &str) -> Result<Color, ResolveError> {
    let digits: String = if span.len() == 3 {
        span.chars().flat_map(|c| [c, c]).collect()
    } else {
        // take the trailing 6 digits of the span
        span[span.len() - 6..].to_string()
    };
    let red = hex_byte(&digits[0..2], span)?;
    let green = hex_byte(&digits[2..4], span)?;
    let blue = hex_byte(&digits[4..6], span)?;
    Ok(Color::opaque(red, green, blue))
}

/// Decode 8 hex digits as `RRGGBBAA`; alpha is also divided by 255.
fn decode_hex_alpha(span: &str) -> Result<Color, ResolveError> {
    let red = hex_byte(&span[0..2], span)?;
    let green = hex_byte(&span[2..4], span)?;
    let blue = hex_byte(&span[4..6], span)?;
    let alpha = hex_byte(&span[6..8], span)?;
    Ok(Color::new(red, green, blue, alpha))
}

/// Capture regex for extracting the integers out of a matched rgb() span.
static RGB_PARTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgb\((\d+), (\d+), (\d+)\)").unwrap());

/// Capture regex for extracting the integers and fractional alpha out of a
/// matched rgba() span.
static RGBA_PARTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgba\((\d+), (\d+), (\d+), (0?\.\d+)\)").unwrap());

/// Decode `rgb(R, G, B)`: each integer divided by 255, alpha fixed to 1.0.
///
/// Integers are not range-checked against [0,255]; out-of-range input
/// (e.g. `rgb(999, 0, 0)`) propagates as an out-of-[0,1] channel value.
fn decode_rgb(span: &str) -> Result<Color, ResolveError> {
    let caps = RGB_PARTS
        .captures(span)
        .ok_or_else(|| decode_fault(Format::Rgb, span))?;
    Ok(Color::opaque(
        int_channel(&caps[1], Format::Rgb, span)?,
        int_channel(&caps[2], Format::Rgb, span)?,
        int_channel(&caps[3], Format::Rgb, span)?,
    ))
}

/// Decode `rgba(R, G, B, A)`: integers divided by 255, fractional alpha
/// used as-is. The grammar already constrains alpha to `0?\.\d+`, so the
/// value is in [0,1) by shape.
fn decode_rgba(span: &str) -> Result<Color, ResolveError> {
    let caps = RGBA_PARTS
        .captures(span)
        .ok_or_else(|| decode_fault(Format::Rgba, span))?;
    let alpha: f32 = caps[4]
        .parse()
        .map_err(|_| decode_fault(Format::Rgba, span))?;
    Ok(Color::new(
        int_channel(&caps[1], Format::Rgba, span)?,
        int_channel(&caps[2], Format::Rgba, span)?,
        int_channel(&caps[3], Format::Rgba, span)?,
        alpha,
    ))
}

/// Parse a two-digit hex pair and normalize it to [0,1].
fn hex_byte(pair: &str, span: &str) -> Result<f32, ResolveError> {
    let byte = u8::from_str_radix(pair, 16).map_err(|_| decode_fault(Format::Hex, span))?;
    Ok(f32::from(byte) / 255.0)
}

/// Parse a decimal integer channel and divide by 255. Parsed as f32 so
/// out-of-range integers flow through instead of overflowing.
fn int_channel(digits: &str, format: Format, span: &str) -> Result<f32, ResolveError> {
    let value: f32 = digits.parse().map_err(|_| decode_fault(format, span))?;
    Ok(value / 255.0)
}

fn decode_fault(format: Format, span: &str) -> ResolveError {
    ResolveError::Decode { format, span: span.to_string() }
}
