//! Host-facing boundary: the clipboard text source, the color/opacity
//! sinks, and the glue that carries a resolved color into the host.
//!
//! The core has no network, file, or persisted-state surface; these two
//! traits are its entire boundary. Hosts implement them over whatever
//! clipboard API and canvas state they own.

use crate::color::Color;
use crate::resolver::{self, ResolveError};

/// Source of the input text, typically the system clipboard.
pub trait ClipboardSource {
    /// Current textual clipboard content. May be empty.
    fn text(&self) -> String;
}

/// Sink for a resolved color.
///
/// The foreground setter alone cannot represent translucency in the host
/// model, so the alpha channel travels separately through the painting
/// opacity setter.
pub trait HostSink {
    /// Apply a canonical color as the host's active foreground color.
    fn set_foreground(&mut self, color: Color);

    /// Apply a [0,1] value as the host's active painting opacity.
    fn set_painting_opacity(&mut self, opacity: f32);
}

/// Read the clipboard, resolve the first color in it, and push the result
/// into the host.
///
/// The sink is only touched after a fully successful scan and decode;
/// on any failure the host state is left exactly as it was and the error
/// is returned for the caller to report. There is no retry.
pub fn apply_clipboard_color<S, K>(source: &S, sink: &mut K) -> Result<Color, ResolveError>
where
    S: ClipboardSource,
    K: HostSink,
{
    let text = source.text();
    let color = resolver::resolve_color(&text)?;
    sink.set_foreground(color);
    sink.set_painting_opacity(color.alpha);
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClipboard(&'static str);

    impl ClipboardSource for FixedClipboard {
        fn text(&self) -> String {
            self.0.to_string()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        foregrounds: Vec<Color>,
        opacities: Vec<f32>,
    }

    impl HostSink for RecordingSink {
        fn set_foreground(&mut self, color: Color) {
            self.foregrounds.push(color);
        }

        fn set_painting_opacity(&mut self, opacity: f32) {
            self.opacities.push(opacity);
        }
    }

    #[test]
    fn test_success_pushes_color_and_alpha_once() {
        let clipboard = FixedClipboard("try rgba(239, 104, 255, 0.3)");
        let mut sink = RecordingSink::default();

        let color = apply_clipboard_color(&clipboard, &mut sink).unwrap();

        assert_eq!(sink.foregrounds, vec![color]);
        assert_eq!(sink.opacities, vec![0.3]);
    }

    #[test]
    fn test_no_match_leaves_sink_untouched() {
        let clipboard = FixedClipboard("no colors here");
        let mut sink = RecordingSink::default();

        let err = apply_clipboard_color(&clipboard, &mut sink).unwrap_err();

        assert_eq!(err, ResolveError::NoMatch);
        assert!(sink.foregrounds.is_empty());
        assert!(sink.opacities.is_empty());
    }

    #[test]
    fn test_empty_clipboard_is_no_match() {
        let clipboard = FixedClipboard("");
        let mut sink = RecordingSink::default();

        assert_eq!(
            apply_clipboard_color(&clipboard, &mut sink),
            Err(ResolveError::NoMatch)
        );
        assert!(sink.foregrounds.is_empty());
    }

    #[test]
    fn test_opaque_format_sets_full_opacity() {
        let clipboard = FixedClipboard("my color is ffaa00 please use it");
        let mut sink = RecordingSink::default();

        apply_clipboard_color(&clipboard, &mut sink).unwrap();

        assert_eq!(sink.opacities, vec![1.0]);
    }
}
