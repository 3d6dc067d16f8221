//! Clipcolor - library for extracting color values from clipboard text
//!
//! This library provides functionality to:
//! - Scan free-form text for the first substring matching a supported
//!   color grammar (hex, hex+alpha, rgb(), rgba())
//! - Decode the match into a canonical RGBA color with [0,1] channels
//! - Carry the result into a host application's foreground color and
//!   painting opacity through narrow trait boundaries

pub mod color;
pub mod host;
pub mod registry;
pub mod resolver;

pub use color::Color;
pub use host::{apply_clipboard_color, ClipboardSource, HostSink};
pub use registry::Format;
pub use resolver::{resolve_color, ResolveError};
