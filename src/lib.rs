//! Generate a C header of icon constants from a font's character map.
//!
//! An icon font assigns a codepoint to every named glyph. This crate reads
//! those assignments from the font's cmap table and renders them as a C
//! header: one `IC_<NAME>` macro per glyph plus a flat `icons[]` array
//! referencing every macro, so GUI code can address icons symbolically.
//!
//! # Basic usage:
//!
//! ```no_run
//! use std::path::Path;
//!
//! let icons = icongen::collect_icons(Path::new("feather.ttf")).expect("failed to load font");
//! icongen::write_header_file(&icons, Path::new("Icons.h")).expect("failed to write header");
//! ```

pub mod error;
mod font;
mod mapping;
mod write;

pub use error::Error;
pub use font::collect_icons;
pub use mapping::{IconMapping, MACRO_PREFIX};
pub use write::{write_header, write_header_file, HEADER_FILE_NAME};
