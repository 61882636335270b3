//! Error types.

use std::io::Error as IoError;
use std::path::PathBuf;

/// Errors that occur while generating a header from a font.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An error returned when the font file cannot be read.
    #[error("failed to read font file '{}'", path.display())]
    Io {
        /// The path that could not be read.
        path: PathBuf,
        #[source]
        source: IoError,
    },
    /// An error returned when the file is not a recognizable font container.
    #[error("failed to parse font: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),
    /// An error returned when the font has no character map table.
    #[error("font has no character map table")]
    MissingCharacterMap,
    /// An error returned when a glyph name cannot be used as a C identifier.
    #[error("glyph name '{0}' is not a valid C identifier")]
    InvalidGlyphName(String),
    /// An error returned when the header file cannot be written.
    #[error("failed to write header file '{}'", path.display())]
    Write {
        /// The destination path.
        path: PathBuf,
        #[source]
        source: IoError,
    },
}
