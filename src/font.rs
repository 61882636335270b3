//! Loading the character map out of a font file.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::mapping::IconMapping;

/// Read the font at `path` and collect its character map into an
/// [`IconMapping`].
///
/// Every cmap sub-table is walked in font order and merged into a single
/// mapping: a glyph name seen in a later sub-table overrides the codepoint
/// recorded by an earlier one but keeps its first-seen position. Glyphs
/// without a name in the `post`/CFF tables get an Adobe Glyph List style
/// fallback name derived from the codepoint.
///
/// The file is read into memory up front, so the handle is closed before
/// any parsing happens; the parsed face is dropped on every return path.
pub fn collect_icons(path: &Path) -> Result<IconMapping, Error> {
    let data = fs::read(path).map_err(|source| Error::Io { path: path.into(), source })?;
    let face = ttf_parser::Face::parse(&data, 0)?;
    let cmap = face.tables().cmap.ok_or(Error::MissingCharacterMap)?;

    let mut icons = IconMapping::new();
    for subtable in cmap.subtables {
        let mut codepoints = Vec::new();
        subtable.codepoints(|cp| codepoints.push(cp));
        log::debug!(
            "cmap sub-table (platform {:?}, encoding {}): {} codepoints",
            subtable.platform_id,
            subtable.encoding_id,
            codepoints.len()
        );
        for cp in codepoints {
            let Some(glyph_id) = subtable.glyph_index(cp) else {
                continue;
            };
            match face.glyph_name(glyph_id) {
                Some(name) => icons.insert(name, cp)?,
                None => {
                    let name = fallback_name(cp);
                    log::debug!("glyph {} has no name, using '{}'", glyph_id.0, name);
                    icons.insert(name, cp)?;
                }
            }
        }
    }
    Ok(icons)
}

/// The AGL-convention name for an unnamed glyph: `uniXXXX` inside the BMP,
/// `uXXXXX`/`uXXXXXX` above it.
fn fallback_name(codepoint: u32) -> String {
    if codepoint <= 0xFFFF {
        format!("uni{codepoint:04X}")
    } else {
        format!("u{codepoint:X}")
    }
}
