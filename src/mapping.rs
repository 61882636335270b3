//! The ordered glyph-name-to-codepoint mapping.

use indexmap::IndexMap;

use crate::error::Error;

/// The prefix prepended to every uppercased glyph name to form a macro
/// identifier.
pub const MACRO_PREFIX: &str = "IC_";

/// An ordered collection of icon glyphs, keyed by glyph name.
///
/// Entries keep the position of their first insertion; inserting a name
/// again replaces its codepoint but not its position. This mirrors how
/// icon fonts are authored (one name, possibly remapped across character
/// map sub-tables) and makes the generated header order deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IconMapping {
    entries: IndexMap<String, u32>,
}

impl IconMapping {
    pub fn new() -> Self {
        IconMapping::default()
    }

    /// Record `name` → `codepoint`, validating that the name can be spliced
    /// into a macro identifier.
    ///
    /// A repeated name keeps its first-seen position and takes the new
    /// codepoint. Returns [`Error::InvalidGlyphName`] if the name contains
    /// anything other than ASCII alphanumerics and underscores; the macro
    /// prefix supplies the leading non-digit, so a name starting with a
    /// digit is fine.
    pub fn insert(&mut self, name: impl Into<String>, codepoint: u32) -> Result<(), Error> {
        let name = name.into();
        if !is_valid_identifier(&name) {
            return Err(Error::InvalidGlyphName(name));
        }
        self.entries.insert(name, codepoint);
        Ok(())
    }

    /// Look up the codepoint for a glyph name.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.get(name).copied()
    }

    /// Iterate entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, cp)| (name.as_str(), *cp))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The macro identifier generated for a glyph name: the fixed prefix
    /// followed by the uppercased name, nothing else.
    pub fn macro_name(name: &str) -> String {
        format!("{}{}", MACRO_PREFIX, name.to_uppercase())
    }
}

fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
