//! Serializing the mapping as a C header.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::mapping::IconMapping;

/// The include-guard token.
pub const GUARD: &str = "ICONS_H";

/// The conventional name of the generated header.
pub const HEADER_FILE_NAME: &str = "Icons.h";

/// Write the header text for `icons` to `w`.
///
/// The layout is fixed, byte for byte: a guarded block of one `#define` per
/// glyph in mapping order, followed by a `uint16_t icons[]` array with one
/// macro reference per glyph in the same order. The array sits after the
/// guard's `#endif`, as the consuming toolchain expects; codepoints above
/// 0xFFFF keep their full value in the macro and are left to the array's
/// element type to truncate.
pub fn write_header<W: Write>(icons: &IconMapping, w: &mut W) -> io::Result<()> {
    writeln!(w, "#ifndef {GUARD}")?;
    writeln!(w, "#define {GUARD}")?;
    writeln!(w)?;
    for (name, codepoint) in icons.iter() {
        writeln!(w, "#define {} 0x{:X}", IconMapping::macro_name(name), codepoint)?;
    }
    writeln!(w)?;
    writeln!(w, "#endif")?;
    writeln!(w)?;
    writeln!(w, "const uint16_t icons[] = {{")?;
    for (name, _) in icons.iter() {
        writeln!(w, "    {},", IconMapping::macro_name(name))?;
    }
    writeln!(w, "}};")?;
    Ok(())
}

/// Create (or truncate) `path` and write the header for `icons` into it.
pub fn write_header_file(icons: &IconMapping, path: &Path) -> Result<(), Error> {
    let to_write_error = |source| Error::Write { path: path.into(), source };
    let file = File::create(path).map_err(to_write_error)?;
    let mut w = BufWriter::new(file);
    write_header(icons, &mut w).map_err(to_write_error)?;
    w.flush().map_err(to_write_error)
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;

    fn render(icons: &IconMapping) -> String {
        let mut buf = Vec::new();
        write_header(icons, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_layout() {
        let mut icons = IconMapping::new();
        icons.insert("info", 0x2139).unwrap();
        icons.insert("arrow_left", 0x2190).unwrap();
        icons.insert("star_full", 0x2605).unwrap();

        expect![[r#"
            #ifndef ICONS_H
            #define ICONS_H

            #define IC_INFO 0x2139
            #define IC_ARROW_LEFT 0x2190
            #define IC_STAR_FULL 0x2605

            #endif

            const uint16_t icons[] = {
                IC_INFO,
                IC_ARROW_LEFT,
                IC_STAR_FULL,
            };
        "#]]
        .assert_eq(&render(&icons));
    }

    #[test]
    fn empty_mapping_still_produces_a_complete_header() {
        expect![[r#"
            #ifndef ICONS_H
            #define ICONS_H


            #endif

            const uint16_t icons[] = {
            };
        "#]]
        .assert_eq(&render(&IconMapping::new()));
    }

    #[test]
    fn hex_values_are_uppercase_without_leading_zeros() {
        let mut icons = IconMapping::new();
        icons.insert("A", 0x41).unwrap();
        icons.insert("B", 0x1F600).unwrap();

        let header = render(&icons);
        assert!(header.contains("#define IC_A 0x41\n"));
        assert!(header.contains("#define IC_B 0x1F600\n"));
    }

    #[test]
    fn macro_count_matches_array_length() {
        let mut icons = IconMapping::new();
        for (i, name) in ["play", "pause", "stop", "record"].iter().enumerate() {
            icons.insert(*name, 0xE000 + i as u32).unwrap();
        }

        let header = render(&icons);
        let defines = header.lines().filter(|l| l.starts_with("#define IC_")).count();
        let entries = header.lines().filter(|l| l.ends_with(',')).count();
        assert_eq!(defines, icons.len());
        assert_eq!(entries, icons.len());
    }
}
