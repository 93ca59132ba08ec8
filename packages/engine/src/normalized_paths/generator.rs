//! Canonical string rendering

use std::fmt::{self, Write};

use super::types::{NormalizedPath, PathElement};

/// Render path elements as a normalized path string
///
/// ```
/// use nodepath_engine::normalized_paths::{PathElement, format_path};
///
/// let path = [PathElement::from("store"), PathElement::from("book"), PathElement::Index(0)];
/// assert_eq!(format_path(&path), "$['store']['book'][0]");
/// ```
#[must_use]
pub fn format_path(elements: &[PathElement]) -> String {
    NormalizedPath::new(elements.to_vec()).to_string()
}

fn write_element(out: &mut impl Write, element: &PathElement) -> fmt::Result {
    match element {
        PathElement::Index(index) => write!(out, "[{index}]"),
        PathElement::Name(name) => {
            out.write_str("['")?;
            for c in name.chars() {
                match c {
                    '\\' => out.write_str("\\\\")?,
                    '\'' => out.write_str("\\'")?,
                    '\u{0008}' => out.write_str("\\b")?,
                    '\t' => out.write_str("\\t")?,
                    '\n' => out.write_str("\\n")?,
                    '\u{000C}' => out.write_str("\\f")?,
                    '\r' => out.write_str("\\r")?,
                    c if u32::from(c) < 0x20 => write!(out, "\\u{:04x}", u32::from(c))?,
                    c => out.write_char(c)?,
                }
            }
            out.write_str("']")
        }
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('$')?;
        for element in &self.elements {
            write_element(f, element)?;
        }
        Ok(())
    }
}
