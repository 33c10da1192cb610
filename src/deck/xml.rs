//! Module with helpers shared by the XML part writers.

use std::fmt;


pub const DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
pub const NS_PKG_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
pub const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// The three namespace declarations every PresentationML part carries.
pub struct PmlNamespaces;

impl fmt::Display for PmlNamespaces {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, r#"xmlns:a="{}" xmlns:r="{}" xmlns:p="{}""#, NS_A, NS_R, NS_P)
    }
}


/// Text escaped for use in XML character data or attribute values.
pub struct Escaped<'s>(pub &'s str);

impl<'s> fmt::Display for Escaped<'s> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
            fmt.write_str(&rest[..pos])?;
            fmt.write_str(match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&apos;",
            })?;
            rest = &rest[pos + 1..];
        }
        fmt.write_str(rest)
    }
}

/// Escape a string for XML.
pub fn escape(s: &str) -> String {
    Escaped(s).to_string()
}


/// Single entry of a relationships part.
#[derive(Clone, Copy, Debug)]
pub struct Relationship<'a> {
    pub id: usize,
    pub kind: &'a str,
    pub target: &'a str,
}

/// Relationships part (`*.rels`) listing given relationships.
pub struct Relationships<'a>(pub &'a [Relationship<'a>]);

impl<'a> fmt::Display for Relationships<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "{}", DECLARATION)?;
        write!(fmt, r#"<Relationships xmlns="{}">"#, NS_PKG_RELS)?;
        for rel in self.0 {
            write!(fmt, r#"<Relationship Id="rId{}" Type="{}" Target="{}"/>"#,
                rel.id, rel.kind, Escaped(rel.target))?;
        }
        write!(fmt, "</Relationships>")
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use super::{escape, Relationship, Relationships};

    #[test]
    fn plain_text_is_unchanged() {
        assert_that!(escape("Workflowy × Deloitte")).is_equal_to("Workflowy × Deloitte".to_owned());
        assert_that!(escape("")).is_equal_to(String::new());
    }

    #[test]
    fn special_characters() {
        assert_that!(escape("Q&A <b>")).is_equal_to("Q&amp;A &lt;b&gt;".to_owned());
        assert_that!(escape(r#""how we actually do things here.""#))
            .is_equal_to("&quot;how we actually do things here.&quot;".to_owned());
        assert_that!(escape("don't")).is_equal_to("don&apos;t".to_owned());
    }

    #[test]
    fn relationships() {
        let rels = [Relationship{id: 1, kind: "urn:x", target: "a&b.xml"}];
        let xml = Relationships(&rels).to_string();
        assert_that!(xml.starts_with("<?xml")).is_true();
        assert_that!(xml.contains(r#"<Relationship Id="rId1" Type="urn:x" Target="a&amp;b.xml"/>"#))
            .is_true();
    }
}
