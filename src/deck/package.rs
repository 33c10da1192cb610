//! Module writing presentations as Office Open XML packages (.pptx).

use std::io::{Cursor, Seek, Write};

use zip::write::{SimpleFileOptions, ZipWriter};
use zip::{CompressionMethod, DateTime};

use super::error::DeckError;
use super::model::Presentation;
use super::parts::{rel, AppProperties, BlankLayout, ContentTypes, CoreProperties,
                   PresentationPart, PresentationProperties, SlideMaster, SlidePart,
                   TableStyles, ViewProperties};
use super::theme::Theme;
use super::xml::{Relationship, Relationships};


/// Write the presentation as a zip package into given writer,
/// returning the writer once the archive is finished.
///
/// Every entry carries the same fixed timestamp (1980-01-01),
/// so the same presentation always yields identical bytes.
pub fn write_package<W: Write + Seek>(prs: &Presentation, writer: W) -> Result<W, DeckError> {
    let parts = package_parts(prs);
    debug!("Writing presentation package with {} part(s)", parts.len());

    let mut zip = ZipWriter::new(writer);
    for (name, content) in parts {
        trace!("Adding {} ({} bytes)", name, content.len());
        zip.start_file(name, entry_options())?;
        zip.write_all(content.as_bytes())?;
    }
    Ok(zip.finish()?)
}

/// Write the presentation as a zip package into memory.
pub fn to_bytes(prs: &Presentation) -> Result<Vec<u8>, DeckError> {
    let cursor = write_package(prs, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}


/// Names and content of all the package's parts, in archive order.
fn package_parts(prs: &Presentation) -> Vec<(String, String)> {
    let slide_count = prs.slide_count();
    let mut parts = vec![
        ("[Content_Types].xml".to_owned(), ContentTypes(prs).to_string()),
        ("_rels/.rels".to_owned(), Relationships(&[
            Relationship{id: 1, kind: rel::OFFICE_DOCUMENT, target: "ppt/presentation.xml"},
            Relationship{id: 2, kind: rel::CORE_PROPERTIES, target: "docProps/core.xml"},
            Relationship{id: 3, kind: rel::EXTENDED_PROPERTIES, target: "docProps/app.xml"},
        ]).to_string()),
        ("docProps/app.xml".to_owned(), AppProperties(prs).to_string()),
        ("docProps/core.xml".to_owned(), CoreProperties(prs).to_string()),
        ("ppt/presentation.xml".to_owned(), PresentationPart(prs).to_string()),
        ("ppt/_rels/presentation.xml.rels".to_owned(), presentation_rels(slide_count)),
        ("ppt/slideMasters/slideMaster1.xml".to_owned(), SlideMaster.to_string()),
        ("ppt/slideMasters/_rels/slideMaster1.xml.rels".to_owned(), Relationships(&[
            Relationship{id: 1, kind: rel::SLIDE_LAYOUT, target: "../slideLayouts/slideLayout1.xml"},
            Relationship{id: 2, kind: rel::THEME, target: "../theme/theme1.xml"},
        ]).to_string()),
        ("ppt/slideLayouts/slideLayout1.xml".to_owned(), BlankLayout.to_string()),
        ("ppt/slideLayouts/_rels/slideLayout1.xml.rels".to_owned(), Relationships(&[
            Relationship{id: 1, kind: rel::SLIDE_MASTER, target: "../slideMasters/slideMaster1.xml"},
        ]).to_string()),
        ("ppt/theme/theme1.xml".to_owned(), Theme.to_string()),
        ("ppt/presProps.xml".to_owned(), PresentationProperties.to_string()),
        ("ppt/viewProps.xml".to_owned(), ViewProperties.to_string()),
        ("ppt/tableStyles.xml".to_owned(), TableStyles.to_string()),
    ];

    let slide_rels = Relationships(&[
        Relationship{id: 1, kind: rel::SLIDE_LAYOUT, target: "../slideLayouts/slideLayout1.xml"},
    ]).to_string();
    for (index, slide) in prs.slides().iter().enumerate() {
        let number = index + 1;
        parts.push((format!("ppt/slides/slide{}.xml", number), SlidePart(slide).to_string()));
        parts.push((format!("ppt/slides/_rels/slide{}.xml.rels", number), slide_rels.clone()));
    }
    parts
}

/// Relationships of the presentation part: master first, then slides
/// (matching the IDs `PresentationPart` refers to), then the rest.
fn presentation_rels(slide_count: usize) -> String {
    let targets: Vec<_> = (1..=slide_count)
        .map(|number| format!("slides/slide{}.xml", number))
        .collect();

    let mut rels = vec![
        Relationship{id: 1, kind: rel::SLIDE_MASTER, target: "slideMasters/slideMaster1.xml"},
    ];
    rels.extend(targets.iter().enumerate().map(|(index, target)| {
        Relationship{id: index + 2, kind: rel::SLIDE, target}
    }));
    let next = rels.len() + 1;
    rels.extend_from_slice(&[
        Relationship{id: next, kind: rel::PRES_PROPS, target: "presProps.xml"},
        Relationship{id: next + 1, kind: rel::VIEW_PROPS, target: "viewProps.xml"},
        Relationship{id: next + 2, kind: rel::THEME, target: "theme/theme1.xml"},
        Relationship{id: next + 3, kind: rel::TABLE_STYLES, target: "tableStyles.xml"},
    ]);
    Relationships(&rels).to_string()
}


#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use spectral::prelude::*;
    use zip::ZipArchive;

    use super::super::model::Presentation;
    use super::{presentation_rels, to_bytes};

    fn two_slides() -> Presentation {
        let mut prs = Presentation::widescreen();
        prs.add_dark_slide("One").add_text_box(1.0, 1.0, 4.0, 1.0, "Hello");
        prs.add_light_slide();
        prs
    }

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive.by_name(name).unwrap().read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn contains_all_parts() {
        let bytes = to_bytes(&two_slides()).unwrap();
        let archive = ZipArchive::new(Cursor::new(&bytes[..])).unwrap();
        let names: Vec<_> = archive.file_names().collect();
        for name in &[
            "[Content_Types].xml", "_rels/.rels", "docProps/app.xml", "docProps/core.xml",
            "ppt/presentation.xml", "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml", "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            "ppt/slideLayouts/slideLayout1.xml", "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            "ppt/theme/theme1.xml", "ppt/presProps.xml", "ppt/viewProps.xml",
            "ppt/tableStyles.xml", "ppt/slides/slide1.xml", "ppt/slides/_rels/slide1.xml.rels",
            "ppt/slides/slide2.xml", "ppt/slides/_rels/slide2.xml.rels",
        ] {
            assert_that!(names.contains(name)).named(name).is_true();
        }
        assert_that!(archive.len()).is_equal_to(18);
    }

    #[test]
    fn content_types_come_first() {
        let bytes = to_bytes(&two_slides()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(&bytes[..])).unwrap();
        assert_that!(archive.by_index(0).unwrap().name().to_owned())
            .is_equal_to("[Content_Types].xml".to_owned());
    }

    #[test]
    fn entries_are_readable() {
        let bytes = to_bytes(&two_slides()).unwrap();
        assert_that!(read_entry(&bytes, "ppt/slides/slide1.xml").contains("<a:t>Hello</a:t>"))
            .is_true();
        assert_that!(read_entry(&bytes, "docProps/app.xml").contains("<Slides>2</Slides>"))
            .is_true();
    }

    #[test]
    fn deterministic() {
        let prs = two_slides();
        let first = to_bytes(&prs).unwrap();
        let second = to_bytes(&prs).unwrap();
        assert_that!(first == second).is_true();
    }

    #[test]
    fn relationship_ids_follow_slides() {
        let xml = presentation_rels(2);
        assert_that!(xml.contains(r#"Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster""#))
            .is_true();
        assert_that!(xml.contains(r#"Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide2.xml""#))
            .is_true();
        assert_that!(xml.contains(r#"Id="rId6" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme""#))
            .is_true();
    }
}
