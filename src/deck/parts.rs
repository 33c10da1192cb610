//! Module implementing the XML parts of a presentation package.
//!
//! Each part is a `Display` wrapper around the piece of model it describes,
//! so that serializing it is just formatting it into a string.

use std::fmt;

use super::model::{AutoShape, Geometry, Outline, Presentation, Shape, Slide, TextBox};
use super::xml::{Escaped, PmlNamespaces, DECLARATION, NS_A, NS_CONTENT_TYPES};


pub const APPLICATION: &str = "brandkit";

/// Relationship types.
pub mod rel {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    pub const PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
    pub const VIEW_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";
    pub const TABLE_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";
}

const CT_PML: &str = "application/vnd.openxmlformats-officedocument.presentationml";


/// `[Content_Types].xml`
pub struct ContentTypes<'p>(pub &'p Presentation);

impl<'p> fmt::Display for ContentTypes<'p> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "{}", DECLARATION)?;
        write!(fmt, r#"<Types xmlns="{}">"#, NS_CONTENT_TYPES)?;
        write!(fmt, concat!(
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#))?;

        let overrides = [
            ("/ppt/presentation.xml", "presentation.main+xml"),
            ("/ppt/slideMasters/slideMaster1.xml", "slideMaster+xml"),
            ("/ppt/slideLayouts/slideLayout1.xml", "slideLayout+xml"),
            ("/ppt/presProps.xml", "presProps+xml"),
            ("/ppt/viewProps.xml", "viewProps+xml"),
            ("/ppt/tableStyles.xml", "tableStyles+xml"),
        ];
        for &(part, kind) in overrides.iter() {
            write!(fmt, r#"<Override PartName="{}" ContentType="{}.{}"/>"#, part, CT_PML, kind)?;
        }
        for index in 1..=self.0.slide_count() {
            write!(fmt, r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="{}.slide+xml"/>"#,
                index, CT_PML)?;
        }
        write!(fmt, concat!(
            r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#,
            r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
            r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#,
            "</Types>"))
    }
}


/// `docProps/core.xml`, without any timestamps.
pub struct CoreProperties<'p>(pub &'p Presentation);

impl<'p> fmt::Display for CoreProperties<'p> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "{}", DECLARATION)?;
        write!(fmt, concat!(
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties""#,
            r#" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/""#,
            r#" xmlns:dcmitype="http://purl.org/dc/dcmitype/""#,
            r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#))?;
        if let Some(title) = self.0.title() {
            write!(fmt, "<dc:title>{}</dc:title>", Escaped(title))?;
        }
        write!(fmt, "<dc:creator>{}</dc:creator>", APPLICATION)?;
        write!(fmt, "<cp:revision>1</cp:revision></cp:coreProperties>")
    }
}

/// `docProps/app.xml`
pub struct AppProperties<'p>(pub &'p Presentation);

impl<'p> fmt::Display for AppProperties<'p> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "{}", DECLARATION)?;
        write!(fmt, concat!(
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties""#,
            r#" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#))?;
        write!(fmt, "<Application>{}</Application>", APPLICATION)?;
        write!(fmt, "<PresentationFormat>Custom</PresentationFormat>")?;
        write!(fmt, "<Slides>{}</Slides>", self.0.slide_count())?;
        write!(fmt, "</Properties>")
    }
}


/// `ppt/presentation.xml`
///
/// Relationship `rId1` points to the slide master
/// and `rId2` onwards to the slides, in order.
pub struct PresentationPart<'p>(pub &'p Presentation);

/// Lowest slide ID that PowerPoint accepts.
const FIRST_SLIDE_ID: usize = 256;

impl<'p> fmt::Display for PresentationPart<'p> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let prs = self.0;
        writeln!(fmt, "{}", DECLARATION)?;
        write!(fmt, r#"<p:presentation {} saveSubsetFonts="1">"#, PmlNamespaces)?;
        write!(fmt, r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#)?;
        if prs.slide_count() > 0 {
            write!(fmt, "<p:sldIdLst>")?;
            for index in 0..prs.slide_count() {
                write!(fmt, r#"<p:sldId id="{}" r:id="rId{}"/>"#, FIRST_SLIDE_ID + index, index + 2)?;
            }
            write!(fmt, "</p:sldIdLst>")?;
        }
        write!(fmt, r#"<p:sldSz cx="{}" cy="{}"/>"#, prs.width(), prs.height())?;
        write!(fmt, r#"<p:notesSz cx="6858000" cy="9144000"/>"#)?;
        write!(fmt, "</p:presentation>")
    }
}


/// Shape tree header common to masters, layouts and slides.
struct GroupShapeHeader;

impl fmt::Display for GroupShapeHeader {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, concat!(
            r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
            r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
            r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#))
    }
}

/// `ppt/slideMasters/slideMaster1.xml`
pub struct SlideMaster;

impl fmt::Display for SlideMaster {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "{}", DECLARATION)?;
        write!(fmt, "<p:sldMaster {}>", PmlNamespaces)?;
        write!(fmt, r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#)?;
        write!(fmt, "<p:spTree>{}</p:spTree></p:cSld>", GroupShapeHeader)?;
        write!(fmt, concat!(
            r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2""#,
            r#" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6""#,
            r#" hlink="hlink" folHlink="folHlink"/>"#,
            r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#))?;
        write!(fmt, "</p:sldMaster>")
    }
}

/// `ppt/slideLayouts/slideLayout1.xml`, the blank layout every slide uses.
pub struct BlankLayout;

impl fmt::Display for BlankLayout {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "{}", DECLARATION)?;
        write!(fmt, r#"<p:sldLayout {} type="blank" preserve="1">"#, PmlNamespaces)?;
        write!(fmt, r#"<p:cSld name="Blank"><p:spTree>{}</p:spTree></p:cSld>"#, GroupShapeHeader)?;
        write!(fmt, "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>")
    }
}

/// `ppt/presProps.xml`
pub struct PresentationProperties;

impl fmt::Display for PresentationProperties {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "{}", DECLARATION)?;
        write!(fmt, "<p:presentationPr {}/>", PmlNamespaces)
    }
}

/// `ppt/viewProps.xml`
pub struct ViewProperties;

impl fmt::Display for ViewProperties {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "{}", DECLARATION)?;
        write!(fmt, "<p:viewPr {}>", PmlNamespaces)?;
        write!(fmt, r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#)?;
        write!(fmt, r#"<p:gridSpacing cx="76200" cy="76200"/></p:viewPr>"#)
    }
}

/// `ppt/tableStyles.xml`
pub struct TableStyles;

impl fmt::Display for TableStyles {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "{}", DECLARATION)?;
        write!(fmt, r#"<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#, NS_A)
    }
}


/// `ppt/slides/slideN.xml`
pub struct SlidePart<'s>(pub &'s Slide);

impl<'s> fmt::Display for SlidePart<'s> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "{}", DECLARATION)?;
        write!(fmt, "<p:sld {}>", PmlNamespaces)?;
        match self.0.name() {
            Some(name) => write!(fmt, r#"<p:cSld name="{}">"#, Escaped(name))?,
            None => write!(fmt, "<p:cSld>")?,
        }
        write!(fmt, "<p:spTree>{}", GroupShapeHeader)?;
        for (index, shape) in self.0.shapes().iter().enumerate() {
            // ID 1 belongs to the shape tree itself.
            let id = index + 2;
            match *shape {
                Shape::Auto(ref s) => write_auto_shape(fmt, id, s)?,
                Shape::Text(ref t) => write_text_box(fmt, id, t)?,
            }
        }
        write!(fmt, "</p:spTree></p:cSld>")?;
        write!(fmt, "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>")
    }
}

fn write_xfrm(fmt: &mut fmt::Formatter, g: Geometry) -> fmt::Result {
    write!(fmt, r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        g.left, g.top, g.width, g.height)
}

fn write_auto_shape(fmt: &mut fmt::Formatter, id: usize, shape: &AutoShape) -> fmt::Result {
    write!(fmt, r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{} {}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>"#,
        id, shape.kind.display_name(), id - 1)?;
    write!(fmt, "<p:spPr>")?;
    write_xfrm(fmt, shape.geometry)?;
    write!(fmt, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, shape.kind.preset())?;
    write!(fmt, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, shape.fill.to_ooxml())?;
    if shape.outline == Outline::None {
        write!(fmt, "<a:ln><a:noFill/></a:ln>")?;
    }
    write!(fmt, "</p:spPr>")?;
    write!(fmt, concat!(
        r#"<p:style><a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#,
        r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#,
        r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#,
        r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef></p:style>"#))?;
    write!(fmt, concat!(
        r#"<p:txBody><a:bodyPr rtlCol="0" anchor="ctr"/><a:lstStyle/>"#,
        r#"<a:p><a:pPr algn="ctr"/><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#))
}

fn write_text_box(fmt: &mut fmt::Formatter, id: usize, text_box: &TextBox) -> fmt::Result {
    write!(fmt, r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="TextBox {}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#,
        id, id - 1)?;
    write!(fmt, "<p:spPr>")?;
    write_xfrm(fmt, text_box.geometry())?;
    write!(fmt, r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>"#)?;

    let wrap = if text_box.word_wrap() { "square" } else { "none" };
    write!(fmt, r#"<p:txBody><a:bodyPr wrap="{}" rtlCol="0"><a:spAutoFit/></a:bodyPr><a:lstStyle/>"#, wrap)?;
    write!(fmt, r#"<a:p><a:pPr algn="{}"/>"#, text_box.alignment().ooxml_value())?;
    let run_props = RunProperties(text_box);
    for (index, line) in text_box.lines().enumerate() {
        if index > 0 {
            write!(fmt, "<a:br>{}</a:br>", run_props)?;
        }
        if !line.is_empty() {
            write!(fmt, "<a:r>{}<a:t>{}</a:t></a:r>", run_props, Escaped(line))?;
        }
    }
    write!(fmt, r#"<a:endParaRPr lang="en-US" sz="{}" dirty="0"/>"#, text_box.font_size())?;
    write!(fmt, "</a:p></p:txBody></p:sp>")
}

/// Character formatting of a text box's runs.
struct RunProperties<'t>(&'t TextBox);

impl<'t> fmt::Display for RunProperties<'t> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let text_box = self.0;
        write!(fmt, r#"<a:rPr lang="en-US" sz="{}" b="{}" dirty="0">"#,
            text_box.font_size(), if text_box.is_bold() { 1 } else { 0 })?;
        write!(fmt, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:rPr>"#,
            text_box.text_color().to_ooxml())
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use crate::model::{HAlign, AMBER};
    use super::super::model::Presentation;
    use super::{ContentTypes, PresentationPart, SlidePart};

    fn sample() -> Presentation {
        let mut prs = Presentation::widescreen().with_title("Sample");
        let slide = prs.add_dark_slide("Intro & Overview");
        slide.add_text_box(1.0, 1.0, 5.0, 1.0, "Q&A <live>\n\"quoted\"")
            .size(24.0).bold().color(AMBER).align(HAlign::Center);
        prs.add_light_slide().add_rounded_card(0.8, 3.0, 3.7, 1.5);
        prs
    }

    #[test]
    fn presentation_lists_slides() {
        let xml = PresentationPart(&sample()).to_string();
        assert_that!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/><p:sldId id="257" r:id="rId3"/>"#))
            .is_true();
        assert_that!(xml.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#)).is_true();
    }

    #[test]
    fn content_types_cover_slides() {
        let xml = ContentTypes(&sample()).to_string();
        assert_that!(xml.contains(r#"PartName="/ppt/slides/slide2.xml""#)).is_true();
        assert_that!(xml.contains(r#"PartName="/ppt/slides/slide3.xml""#)).is_false();
    }

    #[test]
    fn text_is_escaped_and_broken_into_lines() {
        let prs = sample();
        let xml = SlidePart(&prs.slides()[0]).to_string();
        assert_that!(xml.contains(r#"<p:cSld name="Intro &amp; Overview">"#)).is_true();
        assert_that!(xml.contains("<a:t>Q&amp;A &lt;live&gt;</a:t>")).is_true();
        assert_that!(xml.contains("<a:t>&quot;quoted&quot;</a:t>")).is_true();
        assert_that!(xml.matches("<a:br>").count()).is_equal_to(1);
        assert_that!(xml.contains("\n<p:sld")).is_true();
        assert_that!(xml.matches('\n').count()).is_equal_to(1);
    }

    #[test]
    fn text_formatting() {
        let prs = sample();
        let xml = SlidePart(&prs.slides()[0]).to_string();
        assert_that!(xml.contains(r#"<a:pPr algn="ctr"/>"#)).is_true();
        assert_that!(xml.contains(r#"<a:rPr lang="en-US" sz="2400" b="1" dirty="0">"#)).is_true();
        assert_that!(xml.contains(r#"<a:srgbClr val="F59E0B"/>"#)).is_true();
        assert_that!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#)).is_true();
    }

    #[test]
    fn backdrop_and_card() {
        let prs = sample();
        let dark = SlidePart(&prs.slides()[0]).to_string();
        assert_that!(dark.contains(r#"<p:cNvPr id="2" name="Rectangle 1"/>"#)).is_true();
        assert_that!(dark.contains(r#"<a:off x="0" y="0"/><a:ext cx="12191695" cy="6858000"/>"#)).is_true();
        assert_that!(dark.contains(r#"<a:srgbClr val="0F172A"/></a:solidFill><a:ln><a:noFill/></a:ln>"#))
            .is_true();

        let light = SlidePart(&prs.slides()[1]).to_string();
        assert_that!(light.contains(r#"<a:prstGeom prst="roundRect">"#)).is_true();
        assert_that!(light.matches("<a:ln>").count()).is_equal_to(1);
    }
}
