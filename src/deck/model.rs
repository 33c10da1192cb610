//! Module defining the presentation model: slides and the shapes on them.

use std::fmt;

use crate::model::{Color, HAlign, DARK_BG, LIGHT_BG, WHITE};
use super::units::{inches, Emu, FontSize};


/// Position and size of a shape on its slide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Geometry {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Geometry {
    #[inline]
    pub fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Geometry{left, top, width, height}
    }

    /// Geometry given in inches, as slide content is laid out.
    #[inline]
    pub fn from_inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Geometry::new(inches(left), inches(top), inches(width), inches(height))
    }
}


/// Outline of an autoshape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outline {
    /// No outline at all.
    None,
    /// Outline inherited from the theme's line style.
    Theme,
}

/// Preset geometry of an autoshape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle,
}

impl ShapeKind {
    /// DrawingML preset geometry name.
    pub fn preset(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rect",
            ShapeKind::RoundedRectangle => "roundRect",
        }
    }

    /// Base of the names shapes of this kind get in the slide.
    pub fn display_name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::RoundedRectangle => "Rounded Rectangle",
        }
    }
}


/// Filled preset shape.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoShape {
    pub kind: ShapeKind,
    pub geometry: Geometry,
    pub fill: Color,
    pub outline: Outline,
}


/// Text box holding a single paragraph.
///
/// Setters can be chained on the `&mut TextBox` that `Slide::add_text_box`
/// returns; anything not set keeps the defaults of an 18pt, regular,
/// white, left-aligned box.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBox {
    geometry: Geometry,
    text: String,
    size: FontSize,
    bold: bool,
    color: Color,
    align: HAlign,
    word_wrap: bool,
}

impl TextBox {
    pub const DEFAULT_SIZE: f64 = 18.0;

    pub fn new<T: Into<String>>(geometry: Geometry, text: T) -> Self {
        TextBox{
            geometry,
            text: text.into(),
            size: FontSize::from_points(Self::DEFAULT_SIZE),
            bold: false,
            color: WHITE,
            align: HAlign::default(),
            word_wrap: true,
        }
    }

    /// Set the font size in points.
    pub fn size(&mut self, points: f64) -> &mut Self {
        self.size = FontSize::from_points(points);
        self
    }

    pub fn bold(&mut self) -> &mut Self {
        self.bold = true;
        self
    }

    pub fn color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }

    pub fn align(&mut self, align: HAlign) -> &mut Self {
        self.align = align;
        self
    }
}

// Read access.
impl TextBox {
    #[inline]
    pub fn geometry(&self) -> Geometry { self.geometry }
    #[inline]
    pub fn text(&self) -> &str { &self.text }
    #[inline]
    pub fn font_size(&self) -> FontSize { self.size }
    #[inline]
    pub fn is_bold(&self) -> bool { self.bold }
    #[inline]
    pub fn text_color(&self) -> Color { self.color }
    #[inline]
    pub fn alignment(&self) -> HAlign { self.align }
    #[inline]
    pub fn word_wrap(&self) -> bool { self.word_wrap }

    /// Lines of the text, split at line feeds.
    pub fn lines(&self) -> impl Iterator<Item=&str> {
        self.text.split('\n')
    }
}


/// Anything that can be placed on a slide.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Auto(AutoShape),
    Text(TextBox),
}

impl Shape {
    pub fn geometry(&self) -> Geometry {
        match *self {
            Shape::Auto(ref s) => s.geometry,
            Shape::Text(ref t) => t.geometry,
        }
    }
}


/// Single slide, built on the blank layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slide {
    name: Option<String>,
    shapes: Vec<Shape>,
}

impl Slide {
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Iterate over the text of all text boxes, in z-order.
    pub fn texts(&self) -> impl Iterator<Item=&str> {
        self.shapes.iter().filter_map(|s| match *s {
            Shape::Text(ref t) => Some(t.text()),
            _ => None,
        })
    }

    pub fn add_shape(&mut self, kind: ShapeKind, geometry: Geometry,
                     fill: Color, outline: Outline) -> &mut AutoShape {
        self.shapes.push(Shape::Auto(AutoShape{kind, geometry, fill, outline}));
        match self.shapes.last_mut() {
            Some(Shape::Auto(shape)) => shape,
            _ => unreachable!(),
        }
    }

    /// Add a text box, positioned in inches, with default styling.
    pub fn add_text_box<T: Into<String>>(&mut self, left: f64, top: f64,
                                         width: f64, height: f64, text: T) -> &mut TextBox {
        let geometry = Geometry::from_inches(left, top, width, height);
        self.shapes.push(Shape::Text(TextBox::new(geometry, text)));
        match self.shapes.last_mut() {
            Some(Shape::Text(text_box)) => text_box,
            _ => unreachable!(),
        }
    }

    /// Add a white rounded card, positioned in inches, with the theme's outline.
    pub fn add_rounded_card(&mut self, left: f64, top: f64,
                            width: f64, height: f64) -> &mut AutoShape {
        let geometry = Geometry::from_inches(left, top, width, height);
        self.add_shape(ShapeKind::RoundedRectangle, geometry, WHITE, Outline::Theme)
    }
}


/// Presentation: slide dimensions and the slides themselves.
#[derive(Clone, PartialEq)]
pub struct Presentation {
    width: Emu,
    height: Emu,
    title: Option<String>,
    slides: Vec<Slide>,
}

impl Presentation {
    #[inline]
    pub fn new(width: Emu, height: Emu) -> Self {
        Presentation{width, height, title: None, slides: vec![]}
    }

    /// 16:9 presentation of 13.333 x 7.5 inches.
    #[inline]
    pub fn widescreen() -> Self {
        Presentation::new(inches(13.333), inches(7.5))
    }

    pub fn with_title<T: Into<String>>(mut self, title: T) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add an empty slide with no background of its own.
    pub fn add_slide(&mut self) -> &mut Slide {
        self.slides.push(Slide::default());
        let index = self.slides.len() - 1;
        &mut self.slides[index]
    }

    /// Add a slide covered by the dark background.
    pub fn add_dark_slide<N: Into<String>>(&mut self, name: N) -> &mut Slide {
        let name = name.into();
        let slide = self.add_backdrop_slide(DARK_BG);
        slide.name = Some(name);
        slide
    }

    /// Add a slide covered by the light background.
    pub fn add_light_slide(&mut self) -> &mut Slide {
        self.add_backdrop_slide(LIGHT_BG)
    }

    fn add_backdrop_slide(&mut self, color: Color) -> &mut Slide {
        let backdrop = Geometry::new(Emu(0), Emu(0), self.width, self.height);
        let slide = self.add_slide();
        slide.add_shape(ShapeKind::Rectangle, backdrop, color, Outline::None);
        slide
    }
}

// Read access.
impl Presentation {
    #[inline]
    pub fn width(&self) -> Emu { self.width }
    #[inline]
    pub fn height(&self) -> Emu { self.height }
    #[inline]
    pub fn title(&self) -> Option<&str> { self.title.as_deref() }
    #[inline]
    pub fn slides(&self) -> &[Slide] { &self.slides }
    #[inline]
    pub fn slide_count(&self) -> usize { self.slides.len() }
}

impl fmt::Debug for Presentation {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Presentation")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("title", &self.title)
            .field("slides", &self.slides.len())
            .finish()
    }
}
