//! Visual attributes an alert carries for its rendering collaborator.

use std::rc::Rc;
use std::time::Duration;

/// ARGB colour, packed the way most platform toolkits hand colours around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Typeface {
    pub family: String,
    pub bold: bool,
    pub italic: bool,
}

impl Typeface {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            bold: false,
            italic: false,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextAppearance {
    pub size_sp: f32,
    pub color: Option<Color>,
    pub typeface: Option<Typeface>,
}

/// Opaque handle to something the renderer knows how to draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Drawable(pub Rc<str>);

impl Drawable {
    pub fn new(name: &str) -> Self {
        Self(Rc::from(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Rc<[u8]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    Drawable(Drawable),
    Bitmap(Bitmap),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    SrcIn,
    SrcAtop,
    Multiply,
    Screen,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorFilter {
    Tint { color: Color, mode: BlendMode },
    Matrix([f32; 20]),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Color(Color),
    Drawable(Drawable),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentGravity {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    SlideInFromTop,
    SlideOutToTop,
    FadeIn,
    FadeOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub text_color: Color,
    pub background: Option<Color>,
    pub text_size_sp: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            text_color: Color::WHITE,
            background: None,
            text_size_sp: crate::Config::button_text_size(),
        }
    }
}
