//! Styled text as a flat sequence of `(text, style)` runs.
//!
//! ```rust
//! use tour_core::*;
//!
//! let s = AnnotatedString::builder()
//!     .append("The ")
//!     .styled("quick ", SpanStyle::new().decoration(TextDecoration::LINE_THROUGH))
//!     .append("fox")
//!     .build();
//!
//! assert_eq!(s.runs().len(), 3);
//! assert_eq!(s.text(), "The quick fox");
//! ```

use bitflags::bitflags;

use crate::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TextDecoration: u8 {
        const UNDERLINE = 1 << 0;
        const LINE_THROUGH = 1 << 1;
    }
}

impl Default for TextDecoration {
    fn default() -> Self {
        TextDecoration::empty()
    }
}

/// Style of one run. `None` fields inherit from the enclosing text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpanStyle {
    pub color: Option<Color>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub decoration: TextDecoration,
    /// Extra spacing between glyphs, in sp.
    pub letter_spacing: Option<f32>,
}

impl SpanStyle {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn color(mut self, c: Color) -> Self {
        self.color = Some(c);
        self
    }
    pub fn bold(mut self) -> Self {
        self.font_weight = Some(FontWeight::Bold);
        self
    }
    pub fn italic(mut self) -> Self {
        self.font_style = Some(FontStyle::Italic);
        self
    }
    pub fn decoration(mut self, d: TextDecoration) -> Self {
        self.decoration |= d;
        self
    }
    pub fn letter_spacing(mut self, sp: f32) -> Self {
        self.letter_spacing = Some(sp);
        self
    }
    pub fn is_plain(&self) -> bool {
        *self == SpanStyle::default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub style: SpanStyle,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotatedString {
    runs: Vec<TextRun>,
}

impl AnnotatedString {
    pub fn builder() -> AnnotatedStringBuilder {
        AnnotatedStringBuilder::default()
    }
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }
    /// Plain text of all runs, concatenated in order.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Each `append`/`styled` call produces exactly one run; run boundaries are
/// kept as written, including their whitespace.
#[derive(Default)]
pub struct AnnotatedStringBuilder {
    runs: Vec<TextRun>,
}

impl AnnotatedStringBuilder {
    pub fn append(self, text: impl Into<String>) -> Self {
        self.styled(text, SpanStyle::default())
    }
    pub fn styled(mut self, text: impl Into<String>, style: SpanStyle) -> Self {
        self.runs.push(TextRun {
            text: text.into(),
            style,
        });
        self
    }
    pub fn build(self) -> AnnotatedString {
        AnnotatedString { runs: self.runs }
    }
}
