use std::rc::Rc;

use crate::{Color, Size, view::Callback};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Main-axis placement of children in a Row or Column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Arrangement {
    #[default]
    Start,
    Center,
    SpaceBetween,
    SpaceEvenly,
}

/// Cross-axis placement of children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Start,
    Center,
}

#[derive(Clone, Default)]
pub struct Modifier {
    pub size: Option<Size>,
    pub height: Option<f32>,
    pub fill_max: bool,
    pub fill_max_w: bool,
    pub padding: Option<f32>,
    pub padding_values: Option<PaddingValues>,
    pub background: Option<Color>,
    pub border: Option<(f32, Color, f32)>,
    pub arrangement: Option<Arrangement>,
    pub alignment: Option<Alignment>,
    pub on_click: Option<Callback>,
    /// Stable name used to find views in tests and the outline dump.
    pub test_tag: Option<&'static str>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("size", &self.size)
            .field("height", &self.height)
            .field("fill_max", &self.fill_max)
            .field("fill_max_w", &self.fill_max_w)
            .field("padding", &self.padding)
            .field("padding_values", &self.padding_values)
            .field("background", &self.background)
            .field("border", &self.border)
            .field("arrangement", &self.arrangement)
            .field("alignment", &self.alignment)
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .field("test_tag", &self.test_tag)
            .finish()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.size = Some(Size {
            width: w,
            height: h,
        });
        self
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn fill_max_size(mut self) -> Self {
        self.fill_max = true;
        self
    }
    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_w = true;
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }
    pub fn padding_values(mut self, padding: PaddingValues) -> Self {
        self.padding_values = Some(padding);
        self
    }
    pub fn padding_vertical(self, v: f32) -> Self {
        self.padding_values(PaddingValues {
            top: v,
            bottom: v,
            ..PaddingValues::default()
        })
    }
    pub fn padding_bottom(self, v: f32) -> Self {
        self.padding_values(PaddingValues {
            bottom: v,
            ..PaddingValues::default()
        })
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn border(mut self, width: f32, color: Color, radius: f32) -> Self {
        self.border = Some((width, color, radius));
        self
    }
    pub fn arrangement(mut self, a: Arrangement) -> Self {
        self.arrangement = Some(a);
        self
    }
    pub fn alignment(mut self, a: Alignment) -> Self {
        self.alignment = Some(a);
        self
    }
    pub fn clickable(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }
    pub fn test_tag(mut self, tag: &'static str) -> Self {
        self.test_tag = Some(tag);
        self
    }
}
