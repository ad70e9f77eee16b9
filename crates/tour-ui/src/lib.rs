#![allow(non_snake_case)]
//! Widgets, child builders and the flatten pass.

pub mod flatten;
pub mod material;

pub use flatten::flatten;
pub use material::*;

use std::rc::Rc;

use tour_core::*;

/// Font sizes in sp.
pub mod typography {
    pub const TITLE_LARGE: f32 = 22.0;
    /// Headline under the welcome logo.
    pub const HEADLINE: f32 = 18.0;
    pub const BODY_LARGE: f32 = 16.0;
    pub const BODY_SMALL: f32 = 12.0;
}

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(0, ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: theme().on_surface,
            font_size: typography::BODY_LARGE, // sp
            font_weight: FontWeight::Normal,
            align: TextAlign::Start,
        },
    )
}

/// One paragraph made of styled runs.
pub fn RichText(content: AnnotatedString) -> View {
    View::new(
        0,
        ViewKind::RichText {
            content,
            color: theme().on_surface,
            font_size: typography::BODY_LARGE,
        },
    )
}

/// Fixed vertical gap.
pub fn VSpace(dp: f32) -> View {
    Box(Modifier::new().height(dp))
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Button {
            text: text.clone(),
            on_click: Some(Rc::new(on_click)),
        },
    )
    .semantics(Semantics::new(Role::Button).label(text))
}

pub fn Image(modifier: Modifier, asset: AssetId, content_description: impl Into<String>) -> View {
    let content_description = content_description.into();
    View::new(
        0,
        ViewKind::Image {
            asset,
            content_description: content_description.clone(),
        },
    )
    .modifier(modifier)
    .semantics(Semantics::new(Role::Image).label(content_description))
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, sp: f32) -> View;
    fn bold(self) -> View;
    fn align_center(self) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        match &mut self.kind {
            ViewKind::Text { color, .. } | ViewKind::RichText { color, .. } => *color = c,
            _ => {}
        }
        self
    }
    fn size(mut self, sp: f32) -> View {
        match &mut self.kind {
            ViewKind::Text { font_size, .. } | ViewKind::RichText { font_size, .. } => {
                *font_size = sp
            }
            _ => {}
        }
        self
    }
    fn bold(mut self) -> View {
        if let ViewKind::Text { font_weight, .. } = &mut self.kind {
            *font_weight = FontWeight::Bold;
        }
        self
    }
    fn align_center(mut self) -> View {
        if let ViewKind::Text { align, .. } = &mut self.kind {
            *align = TextAlign::Center;
        }
        self
    }
}
