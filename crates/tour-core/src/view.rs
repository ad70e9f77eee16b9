use std::rc::Rc;

use crate::{AnnotatedString, AssetId, Color, FontWeight, Modifier, TextAlign};

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;
pub type TextCallback = Rc<dyn Fn(String)>;

#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    Text {
        text: String,
        color: Color,
        font_size: f32,
        font_weight: FontWeight,
        align: TextAlign,
    },
    RichText {
        content: AnnotatedString,
        color: Color,
        font_size: f32,
    },
    Image {
        asset: AssetId,
        content_description: String,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
    },
    TextField {
        value: String,
        label: String,
        is_error: bool,
        single_line: bool,
        on_change: Option<TextCallback>,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Text {
                text,
                color,
                font_size,
                font_weight,
                align,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .field("font_weight", font_weight)
                .field("align", align)
                .finish(),
            ViewKind::RichText {
                content,
                color,
                font_size,
            } => f
                .debug_struct("RichText")
                .field("content", content)
                .field("color", color)
                .field("font_size", font_size)
                .finish(),
            ViewKind::Image {
                asset,
                content_description,
            } => f
                .debug_struct("Image")
                .field("asset", asset)
                .field("content_description", content_description)
                .finish(),
            ViewKind::Button { text, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::TextField {
                value,
                label,
                is_error,
                single_line,
                ..
            } => f
                .debug_struct("TextField")
                .field("value", value)
                .field("label", label)
                .field("is_error", is_error)
                .field("single_line", single_line)
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Pre-order traversal.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }

    pub fn find_all(&self, pred: impl Fn(&View) -> bool) -> Vec<&View> {
        let mut out = Vec::new();
        self.walk(&mut |v| {
            if pred(v) {
                out.push(v);
            }
        });
        out
    }

    pub fn find_tagged(&self, tag: &str) -> Vec<&View> {
        self.find_all(|v| v.modifier.test_tag == Some(tag))
    }

    /// Text a reader would see for this node alone (no children).
    pub fn label(&self) -> Option<String> {
        if let Some(l) = self.semantics.as_ref().and_then(|s| s.label.clone()) {
            return Some(l);
        }
        match &self.kind {
            ViewKind::Text { text, .. } | ViewKind::Button { text, .. } => Some(text.clone()),
            ViewKind::RichText { content, .. } => Some(content.text()),
            ViewKind::TextField { label, .. } => Some(label.clone()),
            ViewKind::Image {
                content_description,
                ..
            } => Some(content_description.clone()),
            _ => None,
        }
    }

    /// All visible texts of the subtree, in order.
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.walk(&mut |v| match &v.kind {
            ViewKind::Text { text, .. } | ViewKind::Button { text, .. } => out.push(text.clone()),
            ViewKind::RichText { content, .. } => out.push(content.text()),
            _ => {}
        });
        out
    }
}
