use crate::view::{Callback, TextCallback};
use crate::{Role, UiError, View, ViewId};

/// Output of one composition: the stamped tree plus what input dispatch needs.
pub struct Frame {
    pub root: View,
    pub hit_regions: Vec<HitRegion>,
    pub semantics_nodes: Vec<SemNode>,
    /// Presentation errors found while resolving the frame (missing assets).
    pub errors: Vec<UiError>,
}

#[derive(Clone)]
pub struct HitRegion {
    pub id: ViewId,
    pub on_click: Option<Callback>,
    pub on_text_change: Option<TextCallback>,
    /// Current content, for text fields.
    pub text: Option<String>,
}

/// Flattened semantics node produced by the flatten pass.
#[derive(Clone, Debug)]
pub struct SemNode {
    /// Shared with the associated `HitRegion` / `ViewId`.
    pub id: ViewId,
    pub role: Role,
    pub label: Option<String>,
    pub enabled: bool,
    pub depth: usize,
}

/// Turns a root function into frames. The root receives the scheduler so it
/// can tell which frame it is building.
#[derive(Default)]
pub struct Scheduler {
    frames: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames composed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Compose `build_root` and flatten the result into a [`Frame`].
    pub fn repose<F>(
        &mut self,
        mut build_root: F,
        flatten: impl Fn(View) -> (View, Vec<HitRegion>, Vec<SemNode>),
    ) -> Frame
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        self.frames += 1;
        let root = build_root(self);
        let (root, hit_regions, semantics_nodes) = flatten(root);
        Frame {
            root,
            hit_regions,
            semantics_nodes,
            errors: Vec::new(),
        }
    }
}
