//! Text outline of a frame plus per-frame metrics.

use std::fmt::Write;

use web_time::Instant;

use tour_core::*;

#[derive(Clone, Debug, Default)]
pub struct Metrics {
    /// Number of the frame these numbers belong to, counted by the scheduler.
    pub frame: u64,
    pub build_ms: f32,
    pub views: usize,
    pub hit_regions: usize,
}

#[derive(Default)]
pub struct Inspector {
    started: Option<Instant>,
    pub metrics: Option<Metrics>,
}

impl Inspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn end(&mut self, frame_no: u64, frame: &Frame) {
        let build_ms = self
            .started
            .take()
            .map(|t| t.elapsed().as_secs_f32() * 1000.0)
            .unwrap_or(0.0);
        let mut views = 0;
        frame.root.walk(&mut |_| views += 1);
        let m = Metrics {
            frame: frame_no,
            build_ms,
            views,
            hit_regions: frame.hit_regions.len(),
        };
        log::debug!(
            "frame {}: build {:.2} ms | views {} | hits {}",
            m.frame,
            m.build_ms,
            m.views,
            m.hit_regions
        );
        self.metrics = Some(m);
    }
}

/// One line per view, two spaces of indent per level. Images whose asset
/// failed to resolve are shown with the host's error placeholder.
pub fn outline(frame: &Frame) -> String {
    let mut out = String::new();
    line(&frame.root, 0, frame, &mut out);
    for e in &frame.errors {
        let _ = writeln!(out, "! {e}");
    }
    out
}

fn line(v: &View, depth: usize, frame: &Frame, out: &mut String) {
    let pad = "  ".repeat(depth);
    let desc = match &v.kind {
        ViewKind::Surface => container("Surface", v),
        ViewKind::Box => container("Box", v),
        ViewKind::Row => container("Row", v),
        ViewKind::Column => container("Column", v),
        ViewKind::Text {
            text, font_weight, ..
        } => {
            let mut s = format!("Text {text:?}");
            if *font_weight == FontWeight::Bold {
                s.push_str(" bold");
            }
            s
        }
        ViewKind::RichText { content, .. } => {
            format!("RichText {:?} ({} runs)", content.text(), content.runs().len())
        }
        ViewKind::Image {
            asset,
            content_description,
        } => {
            let missing = frame
                .errors
                .iter()
                .any(|e| matches!(e, UiError::MissingAsset(n) if n == asset.name()));
            if missing {
                format!("Image {content_description:?} <failed to load {asset}>")
            } else {
                format!("Image {content_description:?} [{asset}]")
            }
        }
        ViewKind::Button { text, .. } => format!("Button {text:?}"),
        ViewKind::TextField {
            value,
            label,
            is_error,
            ..
        } => {
            let mut s = format!("TextField {label:?} = {value:?}");
            if *is_error {
                s.push_str(" [error]");
            }
            s
        }
    };
    let _ = writeln!(out, "{pad}{desc}");
    for c in &v.children {
        line(c, depth + 1, frame, out);
    }
}

fn container(name: &str, v: &View) -> String {
    let mut s = name.to_string();
    if let Some(l) = v.semantics.as_ref().and_then(|s| s.label.as_ref()) {
        let _ = write!(s, " {l:?}");
    }
    if let Some(tag) = v.modifier.test_tag {
        let _ = write!(s, " #{tag}");
    }
    if v.modifier.on_click.is_some() {
        s.push_str(" (clickable)");
    }
    s
}
