//! Stamps ids onto a composed tree and collects hit regions and semantics.
//!
//! Ids are assigned in pre-order starting at 1, so the same tree shape gets
//! the same ids on every frame.

use tour_core::*;

pub fn flatten(root: View) -> (View, Vec<HitRegion>, Vec<SemNode>) {
    let mut next = 1u64;
    let root = stamp(root, &mut next);

    let mut hits = Vec::new();
    let mut sems = Vec::new();
    collect(&root, 0, &mut hits, &mut sems);
    log::trace!(
        "flatten: {} views, {} hit regions",
        next - 1,
        hits.len()
    );
    (root, hits, sems)
}

fn stamp(mut v: View, id: &mut u64) -> View {
    v.id = *id;
    *id += 1;
    v.children = v.children.into_iter().map(|c| stamp(c, id)).collect();
    v
}

fn collect(v: &View, depth: usize, hits: &mut Vec<HitRegion>, sems: &mut Vec<SemNode>) {
    let on_click = match &v.kind {
        ViewKind::Button { on_click, .. } => on_click.clone(),
        _ => v.modifier.on_click.clone(),
    };
    let (on_text_change, text) = match &v.kind {
        ViewKind::TextField {
            on_change, value, ..
        } => (on_change.clone(), Some(value.clone())),
        _ => (None, None),
    };
    if on_click.is_some() || on_text_change.is_some() {
        hits.push(HitRegion {
            id: v.id,
            on_click,
            on_text_change,
            text,
        });
    }

    let sem = v.semantics.clone().or_else(|| match &v.kind {
        ViewKind::Text { .. } | ViewKind::RichText { .. } => Some(Semantics::new(Role::Text)),
        _ => None,
    });
    if let Some(s) = sem {
        sems.push(SemNode {
            id: v.id,
            role: s.role,
            label: s.label.or_else(|| v.label()),
            enabled: s.enabled,
            depth,
        });
    }

    for c in &v.children {
        collect(c, depth + 1, hits, sems);
    }
}
