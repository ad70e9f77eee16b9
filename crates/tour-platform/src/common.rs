use tour_core::*;

pub(crate) fn hit_index_by_id(frame: &Frame, id: ViewId) -> Option<usize> {
    frame.hit_regions.iter().position(|h| h.id == id)
}

/// Where a tap on `label` lands.
pub(crate) enum TapTarget {
    /// Id of the nearest clickable view at or above the labelled view.
    Clickable(ViewId),
    /// The label exists but nothing on its path reacts to taps.
    Inert,
}

/// Pre-order search for the first view labelled `label`. Taps bubble up to
/// the closest enabled clickable ancestor, like a pointer press would.
pub(crate) fn tap_target(root: &View, label: &str) -> Option<TapTarget> {
    fn go(v: &View, label: &str, inherited: Option<ViewId>) -> Option<TapTarget> {
        let enabled = v.semantics.as_ref().is_none_or(|s| s.enabled);
        let clickable = enabled
            && match &v.kind {
                ViewKind::Button { on_click, .. } => on_click.is_some(),
                _ => v.modifier.on_click.is_some(),
            };
        let here = if clickable { Some(v.id) } else { inherited };
        if v.label().as_deref() == Some(label) {
            return Some(match here {
                Some(id) => TapTarget::Clickable(id),
                None => TapTarget::Inert,
            });
        }
        v.children.iter().find_map(|c| go(c, label, here))
    }
    go(root, label, None)
}

/// Text field hit regions, optionally narrowed to one label.
pub(crate) fn text_field_id(frame: &Frame, label: Option<&str>) -> Option<ViewId> {
    let mut fields = frame.semantics_nodes.iter().filter(|s| {
        s.role == Role::TextField && label.is_none_or(|l| s.label.as_deref() == Some(l))
    });
    fields.next().map(|s| s.id)
}
