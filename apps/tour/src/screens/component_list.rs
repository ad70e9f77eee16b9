use std::rc::Rc;

use tour_core::*;
use tour_ui::*;

use crate::registry::{self, ComponentDescriptor};

pub const TITLE: &str = "UI Components List";
pub const CARD_TAG: &str = "component_card";

/// One card per registry entry, in registry order. Functional cards report
/// their title to `on_select`; the decorative card swallows taps.
pub fn screen(on_select: impl Fn(&str) + 'static) -> View {
    let on_select: Rc<dyn Fn(&str)> = Rc::new(on_select);
    let cards: Vec<View> = registry::list()
        .iter()
        .map(|c| ComponentCard(c, on_select.clone()))
        .collect();
    Column(Modifier::new().fill_max_size().padding(16.0)).child((
        TitleLarge(TITLE).modifier(Modifier::new().padding_bottom(16.0)),
        cards,
    ))
}

#[allow(non_snake_case)]
fn ComponentCard(c: &ComponentDescriptor, on_select: Rc<dyn Fn(&str)>) -> View {
    let color = c.accent.unwrap_or_else(|| theme().card);
    let modifier = Modifier::new()
        .fill_max_width()
        .padding_vertical(4.0)
        .test_tag(CARD_TAG);
    let body = CardBody(c.title, c.description);
    if c.interactive {
        let title = c.title;
        Card(color, modifier, title, move || on_select(title), body)
    } else {
        Card(color, modifier, c.title, || {}, body)
    }
}
