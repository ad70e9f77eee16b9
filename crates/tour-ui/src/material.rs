//! Material-flavoured components built from the basic widgets.

use std::rc::Rc;

use tour_core::*;

use crate::{Column, Surface, Text, TextStyle, ViewExt, typography};

/// Filled, clickable container. The semantics label is what a tap by name
/// matches against.
pub fn Card(
    container_color: Color,
    modifier: Modifier,
    label: impl Into<String>,
    on_click: impl Fn() + 'static,
    content: View,
) -> View {
    Surface(
        modifier.background(container_color).clickable(on_click),
        content,
    )
    .semantics(Semantics::new(Role::Button).label(label))
}

/// Single-line outlined field. `is_error` switches the outline to the error
/// color; the caller owns the value and receives every change.
pub fn OutlinedTextField(
    value: impl Into<String>,
    label: impl Into<String>,
    is_error: bool,
    modifier: Modifier,
    on_change: impl Fn(String) + 'static,
) -> View {
    let label = label.into();
    let outline = if is_error {
        theme().error
    } else {
        theme().outline
    };
    View::new(
        0,
        ViewKind::TextField {
            value: value.into(),
            label: label.clone(),
            is_error,
            single_line: true,
            on_change: Some(Rc::new(on_change)),
        },
    )
    .modifier(modifier.border(1.0, outline, 4.0))
    .semantics(Semantics::new(Role::TextField).label(label))
}

/// Title in the large title style, the heading of every detail screen.
pub fn TitleLarge(text: impl Into<String>) -> View {
    Text(text).size(typography::TITLE_LARGE)
}

/// Two-line card body: bold title over small description.
pub fn CardBody(title: &str, description: &str) -> View {
    Column(Modifier::new().padding(16.0)).child((
        Text(title).bold().color(theme().on_card),
        Text(description)
            .size(typography::BODY_SMALL)
            .color(theme().on_card),
    ))
}
