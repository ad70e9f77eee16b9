//! The fixed list of demoed components and where tapping each one leads.

use tour_core::Color;

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComponentDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    /// Card color; `None` uses the theme's card color.
    pub accent: Option<Color>,
    /// Decorative entries render as cards but ignore taps.
    pub interactive: bool,
}

const fn component(title: &'static str, description: &'static str) -> ComponentDescriptor {
    ComponentDescriptor {
        title,
        description,
        accent: None,
        interactive: true,
    }
}

pub const DECORATIVE_TITLE: &str = "Tự tìm hiểu";

static COMPONENTS: [ComponentDescriptor; 7] = [
    component("Text", "Displays text"),
    component("Image", "Displays an image"),
    component("TextField", "Input field for text"),
    component("PasswordField", "Input field for passwords"),
    component("Column", "Arranges elements vertically"),
    component("Row", "Arranges elements horizontally"),
    ComponentDescriptor {
        title: DECORATIVE_TITLE,
        description: "Tìm ra tất cả các thành phần UI cơ bản",
        accent: Some(Color::from_argb(0xFFFFCDD2)),
        interactive: false,
    },
];

/// All entries, in display order.
pub fn list() -> &'static [ComponentDescriptor] {
    &COMPONENTS
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Route(Route),
    /// Tap is accepted and nothing happens.
    NoOp,
}

/// Where tapping the card titled `title` navigates. "PasswordField" has no
/// screen yet and resolves to `NoOp`, as does any title not listed here.
pub fn resolve_target(title: &str) -> Target {
    match title {
        "Text" => Target::Route(Route::TextDetail),
        "Image" => Target::Route(Route::Images),
        "TextField" => Target::Route(Route::TextField),
        "Column" => Target::Route(Route::ColumnLayout),
        "Row" => Target::Route(Route::RowLayout),
        _ => Target::NoOp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_order_is_fixed() {
        let titles: Vec<_> = list().iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "Text",
                "Image",
                "TextField",
                "PasswordField",
                "Column",
                "Row",
                "Tự tìm hiểu"
            ]
        );
        assert_eq!(list().iter().filter(|c| c.interactive).count(), 6);
    }

    #[test]
    fn targets() {
        assert_eq!(resolve_target("Text"), Target::Route(Route::TextDetail));
        assert_eq!(resolve_target("Image"), Target::Route(Route::Images));
        assert_eq!(resolve_target("TextField"), Target::Route(Route::TextField));
        assert_eq!(resolve_target("Column"), Target::Route(Route::ColumnLayout));
        assert_eq!(resolve_target("Row"), Target::Route(Route::RowLayout));
        assert_eq!(resolve_target("PasswordField"), Target::NoOp);
        assert_eq!(resolve_target(DECORATIVE_TITLE), Target::NoOp);
        assert_eq!(resolve_target("text"), Target::NoOp);
    }

    #[test]
    fn only_decorative_entry_has_accent() {
        let accented: Vec<_> = list().iter().filter(|c| c.accent.is_some()).collect();
        assert_eq!(accented.len(), 1);
        assert_eq!(accented[0].title, DECORATIVE_TITLE);
        assert_eq!(accented[0].accent, Some(Color::from_hex("#FFCDD2")));
    }
}
