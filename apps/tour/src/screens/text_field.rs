use tour_core::*;
use tour_ui::*;

pub const TITLE: &str = "TextField";
pub const LABEL: &str = "Thông tin nhập";
pub const HELPER: &str = "Tự động cập nhật nội dung theo TextField";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    Valid,
    /// Empty or whitespace only.
    Invalid,
}

impl Validity {
    pub fn of(content: &str) -> Self {
        if is_invalid(content) {
            Validity::Invalid
        } else {
            Validity::Valid
        }
    }
}

pub fn is_invalid(content: &str) -> bool {
    content.trim().is_empty()
}

/// Outlined field bound to `content`. The helper line only shows while the
/// content is invalid.
pub fn screen(content: &Signal<String>) -> View {
    let value = content.get();
    let invalid = Validity::of(&value) == Validity::Invalid;
    let on_change = {
        let content = content.clone();
        move |s: String| content.set(s)
    };
    Column(Modifier::new().fill_max_size().padding(16.0)).child((
        TitleLarge(TITLE),
        VSpace(8.0),
        OutlinedTextField(
            value,
            LABEL,
            invalid,
            Modifier::new().fill_max_width(),
            on_change,
        ),
        invalid.then(|| Text(HELPER).color(Color::RED).size(typography::BODY_SMALL)),
    ))
}
