use tour_core::*;
use tour_ui::*;

pub const TITLE: &str = "Row Layout";
pub const BOX_TAG: &str = "row_box";
const BOX_COLOR: Color = Color::from_argb(0xFF90CAF9);

/// Three evenly spaced rows of three boxes.
pub fn screen() -> View {
    let rows: Vec<View> = (0..3)
        .flat_map(|_| [BoxRow(), VSpace(8.0)])
        .collect();
    Column(Modifier::new().fill_max_size().padding(16.0)).child((
        TitleLarge(TITLE),
        VSpace(8.0),
        rows,
    ))
}

#[allow(non_snake_case)]
fn BoxRow() -> View {
    let boxes: Vec<View> = (0..3)
        .map(|_| {
            Box(Modifier::new()
                .size(60.0, 60.0)
                .background(BOX_COLOR)
                .test_tag(BOX_TAG))
        })
        .collect();
    Row(Modifier::new()
        .fill_max_width()
        .arrangement(Arrangement::SpaceEvenly))
    .child(boxes)
}
