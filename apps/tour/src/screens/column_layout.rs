use tour_core::*;
use tour_ui::*;

pub const TITLE: &str = "Column Layout";
pub const BLOCK_TAG: &str = "column_block";
const BLOCK_COLOR: Color = Color::from_argb(0xFFA5D6A7);

pub fn screen() -> View {
    let blocks: Vec<View> = (0..3)
        .map(|_| {
            Column(Modifier::new()
                .fill_max_width()
                .padding_vertical(8.0)
                .background(BLOCK_COLOR)
                .height(60.0)
                .test_tag(BLOCK_TAG))
        })
        .collect();
    Column(Modifier::new().fill_max_size().padding(16.0)).child((
        TitleLarge(TITLE),
        VSpace(8.0),
        blocks,
    ))
}
