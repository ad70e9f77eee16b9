use tour_core::*;
use tour_ui::*;

pub const TITLE: &str = "Text Detail";
const BROWN: Color = Color::from_argb(0xFFB76E22);

/// "The quick Brown fox jumps over the lazy dog." with one style per word.
pub fn sentence() -> AnnotatedString {
    AnnotatedString::builder()
        .append("The ")
        .styled(
            "quick ",
            SpanStyle::new().decoration(TextDecoration::LINE_THROUGH),
        )
        .styled("Brown ", SpanStyle::new().bold().color(BROWN))
        .append("fox ")
        .styled("jumps ", SpanStyle::new().letter_spacing(4.0))
        .styled("over ", SpanStyle::new().bold())
        .styled("the ", SpanStyle::new().decoration(TextDecoration::UNDERLINE))
        .styled("lazy ", SpanStyle::new().italic())
        .append("dog.")
        .build()
}

pub fn screen() -> View {
    Column(Modifier::new().padding(16.0)).child((
        TitleLarge(TITLE),
        VSpace(16.0),
        RichText(sentence()).size(20.0),
    ))
}
