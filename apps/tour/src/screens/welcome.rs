use tour_core::*;
use tour_ui::*;

use crate::assets::JETPACK_LOGO;

pub const DESCRIPTION: &str = "Jetpack Compose is a modern UI toolkit for building native Android applications using a declarative programming approach.";
pub const READY: &str = "I'm ready";

/// Identity block, logo, blurb and the button that opens the component list.
pub fn screen(display_name: &str, display_id: &str, on_ready: impl Fn() + 'static) -> View {
    Column(
        Modifier::new()
            .fill_max_size()
            .padding(24.0)
            .alignment(Alignment::Center)
            .arrangement(Arrangement::SpaceBetween),
    )
    .child((
        VSpace(40.0),
        Column(Modifier::new().alignment(Alignment::Center)).child((
            Text(display_name).bold(),
            Text(display_id),
        )),
        Image(Modifier::new().size(150.0, 150.0), JETPACK_LOGO, "Compose Logo"),
        Text("Jetpack Compose")
            .bold()
            .size(typography::HEADLINE),
        Text(DESCRIPTION).align_center(),
        Button(READY, on_ready).modifier(Modifier::new().fill_max_width()),
    ))
}
