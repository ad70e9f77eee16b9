use tour_core::{Color, Theme};

/// The single static theme of the app.
pub fn app_theme() -> Theme {
    Theme {
        card: Color::from_argb(0xFFBBDEFB),
        ..Theme::default()
    }
}
