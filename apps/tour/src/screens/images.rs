use tour_core::*;
use tour_ui::*;

use crate::assets::{HCM_UT, HCM_UTT};

pub const TITLE: &str = "Images";

pub fn screen() -> View {
    Column(Modifier::new().padding(16.0)).child((
        TitleLarge(TITLE),
        VSpace(8.0),
        Image(Modifier::new().fill_max_width(), HCM_UT, "Image 1"),
        VSpace(8.0),
        Image(Modifier::new().fill_max_width(), HCM_UTT, "Image 2"),
    ))
}
