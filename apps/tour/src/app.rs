use tour_core::*;
use tour_navigation::{NavDisplay, Navigator};
use tour_platform::{AssetStore, Host};
use tour_ui::*;

use crate::{AppConfig, Route, routes::route_table, theme::app_theme};

/// The application shell: theme, navigator, and the active screen.
#[derive(Clone)]
pub struct App {
    nav: Navigator<Route>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, UiError> {
        let nav = Navigator::new(Route::Welcome, route_table(config))?;
        log::info!("tour started at {}", Route::Welcome);
        Ok(Self { nav })
    }

    pub fn navigator(&self) -> &Navigator<Route> {
        &self.nav
    }

    /// Compose one frame.
    pub fn view(&self) -> View {
        with_theme(app_theme(), || {
            Surface(
                Modifier::new()
                    .fill_max_size()
                    .background(theme().background),
                NavDisplay(&self.nav),
            )
        })
    }

    /// A host showing this app, with back wired to the app's navigator.
    pub fn into_host(self, assets: AssetStore) -> Host {
        let nav = self.nav.clone();
        Host::new(move |_: &mut Scheduler| self.view(), assets).with_navigator(&nav)
    }
}
