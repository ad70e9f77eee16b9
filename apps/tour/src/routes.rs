//! Route names and the table binding each route to its screen.

use std::{fmt, str::FromStr};

use tour_core::{Signal, UiError, scope::current_scope, signal};
use tour_navigation::RouteTable;

use crate::{
    AppConfig,
    registry::{Target, resolve_target},
    screens::{
        column_layout, component_list, images, row_layout, text_detail, text_field, welcome,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Welcome,
    ComponentList,
    TextDetail,
    Images,
    TextField,
    RowLayout,
    ColumnLayout,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Welcome,
        Route::ComponentList,
        Route::TextDetail,
        Route::Images,
        Route::TextField,
        Route::RowLayout,
        Route::ColumnLayout,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Route::Welcome => "welcome",
            Route::ComponentList => "component_list",
            Route::TextDetail => "text_detail",
            Route::Images => "images",
            Route::TextField => "textfield",
            Route::RowLayout => "row_layout",
            Route::ColumnLayout => "column_layout",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UiError::UnknownRoute(s.to_string()))
    }
}

/// Every route bound to its screen. Welcome and the component list receive
/// the navigator through their callbacks; the other screens are terminal.
pub fn route_table(config: &AppConfig) -> RouteTable<Route> {
    let name = config.display_name.clone();
    let id = config.display_id.clone();
    RouteTable::new()
        .route(Route::Welcome, move |entry| {
            let nav = entry.navigator();
            welcome::screen(&name, &id, move || nav.go(Route::ComponentList))
        })
        .route(Route::ComponentList, |entry| {
            let nav = entry.navigator();
            component_list::screen(move |title| match resolve_target(title) {
                Target::Route(r) => nav.go(r),
                Target::NoOp => log::debug!("{title}: nothing to open"),
            })
        })
        .route(Route::TextDetail, |_| text_detail::screen())
        .route(Route::Images, |_| images::screen())
        .route(Route::TextField, |entry| {
            let content: Signal<String> = entry.remember_saveable("content", || {
                if let Some(scope) = current_scope() {
                    scope.add_disposer(|| log::debug!("textfield: content dropped"));
                }
                signal(String::new())
            });
            text_field::screen(&content)
        })
        .route(Route::RowLayout, |_| row_layout::screen())
        .route(Route::ColumnLayout, |_| column_layout::screen())
}
