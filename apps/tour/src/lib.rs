//! The tour app: a welcome screen, a list of UI components and one detail
//! screen per component.

pub mod app;
pub mod assets;
pub mod config;
pub mod registry;
pub mod routes;
pub mod screens;
pub mod theme;

pub use app::App;
pub use config::AppConfig;
pub use registry::{ComponentDescriptor, Target, resolve_target};
pub use routes::Route;
