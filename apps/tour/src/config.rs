use std::path::PathBuf;

/// Everything the shell needs at start. There is no config file; the
/// defaults are the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Shown on the welcome screen, bold.
    pub display_name: String,
    pub display_id: String,
    /// Directory holding `<asset id>.png` files.
    pub asset_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display_name: "Nguyen Ngoc Mai Thanh".into(),
            display_id: "077305003818".into(),
            asset_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets")),
        }
    }
}
