use tour_app::{App, AppConfig};
use tour_platform::{AssetStore, run_console_app};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = AppConfig::default();
    let app = App::new(&config)?;
    run_console_app(app.into_host(AssetStore::from_dir(&config.asset_dir)))
}
