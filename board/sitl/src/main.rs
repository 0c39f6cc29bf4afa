mod app;
mod board;
mod config;

use config::SitlConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = SitlConfig::from_env()?;
    log::info!(
        "starting SITL in {} mode, sensitivity {} px/°, permission {:?}",
        config.mode,
        config.tracker.sensitivity(),
        config.permission
    );

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Tilt SITL",
        options,
        Box::new(move |cc| Ok(Box::new(app::SitlApp::new(cc, config)))),
    )
    .map_err(|err| anyhow::anyhow!("SITL window failed: {err}"))
}
