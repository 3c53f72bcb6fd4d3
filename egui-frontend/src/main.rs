use eframe::egui;
use log::{error, info};

use eat_n_split::backend::{AppConfig, Backend};
use eat_n_split::ui::EatNSplitApp;

fn main() -> Result<(), eframe::Error> {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting Eat-N-Split egui application");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config, falling back to defaults: {:#}", e);
            AppConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([720.0, 480.0])
            .with_title(config.window_title.clone())
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let backend = Backend::with_config(config);
            info!("Successfully initialized Eat-N-Split app");
            Ok(Box::new(EatNSplitApp::new(cc, backend)))
        }),
    )
}
