// Chronenberg presenter
// Main entry point

use anyhow::Result;
use chronenberg::services::settings::SettingsService;
use chronenberg::ui_egui::PresenterApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Chronenberg");

    let settings_service = SettingsService::new(SettingsService::default_path());
    let settings = settings_service.load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Chronenberg timers")
            .with_inner_size([settings.control_width, settings.control_height])
            .with_min_inner_size([settings.control_width, settings.control_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Chronenberg",
        native_options,
        Box::new(move |cc| Ok(Box::new(PresenterApp::new(cc, settings, settings_service)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to launch Chronenberg GUI: {err}"))?;

    log::info!("Chronenberg stopped");
    Ok(())
}
