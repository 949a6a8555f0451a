mod confirm;
mod control_panel;
mod display;
mod lifecycle;

use self::confirm::QuitGuard;
use self::display::DisplaySurface;
use crate::models::settings::Settings;
use crate::services::presenter::PresenterState;
use crate::services::settings::SettingsService;

/// Owns both windows: the control panel is the root viewport and the
/// external screen is an immediate child viewport rendered every frame.
pub struct PresenterApp {
    /// Presets, countdown, messages and clock shown on both surfaces
    state: PresenterState,
    settings: Settings,
    settings_service: SettingsService,
    /// External screen window and the outputs it can be moved to
    display: DisplaySurface,
    quit_guard: QuitGuard,
}

impl eframe::App for PresenterApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
