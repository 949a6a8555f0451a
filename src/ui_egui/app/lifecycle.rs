use super::confirm::QuitGuard;
use super::display::DisplaySurface;
use super::PresenterApp;
use crate::models::settings::Settings;
use crate::services::presenter::PresenterState;
use crate::services::settings::SettingsService;
use crate::utils::monitors::SystemDisplays;
use chrono::Local;
use std::time::Instant;

impl PresenterApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        settings_service: SettingsService,
    ) -> Self {
        // The external screen must be a real OS window, not an embedded one
        cc.egui_ctx.set_embed_viewports(false);

        let colors = settings.display_colors().unwrap_or_else(|e| {
            log::warn!("{e}; using default display colors");
            Default::default()
        });

        let mut state = PresenterState::new(colors);
        state.start_clock(Instant::now(), Local::now().time());

        let mut display = DisplaySurface::new(settings.display_default_size());
        display.reload(
            &Self::system_displays(&cc.egui_ctx),
            settings.initial_display_index,
        );

        let quit_guard = QuitGuard::new(settings.confirm_on_close);

        log::info!(
            "Loaded settings: display colors {}, {} output(s)",
            colors.style_string(),
            display.outputs().len()
        );

        Self {
            state,
            settings,
            settings_service,
            display,
            quit_guard,
        }
    }

    pub(super) fn system_displays(ctx: &egui::Context) -> SystemDisplays {
        let monitor_size = ctx.input(|i| i.viewport().monitor_size.map(|size| (size.x, size.y)));
        SystemDisplays::new(monitor_size)
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.advance(Instant::now(), || Local::now().time());

        self.handle_close_request(ctx);

        self.render_control_panel(ctx);

        let view = self.state.display_view();
        self.display.show(ctx, &view);

        // Rendered last so it appears on top
        self.render_quit_prompt(ctx);

        if let Some(wait) = self.state.next_wakeup(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let colors = self.state.colors();
        if self.settings.display_colors().ok() == Some(colors) {
            return;
        }

        self.settings.set_display_colors(colors);
        if let Err(e) = self.settings_service.save(&self.settings) {
            log::error!("Failed to save display colors: {:#}", e);
        }
    }
}
