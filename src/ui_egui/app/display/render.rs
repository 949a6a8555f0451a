use egui::{self, RichText, ViewportClass};

use super::DISPLAY_TITLE;
use crate::services::presenter::DisplayView;
use crate::ui_egui::theme::rgba_to_color32;

const CLOCK_FONT_SIZE: f32 = 48.0;
const COUNTDOWN_FONT_SIZE: f32 = 120.0;
const HINT_FONT_SIZE: f32 = 28.0;
const MESSAGE_FONT_SIZE: f32 = 56.0;

pub(super) fn viewport_builder(default_size: (f32, f32)) -> egui::ViewportBuilder {
    egui::ViewportBuilder::default()
        .with_title(DISPLAY_TITLE)
        .with_decorations(false)
        .with_position(egui::pos2(0.0, 0.0))
        .with_inner_size(egui::vec2(default_size.0, default_size.1))
        .with_resizable(true)
}

pub(super) fn render_display_ui(ctx: &egui::Context, class: ViewportClass, view: &DisplayView) {
    let background = rgba_to_color32(view.colors.background);
    let text = rgba_to_color32(view.colors.text);

    let render = |ui: &mut egui::Ui| {
        let rect = ui.max_rect();
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(RichText::new(&view.clock).size(CLOCK_FONT_SIZE).color(text));
            ui.add_space(24.0);
            ui.label(
                RichText::new(&view.remaining)
                    .size(COUNTDOWN_FONT_SIZE)
                    .color(text)
                    .strong(),
            );
            ui.label(RichText::new(&view.minutes_hint).size(HINT_FONT_SIZE).color(text));
            ui.add_space(24.0);
            ui.label(RichText::new(&view.message).size(MESSAGE_FONT_SIZE).color(text));
        });

        // Borderless window: primary drag moves it, secondary click toggles maximized.
        let response = ui.interact(
            rect,
            ui.make_persistent_id("external_screen_surface"),
            egui::Sense::click_and_drag(),
        );
        if response.drag_started_by(egui::PointerButton::Primary) {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::StartDrag);
        }
        if response.secondary_clicked() {
            let maximized = ui
                .ctx()
                .input(|i| i.viewport().maximized.unwrap_or(false));
            ui.ctx()
                .send_viewport_cmd(egui::ViewportCommand::Maximized(!maximized));
        }
    };

    match class {
        ViewportClass::Embedded => {
            egui::Window::new(DISPLAY_TITLE)
                .collapsible(false)
                .resizable(true)
                .frame(egui::Frame::window(&ctx.style()).fill(background))
                .show(ctx, |ui| render(ui));
        }
        _ => {
            egui::CentralPanel::default()
                .frame(egui::Frame::none().fill(background))
                .show(ctx, |ui| render(ui));
        }
    }
}
