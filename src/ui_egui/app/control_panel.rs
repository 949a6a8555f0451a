use super::PresenterApp;
use crate::models::color::DisplayColors;
use crate::models::preset::{MAX_HOURS, MAX_MINUTES, MAX_SECONDS};
use crate::services::countdown::CountdownPhase;
use crate::ui_egui::theme::{color32_to_rgba, rgba_to_color32};
use egui::{Context, RichText, Ui};
use std::time::Instant;

const CLOCK_FONT_SIZE: f32 = 32.0;
const REMAINING_FONT_SIZE: f32 = 56.0;

/// Clicks collected while a list is drawn, applied once it is done.
enum ListAction {
    Select(usize),
    Activate(usize),
}

impl PresenterApp {
    pub(super) fn render_control_panel(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("external_screen_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                self.render_screen_controls(ui);
                ui.add_space(6.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_countdown_header(ui);
            ui.separator();

            ui.columns(2, |columns| {
                self.render_presets(&mut columns[0]);
                self.render_messages(&mut columns[1]);
            });
        });
    }

    fn render_countdown_header(&mut self, ui: &mut Ui) {
        let view = self.state.control_view();

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&view.clock).size(CLOCK_FONT_SIZE));
            ui.label(format!("Current: {}", view.current_preset));
            ui.label(
                RichText::new(&view.remaining)
                    .size(REMAINING_FONT_SIZE)
                    .strong(),
            );
            if !view.message.is_empty() {
                ui.label(RichText::new(&view.message).italics());
            }
        });

        ui.horizontal(|ui| {
            let phase = view.phase;
            let can_start = matches!(phase, CountdownPhase::Ready | CountdownPhase::Paused);

            if ui
                .add_enabled(can_start, egui::Button::new("▶ Start"))
                .clicked()
            {
                // Invalid transitions are already logged by the state.
                self.state.start_countdown(Instant::now()).ok();
            }
            if ui
                .add_enabled(phase == CountdownPhase::Running, egui::Button::new("⏸ Pause"))
                .clicked()
            {
                self.state.pause_countdown().ok();
            }
            if ui
                .add_enabled(phase != CountdownPhase::Idle, egui::Button::new("⟲ Reset"))
                .clicked()
            {
                self.state.reset_countdown().ok();
            }
            ui.weak(phase.to_string());
        });
    }

    fn render_presets(&mut self, ui: &mut Ui) {
        ui.heading("Timers");

        ui.horizontal(|ui| {
            let input = &mut self.state.preset_input;
            ui.add(egui::DragValue::new(&mut input.hours).range(0..=MAX_HOURS).suffix(" h"));
            ui.add(egui::DragValue::new(&mut input.minutes).range(0..=MAX_MINUTES).suffix(" m"));
            ui.add(egui::DragValue::new(&mut input.seconds).range(0..=MAX_SECONDS).suffix(" s"));

            if ui.button("Add timer").clicked() {
                // Rejections are silent in the UI and logged by the state.
                self.state.add_preset().ok();
            }
        });

        let mut action = None;
        egui::ScrollArea::vertical()
            .id_source("preset_list")
            .max_height((ui.available_height() - 32.0).max(60.0))
            .show(ui, |ui| {
                for (index, preset) in self.state.presets().iter().enumerate() {
                    let selected = self.state.selected_preset == Some(index);
                    let response = ui.selectable_label(selected, preset.label());
                    if response.double_clicked() {
                        action = Some(ListAction::Activate(index));
                    } else if response.clicked() {
                        action = Some(ListAction::Select(index));
                    }
                }
            });

        match action {
            Some(ListAction::Activate(index)) => {
                self.state.select_preset(index);
            }
            Some(ListAction::Select(index)) => self.state.selected_preset = Some(index),
            None => {}
        }

        if ui.button("Remove timer").clicked() {
            self.state.remove_selected_preset();
        }
    }

    fn render_messages(&mut self, ui: &mut Ui) {
        ui.heading("Messages");

        ui.horizontal(|ui| {
            let response = ui.text_edit_singleline(&mut self.state.message_input);
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if submitted {
                self.state.send_message();
                response.request_focus();
            }
            if ui.button("Send").clicked() {
                self.state.send_message();
            }
        });

        let mut action = None;
        egui::ScrollArea::vertical()
            .id_source("message_history")
            .max_height((ui.available_height() - 32.0).max(60.0))
            .show(ui, |ui| {
                for (index, text) in self.state.messages().history().iter().enumerate() {
                    let selected = self.state.selected_message == Some(index);
                    let response = ui.selectable_label(selected, text);
                    if response.double_clicked() {
                        action = Some(ListAction::Activate(index));
                    } else if response.clicked() {
                        action = Some(ListAction::Select(index));
                    }
                }
            });

        match action {
            Some(ListAction::Activate(index)) => {
                self.state.replay_message(index);
            }
            Some(ListAction::Select(index)) => self.state.selected_message = Some(index),
            None => {}
        }

        if ui.button("Delete message").clicked() {
            self.state.delete_selected_message();
        }
    }

    fn render_screen_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("External screen:");

            let selected_text = self
                .display
                .selected()
                .and_then(|index| self.display.outputs().get(index))
                .map(|output| output.name.clone())
                .unwrap_or_default();
            let mut chosen = self.display.selected();
            egui::ComboBox::from_id_source("display_output_combo")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for (index, output) in self.display.outputs().iter().enumerate() {
                        ui.selectable_value(&mut chosen, Some(index), &output.name);
                    }
                });
            if let Some(index) = chosen.filter(|index| Some(*index) != self.display.selected()) {
                self.display.select(index);
            }

            if ui.button("🔄").on_hover_text("Reload screens").clicked() {
                let displays = Self::system_displays(ui.ctx());
                self.display.reload(&displays, 0);
            }
            if ui.button("Fullscreen").clicked() {
                self.display.maximize();
            }

            ui.separator();

            let colors = self.state.colors();
            let mut background = rgba_to_color32(colors.background);
            let mut text = rgba_to_color32(colors.text);
            ui.label("Background");
            let background_changed = ui.color_edit_button_srgba(&mut background).changed();
            ui.label("Text");
            let text_changed = ui.color_edit_button_srgba(&mut text).changed();
            if background_changed || text_changed {
                self.state.set_colors(DisplayColors::new(
                    color32_to_rgba(background),
                    color32_to_rgba(text),
                ));
            }
        });
    }
}
