//! Quit confirmation for the control window.
//!
//! A close coming from the window manager asks "Do you really want to
//! quit?" first. Once confirmed, the app closes itself and that programmatic
//! close goes straight through.

use egui::{Context, RichText};

use super::PresenterApp;

/// What to do with a close request on the control window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// Let the window close
    Allow,
    /// Cancel the close and show the prompt
    Prompt,
}

/// Result of a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    /// User confirmed the action
    Confirmed,
    /// User cancelled the action
    Cancelled,
    /// Dialog is still open
    Pending,
}

#[derive(Debug, Default)]
pub struct QuitGuard {
    /// Skip the prompt entirely
    disabled: bool,
    prompt_open: bool,
    exit_confirmed: bool,
}

impl QuitGuard {
    pub fn new(confirm_on_close: bool) -> Self {
        Self {
            disabled: !confirm_on_close,
            ..Self::default()
        }
    }

    pub fn on_close_requested(&mut self) -> CloseDecision {
        if self.disabled || self.exit_confirmed {
            return CloseDecision::Allow;
        }
        self.prompt_open = true;
        CloseDecision::Prompt
    }

    /// The user answered yes; the next close request is allowed.
    pub fn confirm(&mut self) {
        self.prompt_open = false;
        self.exit_confirmed = true;
    }

    /// The user answered no; nothing else changes.
    pub fn decline(&mut self) {
        self.prompt_open = false;
    }

    pub fn is_prompt_open(&self) -> bool {
        self.prompt_open
    }

    /// Render the prompt while it is open and apply the answer.
    pub fn render(&mut self, ctx: &Context) -> ConfirmResult {
        if !self.prompt_open {
            return ConfirmResult::Pending;
        }

        let mut result = ConfirmResult::Pending;

        egui::Window::new("QUIT")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(260.0);
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚠")
                            .size(24.0)
                            .color(egui::Color32::from_rgb(220, 150, 50)),
                    );
                    ui.label("Do you really want to quit?");
                });
                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // "No" sits rightmost as the default answer
                        if ui.button("No").clicked() {
                            result = ConfirmResult::Cancelled;
                        }
                        ui.add_space(10.0);
                        if ui.button("Yes").clicked() {
                            result = ConfirmResult::Confirmed;
                        }
                    });
                });
                ui.add_space(5.0);
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = ConfirmResult::Cancelled;
        }

        match result {
            ConfirmResult::Confirmed => self.confirm(),
            ConfirmResult::Cancelled => self.decline(),
            ConfirmResult::Pending => {}
        }

        result
    }
}

impl PresenterApp {
    /// Intercept close requests on the control window.
    pub(super) fn handle_close_request(&mut self, ctx: &Context) {
        if !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }

        match self.quit_guard.on_close_requested() {
            CloseDecision::Allow => log::info!("Control window closing"),
            CloseDecision::Prompt => {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                log::debug!("Close requested; asking for confirmation");
            }
        }
    }

    pub(super) fn render_quit_prompt(&mut self, ctx: &Context) {
        match self.quit_guard.render(ctx) {
            ConfirmResult::Confirmed => {
                log::info!("Quit confirmed");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            ConfirmResult::Cancelled => log::info!("Quit cancelled"),
            ConfirmResult::Pending => {}
        }
    }
}
