mod render;

use egui::{Context, ViewportCommand, ViewportId};

use crate::services::presenter::DisplayView;
use crate::utils::monitors::{
    DisplayEnumerator, DisplayOutput, DisplayTargets, Placement, PlacementSize,
};

pub(super) const DISPLAY_TITLE: &str = "Chronenberg external screen";

/// A window change for the external screen, applied on its next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ScreenCommand {
    Place(Placement),
    Maximize,
}

impl ScreenCommand {
    /// Viewport commands for a window drawn at `pixels_per_point`.
    fn viewport_commands(self, pixels_per_point: f32) -> Vec<ViewportCommand> {
        match self {
            ScreenCommand::Maximize => vec![ViewportCommand::Maximized(true)],
            ScreenCommand::Place(placement) => {
                let placement = placement.in_points(pixels_per_point);
                let (x, y) = placement.origin;
                // Leave maximized state first so the move applies to the normal geometry.
                let resize = match placement.size {
                    PlacementSize::Maximized => ViewportCommand::Maximized(true),
                    PlacementSize::Fixed { width, height } => {
                        ViewportCommand::InnerSize(egui::vec2(width, height))
                    }
                };
                vec![
                    ViewportCommand::Maximized(false),
                    ViewportCommand::OuterPosition(egui::pos2(x, y)),
                    resize,
                ]
            }
        }
    }
}

/// The external screen window. It renders a [`DisplayView`] and keeps no
/// presentation state beyond where the window sits.
pub(super) struct DisplaySurface {
    viewport_id: ViewportId,
    targets: DisplayTargets,
    default_size: (f32, f32),
    /// Window changes queued for the next frame of the display viewport
    pending: Vec<ScreenCommand>,
}

impl DisplaySurface {
    pub(super) fn new(default_size: (f32, f32)) -> Self {
        Self {
            viewport_id: ViewportId::from_hash_of("external_screen"),
            targets: DisplayTargets::new(),
            default_size,
            pending: Vec::new(),
        }
    }

    /// Re-list the outputs and move the screen to `preferred`, or to the
    /// first output when it is gone. A lone output leaves the screen alone.
    pub(super) fn reload(&mut self, enumerator: &dyn DisplayEnumerator, preferred: usize) {
        match self
            .targets
            .reload_to(enumerator, preferred, self.default_size)
        {
            Some(placement) => self.queue_placement(placement),
            None => log::debug!("Nothing to move the external screen to"),
        }
    }

    /// Move the screen to the output at `index`. Out-of-range indices are ignored.
    pub(super) fn select(&mut self, index: usize) {
        match self.targets.select(index, self.default_size) {
            Some(placement) => self.queue_placement(placement),
            None => log::debug!("No display output at index {index}"),
        }
    }

    pub(super) fn maximize(&mut self) {
        self.pending.push(ScreenCommand::Maximize);
    }

    pub(super) fn outputs(&self) -> &[DisplayOutput] {
        self.targets.outputs()
    }

    pub(super) fn selected(&self) -> Option<usize> {
        self.targets.selected()
    }

    fn queue_placement(&mut self, placement: Placement) {
        log::info!(
            "Moving external screen to {} at {:?}",
            self.targets.selected_name().unwrap_or("?"),
            placement.origin
        );
        self.pending.push(ScreenCommand::Place(placement));
    }

    /// Render the external screen for this frame.
    pub(super) fn show(&mut self, ctx: &Context, view: &DisplayView) {
        let builder = render::viewport_builder(self.default_size);
        let pending = std::mem::take(&mut self.pending);

        ctx.show_viewport_immediate(self.viewport_id, builder, move |child_ctx, class| {
            // Positions are physical; egui scales them by this window's factor.
            let pixels_per_point = child_ctx.pixels_per_point();
            for command in pending {
                for viewport_command in command.viewport_commands(pixels_per_point) {
                    child_ctx.send_viewport_cmd(viewport_command);
                }
            }
            // The screen lives as long as the control window.
            if child_ctx.input(|i| i.viewport().close_requested()) {
                child_ctx.send_viewport_cmd(ViewportCommand::CancelClose);
            }
            render::render_display_ui(child_ctx, class, view);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::monitors::{MockDisplayEnumerator, MonitorRect};

    fn placement(size: PlacementSize) -> Placement {
        Placement {
            origin: (2880.0, 0.0),
            size,
        }
    }

    #[test]
    fn placement_moves_in_points_on_scaled_desktops() {
        let commands =
            ScreenCommand::Place(placement(PlacementSize::Maximized)).viewport_commands(1.5);
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], ViewportCommand::Maximized(false)));
        assert!(matches!(
            commands[1],
            ViewportCommand::OuterPosition(pos) if pos == egui::pos2(1920.0, 0.0)
        ));
        assert!(matches!(commands[2], ViewportCommand::Maximized(true)));
    }

    #[test]
    fn fixed_size_is_not_scaled() {
        let commands = ScreenCommand::Place(placement(PlacementSize::Fixed {
            width: 800.0,
            height: 600.0,
        }))
        .viewport_commands(2.0);
        assert!(matches!(
            commands[1],
            ViewportCommand::OuterPosition(pos) if pos == egui::pos2(1440.0, 0.0)
        ));
        assert!(matches!(
            commands[2],
            ViewportCommand::InnerSize(size) if size == egui::vec2(800.0, 600.0)
        ));
    }

    #[test]
    fn single_output_reload_queues_nothing() {
        let mut enumerator = MockDisplayEnumerator::new();
        enumerator.expect_list_available_displays().returning(|| {
            vec![DisplayOutput {
                name: "Primary".to_string(),
                rect: MonitorRect {
                    x: 0.0,
                    y: 0.0,
                    width: 1920.0,
                    height: 1080.0,
                },
            }]
        });

        let mut surface = DisplaySurface::new((800.0, 600.0));
        surface.maximize();
        surface.reload(&enumerator, 0);
        assert_eq!(surface.pending, vec![ScreenCommand::Maximize]);
        assert_eq!(surface.selected(), Some(0));
    }
}
