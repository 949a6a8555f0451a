//! Cross-platform enumeration of the outputs the external screen can be sent to.
//!
//! On Windows, uses the Win32 `EnumDisplayMonitors` / `GetMonitorInfoW` APIs
//! to return every connected monitor with its device name and full
//! rectangle, primary monitor first.
//!
//! On other platforms, asks `display-info` for the attached outputs. When
//! that fails, falls back to a single "Primary" output derived from the egui
//! viewport's `monitor_size` field (or a 1920×1080 default).

/// A rectangle in virtual desktop coordinates, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl MonitorRect {
    pub fn origin(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// One output the external screen can be placed on.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOutput {
    pub name: String,
    pub rect: MonitorRect,
}

/// Source of the currently attached outputs, in presentation order.
#[cfg_attr(test, mockall::automock)]
pub trait DisplayEnumerator {
    fn list_available_displays(&self) -> Vec<DisplayOutput>;
}

/// How the external screen is sized once it has moved to an output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementSize {
    Maximized,
    Fixed { width: f32, height: f32 },
}

/// Where the external screen goes when an output is picked.
///
/// `origin` is in physical pixels; `size` is already in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub origin: (f32, f32),
    pub size: PlacementSize,
}

impl Placement {
    /// The same placement with `origin` converted to egui points.
    pub fn in_points(self, pixels_per_point: f32) -> Self {
        if pixels_per_point <= 0.0 {
            return self;
        }
        let (x, y) = self.origin;
        Self {
            origin: (x / pixels_per_point, y / pixels_per_point),
            ..self
        }
    }
}

/// An output as listed by the platform, before ordering.
struct DetectedOutput {
    output: DisplayOutput,
    primary: bool,
}

/// Primary output first; the rest keep the platform's order.
fn primary_first(mut found: Vec<DetectedOutput>) -> Vec<DisplayOutput> {
    found.sort_by_key(|entry| !entry.primary);
    found.into_iter().map(|entry| entry.output).collect()
}

/// Work out the placement for the output at `index`.
///
/// Every output but the first gets the window maximized; the first one gets
/// `default_size`. Returns `None` when `index` is out of range.
pub fn placement_for(
    outputs: &[DisplayOutput],
    index: usize,
    default_size: (f32, f32),
) -> Option<Placement> {
    let output = outputs.get(index)?;
    let size = if index > 0 {
        PlacementSize::Maximized
    } else {
        PlacementSize::Fixed {
            width: default_size.0,
            height: default_size.1,
        }
    };

    Some(Placement {
        origin: output.rect.origin(),
        size,
    })
}

/// Outputs offered in the "screen" picker and the one currently chosen.
#[derive(Debug, Clone, Default)]
pub struct DisplayTargets {
    outputs: Vec<DisplayOutput>,
    selected: Option<usize>,
}

impl DisplayTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the list from `enumerator`. The selection is cleared.
    pub fn reload(&mut self, enumerator: &dyn DisplayEnumerator) {
        self.outputs = enumerator.list_available_displays();
        self.selected = None;
        log::info!(
            "Found {} display output(s): {}",
            self.outputs.len(),
            self.outputs
                .iter()
                .map(|output| output.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    /// Re-list the outputs and pick `preferred`, or the first output when
    /// `preferred` does not exist.
    ///
    /// With a single output there is nowhere to move the screen, so it is
    /// selected without a placement and the window keeps its geometry.
    pub fn reload_to(
        &mut self,
        enumerator: &dyn DisplayEnumerator,
        preferred: usize,
        default_size: (f32, f32),
    ) -> Option<Placement> {
        self.reload(enumerator);
        match self.outputs.len() {
            0 => None,
            1 => {
                self.selected = Some(0);
                None
            }
            len => {
                let index = if preferred < len { preferred } else { 0 };
                self.select(index, default_size)
            }
        }
    }

    /// Choose the output at `index` and return where the external screen should go.
    pub fn select(&mut self, index: usize, default_size: (f32, f32)) -> Option<Placement> {
        let placement = placement_for(&self.outputs, index, default_size)?;
        self.selected = Some(index);
        Some(placement)
    }

    pub fn outputs(&self) -> &[DisplayOutput] {
        &self.outputs
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.outputs.get(index))
            .map(|output| output.name.as_str())
    }
}

// ── Windows implementation ──────────────────────────────────────────────────

#[cfg(target_os = "windows")]
mod platform {
    use super::{primary_first, DetectedOutput, DisplayOutput, MonitorRect};

    use windows::Win32::Foundation::{BOOL, LPARAM, RECT};
    use windows::Win32::Graphics::Gdi::{
        EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO, MONITORINFOEXW,
    };

    const PRIMARY_MONITOR_FLAG: u32 = 0x1;

    /// Enumerate all connected monitors via the Win32 API, primary first.
    pub fn enumerate_outputs() -> Vec<DisplayOutput> {
        let mut found: Vec<DetectedOutput> = Vec::new();

        unsafe {
            let found_ptr = &mut found as *mut Vec<DetectedOutput> as isize;
            let _ = EnumDisplayMonitors(
                HDC::default(),
                None,
                Some(monitor_enum_proc),
                LPARAM(found_ptr),
            );
        }

        primary_first(found)
    }

    /// Callback invoked once per monitor by `EnumDisplayMonitors`.
    unsafe extern "system" fn monitor_enum_proc(
        hmonitor: HMONITOR,
        _hdc: HDC,
        _rect: *mut RECT,
        lparam: LPARAM,
    ) -> BOOL {
        let found = &mut *(lparam.0 as *mut Vec<DetectedOutput>);

        let mut info = MONITORINFOEXW::default();
        info.monitorInfo.cbSize = std::mem::size_of::<MONITORINFOEXW>() as u32;

        if GetMonitorInfoW(hmonitor, &mut info as *mut MONITORINFOEXW as *mut MONITORINFO)
            .as_bool()
        {
            let area = info.monitorInfo.rcMonitor;
            let name_len = info
                .szDevice
                .iter()
                .position(|c| *c == 0)
                .unwrap_or(info.szDevice.len());
            let name = String::from_utf16_lossy(&info.szDevice[..name_len]);

            // rcMonitor is in physical pixels for a per-monitor DPI aware process.
            found.push(DetectedOutput {
                output: DisplayOutput {
                    name,
                    rect: MonitorRect {
                        x: area.left as f32,
                        y: area.top as f32,
                        width: (area.right - area.left) as f32,
                        height: (area.bottom - area.top) as f32,
                    },
                },
                primary: info.monitorInfo.dwFlags & PRIMARY_MONITOR_FLAG != 0,
            });
        }

        BOOL(1) // continue enumeration
    }
}

// ── Other platforms ─────────────────────────────────────────────────────────

#[cfg(not(target_os = "windows"))]
mod platform {
    use super::{primary_first, DetectedOutput, DisplayOutput, MonitorRect};

    use display_info::DisplayInfo;

    /// Enumerate the outputs known to X11/Wayland or CoreGraphics, primary first.
    /// Returns an empty list when the platform cannot be queried.
    pub fn enumerate_outputs() -> Vec<DisplayOutput> {
        match DisplayInfo::all() {
            Ok(displays) => primary_first(displays.into_iter().map(detected).collect()),
            Err(e) => {
                log::warn!("Failed to list display outputs: {e}");
                Vec::new()
            }
        }
    }

    fn detected(info: DisplayInfo) -> DetectedOutput {
        // CoreGraphics reports points; X11 and Wayland report pixels.
        let scale = if cfg!(target_os = "macos") {
            info.scale_factor
        } else {
            1.0
        };
        let rect = MonitorRect {
            x: info.x as f32 * scale,
            y: info.y as f32 * scale,
            width: info.width as f32 * scale,
            height: info.height as f32 * scale,
        };
        let name = if info.name.is_empty() {
            format!("Display {}", info.id)
        } else {
            info.name
        };

        DetectedOutput {
            output: DisplayOutput { name, rect },
            primary: info.is_primary,
        }
    }
}

/// Outputs reported by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDisplays {
    /// Monitor size reported by egui, used when the platform query fails.
    pub egui_monitor_size: Option<(f32, f32)>,
}

impl SystemDisplays {
    pub fn new(egui_monitor_size: Option<(f32, f32)>) -> Self {
        Self { egui_monitor_size }
    }
}

impl DisplayEnumerator for SystemDisplays {
    fn list_available_displays(&self) -> Vec<DisplayOutput> {
        let mut outputs = platform::enumerate_outputs();

        if outputs.is_empty() {
            let (width, height) = self.egui_monitor_size.unwrap_or((1920.0, 1080.0));
            log::debug!("No platform outputs listed; using a single {width}×{height} output");
            outputs.push(DisplayOutput {
                name: "Primary".to_string(),
                rect: MonitorRect {
                    x: 0.0,
                    y: 0.0,
                    width,
                    height,
                },
            });
        }

        outputs
    }
}
