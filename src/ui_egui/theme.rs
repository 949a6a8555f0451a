//! Color conversions between the stored display colors and egui.

use crate::models::color::RgbaColor;

pub fn rgba_to_color32(color: RgbaColor) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn color32_to_rgba(color: egui::Color32) -> RgbaColor {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    RgbaColor { r, g, b, a }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_convert_both_ways() {
        let color = RgbaColor::new(0x2f, 0x41, 0x54, 255);
        assert_eq!(color32_to_rgba(rgba_to_color32(color)), color);
    }
}
