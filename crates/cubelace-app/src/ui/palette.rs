use cubelace_core::ColorId;
use eframe::egui::{Color32, Visuals};

/// Sticker colors, matching the classic cube scheme.
#[must_use]
pub fn sticker_color(color: ColorId) -> Color32 {
    match color {
        ColorId::Yellow => Color32::from_rgb(0xff, 0xd5, 0x00),
        ColorId::Green => Color32::from_rgb(0x00, 0x9b, 0x48),
        ColorId::Orange => Color32::from_rgb(0xff, 0x58, 0x00),
        ColorId::Blue => Color32::from_rgb(0x00, 0x46, 0xad),
        ColorId::Red => Color32::from_rgb(0xb7, 0x12, 0x34),
        ColorId::White => Color32::WHITE,
    }
}

/// Colors used around the stickers.
///
/// Sticker fills never change with the theme; outlines and the control
/// label follow the current visuals.
#[derive(Debug, Clone)]
pub struct BoardPalette {
    pub border: Color32,
    pub border_hovered: Color32,
    pub control_text: Color32,
    pub control_text_hovered: Color32,
    pub control_bg_hovered: Color32,
}

impl BoardPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            border: Color32::BLACK,
            border_hovered: visuals.selection.stroke.color,
            control_text: visuals.text_color(),
            control_text_hovered: visuals.strong_text_color(),
            control_bg_hovered: visuals.widgets.hovered.bg_fill,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sticker_colors_are_distinct() {
        let colors: HashSet<Color32> = ColorId::ALL.into_iter().map(sticker_color).collect();
        assert_eq!(colors.len(), ColorId::COUNT);
    }
}
