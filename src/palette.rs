use egui::Color32;
use lazy_static::lazy_static;

use crate::sorter::PANEL_HEIGHT;

/// Number of shades in the rainbow gradient: six legs of 256 steps each.
pub const PALETTE_SIZE: usize = 6 * 256;

/// Fraction of the panel height that the tallest bar may occupy. Heights are
/// mapped onto the palette relative to this.
const MAX_HEIGHT_RATIO: f64 = 0.95;

lazy_static! {
    pub static ref RAINBOW: Vec<Color32> = palette();
}

/// Builds the rainbow gradient, cycling hue red -> yellow -> green -> cyan ->
/// blue -> magenta -> red. Each leg ramps a single channel while the other two
/// stay pinned.
pub fn palette() -> Vec<Color32> {
    let mut shades = Vec::with_capacity(PALETTE_SIZE);
    let ramp = |step: i32| (step * 255 / 256) as u8;

    // red -> yellow
    for green in 0..=255 {
        shades.push(Color32::from_rgb(255, ramp(green), 0));
    }

    // yellow -> green
    for red in (0..=255).rev() {
        shades.push(Color32::from_rgb(ramp(red), 255, 0));
    }

    // green -> cyan
    for blue in 0..=255 {
        shades.push(Color32::from_rgb(0, 255, ramp(blue)));
    }

    // cyan -> blue
    for green in (0..=255).rev() {
        shades.push(Color32::from_rgb(0, ramp(green), 255));
    }

    // blue -> magenta
    for red in 0..=255 {
        shades.push(Color32::from_rgb(ramp(red), 0, 255));
    }

    // magenta -> red
    for blue in (0..=255).rev() {
        shades.push(Color32::from_rgb(255, 0, ramp(blue)));
    }

    shades
}

/// Looks up the shade for a bar height. Heights near the bottom of the range
/// land in the red end of the gradient, heights near the top in the magenta
/// end. Out-of-range heights are clamped to the palette bounds.
pub fn color_for_height(height: i32) -> Color32 {
    let max_height = (PANEL_HEIGHT as f64 * MAX_HEIGHT_RATIO) as i64;
    let score = (height as i64 + max_height / 2 - 1) * PALETTE_SIZE as i64 / max_height;
    let index = score.clamp(0, PALETTE_SIZE as i64 - 1) as usize;

    RAINBOW[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_six_legs_of_256_shades() {
        assert_eq!(palette().len(), PALETTE_SIZE);
    }

    #[test]
    fn palette_starts_and_ends_on_red() {
        let shades = palette();
        assert_eq!(shades[0], Color32::from_rgb(255, 0, 0));
        assert_eq!(shades[PALETTE_SIZE - 1], Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn palette_hits_the_primary_and_secondary_hues() {
        let shades = palette();

        // Last shade of each ramp sits right next to the pure hue.
        assert_eq!(shades[255], Color32::from_rgb(255, 254, 0)); // ~yellow
        assert_eq!(shades[256], Color32::from_rgb(254, 255, 0));
        assert_eq!(shades[512], Color32::from_rgb(0, 255, 0)); // green
        assert_eq!(shades[1024], Color32::from_rgb(0, 0, 255)); // blue
    }

    #[test]
    fn color_lookup_is_clamped_at_the_extremes() {
        let shades = palette();
        assert_eq!(color_for_height(i32::MIN / 2), shades[0]);
        assert_eq!(color_for_height(i32::MAX / 2), shades[PALETTE_SIZE - 1]);
    }

    #[test]
    fn equal_heights_map_to_equal_colors() {
        assert_eq!(color_for_height(123), color_for_height(123));
        assert_ne!(color_for_height(-300), color_for_height(300));
    }
}
