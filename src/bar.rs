use egui::Color32;
use fully_pub::fully_pub;

use crate::palette::color_for_height;

/// A vertical bar anchored to the panel midline. Geometry is in panel units;
/// a negative height hangs the bar below the midline.
#[fully_pub]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Color32,
}

impl Bar {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Bar {
            x,
            y,
            width,
            height,
            color: color_for_height(height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_color_comes_from_the_palette_lookup() {
        let bar = Bar::new(0, 400, 50, 144);
        assert_eq!(bar.color, color_for_height(144));
    }

    #[test]
    fn bars_with_equal_heights_share_a_color() {
        let above = Bar::new(0, 400, 50, 240);
        let below = Bar::new(50, 400, 50, -240);

        assert_eq!(above.color, Bar::new(100, 400, 50, 240).color);
        assert_ne!(above.color, below.color);
    }

    #[test]
    fn bar_keeps_the_sign_of_its_height() {
        assert_eq!(Bar::new(0, 400, 50, -120).height, -120);
    }
}
