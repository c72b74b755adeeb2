use egui::{pos2, Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, Ui};

use crate::{advance_animation, sorter::PANEL_HEIGHT, AnimationMode, VisualSort};

const BACKGROUND_COLOR: Color32 = Color32::BLACK;
const FOREGROUND_COLOR: Color32 = Color32::WHITE;

/// Set sizes at or below these thresholds get a border / a numeric label per bar.
const BORDER_THRESHOLD: usize = 32;
const LABEL_THRESHOLD: usize = 16;

const LABEL_FONT_SIZE: f32 = 20.0;
const LABEL_X_SHIFT: f32 = 5.0;
const LABEL_GAP: f32 = 4.0;

/// Draws the bars above or below the midline and, in click mode, advances the
/// animation one frame per mouse release on the canvas.
pub fn canvas_ui(ui: &mut Ui, app: &mut VisualSort) {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());

    if app.animation_mode == AnimationMode::OnClick && response.clicked() {
        advance_animation(app);
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, BACKGROUND_COLOR);

    let total_width: i32 = app.sorter.bars.iter().map(|bar| bar.width).sum();
    if total_width == 0 {
        return;
    }

    // Bars are laid out in panel units and scaled onto the canvas.
    let scale_x = rect.width() / total_width as f32;
    let scale_y = rect.height() / PANEL_HEIGHT as f32;
    let midline = rect.top() + rect.height() / 2.0;
    let set_size = app.sorter.bars.len();

    let mut x_position = 0;

    for bar in &app.sorter.bars {
        let left = rect.left() + (bar.x + x_position) as f32 * scale_x;
        let width = bar.width as f32 * scale_x;
        let height = bar.height as f32 * scale_y;
        x_position += bar.width;

        if bar.height == 0 {
            continue;
        }

        // Each bar is anchored to its own midline coordinate, scaled onto the canvas.
        let anchor = rect.top() + bar.y as f32 * scale_y;
        let bar_rect = if bar.height > 0 {
            Rect::from_min_max(pos2(left, anchor - height), pos2(left + width, anchor))
        } else {
            Rect::from_min_max(pos2(left, anchor), pos2(left + width, anchor - height))
        };

        painter.rect_filled(bar_rect, 0.0, bar.color);

        if set_size <= BORDER_THRESHOLD {
            painter.rect_stroke(bar_rect, 0.0, Stroke::new(1.0, FOREGROUND_COLOR), StrokeKind::Inside);
        }

        if set_size <= LABEL_THRESHOLD {
            let font = FontId::proportional(LABEL_FONT_SIZE);
            let text = bar.height.to_string();

            if bar.height > 0 {
                let position = pos2(bar_rect.left() + LABEL_X_SHIFT, bar_rect.top() - LABEL_GAP);
                painter.text(position, Align2::LEFT_BOTTOM, text, font, FOREGROUND_COLOR);
            } else {
                let position = pos2(bar_rect.left() + LABEL_X_SHIFT, bar_rect.bottom() + LABEL_GAP);
                painter.text(position, Align2::LEFT_TOP, text, font, FOREGROUND_COLOR);
            }
        }
    }

    painter.hline(rect.x_range(), midline, Stroke::new(1.0, Color32::DARK_GRAY));
}
