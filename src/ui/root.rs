use egui::{CentralPanel, Context, Frame, Label, SidePanel, WidgetText};
use egui_notify::Toasts;
use fully_pub::fully_pub;

use crate::{
    ui::{canvas::canvas_ui, control_panel::control_panel_ui},
    VisualSort,
};

#[fully_pub]
#[derive(Default)]
pub struct UIState {
    toasts: Toasts,
    completion_announced: bool, // Keeps the completion toast from repeating.
}

pub fn visual_sort_ui(app: &mut VisualSort, ctx: &Context) {
    SidePanel::left("control_panel")
        .resizable(false)
        .exact_width(260.0)
        .show(ctx, |ui| control_panel_ui(ui, app));

    CentralPanel::default().frame(Frame::NONE).show(ctx, |ui| canvas_ui(ui, app));

    app.ui.toasts.show(ctx);
}

pub fn unselectable_label(text: impl Into<WidgetText>) -> Label {
    Label::new(text).selectable(false)
}
