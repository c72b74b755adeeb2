use egui::{containers, Button, Frame, Margin, RichText, ScrollArea, Separator, Slider, Ui};
use egui_material_icons::icons;
use strum::IntoEnumIterator;

use crate::{
    advance_animation, restart_animation, set_new_values,
    sorter::{default_set, is_done, random_set, SortAlgorithm},
    ui::root::unselectable_label,
    AnimationMode, VisualSort, KEY_COMMANDS,
};

pub fn control_panel_ui(ui: &mut Ui, app: &mut VisualSort) {
    Frame::new().inner_margin(Margin::symmetric(12, 16)).show(ui, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.add(unselectable_label(RichText::new("Algorithm").heading()));
            ui.add_space(8.0);

            let mut should_restart = false;
            for algorithm in SortAlgorithm::iter() {
                let response = ui.radio_value(&mut app.sorter.algorithm, algorithm, algorithm.name());
                should_restart |= response.clicked();
            }
            if should_restart {
                restart_animation(app);
            }

            ui.add(Separator::default().spacing(24.0));

            ui.add(unselectable_label(RichText::new("Animation").heading()));
            ui.add_space(8.0);

            for mode in AnimationMode::iter() {
                ui.radio_value(&mut app.animation_mode, mode, mode.name());
            }

            ui.add_space(8.0);

            let delay_slider = Slider::new(&mut app.delay_ms, 1..=250).suffix(" ms").text("Delay");
            ui.add_enabled(app.animation_mode == AnimationMode::Automatic, delay_slider);

            ui.add_space(8.0);

            playback_buttons_ui(ui, app);

            ui.add(Separator::default().spacing(24.0));

            ui.add(unselectable_label(RichText::new("Set").heading()));
            ui.add_space(8.0);

            ui.add(Slider::new(&mut app.random_size, 2..=512).text("Size"));

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let shuffle_button = Button::new(RichText::new(icons::ICON_SHUFFLE).size(18.0));
                let response = ui.add(shuffle_button).on_hover_text("New random set");
                if response.clicked() {
                    let size = app.random_size;
                    set_new_values(app, random_set(size));
                }

                let default_button = Button::new(RichText::new(icons::ICON_RESTART_ALT).size(18.0));
                let response = ui.add(default_button).on_hover_text("Default set");
                if response.clicked() {
                    set_new_values(app, default_set());
                }
            });

            ui.add(Separator::default().spacing(24.0));

            ui.add(unselectable_label(RichText::new("Key Commands").heading()));
            ui.add_space(8.0);

            for (key, binding) in KEY_COMMANDS.iter() {
                containers::Sides::new().show(
                    ui,
                    |ui| {
                        ui.add(unselectable_label(format!("{:?}", key)));
                    },
                    |ui| {
                        ui.add(unselectable_label(binding.to_string()));
                    },
                );
            }

            ui.add(Separator::default().spacing(24.0));

            status_ui(ui, app);
        });
    });
}

fn playback_buttons_ui(ui: &mut Ui, app: &mut VisualSort) {
    ui.horizontal(|ui| {
        match app.animation_mode {
            AnimationMode::Automatic => {
                let icon = if app.paused { icons::ICON_PLAY_ARROW } else { icons::ICON_PAUSE };
                let tooltip = if app.paused { "Resume" } else { "Pause" };

                let pause_button = Button::new(RichText::new(icon).size(18.0));
                let response = ui
                    .add_enabled(!is_done(&app.sorter), pause_button)
                    .on_hover_text(tooltip)
                    .on_disabled_hover_text("Already sorted");
                if response.clicked() {
                    app.paused = !app.paused;
                }
            }
            AnimationMode::OnClick => {
                let step_button = Button::new(RichText::new(icons::ICON_SKIP_NEXT).size(18.0));
                let response = ui
                    .add_enabled(!is_done(&app.sorter), step_button)
                    .on_hover_text("Step")
                    .on_disabled_hover_text("Already sorted");
                if response.clicked() {
                    advance_animation(app);
                }
            }
        }

        let restart_button = Button::new(RichText::new(icons::ICON_REPLAY).size(18.0));
        let response = ui.add(restart_button).on_hover_text("Restart");
        if response.clicked() {
            restart_animation(app);
        }
    });
}

fn status_ui(ui: &mut Ui, app: &mut VisualSort) {
    let status = if is_done(&app.sorter) {
        "Sorted".to_string()
    } else {
        format!("Frame {} of {}", app.sorter.frame, app.sorter.values.len())
    };

    ui.add(unselectable_label(status));
}
