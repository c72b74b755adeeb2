use std::time::{Duration, Instant};

use egui::{vec2, Context, Event, Key};
use fully_pub::fully_pub;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use log::info;
use strum_macros::EnumIter;

use crate::{
    sorter::{default_set, random_set, SortAlgorithm, Sorter},
    ui::root::{visual_sort_ui, UIState},
};

mod bar;
mod palette;
mod sorter;
mod ui;

pub const DEFAULT_RANDOM_SET_SIZE: usize = 128;
pub const DEFAULT_DELAY_MS: u64 = 10;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(vec2(1080.0, 820.0))
            .with_min_inner_size(vec2(700.0, 500.0)),
        ..Default::default()
    };

    eframe::run_native("Visual Sort", options, Box::new(|cc| Ok(Box::new(VisualSort::new(cc)))))
}

#[derive(EnumIter, Debug, PartialEq, Eq, Clone, Copy)]
pub enum AnimationMode {
    Automatic,
    OnClick,
}

impl AnimationMode {
    pub fn name(&self) -> &'static str {
        match self {
            AnimationMode::Automatic => "Automatic",
            AnimationMode::OnClick => "On Click",
        }
    }
}

#[fully_pub]
pub struct VisualSort {
    sorter: Sorter,
    source_values: Vec<i32>, // The unsorted set, kept so restarts replay the same animation.

    animation_mode: AnimationMode,
    delay_ms: u64,
    paused: bool,
    last_step: Instant,
    random_size: usize,

    ui: UIState,
}

impl VisualSort {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_material_icons::initialize(&cc.egui_ctx);

        let source_values = random_set(DEFAULT_RANDOM_SET_SIZE);

        Self {
            sorter: Sorter::new(SortAlgorithm::Selection, source_values.clone()),
            source_values,
            animation_mode: AnimationMode::Automatic,
            delay_ms: DEFAULT_DELAY_MS,
            paused: false,
            last_step: Instant::now(),
            random_size: DEFAULT_RANDOM_SET_SIZE,
            ui: UIState::default(),
        }
    }
}

impl eframe::App for VisualSort {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        handle_key_commands(ctx, self);

        if self.animation_mode == AnimationMode::Automatic && !self.paused && !sorter::is_done(&self.sorter) {
            let delay = Duration::from_millis(self.delay_ms);

            if self.last_step.elapsed() >= delay {
                advance_animation(self);
                self.last_step = Instant::now();
            }

            ctx.request_repaint_after(delay);
        }

        visual_sort_ui(self, ctx);
    }
}

/// Advances the animation by one frame and announces completion once.
pub fn advance_animation(app: &mut VisualSort) {
    sorter::advance(&mut app.sorter);

    if sorter::is_done(&app.sorter) && !app.ui.completion_announced {
        info!("{} finished after {} frames.", app.sorter.algorithm.name(), app.sorter.frame);
        app.ui.toasts.success(format!("{} complete.", app.sorter.algorithm.name()));
        app.ui.completion_announced = true;
    }
}

/// Replays the animation from the unsorted set with the currently selected algorithm.
pub fn restart_animation(app: &mut VisualSort) {
    app.sorter = Sorter::new(app.sorter.algorithm, app.source_values.clone());
    app.ui.completion_announced = false;
    app.last_step = Instant::now();
}

pub fn set_new_values(app: &mut VisualSort, values: Vec<i32>) {
    app.source_values = values;
    restart_animation(app);
}

lazy_static! {
    pub static ref KEY_COMMANDS: IndexMap<Key, &'static str> = {
        let mut map = IndexMap::new();

        map.insert(Key::Space, "Pause / Step");
        map.insert(Key::R, "Random Set");
        map.insert(Key::D, "Default Set");

        map
    };
}

pub fn handle_key_commands(ctx: &Context, app: &mut VisualSort) {
    if ctx.wants_keyboard_input() {
        return;
    }

    ctx.input(|i| {
        for event in &i.events {
            if let Event::Key {
                key,
                pressed: true,
                physical_key: _,
                repeat: _,
                modifiers: _,
            } = event
            {
                let Some(binding) = KEY_COMMANDS.get(key) else {
                    continue;
                };

                info!("Key pressed: {}", binding);

                match key {
                    Key::Space => match app.animation_mode {
                        AnimationMode::Automatic => app.paused = !app.paused,
                        AnimationMode::OnClick => advance_animation(app),
                    },
                    Key::R => {
                        let size = app.random_size;
                        set_new_values(app, random_set(size));
                    }
                    Key::D => set_new_values(app, default_set()),
                    _ => {}
                }
            }
        }
    });
}
