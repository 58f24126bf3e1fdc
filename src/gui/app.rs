use std::time::Duration;

use eframe::egui;

use super::{
    joke_panel::{
        JokeAction,
        JokePanel,
    },
    settings::{
        SettingsData,
        SettingsModal,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        ViewerState,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const SETTINGS_FILE: &str = "settings.json";

pub struct AnekdotApp {
    viewer: ViewerState,
    settings_data: SettingsData,
    theme: Theme,
    settings_modal: SettingsModal,
    backend_connected: bool,
    task_manager: TaskManager,
}

impl AnekdotApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let theme = Theme::dracula();

        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        let mut app = Self {
            viewer: ViewerState::new(),
            settings_data,
            theme,
            settings_modal: SettingsModal::new(),
            backend_connected: false,
            task_manager: TaskManager::new(),
        };

        // The one automatic fetch; everything after this is user-driven.
        app.load_joke();

        app
    }

    fn load_joke(&mut self) {
        let request = self.viewer.begin_load();
        self.task_manager.fetch_joke(self.settings_data.backend_url.clone(), request);
    }

    fn translate_joke(&mut self) {
        if let Some((request, text)) = self.viewer.begin_translate() {
            self.task_manager.translate_joke(
                self.settings_data.backend_url.clone(),
                request,
                text,
            );
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::JokeFetched { request, result } => {
                self.backend_connected = result.is_ok();
                if let Err(e) = &result {
                    eprintln!("Joke fetch failed: {}", e);
                }
                self.viewer.apply_joke_result(request, result);
            }
            TaskResult::TranslationFetched { request, result } => {
                if let Err(e) = &result {
                    eprintln!("Translation failed: {}", e);
                }
                self.viewer.apply_translation_result(request, result);
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for AnekdotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();

        for result in task_results {
            self.handle_task_result(result);
        }

        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }

        TopBar::show(ctx, &mut self.settings_modal, &self.settings_data, self.backend_connected);

        if let Some(action) = JokePanel::show(ctx, &self.viewer, &self.theme) {
            match action {
                JokeAction::NextJoke => self.load_joke(),
                JokeAction::Translate => self.translate_joke(),
            }
        }

        if let Some(settings) = self.settings_modal.show(ctx) {
            self.settings_data = settings;
            self.save_settings();
        }

        // Results arrive over a channel, so keep repainting while a request
        // is in flight.
        if self.viewer.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
