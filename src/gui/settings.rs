use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8888";

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub backend_url: String,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { backend_url: DEFAULT_BACKEND_URL.to_string(), dark_mode: true }
    }
}

pub struct SettingsModal {
    open: bool,
    url_input: String,
    original: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, url_input: String::new(), original: SettingsData::default() }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.url_input = current_settings.backend_url.clone();
        self.original = current_settings;
        self.open = true;
    }

    fn is_dirty(&self) -> bool {
        self.url_input != self.original.backend_url
    }

    /// Returns updated settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(360.0);
            ui.heading("Настройки сервера");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Адрес сервера:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.url_input)
                        .desired_width(f32::INFINITY)
                        .hint_text(DEFAULT_BACKEND_URL),
                );
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            let is_dirty = self.is_dirty();
            let url_valid = !self.url_input.trim().is_empty();

            ui.horizontal(|ui| {
                let save_clicked = ui
                    .add_enabled(is_dirty && url_valid, egui::Button::new("Сохранить"))
                    .clicked();
                let cancel_clicked = ui.button("Отмена").clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("По умолчанию").clicked();
                });

                if save_clicked {
                    let mut settings = self.original.clone();
                    settings.backend_url = self.url_input.trim().trim_end_matches('/').to_string();
                    result = Some(settings);
                    self.open = false;
                }

                if cancel_clicked {
                    self.open = false;
                }

                if reset_clicked {
                    self.url_input = DEFAULT_BACKEND_URL.to_string();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
