use eframe::egui::{
    self,
    containers,
};

use crate::gui::settings::{
    SettingsData,
    SettingsModal,
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        settings_modal: &mut SettingsModal,
        current_settings: &SettingsData,
        backend_connected: bool,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("Файл", |ui| {
                    if ui.button("Выход").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Настройки", |ui| {
                    if ui.button("Сервер...").clicked() {
                        settings_modal.open_settings(current_settings.clone());
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, backend_connected);
                });
            });
        });
    }

    fn show_status_indicator(ui: &mut egui::Ui, backend_connected: bool) {
        let color = if backend_connected {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let tooltip =
            if backend_connected { "Сервер доступен" } else { "Сервер недоступен" };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("сервер").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
