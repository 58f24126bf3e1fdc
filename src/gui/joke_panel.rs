use eframe::egui;

use crate::{
    core::ViewerState,
    gui::theme::Theme,
};

pub enum JokeAction {
    NextJoke,
    Translate,
}

pub struct JokePanel;

impl JokePanel {
    pub fn show(ctx: &egui::Context, viewer: &ViewerState, theme: &Theme) -> Option<JokeAction> {
        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.heading("😂 Анекдот дня");
                ui.add_space(15.0);

                egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
                    ui.set_width(ui.available_width() - 20.0);
                    ui.label(
                        egui::RichText::new(viewer.joke_display_text()).size(16.0),
                    );
                });

                if let Some(attribution) = viewer.attribution() {
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(attribution).small().color(theme.muted(ctx)),
                    );
                }

                ui.add_space(15.0);

                ui.horizontal(|ui| {
                    let buttons = if viewer.translate_available() { 2.0 } else { 1.0 };
                    let width = 160.0 * buttons + ui.spacing().item_spacing.x * (buttons - 1.0);
                    ui.add_space((ui.available_width() - width).max(0.0) / 2.0);

                    if ui
                        .add_sized([160.0, 28.0], egui::Button::new("Следующий анекдот"))
                        .clicked()
                    {
                        action = Some(JokeAction::NextJoke);
                    }

                    if viewer.translate_available()
                        && ui.add_sized([160.0, 28.0], egui::Button::new("Перевести")).clicked()
                    {
                        action = Some(JokeAction::Translate);
                    }
                });

                if viewer.translation_visible() {
                    ui.add_space(15.0);
                    ui.separator();
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new(viewer.translation_display_text())
                            .size(15.0)
                            .color(theme.cyan(ctx)),
                    );
                }
            });
        });

        action
    }
}
