use anekdot::gui::AnekdotApp;
use eframe::egui;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 440.0])
            .with_min_inner_size([380.0, 320.0])
            .with_title("Анекдот дня"),
        ..Default::default()
    };

    eframe::run_native(
        "Анекдот дня",
        options,
        Box::new(|cc| Ok(Box::new(AnekdotApp::new(cc)))),
    )
}
