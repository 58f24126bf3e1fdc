pub mod app;
pub mod joke_panel;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::AnekdotApp;
