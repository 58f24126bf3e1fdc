pub mod errors;
pub mod language;
pub mod models;
pub mod tasks;
pub mod viewer;

pub use errors::AnekdotError;
pub use models::Joke;
pub use viewer::ViewerState;
