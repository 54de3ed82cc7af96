//! Front ends for the engine: an interactive terminal game view and a
//! headless replay of a scripted move list.

mod app;
mod game_view;
pub mod script;

pub use app::{App, AppSettings};
