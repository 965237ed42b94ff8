//! Ratatui front-end. `terminal` owns the draw/input loop, `app` holds the
//! navigation state and rendering, and `screens` carries per-screen list
//! state.

mod app;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
