//! Ratatui front-end: the card list, filter chips, spotlight and trending
//! panels, plus the terminal loop that drives them.

mod app;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
