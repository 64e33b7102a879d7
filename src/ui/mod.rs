//! Terminal UI: renders a game and turns key presses into column drops.

mod app;
mod game_view;

pub use app::App;
pub use game_view::piece_color;
