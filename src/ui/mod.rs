//! Terminal UI: a thin presentation adapter over the game session. All game
//! rules live in the core; this layer renders snapshots and forwards keys.

mod app;
mod game_view;

pub use app::App;
