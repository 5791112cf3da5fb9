mod broadcaster;
mod session_rng;

pub mod tictactoe;

pub use broadcaster::{GameBroadcaster, GameOverNotification, MoveUpdate};
pub use session_rng::SessionRng;
