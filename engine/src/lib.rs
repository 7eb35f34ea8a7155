pub mod config;
pub mod logger;
pub mod tictactoe;
mod session_rng;

pub use session_rng::SessionRng;
