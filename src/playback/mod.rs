//! Quiz playback: the scene state machine and the task that drives it.

mod controller;
mod display;
mod session;
mod tip;

pub use controller::Playback;
pub use display::{Display, DisplayEvent, TitleKind};
pub use session::{run_session, Action};
pub use tip::TipTimer;
