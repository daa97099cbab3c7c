pub mod events;
pub use events::*;

#[cfg(feature = "playback")]
pub mod session;
#[cfg(feature = "playback")]
pub use session::{AudioSink, ClockSink, Completion, Player, Session, VisualIndicator};
