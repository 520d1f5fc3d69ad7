//! Animation engine — timelines, clocks, playback.

pub mod animator;
pub mod clock;
pub mod timeline;

pub use animator::{Animator, PlaybackReport, Player};
pub use clock::{Clock, ManualClock, SystemClock};
pub use timeline::{Timeline, VisitEvent};
