//! Weather-to-emoji mapping for Stratus
//!
//! Pure selection logic: given a weather observation and the current
//! instant, pick the custom-emoji status to display. No I/O, no state.

pub mod select;
pub mod types;

pub use select::{daytime_hours_contain, is_daytime, select_status};
pub use types::{DocumentId, EmojiStatus, StatusKey};
