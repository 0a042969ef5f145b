//! State management modules for the gallery viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Gallery state (loaded markup, attached widget, pending attach)
//! - Options state (applied and edited widget options)
//! - Theme state (theme manager, current theme)

mod gallery_state;
mod options_state;
mod theme_state;

pub use gallery_state::GalleryState;
pub use options_state::OptionsState;
pub use theme_state::ThemeState;
