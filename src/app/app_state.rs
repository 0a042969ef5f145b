//! Centralized application state for the gallery viewer.
//!
//! Composes focused state components, each keeping its own invariants.

use crate::state::{GalleryState, OptionsState, ThemeState};
use minigallery::GalleryOptions;

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded markup and attached widget
    pub gallery: GalleryState,

    /// Applied and edited widget options
    pub options: OptionsState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates a new AppState with a theme and options loaded from storage.
    pub fn with_theme_and_options(theme_name: String, options: GalleryOptions) -> Self {
        Self {
            gallery: GalleryState::new(),
            options: OptionsState::with_options(options),
            theme: ThemeState::with_theme(theme_name),
            error_message: None,
        }
    }
}
