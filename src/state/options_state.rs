//! Widget options state management.
//!
//! The options panel edits a draft copy; the attached widget only sees the
//! applied copy, since a widget keeps the options it was attached with.

use minigallery::GalleryOptions;

/// State related to widget options.
#[derive(Debug, Clone, Default)]
pub struct OptionsState {
    /// Options the current widget was attached with
    applied: GalleryOptions,
    /// Options being edited in the options panel
    draft: GalleryOptions,
    /// Whether the options panel is open
    panel_open: bool,
}

impl OptionsState {
    /// Creates an options state starting from `options`.
    pub fn with_options(options: GalleryOptions) -> Self {
        Self {
            draft: options.clone(),
            applied: options,
            panel_open: false,
        }
    }

    pub fn applied(&self) -> &GalleryOptions {
        &self.applied
    }

    pub fn draft_mut(&mut self) -> &mut GalleryOptions {
        &mut self.draft
    }

    /// Returns true if the draft differs from the applied options.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.applied
    }

    /// Makes the draft the applied options.
    pub fn apply_draft(&mut self) {
        self.applied = self.draft.clone();
    }

    /// Resets the draft to defaults.
    pub fn reset_draft(&mut self) {
        self.draft = GalleryOptions::default();
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }
}
