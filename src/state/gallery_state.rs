//! Loaded gallery state management.
//!
//! This module encapsulates the markup currently shown by the viewer and the
//! widget attached to it. Attaching needs text measurement, which is only
//! available while painting, so a freshly loaded markup waits as "pending"
//! until the gallery panel attaches it.

use minigallery::{GalleryHost, GalleryMarkup, GalleryOptions, MiniGallery, TextMeasure};
use std::path::PathBuf;

/// State related to the displayed gallery.
///
/// Responsibilities:
/// - Holding the markup and where it came from
/// - Owning the attached widget through a [`GalleryHost`]
/// - Tracking whether the markup still needs to be attached
#[derive(Debug, Default)]
pub struct GalleryState {
    /// Host owning the attached widget
    host: GalleryHost,
    /// Container id of the displayed gallery
    container: Option<String>,
    /// Markup of the displayed gallery
    markup: Option<GalleryMarkup>,
    /// Markup file path (None for virtual galleries)
    source: Option<PathBuf>,
    /// True while the markup waits to be attached
    attach_pending: bool,
}

impl GalleryState {
    /// Creates an empty gallery state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed gallery with `markup`.
    ///
    /// # Arguments
    /// * `container` - Container id the markup will be attached to
    /// * `markup` - The gallery markup
    /// * `source` - Optional markup file path (None for virtual galleries)
    pub fn load(&mut self, container: String, markup: GalleryMarkup, source: Option<PathBuf>) {
        if let Some(old) = self.container.take() {
            self.host.detach(&old);
        }
        self.container = Some(container);
        self.markup = Some(markup);
        self.source = source;
        self.attach_pending = true;
    }

    /// Drops the attached widget so the same markup is attached again with new options.
    pub fn request_reattach(&mut self) {
        if let Some(container) = &self.container {
            self.host.detach(container);
            self.attach_pending = self.markup.is_some();
        }
    }

    /// Attaches the pending markup, if any.
    pub fn attach_pending(&mut self, options: &GalleryOptions, measure: &dyn TextMeasure) {
        if !self.attach_pending {
            return;
        }
        if let (Some(container), Some(markup)) = (&self.container, &self.markup) {
            self.host.attach(container, markup, options.clone(), measure);
        }
        self.attach_pending = false;
    }

    // ===== Queries =====

    /// Returns true while the markup waits to be attached.
    pub fn is_attach_pending(&self) -> bool {
        self.attach_pending
    }

    /// Returns the attached widget, if any.
    pub fn gallery(&self) -> Option<&MiniGallery> {
        self.host.get(self.container.as_deref()?)
    }

    /// Returns the attached widget mutably, if any.
    pub fn gallery_mut(&mut self) -> Option<&mut MiniGallery> {
        self.host.get_mut(self.container.as_deref()?)
    }

    /// Returns the container id of the displayed gallery.
    pub fn container(&self) -> Option<&str> {
        self.container.as_deref()
    }

    /// Returns the markup file path (None for virtual galleries).
    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }

    /// Returns the displayed markup.
    pub fn markup(&self) -> Option<&GalleryMarkup> {
        self.markup.as_ref()
    }

    // ===== Clock =====

    /// Advances every attached widget by `dt` milliseconds.
    pub fn advance(&mut self, dt: f64) {
        self.host.advance_all(dt);
    }

    /// Returns true while any attached widget has work in flight.
    pub fn is_animating(&self) -> bool {
        self.host.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minigallery::{generate_gallery, FixedAdvance};

    #[test]
    fn test_load_waits_for_attach() {
        let mut state = GalleryState::new();
        state.load("virtual:1".to_string(), generate_gallery(1, 3, 4), None);
        assert!(state.is_attach_pending());
        assert!(state.gallery().is_none());

        state.attach_pending(&GalleryOptions::default(), &FixedAdvance(7.0));
        assert!(!state.is_attach_pending());
        assert_eq!(state.gallery().map(|g| g.panels().len()), Some(3));
    }

    #[test]
    fn test_reattach_uses_new_options() {
        let mut state = GalleryState::new();
        state.load("virtual:1".to_string(), generate_gallery(1, 2, 2), None);
        state.attach_pending(&GalleryOptions::default(), &FixedAdvance(7.0));

        let options = GalleryOptions { height: 90.0, ..GalleryOptions::default() };
        state.request_reattach();
        state.attach_pending(&options, &FixedAdvance(7.0));
        assert_eq!(state.gallery().map(|g| g.viewport_height()), Some(90.0));
    }

    #[test]
    fn test_loading_replaces_previous_container() {
        let mut state = GalleryState::new();
        state.load("a".to_string(), generate_gallery(1, 2, 2), None);
        state.attach_pending(&GalleryOptions::default(), &FixedAdvance(7.0));
        state.load("b".to_string(), generate_gallery(2, 5, 2), None);
        state.attach_pending(&GalleryOptions::default(), &FixedAdvance(7.0));

        assert_eq!(state.container(), Some("b"));
        assert_eq!(state.gallery().map(|g| g.panels().len()), Some(5));
    }
}
