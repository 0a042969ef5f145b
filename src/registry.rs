//! Attachment of galleries to containers.
//!
//! A container is initialized at most once: attaching again returns the
//! instance created the first time, and the new markup and options are ignored.

use crate::gallery::{MiniGallery, TextMeasure};
use crate::markup::GalleryMarkup;
use crate::options::GalleryOptions;
use crate::Millis;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, info};

/// Owns every gallery attached in one host, keyed by container id.
#[derive(Debug, Default)]
pub struct GalleryHost {
    galleries: HashMap<String, MiniGallery>,
}

impl GalleryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a gallery to `container`, or returns the one already attached.
    pub fn attach(
        &mut self,
        container: &str,
        markup: &GalleryMarkup,
        options: GalleryOptions,
        measure: &dyn TextMeasure,
    ) -> &mut MiniGallery {
        match self.galleries.entry(container.to_string()) {
            Entry::Occupied(entry) => {
                debug!(container, "Gallery already attached");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                info!(container, panels = markup.panels.len(), "Attaching gallery");
                entry.insert(MiniGallery::new(markup, options, measure))
            }
        }
    }

    /// Attaches the same markup and options to several containers.
    pub fn attach_all<'a, I>(
        &mut self,
        containers: I,
        markup: &GalleryMarkup,
        options: &GalleryOptions,
        measure: &dyn TextMeasure,
    ) where
        I: IntoIterator<Item = &'a str>,
    {
        for container in containers {
            self.attach(container, markup, options.clone(), measure);
        }
    }

    /// Removes the gallery attached to `container` so it can be attached afresh.
    pub fn detach(&mut self, container: &str) -> Option<MiniGallery> {
        self.galleries.remove(container)
    }

    pub fn is_attached(&self, container: &str) -> bool {
        self.galleries.contains_key(container)
    }

    pub fn get(&self, container: &str) -> Option<&MiniGallery> {
        self.galleries.get(container)
    }

    pub fn get_mut(&mut self, container: &str) -> Option<&mut MiniGallery> {
        self.galleries.get_mut(container)
    }

    pub fn len(&self) -> usize {
        self.galleries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.galleries.is_empty()
    }

    /// Advances every attached gallery by `dt` milliseconds.
    pub fn advance_all(&mut self, dt: Millis) {
        for gallery in self.galleries.values_mut() {
            gallery.advance(dt);
        }
    }

    /// Returns true if any attached gallery still has work in flight.
    pub fn is_animating(&self) -> bool {
        self.galleries.values().any(MiniGallery::is_animating)
    }
}
