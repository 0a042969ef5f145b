//! Application-level coordination and workflow management.
//!
//! Handles loading galleries, forwarding link clicks, applying edited options
//! and driving the widget clock.

use crate::app::AppState;
use minigallery::{generate_gallery, load_markup, Activation};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Frames longer than this are treated as a stall, not as elapsed animation time.
const MAX_FRAME_MILLIS: f64 = 250.0;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Loads a markup file and shows it.
    ///
    /// On failure the previous gallery stays on screen and the error is displayed.
    pub fn open_file(state: &mut AppState, path: PathBuf) {
        match load_markup(&path) {
            Ok(markup) => {
                info!(path = %path.display(), panels = markup.panels.len(), "Loaded gallery markup");
                let container = format!("file:{}", path.display());
                state.gallery.load(container, markup, Some(path));
                state.error_message = None;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %format!("{:#}", e), "Failed to load gallery markup");
                state.error_message = Some(format!("Error loading gallery: {:#}", e));
            }
        }
    }

    /// Generates and shows a virtual gallery.
    pub fn open_virtual_gallery(state: &mut AppState, seed: u64, panels: usize) {
        let markup = generate_gallery(seed, panels, 6);
        info!(seed, panels, "Generated virtual gallery");
        state.gallery.load(format!("virtual:{}", seed), markup, None);
        state.error_message = None;
    }

    /// Forwards a navigation link click to the widget.
    pub fn handle_link_click(state: &mut AppState, link: usize) {
        if let Some(gallery) = state.gallery.gallery_mut() {
            match gallery.activate(link) {
                Activation::Started(plan) => {
                    debug!(link, to = ?plan.to_panel, reveal_delay = plan.reveal_delay, "Link activated");
                }
                other => debug!(link, result = ?other, "Link click ignored"),
            }
        }
    }

    /// Attaches the current gallery afresh, back in its initial state.
    pub fn replay(state: &mut AppState) {
        state.gallery.request_reattach();
        debug!(container = ?state.gallery.container(), "Replaying gallery");
    }

    /// Applies the edited options by attaching the gallery afresh.
    pub fn apply_options(state: &mut AppState) {
        state.options.apply_draft();
        state.gallery.request_reattach();
        info!("Applied gallery options");
    }

    /// Advances the widget clock by the frame time.
    ///
    /// Returns true if anything is still animating.
    pub fn tick(state: &mut AppState, frame_seconds: f32) -> bool {
        let dt = (frame_seconds as f64 * 1000.0).clamp(0.0, MAX_FRAME_MILLIS);
        state.gallery.advance(dt);
        state.gallery.is_animating()
    }
}
