//! Gallery panel UI rendering
//!
//! Handles the central panel: navigation links with the caret, and the
//! clipped viewport showing the visible panel. Attaches pending markup here,
//! since link widths are measured with the painter's fonts.

use crate::app::AppState;
use crate::rendering::gallery_renderer::{self, PainterMeasure, NAV_HEIGHT};
use minigallery::GalleryPalette;

/// Result of gallery panel interactions
pub enum GalleryPanelInteraction {
    /// A navigation link was clicked
    LinkClicked(usize),
}

/// Renders navigation and viewport for the attached gallery.
pub fn render_gallery_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &GalleryPalette,
) -> Option<GalleryPanelInteraction> {
    if state.gallery.is_attach_pending() {
        let measure = PainterMeasure {
            painter: ui.painter(),
            font: gallery_renderer::link_font(),
        };
        state.gallery.attach_pending(state.options.applied(), &measure);
    }

    let Some(gallery) = state.gallery.gallery() else {
        ui.colored_label(colors.text_dim, "No gallery loaded - open a markup file or generate a virtual gallery");
        return None;
    };

    let mut interaction = None;

    // Navigation row
    let (nav_rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), NAV_HEIGHT), egui::Sense::hover());
    let rects = gallery_renderer::link_rects(gallery, nav_rect.left_top() + egui::vec2(4.0, 0.0));

    let mut hovered = None;
    for (index, rect) in rects.iter().enumerate() {
        let response = ui.interact(*rect, ui.id().with(("gallery_link", index)), egui::Sense::click());
        if response.hovered() {
            hovered = Some(index);
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        if response.clicked() {
            interaction = Some(GalleryPanelInteraction::LinkClicked(index));
        }
    }
    gallery_renderer::render_navigation(ui.painter(), gallery, &rects, hovered, colors);

    ui.add_space(6.0);

    // Viewport with clipped overflow
    let (viewport, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), gallery.viewport_height()),
        egui::Sense::hover(),
    );
    gallery_renderer::render_viewport(ui.painter(), gallery, viewport, colors);

    interaction
}
