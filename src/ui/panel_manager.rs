//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, options, gallery, status) and funnels
//! their interactions into a single result for the application.

use crate::app::AppState;
use crate::ui::{gallery_panel, header, options_panel, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a markup file
    OpenFileRequested(std::path::PathBuf),
    /// User requested a virtual gallery
    OpenVirtualGalleryRequested,
    /// User requested to replay the current gallery from its initial state
    ReplayRequested,
    /// User applied edited options
    ApplyOptionsRequested,
    /// A navigation link was clicked
    LinkClicked(usize),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let colors = state
            .theme
            .theme_manager()
            .theme_or_default(state.theme.current_theme_name())
            .colors
            .clone();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => PanelInteraction::OpenFileRequested(path),
                    header::HeaderInteraction::OpenVirtualGalleryRequested => {
                        PanelInteraction::OpenVirtualGalleryRequested
                    }
                    header::HeaderInteraction::ReplayRequested => PanelInteraction::ReplayRequested,
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        if state.options.is_panel_open() {
            egui::SidePanel::right("options_panel")
                .resizable(true)
                .default_width(260.0)
                .show(ctx, |ui| {
                    if let Some(options_panel::OptionsInteraction::Apply) = options_panel::render_options_panel(ui, state) {
                        interaction = Some(PanelInteraction::ApplyOptionsRequested);
                    }
                });
        }

        let gallery_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(12))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(gallery_frame).show(ctx, |ui| {
            if let Some(gallery_panel::GalleryPanelInteraction::LinkClicked(link)) =
                gallery_panel::render_gallery_panel(ui, state, &colors)
            {
                interaction = Some(PanelInteraction::LinkClicked(link));
            }
        });

        interaction
    }
}
