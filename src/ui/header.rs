//! Header panel UI rendering
//!
//! Handles the top bar with gallery controls, the options toggle and the theme selector.

use crate::app::AppState;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a markup file
    OpenFileRequested(PathBuf),
    /// User clicked "Virtual Gallery"
    OpenVirtualGalleryRequested,
    /// User clicked "Replay" to attach the current gallery afresh
    ReplayRequested,
}

/// Renders the application header
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Gallery").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Gallery Markup", &["json"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🔮 Virtual Gallery").clicked() {
            interaction = Some(HeaderInteraction::OpenVirtualGalleryRequested);
        }

        if state.gallery.markup().is_some() && ui.button("⟲ Replay").clicked() {
            interaction = Some(HeaderInteraction::ReplayRequested);
        }

        ui.separator();

        let options_label = if state.options.is_panel_open() { "⚙ Hide Options" } else { "⚙ Options" };
        if ui.button(options_label).clicked() {
            state.options.toggle_panel();
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        let colors = &state.theme.theme_manager().theme_or_default(state.theme.current_theme_name()).colors;
        ui.colored_label(colors.error, err);
    }

    interaction
}
