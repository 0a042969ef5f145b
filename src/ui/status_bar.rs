//! Status bar UI rendering
//!
//! Shows where the gallery came from and the widget's clock and activity.

use crate::app::AppState;
use crate::utils::format_millis;
use egui::RichText;

/// Renders the status bar at the bottom of the window
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let source = match (state.gallery.source(), state.gallery.container()) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(container)) => container.to_string(),
            (None, None) => "No gallery loaded".to_string(),
        };
        ui.label(RichText::new(source).strong());

        let Some(gallery) = state.gallery.gallery() else {
            return;
        };

        ui.label(RichText::new("|").strong());
        let active = gallery
            .active_panel()
            .and_then(|p| gallery.panels().get(p))
            .map(|p| format!("{} ({} items)", p.id(), p.items().len()))
            .unwrap_or_else(|| "none".to_string());
        ui.label(RichText::new(format!(
            "Panels: {} | Active: {} | Clock: {} | Timers: {}",
            gallery.panels().len(),
            active,
            format_millis(gallery.now()),
            gallery.pending_timers(),
        )).strong());

        if gallery.is_animating() {
            ui.label(RichText::new("| Animating").strong().color(egui::Color32::YELLOW));
        }
    });
}
