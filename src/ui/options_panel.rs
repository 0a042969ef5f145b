//! Options panel UI rendering
//!
//! Side panel editing a draft of the widget options. A widget keeps the options
//! it was attached with, so applying re-attaches the gallery.

use crate::app::AppState;
use minigallery::{Easing, Millis};

/// Result of user interaction with the options panel
pub enum OptionsInteraction {
    /// Apply the draft and re-attach the gallery
    Apply,
}

/// Renders the options editor.
pub fn render_options_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<OptionsInteraction> {
    let mut interaction = None;

    ui.heading("Options");
    ui.separator();

    let draft = state.options.draft_mut();
    egui::Grid::new("gallery_options_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            pixels_row(ui, "Width", &mut draft.width, 10.0..=600.0);
            pixels_row(ui, "Height", &mut draft.height, 10.0..=600.0);
            pixels_row(ui, "Padding", &mut draft.padding, 0.0..=50.0);
            pixels_row(ui, "Offset", &mut draft.offset, 0.0..=10_000.0);
            millis_row(ui, "Delay", &mut draft.delay, 0.0..=1000.0);
            millis_row(ui, "Duration in", &mut draft.animate_duration_in, 0.0..=5000.0);
            millis_row(ui, "Duration out", &mut draft.animate_duration_out, 0.0..=5000.0);
            easing_row(ui, "Ease in", &mut draft.ease_in);
            easing_row(ui, "Ease out", &mut draft.ease_out);
            pixels_row(ui, "Caret half width", &mut draft.caret.half_width, 0.0..=40.0);
        });

    ui.separator();
    ui.horizontal(|ui| {
        let dirty = state.options.is_dirty();
        if ui.add_enabled(dirty, egui::Button::new("Apply")).clicked() {
            interaction = Some(OptionsInteraction::Apply);
        }
        if ui.button("Defaults").clicked() {
            state.options.reset_draft();
        }
    });

    interaction
}

fn pixels_row(ui: &mut egui::Ui, label: &str, value: &mut f32, range: std::ops::RangeInclusive<f32>) {
    ui.label(label);
    ui.add(egui::DragValue::new(value).range(range).suffix(" px"));
    ui.end_row();
}

fn millis_row(ui: &mut egui::Ui, label: &str, value: &mut Millis, range: std::ops::RangeInclusive<Millis>) {
    ui.label(label);
    ui.add(egui::DragValue::new(value).range(range).suffix(" ms"));
    ui.end_row();
}

fn easing_row(ui: &mut egui::Ui, label: &str, value: &mut Easing) {
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(value.name())
        .show_ui(ui, |ui| {
            for easing in Easing::ALL {
                ui.selectable_value(value, easing, easing.name());
            }
        });
    ui.end_row();
}
