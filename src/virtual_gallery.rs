//! Synthetic gallery markup.
//!
//! Generates a deterministic gallery from a seed, for demos and tests that
//! need content without a markup file.

use crate::markup::{GalleryMarkup, ItemMarkup, PanelMarkup};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOPICS: &[&str] = &[
    "Nature", "City", "Ocean", "Desert", "Forest", "Mountains", "Night", "Winter",
];

const SUBJECTS: &[&str] = &[
    "Lake", "Bridge", "Harbor", "Dune", "Pine", "Ridge", "Lantern", "Frost",
    "Canyon", "Tower", "Reef", "Meadow", "Alley", "Glacier", "Market", "Shore",
];

const PALETTE: &[&str] = &[
    "#e74c3c", "#f39c12", "#f1c40f", "#2ecc71", "#1abc9c", "#3498db", "#9b59b6", "#ff79c6",
];

/// Default seed used by the viewer's "Virtual Gallery" action.
pub const DEFAULT_SEED: u64 = 42;

/// Generates `panels` panels with between 1 and `max_items` items each, and one
/// link per panel.
pub fn generate_gallery(seed: u64, panels: usize, max_items: usize) -> GalleryMarkup {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_items = max_items.max(1);

    let labels: Vec<String> = (0..panels)
        .map(|i| match TOPICS.get(i) {
            Some(topic) => topic.to_string(),
            None => format!("Set {}", i + 1),
        })
        .collect();

    let panel_markup = (0..panels)
        .map(|_| {
            let count = rng.gen_range(1..=max_items);
            let items = (0..count)
                .map(|n| ItemMarkup {
                    label: format!("{} {}", SUBJECTS[rng.gen_range(0..SUBJECTS.len())], n + 1),
                    color: Some(PALETTE[rng.gen_range(0..PALETTE.len())].to_string()),
                })
                .collect();
            PanelMarkup { items }
        })
        .collect();

    GalleryMarkup::with_linked_panels(labels, panel_markup)
}
