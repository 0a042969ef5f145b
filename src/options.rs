//! Widget configuration.
//!
//! Every field is optional in serialized form: a partial document is merged
//! over the defaults, so `{"delay": 80}` only changes the stagger delay.

use crate::easing::Easing;
use crate::Millis;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Marker element inserted under the active navigation link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaretTemplate {
    /// Element tag of the marker
    pub tag: String,
    /// Class name carried by every marker instance
    pub class: String,
    /// Half of the marker's rendered width, used to center it under a link
    pub half_width: f32,
}

impl Default for CaretTemplate {
    fn default() -> Self {
        Self {
            tag: "b".to_string(),
            class: "mini-gallery-caret".to_string(),
            half_width: 10.0,
        }
    }
}

/// Layout and animation options for a [`crate::MiniGallery`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryOptions {
    /// Item content width in pixels
    pub width: f32,
    /// Item and viewport height in pixels
    pub height: f32,
    /// Off-screen distance for items of inactive panels
    pub offset: f32,
    /// Per-item stagger delay
    pub delay: Millis,
    /// Horizontal padding on each side of an item
    pub padding: f32,
    /// Duration of the outgoing slide
    pub animate_duration_in: Millis,
    /// Duration of the incoming slide
    pub animate_duration_out: Millis,
    /// Curve of the outgoing slide
    pub ease_in: Easing,
    /// Curve of the incoming slide
    pub ease_out: Easing,
    /// Marker placed under the active link
    pub caret: CaretTemplate,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            width: 150.0,
            height: 150.0,
            offset: 3000.0,
            delay: 50.0,
            padding: 5.0,
            animate_duration_in: 200.0,
            animate_duration_out: 800.0,
            ease_in: Easing::EaseInQuint,
            ease_out: Easing::EaseInOutElastic,
            caret: CaretTemplate::default(),
        }
    }
}

impl GalleryOptions {
    /// Horizontal space taken by one item including padding on both sides.
    pub fn slot_width(&self) -> f32 {
        self.width + self.padding * 2.0
    }

    /// Resting `left` of the item at `index` within its panel.
    pub fn rest_left(&self, index: usize) -> f32 {
        index as f32 * self.slot_width()
    }

    /// Total width of a panel holding `item_count` items.
    pub fn panel_width(&self, item_count: usize) -> f32 {
        item_count as f32 * self.slot_width()
    }

    /// Parses options from JSON, filling absent fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse gallery options")
    }

    /// Loads options from a JSON file, filling absent fields with defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid options file {}", path.display()))
    }
}
