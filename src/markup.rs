//! Input markup for a gallery container.
//!
//! A container holds one navigation block of links and one or more panels of
//! items. Panels are addressed as `handle{index}` in document order; each
//! link's `href` names the panel it opens.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Prefix of the identifier assigned to every panel.
pub const PANEL_ID_PREFIX: &str = "handle";

/// Returns the identifier of the panel at `index`.
pub fn panel_id(index: usize) -> String {
    format!("{}{}", PANEL_ID_PREFIX, index)
}

/// A navigation link in the container's nav block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkMarkup {
    pub label: String,
    /// Identifier of the panel this link opens
    pub href: String,
    /// Rendered width; measured by the host when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

/// A single visible unit inside a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemMarkup {
    pub label: String,
    /// Fill color as `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// An ordered list of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelMarkup {
    #[serde(default)]
    pub items: Vec<ItemMarkup>,
}

/// The full markup of one gallery container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryMarkup {
    #[serde(default)]
    pub links: Vec<LinkMarkup>,
    #[serde(default)]
    pub panels: Vec<PanelMarkup>,
}

impl GalleryMarkup {
    /// Builds markup with one link per panel, labelled by `labels` in order.
    pub fn with_linked_panels<I, S>(labels: I, panels: Vec<PanelMarkup>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let links = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| LinkMarkup {
                label: label.into(),
                href: panel_id(index),
                width: None,
            })
            .collect();
        Self { links, panels }
    }

    /// Total number of items across all panels.
    pub fn item_count(&self) -> usize {
        self.panels.iter().map(|p| p.items.len()).sum()
    }
}

/// Parses gallery markup from a JSON string.
pub fn parse_markup(json: &str) -> Result<GalleryMarkup> {
    serde_json::from_str(json).context("Failed to parse gallery markup")
}

/// Reads and parses a gallery markup file.
pub fn load_markup(path: &Path) -> Result<GalleryMarkup> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to open markup file {}", path.display()))?;
    parse_markup(&content).with_context(|| format!("Invalid markup file {}", path.display()))
}
