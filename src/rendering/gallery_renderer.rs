//! Painting of navigation links, the caret and the clipped panel viewport.
//!
//! Geometry follows the widget model directly: link rects use the measured
//! link widths, the caret sits at its `left` under its link, and each visible
//! panel is centered in the viewport with items at their `left` offsets.

use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};
use minigallery::theme::parse_hex_color;
use minigallery::{with_alpha, GalleryPalette, MiniGallery, TextMeasure};

/// Font used for navigation links
pub fn link_font() -> FontId {
    FontId::proportional(15.0)
}

/// Horizontal gap between navigation links
pub const LINK_SPACING: f32 = 18.0;

/// Height of the navigation row, caret included
pub const NAV_HEIGHT: f32 = 34.0;

/// Caret triangle height
const CARET_HEIGHT: f32 = 7.0;

/// Measures link labels with the painter's fonts.
pub struct PainterMeasure<'a> {
    pub painter: &'a Painter,
    pub font: FontId,
}

impl TextMeasure for PainterMeasure<'_> {
    fn text_width(&self, text: &str) -> f32 {
        self.painter
            .layout_no_wrap(text.to_string(), self.font.clone(), Color32::WHITE)
            .size()
            .x
    }
}

/// Screen rects of every navigation link, left to right from `origin`.
pub fn link_rects(gallery: &MiniGallery, origin: Pos2) -> Vec<Rect> {
    let label_height = NAV_HEIGHT - CARET_HEIGHT - 4.0;
    let mut x = origin.x;
    gallery
        .links()
        .iter()
        .map(|link| {
            let rect = Rect::from_min_size(egui::pos2(x, origin.y), egui::vec2(link.width(), label_height));
            x += link.width() + LINK_SPACING;
            rect
        })
        .collect()
}

/// Paints link labels and carets. `hovered` is the link under the pointer, if any.
pub fn render_navigation(
    painter: &Painter,
    gallery: &MiniGallery,
    rects: &[Rect],
    hovered: Option<usize>,
    colors: &GalleryPalette,
) {
    for (index, (link, rect)) in gallery.links().iter().zip(rects).enumerate() {
        let color = if link.is_active() {
            colors.link_active
        } else if hovered == Some(index) {
            painter.rect_filled(rect.expand(3.0), 3.0, colors.link_hover);
            colors.text
        } else {
            colors.link
        };
        painter.text(rect.left_center(), egui::Align2::LEFT_CENTER, link.label(), link_font(), color);
    }

    let half_width = gallery.options().caret.half_width;
    for caret in gallery.carets() {
        let Some(rect) = rects.get(caret.link()) else {
            continue;
        };
        if !caret.is_shown() {
            continue;
        }

        let left = rect.left() + caret.left();
        let top = rect.bottom() + 2.0;
        let points = vec![
            egui::pos2(left, top + CARET_HEIGHT),
            egui::pos2(left + half_width, top),
            egui::pos2(left + half_width * 2.0, top + CARET_HEIGHT),
        ];
        painter.add(Shape::convex_polygon(points, with_alpha(colors.caret, caret.opacity()), Stroke::NONE));
    }
}

/// Paints the viewport background and every visible panel, clipped to `viewport`.
pub fn render_viewport(painter: &Painter, gallery: &MiniGallery, viewport: Rect, colors: &GalleryPalette) {
    let painter = painter.with_clip_rect(viewport);
    painter.rect_filled(viewport, 4.0, colors.viewport);

    let options = gallery.options();
    for panel in gallery.panels().iter().filter(|p| p.is_visible()) {
        // Auto side margins never push a wide panel left of the viewport
        let panel_left = viewport.left() + ((viewport.width() - panel.width()) / 2.0).max(0.0);

        for item in panel.items() {
            let x = panel_left + item.left() + item.padding();
            let rect = Rect::from_min_size(egui::pos2(x, viewport.top()), egui::vec2(options.width, panel.height()));
            if !rect.intersects(viewport) {
                continue;
            }

            let fill = item.color().and_then(parse_hex_color).unwrap_or(colors.item_fill);
            painter.rect_filled(rect, 6.0, fill);
            painter.rect_stroke(rect, 6.0, Stroke::new(1.0, colors.border), egui::StrokeKind::Inside);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                item.label(),
                FontId::proportional(14.0),
                colors.item_text,
            );
        }
    }
}
