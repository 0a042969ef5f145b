//! Rendering subsystem for drawing the carousel
//!
//! - Navigation links and caret markers
//! - Clipped viewport with the visible panel's items

pub mod gallery_renderer;
