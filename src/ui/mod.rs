//! UI panel rendering subsystem
//!
//! - Header panel (gallery controls, options toggle, theme selector)
//! - Gallery panel (navigation links and carousel viewport)
//! - Options panel (widget option editor)
//! - Status bar (source and widget clock)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod gallery_panel;
pub mod options_panel;
pub mod status_bar;
pub mod panel_manager;
