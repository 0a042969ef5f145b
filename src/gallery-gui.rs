//! Mini Gallery Viewer GUI Application
//!
//! Interactive viewer for the tabbed image carousel built on egui:
//! - Navigation links with an animated caret under the active link
//! - Staggered slide-out and slide-in transitions between panels
//! - Options editor with persistent preferences
//! - Multiple theme support
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Focused state components (gallery, options, theme)
//! - `ui/` - UI panel rendering and interaction
//! - `rendering/` - Low-level painting of navigation and viewport
//! - `utils/` - Formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::egui;
use minigallery::GalleryOptions;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod utils;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator, SettingsCoordinator};
use ui::panel_manager::{PanelInteraction, PanelManager};

const OPTIONS_KEY: &str = "gallery_options";
const LAST_MARKUP_KEY: &str = "last_markup";

#[derive(Parser, Debug)]
#[command(author, version, about = "Tabbed image carousel viewer", long_about = None)]
struct Cli {
    /// Gallery markup file to open on startup
    #[arg(long, value_name = "FILE")]
    markup: Option<PathBuf>,

    /// Options file overriding stored options
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Seed for the virtual gallery
    #[arg(long, default_value_t = minigallery::virtual_gallery::DEFAULT_SEED)]
    seed: u64,

    /// Number of panels in the virtual gallery
    #[arg(long, default_value_t = 5)]
    panels: usize,
}

/// Main application entry point that initializes and launches the gallery viewer.
fn main() -> eframe::Result {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let options_override = match cli.options.as_deref().map(GalleryOptions::load) {
        Some(Ok(options)) => Some(options),
        Some(Err(e)) => {
            error!(error = %format!("{:#}", e), "Ignoring options file");
            None
        }
        None => None,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 480.0])
            .with_title("Mini Gallery"),
        ..Default::default()
    };

    eframe::run_native(
        "Mini Gallery",
        native_options,
        Box::new(move |cc| Ok(Box::new(GalleryViewerApp::new(cc, cli, options_override)))),
    )
}

/// What to show on the first frame.
enum StartupSource {
    File(PathBuf),
    Virtual { seed: u64, panels: usize },
}

/// The gallery viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles loading, link clicks and the widget clock
/// - `ThemeCoordinator` handles theme persistence and application
/// - `SettingsCoordinator` handles options and last file persistence
/// - `PanelManager` handles UI panel layout and rendering
struct GalleryViewerApp {
    /// Centralized application state
    state: AppState,
    /// Gallery to load on first frame
    startup: Option<StartupSource>,
    /// Seed and panel count for the "Virtual Gallery" action
    virtual_seed: u64,
    virtual_panels: usize,
}

impl GalleryViewerApp {
    /// Creates the viewer with theme, options and last file loaded from persistent storage.
    fn new(cc: &eframe::CreationContext, cli: Cli, options_override: Option<GalleryOptions>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let options = options_override
            .unwrap_or_else(|| SettingsCoordinator::load_setting(cc.storage, OPTIONS_KEY));

        let last_markup: Option<PathBuf> = SettingsCoordinator::try_load_setting(cc.storage, LAST_MARKUP_KEY);
        let startup = match cli.markup.or(last_markup.filter(|p| p.exists())) {
            Some(path) => StartupSource::File(path),
            None => StartupSource::Virtual { seed: cli.seed, panels: cli.panels },
        };

        info!(theme = %theme_name, "Starting gallery viewer");

        Self {
            state: AppState::with_theme_and_options(theme_name, options),
            startup: Some(startup),
            virtual_seed: cli.seed,
            virtual_panels: cli.panels,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, path);
            }
            PanelInteraction::OpenVirtualGalleryRequested => {
                self.virtual_seed = self.virtual_seed.wrapping_add(1);
                ApplicationCoordinator::open_virtual_gallery(&mut self.state, self.virtual_seed, self.virtual_panels);
            }
            PanelInteraction::ReplayRequested => {
                ApplicationCoordinator::replay(&mut self.state);
            }
            PanelInteraction::ApplyOptionsRequested => {
                ApplicationCoordinator::apply_options(&mut self.state);
            }
            PanelInteraction::LinkClicked(link) => {
                ApplicationCoordinator::handle_link_click(&mut self.state, link);
            }
        }
    }
}

impl eframe::App for GalleryViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, OPTIONS_KEY, self.state.options.applied());
        if let Some(path) = self.state.gallery.source() {
            SettingsCoordinator::save_setting(storage, LAST_MARKUP_KEY, path);
        }
    }

    /// Main update loop:
    /// 1. Apply theme
    /// 2. Load the startup gallery (only on first frame)
    /// 3. Render all panels via PanelManager and handle interactions
    /// 4. Advance the widget clock, repainting while anything animates
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        match self.startup.take() {
            Some(StartupSource::File(path)) => ApplicationCoordinator::open_file(&mut self.state, path),
            Some(StartupSource::Virtual { seed, panels }) => {
                ApplicationCoordinator::open_virtual_gallery(&mut self.state, seed, panels)
            }
            None => {}
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }

        let dt = ctx.input(|i| i.stable_dt);
        if ApplicationCoordinator::tick(&mut self.state, dt) || self.state.gallery.is_attach_pending() {
            ctx.request_repaint();
        }
    }
}
