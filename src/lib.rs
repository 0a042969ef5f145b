pub mod easing;
pub mod options;
pub mod markup;
pub mod scheduler;
pub mod fx;
pub mod caret;
pub mod gallery;
pub mod registry;
pub mod virtual_gallery;
pub mod theme;

/// Milliseconds on the widget's virtual clock
pub type Millis = f64;

// Export configuration
pub use easing::Easing;
pub use options::{GalleryOptions, CaretTemplate};

// Export markup contract
pub use markup::{GalleryMarkup, LinkMarkup, PanelMarkup, ItemMarkup, parse_markup, load_markup};

// Export cooperative runtime
pub use scheduler::{Scheduler, TimerId};
pub use fx::{Animation, FxQueue};

// Export widget
pub use caret::{Caret, FADE_DURATION};
pub use gallery::{
    MiniGallery, Panel, Item, NavLink, Activation, TransitionPlan,
    TextMeasure, FixedAdvance, stagger_delay
};
pub use registry::GalleryHost;

// Export virtual gallery generator
pub use virtual_gallery::generate_gallery;

// Export theme support
pub use theme::{Theme, GalleryPalette, ThemeManager, hex_to_color32, with_alpha};
