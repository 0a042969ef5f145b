//! The marker shown under the active navigation link.

use crate::easing::Easing;
use crate::fx::{Animation, FxQueue};
use crate::options::CaretTemplate;
use crate::Millis;

/// Duration of caret fades.
pub const FADE_DURATION: Millis = 400.0;

/// Work to do once a caret fade finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CaretFx {
    /// Remove the faded caret and attach a new one under this link
    Replace { link: usize },
}

/// Horizontal offset that centers a marker of `half_width` under a link.
pub fn caret_offset(link_width: f32, half_width: f32) -> f32 {
    link_width / 2.0 - half_width
}

/// A marker instance attached to one navigation link.
#[derive(Debug, Clone, PartialEq)]
pub struct Caret {
    id: u64,
    link: usize,
    tag: String,
    class: String,
    left: f32,
    opacity: f32,
    shown: bool,
    fx: FxQueue<CaretFx>,
}

impl Caret {
    /// Inserts a hidden caret under `link` and starts fading it in.
    pub(crate) fn attach(id: u64, link: usize, link_width: f32, template: &CaretTemplate, now: Millis) -> Self {
        let mut caret = Self {
            id,
            link,
            tag: template.tag.clone(),
            class: template.class.clone(),
            left: caret_offset(link_width, template.half_width),
            opacity: 1.0,
            shown: false,
            fx: FxQueue::new(),
        };

        caret.fade_in(now);
        caret
    }

    fn fade_in(&mut self, now: Millis) {
        self.shown = true;
        self.opacity = 0.0;
        self.fx.animate(now, 0.0, Animation {
            to: 1.0,
            duration: FADE_DURATION,
            easing: Easing::Swing,
            on_complete: None,
        });
    }

    /// Queues a fade out that, once finished, asks for a caret under `replace_with`.
    pub(crate) fn fade_out(&mut self, now: Millis, replace_with: usize) {
        self.fx.animate(
            now,
            self.opacity,
            Animation::with_completion(0.0, FADE_DURATION, Easing::Swing, CaretFx::Replace { link: replace_with }),
        );
    }

    pub(crate) fn step(&mut self, now: Millis) -> Vec<CaretFx> {
        let done = self.fx.step(now, &mut self.opacity);
        if !done.is_empty() && !self.fx.is_animating() {
            self.shown = false;
        }
        done
    }

    pub(crate) fn next_completion(&self) -> Option<Millis> {
        self.fx.next_completion()
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Index of the link this caret sits under.
    pub fn link(&self) -> usize {
        self.link
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Offset from the link's left edge.
    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn is_fading(&self) -> bool {
        self.fx.is_animating()
    }
}
