//! The carousel widget.
//!
//! [`MiniGallery`] owns the element model of one container (links, panels,
//! items, carets) together with its timers and animation queues. Nothing moves
//! on its own: the host calls [`MiniGallery::advance`] with elapsed time and
//! reads positions, flags and opacities back for rendering.
//!
//! A transition runs in two phases. Items of the outgoing panel slide to the
//! off-screen side one after another; once the last outgoing slide has had time
//! to finish, the target panel is revealed and its items slide into place.
//!
//! # Examples
//!
//! ```
//! use minigallery::{Activation, FixedAdvance, GalleryMarkup, GalleryOptions, ItemMarkup, MiniGallery, PanelMarkup};
//!
//! let item = |label: &str| ItemMarkup { label: label.to_string(), color: None };
//! let markup = GalleryMarkup::with_linked_panels(
//!     ["First", "Second"],
//!     vec![
//!         PanelMarkup { items: vec![item("a"), item("b")] },
//!         PanelMarkup { items: vec![item("c")] },
//!     ],
//! );
//!
//! let mut gallery = MiniGallery::new(&markup, GalleryOptions::default(), &FixedAdvance(8.0));
//! assert!(matches!(gallery.activate(1), Activation::Started(_)));
//!
//! gallery.advance(5000.0);
//! assert_eq!(gallery.active_panel(), Some(1));
//! assert!(!gallery.is_animating());
//! ```

use crate::caret::{Caret, CaretFx};
use crate::fx::{Animation, FxQueue};
use crate::markup::{panel_id, GalleryMarkup};
use crate::options::GalleryOptions;
use crate::scheduler::Scheduler;
use crate::Millis;
use tracing::{debug, trace};

/// Measures rendered text width for links without an explicit width.
pub trait TextMeasure {
    fn text_width(&self, text: &str) -> f32;
}

/// Measures text as a fixed advance per character.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvance(pub f32);

impl TextMeasure for FixedAdvance {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.0
    }
}

/// Stagger before the slide of item `index` in a panel of `count` items.
///
/// Moving forward the first item leaves first; moving backward the last one does.
pub fn stagger_delay(index: usize, count: usize, delay: Millis, forward: bool) -> Millis {
    if forward {
        index as f64 * delay
    } else {
        (count - index) as f64 * delay
    }
}

/// A single visible unit inside a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    label: String,
    color: Option<String>,
    left: f32,
    padding: f32,
    fx: FxQueue,
}

impl Item {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Horizontal offset within the panel, in pixels.
    pub fn left(&self) -> f32 {
        self.left
    }

    /// Horizontal padding on each side.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn is_animating(&self) -> bool {
        self.fx.is_animating()
    }

    /// Where the running slide is heading, if any.
    pub fn slide_target(&self) -> Option<f32> {
        self.fx.target()
    }
}

/// An ordered group of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    id: String,
    order: usize,
    items: Vec<Item>,
    active: bool,
    visible: bool,
    width: f32,
    height: f32,
}

impl Panel {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Total width of the item row; the panel is centered in the viewport.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// A navigation link that opens one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    label: String,
    href: String,
    width: f32,
    active: bool,
}

impl NavLink {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// What a link activation did.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// The link was already active; nothing changed
    AlreadyActive,
    /// No link at that index; nothing changed
    UnknownLink,
    /// A transition was scheduled
    Started(TransitionPlan),
}

/// The schedule of a transition, relative to the moment of activation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionPlan {
    pub from_panel: Option<usize>,
    pub to_panel: Option<usize>,
    /// True when moving to a higher panel order
    pub forward: bool,
    /// Off-screen position used for both leaving and entering items
    pub offset_side: f32,
    /// Stagger of each outgoing item slide
    pub outgoing_delays: Vec<Millis>,
    /// Delay until the target panel is revealed
    pub reveal_delay: Millis,
}

#[derive(Debug, Clone, PartialEq)]
enum GalleryTask {
    SlideOut { panel: usize, item: usize, to: f32 },
    Reveal { incoming: Option<usize>, offset_side: f32, forward: bool },
    SlideIn { panel: usize, item: usize, to: f32 },
}

/// A tabbed carousel attached to one container.
#[derive(Debug, Clone)]
pub struct MiniGallery {
    options: GalleryOptions,
    links: Vec<NavLink>,
    panels: Vec<Panel>,
    carets: Vec<Caret>,
    next_caret_id: u64,
    timers: Scheduler<GalleryTask>,
    now: Millis,
    viewport_height: f32,
}

impl MiniGallery {
    /// Lays out `markup` and marks the first link and panel active.
    ///
    /// Links without an explicit width are measured with `measure`.
    pub fn new(markup: &GalleryMarkup, options: GalleryOptions, measure: &dyn TextMeasure) -> Self {
        let panels = markup
            .panels
            .iter()
            .enumerate()
            .map(|(index, panel)| {
                let items = panel
                    .items
                    .iter()
                    .enumerate()
                    .map(|(item_index, item)| Item {
                        label: item.label.clone(),
                        color: item.color.clone(),
                        left: if index == 0 { options.rest_left(item_index) } else { options.offset },
                        padding: options.padding,
                        fx: FxQueue::new(),
                    })
                    .collect::<Vec<_>>();

                Panel {
                    id: panel_id(index),
                    order: index,
                    width: options.panel_width(items.len()),
                    height: options.height,
                    items,
                    active: index == 0,
                    visible: index == 0,
                }
            })
            .collect();

        let links = markup
            .links
            .iter()
            .map(|link| NavLink {
                label: link.label.clone(),
                href: link.href.clone(),
                width: link.width.unwrap_or_else(|| measure.text_width(&link.label)),
                active: false,
            })
            .collect();

        let mut gallery = Self {
            viewport_height: options.height,
            options,
            links,
            panels,
            carets: Vec::new(),
            next_caret_id: 0,
            timers: Scheduler::new(),
            now: 0.0,
        };

        if !gallery.links.is_empty() {
            gallery.add_caret(0);
            gallery.links[0].active = true;
        }

        debug!(
            panels = gallery.panels.len(),
            links = gallery.links.len(),
            "Gallery laid out"
        );
        gallery
    }

    // ===== Queries =====

    pub fn options(&self) -> &GalleryOptions {
        &self.options
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn carets(&self) -> &[Caret] {
        &self.carets
    }

    /// Current time on the widget clock.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Height of the clipping viewport around the panels.
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Number of timers that have not fired yet.
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Index of the first active link.
    pub fn active_link(&self) -> Option<usize> {
        self.links.iter().position(|l| l.active)
    }

    /// Index of the first active panel.
    pub fn active_panel(&self) -> Option<usize> {
        self.panels.iter().position(|p| p.active)
    }

    /// Index of the panel with identifier `id`.
    pub fn panel_by_id(&self, id: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.id == id)
    }

    /// Returns true while any timer is pending or any element is animating.
    pub fn is_animating(&self) -> bool {
        !self.timers.is_empty()
            || self.carets.iter().any(Caret::is_fading)
            || self.panels.iter().flat_map(|p| p.items.iter()).any(Item::is_animating)
    }

    // ===== Interaction =====

    /// Handles a click on the link at `link`.
    pub fn activate(&mut self, link: usize) -> Activation {
        match self.links.get(link) {
            None => return Activation::UnknownLink,
            Some(l) if l.active => return Activation::AlreadyActive,
            Some(_) => {}
        }

        for l in &mut self.links {
            l.active = false;
        }
        self.links[link].active = true;

        let now = self.now;
        for caret in &mut self.carets {
            caret.fade_out(now, link);
        }

        let target = self.panel_by_id(&self.links[link].href);
        let current = self.active_panel();
        let forward = match (current, target) {
            (Some(c), Some(t)) => self.panels[c].order < self.panels[t].order,
            _ => false,
        };
        let offset_side = if forward { -self.options.offset } else { self.options.offset };

        for panel in &mut self.panels {
            panel.active = false;
        }

        let outgoing_count = current.map_or(0, |c| self.panels[c].items.len());
        let mut outgoing_delays = Vec::with_capacity(outgoing_count);
        if let Some(c) = current {
            for index in 0..outgoing_count {
                let delay = stagger_delay(index, outgoing_count, self.options.delay, forward);
                self.timers.schedule_at(now + delay, GalleryTask::SlideOut {
                    panel: c,
                    item: index,
                    to: offset_side,
                });
                outgoing_delays.push(delay);
            }
        }

        let reveal_delay = self.options.animate_duration_in + self.options.delay * outgoing_count as f64;
        self.timers.schedule_at(now + reveal_delay, GalleryTask::Reveal {
            incoming: target,
            offset_side,
            forward,
        });

        debug!(
            link,
            from = ?current,
            to = ?target,
            offset_side,
            reveal_delay,
            "Transition started"
        );

        Activation::Started(TransitionPlan {
            from_panel: current,
            to_panel: target,
            forward,
            offset_side,
            outgoing_delays,
            reveal_delay,
        })
    }

    /// Moves the clock forward by `dt` milliseconds.
    pub fn advance(&mut self, dt: Millis) {
        self.advance_to(self.now + dt.max(0.0));
    }

    /// Moves the clock to `target`, firing timers and finishing animations in
    /// chronological order. Animations ending at an instant finish before timers
    /// due at that same instant fire.
    pub fn advance_to(&mut self, target: Millis) {
        if target < self.now {
            return;
        }

        loop {
            let next = match (self.next_animation_end(), self.timers.next_due()) {
                (Some(a), Some(t)) => Some(a.min(t)),
                (a, t) => a.or(t),
            };

            match next {
                Some(at) if at <= target => {
                    self.now = self.now.max(at);
                    self.step_elements();
                    while let Some((id, task)) = self.timers.pop_due(self.now) {
                        trace!(?id, ?task, now = self.now, "Timer fired");
                        self.run_task(task);
                    }
                }
                _ => break,
            }
        }

        self.now = target;
        self.step_elements();
    }

    // ===== Internals =====

    fn next_animation_end(&self) -> Option<Millis> {
        let items = self
            .panels
            .iter()
            .flat_map(|p| p.items.iter())
            .filter_map(|i| i.fx.next_completion());
        let carets = self.carets.iter().filter_map(Caret::next_completion);
        items.chain(carets).reduce(f64::min)
    }

    fn step_elements(&mut self) {
        let now = self.now;
        for item in self.panels.iter_mut().flat_map(|p| p.items.iter_mut()) {
            item.fx.step(now, &mut item.left);
        }

        let mut finished = Vec::new();
        for caret in &mut self.carets {
            for fx in caret.step(now) {
                finished.push((caret.id(), fx));
            }
        }

        for (caret_id, fx) in finished {
            match fx {
                CaretFx::Replace { link } => {
                    // Fades queued by later clicks go away with this caret
                    self.carets.retain(|c| c.id() != caret_id);
                    let link = self.active_link().unwrap_or(link);
                    self.add_caret(link);
                }
            }
        }
    }

    fn add_caret(&mut self, link: usize) {
        let width = self.links[link].width;
        let caret = Caret::attach(self.next_caret_id, link, width, &self.options.caret, self.now);
        self.next_caret_id += 1;
        self.carets.push(caret);
    }

    fn run_task(&mut self, task: GalleryTask) {
        let now = self.now;
        match task {
            GalleryTask::SlideOut { panel, item, to } => {
                let (duration, easing) = (self.options.animate_duration_in, self.options.ease_in);
                if let Some(item) = self.panels.get_mut(panel).and_then(|p| p.items.get_mut(item)) {
                    item.fx.animate(now, item.left, Animation::new(to, duration, easing));
                }
            }
            GalleryTask::SlideIn { panel, item, to } => {
                let (duration, easing) = (self.options.animate_duration_out, self.options.ease_out);
                if let Some(item) = self.panels.get_mut(panel).and_then(|p| p.items.get_mut(item)) {
                    item.fx.animate(now, item.left, Animation::new(to, duration, easing));
                }
            }
            GalleryTask::Reveal { incoming, offset_side, forward } => {
                self.reveal(incoming, offset_side, forward);
            }
        }
    }

    fn reveal(&mut self, incoming: Option<usize>, offset_side: f32, forward: bool) {
        for (index, panel) in self.panels.iter_mut().enumerate() {
            if Some(index) != incoming {
                panel.active = false;
                panel.visible = false;
            }
        }

        let Some(incoming) = incoming else {
            debug!("Transition target missing, nothing revealed");
            return;
        };

        let now = self.now;
        let panel = &mut self.panels[incoming];
        panel.active = true;
        panel.visible = true;

        let count = panel.items.len();
        for (index, item) in panel.items.iter_mut().enumerate() {
            item.left = offset_side;
            let delay = stagger_delay(index, count, self.options.delay, forward);
            self.timers.schedule_at(now + delay, GalleryTask::SlideIn {
                panel: incoming,
                item: index,
                to: self.options.rest_left(index),
            });
        }

        debug!(panel = incoming, items = count, "Panel revealed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::markup::{ItemMarkup, PanelMarkup};

    fn markup(counts: &[usize]) -> GalleryMarkup {
        let panels = counts
            .iter()
            .map(|&n| PanelMarkup {
                items: (0..n)
                    .map(|i| ItemMarkup { label: format!("item {}", i), color: None })
                    .collect(),
            })
            .collect();
        let labels = (0..counts.len()).map(|i| format!("Panel {}", i + 1));
        GalleryMarkup::with_linked_panels(labels, panels)
    }

    fn gallery(counts: &[usize]) -> MiniGallery {
        MiniGallery::new(&markup(counts), GalleryOptions::default(), &FixedAdvance(8.0))
    }

    fn lefts(gallery: &MiniGallery, panel: usize) -> Vec<f32> {
        gallery.panels()[panel].items().iter().map(Item::left).collect()
    }

    #[test]
    fn test_stagger_delay_direction() {
        assert_eq!(stagger_delay(0, 3, 50.0, true), 0.0);
        assert_eq!(stagger_delay(2, 3, 50.0, true), 100.0);
        assert_eq!(stagger_delay(0, 3, 50.0, false), 150.0);
        assert_eq!(stagger_delay(2, 3, 50.0, false), 50.0);
    }

    #[test]
    fn test_initial_layout() {
        let g = gallery(&[2, 3, 1]);

        assert_eq!(g.active_panel(), Some(0));
        assert_eq!(g.panels().iter().filter(|p| p.is_active()).count(), 1);
        assert!(g.panels()[0].is_visible());
        assert!(!g.panels()[1].is_visible());
        assert!(!g.panels()[2].is_visible());

        assert_eq!(lefts(&g, 0), vec![0.0, 160.0]);
        assert_eq!(lefts(&g, 1), vec![3000.0; 3]);
        assert_eq!(lefts(&g, 2), vec![3000.0]);

        assert_eq!(g.panels()[1].width(), 480.0);
        assert_eq!(g.panels()[1].height(), 150.0);
        assert_eq!(g.panels()[2].id(), "handle2");
        assert_eq!(g.viewport_height(), 150.0);
    }

    #[test]
    fn test_initial_link_and_caret() {
        let g = gallery(&[1, 1]);
        assert_eq!(g.active_link(), Some(0));
        assert_eq!(g.links().iter().filter(|l| l.is_active()).count(), 1);

        // "Panel 1" is 7 characters at 8px each
        assert_eq!(g.carets().len(), 1);
        assert_eq!(g.carets()[0].link(), 0);
        assert_eq!(g.carets()[0].left(), 56.0 / 2.0 - 10.0);
        assert_eq!(g.pending_timers(), 0);
    }

    #[test]
    fn test_activating_active_link_changes_nothing() {
        let mut g = gallery(&[2, 3]);
        g.advance(1000.0);
        let before_links = g.links().to_vec();
        let before_panels = g.panels().to_vec();
        let before_carets = g.carets().to_vec();

        assert_eq!(g.activate(0), Activation::AlreadyActive);
        assert_eq!(g.links(), &before_links[..]);
        assert_eq!(g.panels(), &before_panels[..]);
        assert_eq!(g.carets(), &before_carets[..]);
        assert_eq!(g.pending_timers(), 0);
        assert!(!g.is_animating());
    }

    #[test]
    fn test_unknown_link_is_ignored() {
        let mut g = gallery(&[1]);
        assert_eq!(g.activate(7), Activation::UnknownLink);
        assert_eq!(g.pending_timers(), 0);
    }

    #[test]
    fn test_forward_transition_schedule() {
        let mut g = gallery(&[2, 3, 1]);
        let Activation::Started(plan) = g.activate(1) else {
            panic!("expected a transition");
        };

        assert_eq!(plan.from_panel, Some(0));
        assert_eq!(plan.to_panel, Some(1));
        assert!(plan.forward);
        assert_eq!(plan.offset_side, -3000.0);
        assert_eq!(plan.outgoing_delays, vec![0.0, 50.0]);
        assert_eq!(plan.reveal_delay, 300.0);

        assert_eq!(g.active_link(), Some(1));
        assert_eq!(g.active_panel(), None);
        assert_eq!(g.pending_timers(), 3);
    }

    #[test]
    fn test_backward_transition_uses_positive_offset() {
        let mut g = gallery(&[2, 3, 1]);
        g.activate(2);
        g.advance(5000.0);
        assert_eq!(g.active_panel(), Some(2));

        let Activation::Started(plan) = g.activate(0) else {
            panic!("expected a transition");
        };
        assert!(!plan.forward);
        assert_eq!(plan.offset_side, 3000.0);
        assert_eq!(plan.outgoing_delays, vec![50.0]);

        g.advance(5000.0);
        assert_eq!(lefts(&g, 2), vec![3000.0]);
        assert_eq!(lefts(&g, 0), vec![0.0, 160.0]);
    }

    #[test]
    fn test_reveal_waits_for_outgoing_duration() {
        let mut g = gallery(&[2, 3, 1]);
        g.activate(1);

        g.advance(299.0);
        assert_eq!(g.active_panel(), None);
        assert!(g.panels()[0].is_visible());
        assert!(!g.panels()[1].is_visible());
        assert_eq!(lefts(&g, 0), vec![-3000.0, -3000.0]);

        g.advance(1.0);
        assert_eq!(g.active_panel(), Some(1));
        assert!(!g.panels()[0].is_visible());
        assert!(g.panels()[1].is_visible());
        assert_eq!(lefts(&g, 0), vec![-3000.0, -3000.0]);
        assert_eq!(lefts(&g, 1), vec![-3000.0; 3]);
    }

    #[test]
    fn test_transition_settles_at_rest_positions() {
        let mut g = gallery(&[2, 3, 1]);
        g.activate(1);
        g.advance(300.0 + 100.0 + 800.0);

        assert!(!g.is_animating());
        assert_eq!(lefts(&g, 1), vec![0.0, 160.0, 320.0]);
        assert_eq!(lefts(&g, 0), vec![-3000.0, -3000.0]);
        assert_eq!(g.panels().iter().filter(|p| p.is_active()).count(), 1);
    }

    fn animating(gallery: &MiniGallery, panel: usize) -> Vec<bool> {
        gallery.panels()[panel].items().iter().map(Item::is_animating).collect()
    }

    fn targets(gallery: &MiniGallery, panel: usize) -> Vec<Option<f32>> {
        gallery.panels()[panel].items().iter().map(Item::slide_target).collect()
    }

    #[test]
    fn test_outgoing_slide_uses_in_duration_and_ease() {
        let mut g = gallery(&[2, 3, 1]);
        g.activate(1);

        g.advance_to(100.0);
        let eased = Easing::EaseInQuint.apply(0.5) as f32;
        assert_eq!(lefts(&g, 0)[0], 0.0 + (-3000.0 - 0.0) * eased);
        assert_eq!(targets(&g, 0), vec![Some(-3000.0), Some(-3000.0)]);
    }

    #[test]
    fn test_forward_entry_is_staggered_from_the_first_item() {
        let mut g = gallery(&[2, 3, 1]);
        g.activate(1);

        g.advance_to(300.0);
        assert_eq!(animating(&g, 1), vec![true, false, false]);
        assert_eq!(targets(&g, 1), vec![Some(0.0), None, None]);

        g.advance_to(350.0);
        assert_eq!(animating(&g, 1), vec![true, true, false]);
        assert_eq!(targets(&g, 1), vec![Some(0.0), Some(160.0), None]);

        g.advance_to(400.0);
        assert_eq!(animating(&g, 1), vec![true, true, true]);
        assert_eq!(targets(&g, 1), vec![Some(0.0), Some(160.0), Some(320.0)]);

        // A quarter into the first item's 800ms slide
        g.advance_to(500.0);
        let eased = Easing::EaseInOutElastic.apply(0.25) as f32;
        let from = -3000.0_f32;
        assert_eq!(lefts(&g, 1)[0], from + (0.0 - from) * eased);

        g.advance_to(1099.0);
        assert!(animating(&g, 1)[0]);
        g.advance_to(1100.0);
        assert_eq!(animating(&g, 1), vec![false, true, true]);
        assert_eq!(lefts(&g, 1)[0], 0.0);
    }

    #[test]
    fn test_backward_entry_is_staggered_from_the_last_item() {
        let mut g = gallery(&[2, 3, 1]);
        g.activate(1);
        g.advance(5000.0);

        let Activation::Started(plan) = g.activate(0) else {
            panic!("expected a transition");
        };
        assert_eq!(plan.reveal_delay, 350.0);

        g.advance_to(5350.0);
        assert_eq!(g.active_panel(), Some(0));
        assert_eq!(lefts(&g, 0), vec![3000.0, 3000.0]);
        assert_eq!(animating(&g, 0), vec![false, false]);

        g.advance_to(5400.0);
        assert_eq!(animating(&g, 0), vec![false, true]);
        assert_eq!(targets(&g, 0), vec![None, Some(160.0)]);

        g.advance_to(5450.0);
        assert_eq!(animating(&g, 0), vec![true, true]);
        assert_eq!(targets(&g, 0), vec![Some(0.0), Some(160.0)]);
    }

    #[test]
    fn test_click_during_transition_leaves_last_target_alone() {
        let mut g = gallery(&[2, 3, 1]);
        g.activate(1);
        g.advance_to(100.0);

        let Activation::Started(plan) = g.activate(2) else {
            panic!("expected a transition");
        };
        assert_eq!(plan.from_panel, None);
        assert_eq!(plan.to_panel, Some(2));
        assert!(!plan.forward);
        assert_eq!(plan.offset_side, 3000.0);
        assert!(plan.outgoing_delays.is_empty());
        assert_eq!(plan.reveal_delay, 200.0);

        g.advance(5000.0);
        assert!(!g.is_animating());
        assert_eq!(g.active_link(), Some(2));
        assert_eq!(g.active_panel(), Some(2));
        assert_eq!(g.panels().iter().filter(|p| p.is_active()).count(), 1);
        let visible: Vec<bool> = g.panels().iter().map(Panel::is_visible).collect();
        assert_eq!(visible, vec![false, false, true]);
        assert_eq!(lefts(&g, 2), vec![0.0]);
    }

    #[test]
    fn test_caret_follows_last_clicked_link() {
        let mut g = gallery(&[1, 1, 1]);
        g.advance(1000.0);
        g.activate(1);
        g.advance(100.0);
        g.activate(2);

        g.advance_to(1400.0);
        assert_eq!(g.carets().len(), 1);
        assert_eq!(g.carets()[0].link(), 2);

        g.advance(5000.0);
        assert_eq!(g.carets().len(), 1);
        assert_eq!(g.carets()[0].link(), 2);
        assert_eq!(g.carets()[0].opacity(), 1.0);
        assert_eq!(g.active_link(), Some(2));
    }

    #[test]
    fn test_caret_moves_after_fade_out() {
        let mut g = gallery(&[1, 1]);
        g.advance(1000.0);
        g.activate(1);

        g.advance(399.0);
        assert_eq!(g.carets().len(), 1);
        assert_eq!(g.carets()[0].link(), 0);

        g.advance(1.0);
        assert_eq!(g.carets().len(), 1);
        assert_eq!(g.carets()[0].link(), 1);
        assert_eq!(g.carets()[0].opacity(), 0.0);

        g.advance(400.0);
        assert_eq!(g.carets()[0].opacity(), 1.0);
    }

    #[test]
    fn test_empty_incoming_panel_still_becomes_active() {
        let mut g = gallery(&[2, 0]);
        g.activate(1);
        g.advance(300.0);

        assert_eq!(g.active_panel(), Some(1));
        assert!(g.panels()[1].is_visible());
        assert!(!g.panels()[0].is_visible());
        assert_eq!(g.pending_timers(), 0);
    }

    #[test]
    fn test_empty_outgoing_panel_reveals_after_in_duration() {
        let mut g = gallery(&[0, 2]);
        let Activation::Started(plan) = g.activate(1) else {
            panic!("expected a transition");
        };
        assert!(plan.outgoing_delays.is_empty());
        assert_eq!(plan.reveal_delay, 200.0);
    }

    #[test]
    fn test_dangling_href_reveals_nothing() {
        let mut m = markup(&[2, 1]);
        m.links[1].href = "handle9".to_string();
        let mut g = MiniGallery::new(&m, GalleryOptions::default(), &FixedAdvance(8.0));

        let Activation::Started(plan) = g.activate(1) else {
            panic!("expected a transition");
        };
        assert_eq!(plan.to_panel, None);
        assert!(!plan.forward);
        assert_eq!(plan.offset_side, 3000.0);

        g.advance(5000.0);
        assert_eq!(g.active_link(), Some(1));
        assert_eq!(g.active_panel(), None);
        assert!(g.panels().iter().all(|p| !p.is_visible()));
    }

    #[test]
    fn test_no_links_means_no_caret() {
        let m = GalleryMarkup {
            links: Vec::new(),
            panels: markup(&[1]).panels,
        };
        let g = MiniGallery::new(&m, GalleryOptions::default(), &FixedAdvance(8.0));
        assert!(g.carets().is_empty());
        assert_eq!(g.active_link(), None);
        assert_eq!(g.active_panel(), Some(0));
    }
}
