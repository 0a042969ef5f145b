//! Per-element animation queues.
//!
//! Each animated element owns one [`FxQueue`] for one numeric property. An
//! animation requested while another is running waits its turn, and reads its
//! start value only when it begins. Completion payloads are handed back to the
//! owner so it can chain follow-up work.

use crate::easing::Easing;
use crate::Millis;
use std::collections::VecDeque;

/// A request to move a property to `to` over `duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation<C = ()> {
    pub to: f32,
    pub duration: Millis,
    pub easing: Easing,
    /// Returned from [`FxQueue::step`] when the animation finishes
    pub on_complete: Option<C>,
}

impl Animation<()> {
    pub fn new(to: f32, duration: Millis, easing: Easing) -> Self {
        Self {
            to,
            duration,
            easing,
            on_complete: None,
        }
    }
}

impl<C> Animation<C> {
    /// Creates an animation that yields `payload` when it finishes.
    pub fn with_completion(to: f32, duration: Millis, easing: Easing, payload: C) -> Self {
        Self {
            to,
            duration,
            easing,
            on_complete: Some(payload),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Running<C> {
    from: f32,
    started_at: Millis,
    animation: Animation<C>,
}

impl<C> Running<C> {
    fn ends_at(&self) -> Millis {
        self.started_at + self.animation.duration
    }
}

/// FIFO queue of animations on a single property.
#[derive(Debug, Clone, PartialEq)]
pub struct FxQueue<C = ()> {
    running: Option<Running<C>>,
    queued: VecDeque<Animation<C>>,
}

impl<C> Default for FxQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> FxQueue<C> {
    pub fn new() -> Self {
        Self {
            running: None,
            queued: VecDeque::new(),
        }
    }

    /// Starts `animation` from `current` if the queue is idle, otherwise queues it.
    pub fn animate(&mut self, now: Millis, current: f32, animation: Animation<C>) {
        if self.running.is_none() {
            self.running = Some(Running {
                from: current,
                started_at: now,
                animation,
            });
        } else {
            self.queued.push_back(animation);
        }
    }

    /// Returns true while an animation is running or waiting.
    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    /// Number of running plus waiting animations.
    pub fn len(&self) -> usize {
        self.running.iter().count() + self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Time at which the running animation finishes.
    pub fn next_completion(&self) -> Option<Millis> {
        self.running.as_ref().map(Running::ends_at)
    }

    /// Target of the running animation.
    pub fn target(&self) -> Option<f32> {
        self.running.as_ref().map(|r| r.animation.to)
    }

    /// Writes the property value at `now` into `value`.
    ///
    /// Every animation whose end is at or before `now` is finished (its target is
    /// written exactly) and the next queued one starts at that end time. The
    /// payloads of finished animations are returned in completion order.
    pub fn step(&mut self, now: Millis, value: &mut f32) -> Vec<C> {
        let mut completed = Vec::new();

        while let Some(running) = self.running.take() {
            let ends_at = running.ends_at();
            if now < ends_at {
                let progress = (now - running.started_at) / running.animation.duration;
                let eased = running.animation.easing.apply(progress) as f32;
                *value = running.from + (running.animation.to - running.from) * eased;
                self.running = Some(running);
                break;
            }

            *value = running.animation.to;
            if let Some(payload) = running.animation.on_complete {
                completed.push(payload);
            }
            if let Some(next) = self.queued.pop_front() {
                self.running = Some(Running {
                    from: *value,
                    started_at: ends_at,
                    animation: next,
                });
            }
        }

        completed
    }
}
