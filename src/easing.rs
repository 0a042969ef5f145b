//! Named easing curves for widget animations.
//!
//! Every curve maps normalized progress `p` in `[0, 1]` to eased progress, with
//! `ease(0) == 0` and `ease(1) == 1`. Elastic and back curves overshoot in between.
//! Names follow the conventional camelCase spelling (`easeInQuint`,
//! `easeInOutElastic`, ...) so option files can refer to them directly.
//!
//! # Examples
//!
//! ```
//! use minigallery::Easing;
//!
//! let quint = Easing::from_name("easeInQuint").unwrap();
//! assert_eq!(quint, Easing::EaseInQuint);
//! assert!((quint.apply(0.5) - 0.03125).abs() < 1e-9);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::PI;

const BACK_OVERSHOOT: f64 = 1.70158;

/// An animation timing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    Swing,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

static BY_NAME: Lazy<HashMap<&'static str, Easing>> = Lazy::new(|| {
    Easing::ALL.iter().map(|e| (e.name(), *e)).collect()
});

impl Easing {
    /// All curves, in catalogue order.
    pub const ALL: [Easing; 32] = [
        Easing::Linear,
        Easing::Swing,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInOutQuart,
        Easing::EaseInQuint,
        Easing::EaseOutQuint,
        Easing::EaseInOutQuint,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
        Easing::EaseInExpo,
        Easing::EaseOutExpo,
        Easing::EaseInOutExpo,
        Easing::EaseInCirc,
        Easing::EaseOutCirc,
        Easing::EaseInOutCirc,
        Easing::EaseInElastic,
        Easing::EaseOutElastic,
        Easing::EaseInOutElastic,
        Easing::EaseInBack,
        Easing::EaseOutBack,
        Easing::EaseInOutBack,
        Easing::EaseInBounce,
        Easing::EaseOutBounce,
        Easing::EaseInOutBounce,
    ];

    /// Looks up a curve by its camelCase name.
    pub fn from_name(name: &str) -> Option<Easing> {
        BY_NAME.get(name).copied()
    }

    /// Returns the camelCase name of this curve.
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Swing => "swing",
            Easing::EaseInQuad => "easeInQuad",
            Easing::EaseOutQuad => "easeOutQuad",
            Easing::EaseInOutQuad => "easeInOutQuad",
            Easing::EaseInCubic => "easeInCubic",
            Easing::EaseOutCubic => "easeOutCubic",
            Easing::EaseInOutCubic => "easeInOutCubic",
            Easing::EaseInQuart => "easeInQuart",
            Easing::EaseOutQuart => "easeOutQuart",
            Easing::EaseInOutQuart => "easeInOutQuart",
            Easing::EaseInQuint => "easeInQuint",
            Easing::EaseOutQuint => "easeOutQuint",
            Easing::EaseInOutQuint => "easeInOutQuint",
            Easing::EaseInSine => "easeInSine",
            Easing::EaseOutSine => "easeOutSine",
            Easing::EaseInOutSine => "easeInOutSine",
            Easing::EaseInExpo => "easeInExpo",
            Easing::EaseOutExpo => "easeOutExpo",
            Easing::EaseInOutExpo => "easeInOutExpo",
            Easing::EaseInCirc => "easeInCirc",
            Easing::EaseOutCirc => "easeOutCirc",
            Easing::EaseInOutCirc => "easeInOutCirc",
            Easing::EaseInElastic => "easeInElastic",
            Easing::EaseOutElastic => "easeOutElastic",
            Easing::EaseInOutElastic => "easeInOutElastic",
            Easing::EaseInBack => "easeInBack",
            Easing::EaseOutBack => "easeOutBack",
            Easing::EaseInOutBack => "easeInOutBack",
            Easing::EaseInBounce => "easeInBounce",
            Easing::EaseOutBounce => "easeOutBounce",
            Easing::EaseInOutBounce => "easeInOutBounce",
        }
    }

    /// Maps normalized progress to eased progress. Input is clamped to `[0, 1]`.
    pub fn apply(self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::Swing => 0.5 - (p * PI).cos() / 2.0,

            Easing::EaseInQuad => p.powi(2),
            Easing::EaseOutQuad => 1.0 - (1.0 - p).powi(2),
            Easing::EaseInOutQuad => in_out_power(p, 2),
            Easing::EaseInCubic => p.powi(3),
            Easing::EaseOutCubic => 1.0 - (1.0 - p).powi(3),
            Easing::EaseInOutCubic => in_out_power(p, 3),
            Easing::EaseInQuart => p.powi(4),
            Easing::EaseOutQuart => 1.0 - (1.0 - p).powi(4),
            Easing::EaseInOutQuart => in_out_power(p, 4),
            Easing::EaseInQuint => p.powi(5),
            Easing::EaseOutQuint => 1.0 - (1.0 - p).powi(5),
            Easing::EaseInOutQuint => in_out_power(p, 5),

            Easing::EaseInSine => 1.0 - (p * PI / 2.0).cos(),
            Easing::EaseOutSine => (p * PI / 2.0).sin(),
            Easing::EaseInOutSine => -((PI * p).cos() - 1.0) / 2.0,

            Easing::EaseInExpo => {
                if p == 0.0 { 0.0 } else { 2f64.powf(10.0 * p - 10.0) }
            }
            Easing::EaseOutExpo => {
                if p == 1.0 { 1.0 } else { 1.0 - 2f64.powf(-10.0 * p) }
            }
            Easing::EaseInOutExpo => {
                if p == 0.0 || p == 1.0 {
                    p
                } else if p < 0.5 {
                    2f64.powf(20.0 * p - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * p + 10.0)) / 2.0
                }
            }

            Easing::EaseInCirc => 1.0 - (1.0 - p * p).sqrt(),
            Easing::EaseOutCirc => (1.0 - (p - 1.0).powi(2)).sqrt(),
            Easing::EaseInOutCirc => {
                if p < 0.5 {
                    (1.0 - (1.0 - (2.0 * p).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * p + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }

            Easing::EaseInElastic => {
                if p == 0.0 || p == 1.0 {
                    return p;
                }
                let period = 0.3;
                let shift = period / 4.0;
                let t = p - 1.0;
                -(2f64.powf(10.0 * t) * ((t - shift) * 2.0 * PI / period).sin())
            }
            Easing::EaseOutElastic => {
                if p == 0.0 || p == 1.0 {
                    return p;
                }
                let period = 0.3;
                let shift = period / 4.0;
                2f64.powf(-10.0 * p) * ((p - shift) * 2.0 * PI / period).sin() + 1.0
            }
            Easing::EaseInOutElastic => {
                if p == 0.0 || p == 1.0 {
                    return p;
                }
                let period = 0.3 * 1.5;
                let shift = period / 4.0;
                let t = 2.0 * p - 1.0;
                let wave = ((t - shift) * 2.0 * PI / period).sin();
                if t < 0.0 {
                    -0.5 * 2f64.powf(10.0 * t) * wave
                } else {
                    0.5 * 2f64.powf(-10.0 * t) * wave + 1.0
                }
            }

            Easing::EaseInBack => {
                let s = BACK_OVERSHOOT;
                p * p * ((s + 1.0) * p - s)
            }
            Easing::EaseOutBack => {
                let s = BACK_OVERSHOOT;
                let t = p - 1.0;
                t * t * ((s + 1.0) * t + s) + 1.0
            }
            Easing::EaseInOutBack => {
                let s = BACK_OVERSHOOT * 1.525;
                let t = p * 2.0;
                if t < 1.0 {
                    0.5 * (t * t * ((s + 1.0) * t - s))
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * ((s + 1.0) * t + s) + 2.0)
                }
            }

            Easing::EaseInBounce => 1.0 - bounce_out(1.0 - p),
            Easing::EaseOutBounce => bounce_out(p),
            Easing::EaseInOutBounce => {
                if p < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * p)) * 0.5
                } else {
                    bounce_out(2.0 * p - 1.0) * 0.5 + 0.5
                }
            }
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::from_name(s).ok_or_else(|| format!("Unknown easing '{}'", s))
    }
}

/// Symmetric in-out polynomial of the given degree.
fn in_out_power(p: f64, degree: i32) -> f64 {
    if p < 0.5 {
        2f64.powi(degree - 1) * p.powi(degree)
    } else {
        1.0 - (-2.0 * p + 2.0).powi(degree) / 2.0
    }
}

fn bounce_out(p: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;

    if p < 1.0 / D {
        N * p * p
    } else if p < 2.0 / D {
        let p = p - 1.5 / D;
        N * p * p + 0.75
    } else if p < 2.5 / D {
        let p = p - 2.25 / D;
        N * p * p + 0.9375
    } else {
        let p = p - 2.625 / D;
        N * p * p + 0.984375
    }
}
