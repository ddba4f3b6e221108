//! Easing functions for tween timing.
//!
//! This module implements the timing functions the entrance and interaction
//! presets rely on:
//! - Linear
//! - Ease, EaseIn, EaseOut, EaseInOut (standard CSS curves)
//! - CubicBezier (custom bezier curves)
//! - PowerIn/PowerOut/PowerInOut (polynomial curves of configurable degree)
//! - BackOut (overshoot past the target, then settle)
//! - ElasticOut (exponentially decaying oscillation around the target)
//!
//! # Usage
//!
//! ```
//! use cue_tween::easing::EasingFunction;
//!
//! let ease = EasingFunction::power_out(3.0);
//! let progress = ease.evaluate(0.5); // Get eased progress at 50%
//! ```

use serde::{Deserialize, Serialize};

/// Easing function for tween timing.
///
/// Easing functions map a linear progress value (0.0 to 1.0) to an eased
/// output value, controlling the rate of change over time. Overshooting
/// curves (`BackOut`, `ElasticOut`, some beziers) may return values above 1.0
/// mid-flight; all curves end at exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,

    /// CSS `ease` - Slow start, fast middle, slow end.
    /// Equivalent to `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    Ease,

    /// CSS `ease-in` - Slow start, accelerating.
    /// Equivalent to `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,

    /// CSS `ease-out` - Fast start, decelerating.
    /// Equivalent to `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,

    /// CSS `ease-in-out` - Slow start and end, fast middle.
    /// Equivalent to `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,

    /// Custom cubic bezier curve.
    /// Parameters: (x1, y1, x2, y2) - control points.
    /// x values must be in [0, 1], y values can be any float.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },

    /// Polynomial ease-in: `t^power`. Slow start, accelerating.
    PowerIn { power: f32 },

    /// Polynomial ease-out: `1 - (1-t)^power`. Fast start, decelerating.
    /// Power 2 and 3 match the common "quad out" / "cubic out" feels.
    PowerOut { power: f32 },

    /// Polynomial ease-in-out, symmetric around the midpoint.
    PowerInOut { power: f32 },

    /// Decelerating curve that overshoots the target before settling back.
    /// `overshoot` controls how far past 1.0 the curve swings (1.7 gives a
    /// pronounced but brief overshoot).
    BackOut { overshoot: f32 },

    /// Exponentially decaying oscillation that rings around the target.
    /// `amplitude` >= 1.0 scales the swing; `period` sets the oscillation
    /// frequency as a fraction of the duration.
    ElasticOut { amplitude: f32, period: f32 },
}

impl Default for EasingFunction {
    fn default() -> Self {
        Self::Ease
    }
}

impl EasingFunction {
    /// Evaluate the easing function at the given progress.
    ///
    /// # Arguments
    /// * `t` - Progress value from 0.0 to 1.0
    ///
    /// # Returns
    /// Eased progress value (may exceed 1.0 for overshooting curves)
    pub fn evaluate(&self, t: f32) -> f32 {
        // Clamp input to valid range
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(*x1, *y1, *x2, *y2, t),
            Self::PowerIn { power } => t.powf(power.max(1.0)),
            Self::PowerOut { power } => 1.0 - (1.0 - t).powf(power.max(1.0)),
            Self::PowerInOut { power } => {
                let p = power.max(1.0);
                if t < 0.5 {
                    0.5 * (2.0 * t).powf(p)
                } else {
                    1.0 - 0.5 * (2.0 * (1.0 - t)).powf(p)
                }
            }
            Self::BackOut { overshoot } => back_out(*overshoot, t),
            Self::ElasticOut { amplitude, period } => elastic_out(*amplitude, *period, t),
        }
    }

    /// Create a custom cubic bezier easing function.
    ///
    /// # Arguments
    /// * `x1`, `y1` - First control point
    /// * `x2`, `y2` - Second control point
    ///
    /// # Panics
    /// Panics if x1 or x2 are outside [0, 1].
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2),
            "Bezier x values must be in [0, 1]"
        );
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Polynomial ease-out of the given degree.
    pub fn power_out(power: f32) -> Self {
        Self::PowerOut { power }
    }

    /// Polynomial ease-in of the given degree.
    pub fn power_in(power: f32) -> Self {
        Self::PowerIn { power }
    }

    /// Overshoot-then-settle with the given overshoot factor.
    pub fn back_out(overshoot: f32) -> Self {
        Self::BackOut { overshoot }
    }

    /// Decaying oscillation with the given amplitude and period.
    pub fn elastic_out(amplitude: f32, period: f32) -> Self {
        Self::ElasticOut {
            amplitude: amplitude.max(1.0),
            period,
        }
    }
}

/// Evaluate a cubic bezier curve at time t.
///
/// This implementation uses Newton-Raphson iteration to find the t parameter
/// on the bezier curve corresponding to the input progress, then evaluates
/// the y coordinate at that point.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    // Handle edge cases
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    // Find the t parameter that gives us the desired x value
    let t = solve_bezier_x(x1, x2, progress);

    // Evaluate the y coordinate at t
    bezier_y(y1, y2, t)
}

/// Solve for t in the bezier x equation using Newton-Raphson iteration.
fn solve_bezier_x(x1: f32, x2: f32, target_x: f32) -> f32 {
    // Initial guess
    let mut t = target_x;

    // Newton-Raphson iteration
    for _ in 0..8 {
        let x = bezier_x(x1, x2, t) - target_x;
        if x.abs() < 1e-6 {
            break;
        }

        let dx = bezier_x_derivative(x1, x2, t);
        if dx.abs() < 1e-6 {
            break;
        }

        t -= x / dx;
        t = t.clamp(0.0, 1.0);
    }

    t
}

/// Calculate x coordinate on the bezier curve at parameter t.
/// Bezier formula: x(t) = 3(1-t)²t·x1 + 3(1-t)t²·x2 + t³
#[inline]
fn bezier_x(x1: f32, x2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    3.0 * mt2 * t * x1 + 3.0 * mt * t2 * x2 + t3
}

/// Calculate y coordinate on the bezier curve at parameter t.
#[inline]
fn bezier_y(y1: f32, y2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    3.0 * mt2 * t * y1 + 3.0 * mt * t2 * y2 + t3
}

/// Calculate derivative of x with respect to t.
/// dx/dt = 3(1-t)²·x1 + 6(1-t)t·(x2-x1) + 3t²·(1-x2)
#[inline]
fn bezier_x_derivative(x1: f32, x2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}

/// Evaluate the back-out curve: cubic deceleration with a single overshoot.
fn back_out(overshoot: f32, t: f32) -> f32 {
    if t >= 1.0 {
        return 1.0;
    }
    let s = overshoot;
    let u = t - 1.0;
    1.0 + (s + 1.0) * u * u * u + s * u * u
}

/// Evaluate the elastic-out curve: decaying sinusoid around the target.
fn elastic_out(amplitude: f32, period: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let a = amplitude.max(1.0);
    let p = if period > 0.0 { period } else { 0.3 };
    let two_pi = std::f32::consts::TAU;
    // Phase shift so the curve passes through 1.0 at t = 1.0.
    let s = p / two_pi * (1.0 / a).asin();
    a * 2.0_f32.powf(-10.0 * t) * ((t - s) * two_pi / p).sin() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_linear() {
        let ease = EasingFunction::Linear;
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        assert!(approx_eq(ease.evaluate(0.25), 0.25));
        assert!(approx_eq(ease.evaluate(0.5), 0.5));
        assert!(approx_eq(ease.evaluate(0.75), 0.75));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));
    }

    #[test]
    fn test_ease_boundaries() {
        let ease = EasingFunction::Ease;
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));

        // Verify the curve is monotonically increasing
        let early = ease.evaluate(0.25);
        let mid = ease.evaluate(0.5);
        let late = ease.evaluate(0.75);
        assert!(early < mid);
        assert!(mid < late);
    }

    #[test]
    fn test_ease_in_out_symmetry() {
        let ease = EasingFunction::EaseInOut;
        assert!(approx_eq(ease.evaluate(0.5), 0.5));

        let early = ease.evaluate(0.25);
        let late = ease.evaluate(0.75);
        assert!(approx_eq(early + late, 1.0));
    }

    #[test]
    fn test_power_out() {
        let ease = EasingFunction::power_out(3.0);
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));

        // Fast start, decelerating: 1 - 0.5^3 = 0.875
        assert!(approx_eq(ease.evaluate(0.5), 0.875));

        // Monotonically increasing
        let mut prev = 0.0;
        for i in 1..=10 {
            let v = ease.evaluate(i as f32 / 10.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_power_in_out() {
        let ease = EasingFunction::PowerInOut { power: 2.0 };
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        assert!(approx_eq(ease.evaluate(0.5), 0.5));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));

        // Symmetry
        let early = ease.evaluate(0.2);
        let late = ease.evaluate(0.8);
        assert!(approx_eq(early + late, 1.0));
    }

    #[test]
    fn test_back_out_overshoots() {
        let ease = EasingFunction::back_out(1.7);
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));

        // The curve must exceed 1.0 somewhere in the back half
        let peak = (1..20)
            .map(|i| ease.evaluate(i as f32 / 20.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "back-out peak should overshoot, got {peak}");
    }

    #[test]
    fn test_elastic_out_settles() {
        let ease = EasingFunction::elastic_out(1.0, 0.5);
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));

        // Rings around the target: both overshoot and undershoot occur
        let samples: Vec<f32> = (1..40).map(|i| ease.evaluate(i as f32 / 40.0)).collect();
        assert!(samples.iter().any(|v| *v > 1.0));
        // Late samples should be close to 1.0 (decayed)
        let tail = ease.evaluate(0.95);
        assert!((tail - 1.0).abs() < 0.05, "tail should be settled, got {tail}");
    }

    #[test]
    fn test_custom_bezier() {
        // Material Design standard curve
        let ease = EasingFunction::cubic_bezier(0.4, 0.0, 0.2, 1.0);
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));

        // Linear equivalent
        let linear_bezier = EasingFunction::CubicBezier {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        };
        assert!(approx_eq(linear_bezier.evaluate(0.5), 0.5));
    }

    #[test]
    fn test_clamping() {
        let ease = EasingFunction::Ease;

        // Values outside 0-1 should be clamped
        assert!(approx_eq(ease.evaluate(-0.5), 0.0));
        assert!(approx_eq(ease.evaluate(1.5), 1.0));
    }

    #[test]
    fn test_default() {
        assert_eq!(EasingFunction::default(), EasingFunction::Ease);
    }

    #[test]
    #[should_panic(expected = "Bezier x values must be in [0, 1]")]
    fn test_invalid_bezier_x1() {
        EasingFunction::cubic_bezier(-0.1, 0.0, 0.5, 1.0);
    }
}
