//! Easing curves
//!
//! Maps normalized time `t in 0.0..=1.0` to eased progress. Every curve hits
//! 0.0 at t=0 and exactly 1.0 at t=1, so a finished animation lands on its
//! target value without float drift. All curves except [`Easing::EaseOutBack`]
//! are monotonic; `EaseOutBack` overshoots past 1.0 on the way in and is only
//! suitable for positional properties.

/// An easing curve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    /// Cubic ease-out, the default for reveals
    #[default]
    EaseOut,
    EaseInOut,
    /// Overshooting ease-out (position only, never opacity)
    EaseOutBack,
}

impl Easing {
    /// Apply the curve to a normalized time value
    ///
    /// Input is clamped to `0.0..=1.0` before evaluation.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
            Easing::EaseOutBack => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let shifted = t - 1.0;
                1.0 + C3 * shifted * shifted * shifted + C1 * shifted * shifted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseOutBack,
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for curve in CURVES {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?} at t=0");
            assert_eq!(curve.apply(1.0), 1.0, "{curve:?} at t=1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for curve in CURVES {
            assert_eq!(curve.apply(-0.5), 0.0, "{curve:?} below range");
            assert_eq!(curve.apply(1.5), 1.0, "{curve:?} above range");
        }
    }

    #[test]
    fn test_ease_out_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let v = Easing::EaseOut.apply(t);
            assert!(v >= prev, "not monotonic at t={t}");
            prev = v;
        }
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        // Ease-out covers more than half the distance by the halfway point
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn test_ease_out_back_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::EaseOutBack.apply(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
        assert_eq!(Easing::EaseOutBack.apply(1.0), 1.0);
    }
}
