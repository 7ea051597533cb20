//! Shake State
//!
//! Per-instance shake flag for the click shaker, plus the offset curve that
//! drives the shake animation.
//!
//! Every trigger bumps a generation. A scheduled reset carries the generation
//! it was scheduled for and is dropped if a newer trigger happened since, so
//! only the latest reset can end a shake.

use tracing::debug;

/// Shake flag owned by one click shaker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShakeState {
    shaking: bool,
    generation: u64,
}

impl ShakeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the shake animation is active
    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    /// Generation of the latest trigger
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start (or restart) a shake; returns the generation the reset must carry
    pub fn trigger(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.shaking = true;
        debug!(generation = self.generation, "Shake triggered");
        self.generation
    }

    /// Apply a scheduled reset; returns true if the flag changed
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.shaking {
            return false;
        }
        self.shaking = false;
        true
    }
}

/// Horizontal offset keyframes (progress, pixels)
const KEYFRAMES: [(f32, f32); 6] = [
    (0.0, 0.0),
    (0.25, 6.0),
    (0.5, -6.0),
    (0.7, 6.0),
    (0.85, -4.0),
    (1.0, 0.0),
];

/// Horizontal offset in pixels at animation progress `0.0..=1.0`
pub fn shake_offset(progress: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    for pair in KEYFRAMES.windows(2) {
        let (start, from) = pair[0];
        let (end, to) = pair[1];
        if progress <= end {
            let t = (progress - start) / (end - start);
            return from + (to - from) * t;
        }
    }
    0.0
}

/// CSS-style cubic-bezier easing with fixed end points (0,0) and (1,1)
pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> impl Fn(f32) -> f32 + Clone + 'static {
    move |x: f32| {
        let x = x.clamp(0.0, 1.0);
        // x(t) is monotonic for x1, x2 in [0, 1]
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        let mut t = x;
        for _ in 0..24 {
            let sample = bezier_axis(x1, x2, t);
            if (sample - x).abs() < 1e-5 {
                break;
            }
            if sample < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        bezier_axis(y1, y2, t)
    }
}

fn bezier_axis(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_and_settle() {
        let mut state = ShakeState::new();
        let generation = state.trigger();
        assert!(state.is_shaking());
        assert!(state.settle(generation));
        assert!(!state.is_shaking());
        assert!(!state.settle(generation));
    }

    #[test]
    fn test_stale_reset_is_ignored() {
        let mut state = ShakeState::new();
        let first = state.trigger();
        let second = state.trigger();
        assert!(!state.settle(first));
        assert!(state.is_shaking());
        assert!(state.settle(second));
        assert!(!state.is_shaking());
    }

    #[test]
    fn test_shake_offset_keyframes() {
        let close = |a: f32, b: f32| (a - b).abs() < 1e-4;
        assert!(close(shake_offset(0.0), 0.0));
        assert!(close(shake_offset(0.25), 6.0));
        assert!(close(shake_offset(0.5), -6.0));
        assert!(close(shake_offset(0.7), 6.0));
        assert!(close(shake_offset(0.85), -4.0));
        assert!(close(shake_offset(1.0), 0.0));
        assert!(close(shake_offset(0.375), 0.0));
        assert!(close(shake_offset(2.0), 0.0));
    }

    #[test]
    fn test_cubic_bezier() {
        let linear = cubic_bezier(0.0, 0.0, 1.0, 1.0);
        assert!((linear(0.3) - 0.3).abs() < 1e-3);

        let ease = cubic_bezier(0.36, 0.07, 0.19, 0.97);
        assert!(ease(0.0).abs() < 1e-4);
        assert!((ease(1.0) - 1.0).abs() < 1e-4);
        assert!(ease(0.25) < ease(0.5));
        assert!(ease(0.5) < ease(0.75));
    }
}
