//! Per-frame easing for tooth hover and highlight

use crate::config::MotionConfig;

/// Reference frame rate the smoothing factor is tuned for
const REFERENCE_FPS: f32 = 60.0;

/// Resting scale of a placeholder
pub const REST_SCALE: f32 = 1.0;

/// Fraction of the remaining distance to cover this frame.
///
/// Equals `smoothing` when `dt` is one 60 Hz frame, so the easing looks the
/// same at any frame rate.
pub fn frame_factor(smoothing: f32, dt: f32) -> f32 {
    let smoothing = smoothing.clamp(0.0, 1.0);
    1.0 - (1.0 - smoothing).powf(dt.max(0.0) * REFERENCE_FPS)
}

/// One exponential smoothing step: `value += (target - value) * factor`
pub fn ease_toward(value: f32, target: f32, factor: f32) -> f32 {
    value + (target - value) * factor.clamp(0.0, 1.0)
}

/// Hover flag and current scale of one placeholder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToothMotion {
    pub hovered: bool,
    pub scale: f32,
}

impl Default for ToothMotion {
    fn default() -> Self {
        Self {
            hovered: false,
            scale: REST_SCALE,
        }
    }
}

impl ToothMotion {
    pub fn target_scale(&self, active: bool, motion: &MotionConfig) -> f32 {
        if self.hovered || active {
            motion.hover_scale
        } else {
            REST_SCALE
        }
    }

    /// Advance the scale by one frame of `dt` seconds
    pub fn step(&mut self, active: bool, dt: f32, motion: &MotionConfig) -> f32 {
        let target = self.target_scale(active, motion);
        self.scale = ease_toward(self.scale, target, frame_factor(motion.smoothing, dt));
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_frame_factor_matches_smoothing_at_60hz() {
        assert!((frame_factor(0.1, FRAME) - 0.1).abs() < 1e-4);
        assert_eq!(frame_factor(0.1, 0.0), 0.0);
        // Two 60 Hz frames in one step cover the same distance as two steps
        let two = frame_factor(0.1, 2.0 * FRAME);
        assert!((two - (1.0 - 0.9 * 0.9)).abs() < 1e-4);
    }

    #[test]
    fn test_hover_eases_up_without_overshoot() {
        let motion = MotionConfig::default();
        let mut tooth = ToothMotion {
            hovered: true,
            ..Default::default()
        };

        let first = tooth.step(false, FRAME, &motion);
        assert!((first - 1.02).abs() < 1e-3);

        let mut previous = first;
        for _ in 0..300 {
            let scale = tooth.step(false, FRAME, &motion);
            assert!(scale >= previous);
            assert!(scale <= motion.hover_scale);
            previous = scale;
        }
        assert!((previous - motion.hover_scale).abs() < 1e-3);
    }

    #[test]
    fn test_active_tooth_stays_enlarged() {
        let motion = MotionConfig::default();
        let mut tooth = ToothMotion::default();
        for _ in 0..300 {
            tooth.step(true, FRAME, &motion);
        }
        assert!((tooth.scale - motion.hover_scale).abs() < 1e-3);
    }

    #[test]
    fn test_returns_to_rest() {
        let motion = MotionConfig::default();
        let mut tooth = ToothMotion {
            hovered: false,
            scale: motion.hover_scale,
        };
        for _ in 0..300 {
            tooth.step(false, FRAME, &motion);
        }
        assert!((tooth.scale - REST_SCALE).abs() < 1e-3);
        assert!(tooth.scale >= REST_SCALE);
    }
}
