//! Arch layout - where each tooth placeholder sits
//!
//! Y is up. Each arch spreads its 16 teeth linearly along X and bends the
//! ends back along -Z. The lower arch mirrors the upper one so that
//! Universal numbering runs around the mouth: tooth 16 sits above tooth 17
//! and tooth 1 above tooth 32.

use crate::catalog::{ToothId, ARCH_SIZE};
use crate::config::ArchConfig;

/// Center of the arch, in slots
const ARCH_CENTER: f32 = (ARCH_SIZE as f32 - 1.0) / 2.0;

/// World position of a tooth placeholder
pub fn tooth_position(id: ToothId, arch: &ArchConfig) -> [f32; 3] {
    let slot = id.arch_index() as f32;

    let (x, y) = if id.is_upper() {
        ((ARCH_CENTER - slot) * arch.spacing, arch.gap / 2.0)
    } else {
        ((slot - ARCH_CENTER) * arch.spacing, -arch.gap / 2.0)
    };

    [x, y, -arch.curvature * x * x]
}

/// Yaw (radians about Y) that turns a placeholder to follow the arch curve
pub fn tooth_yaw(id: ToothId, arch: &ArchConfig) -> f32 {
    let [x, _, _] = tooth_position(id, arch);
    // Slope of z = -c x^2 is -2cx
    (2.0 * arch.curvature * x).atan()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> ToothId {
        ToothId::new(n).unwrap()
    }

    #[test]
    fn test_arches_are_mirrored() {
        let arch = ArchConfig::default();

        let p16 = tooth_position(id(16), &arch);
        let p17 = tooth_position(id(17), &arch);
        assert_eq!(p16[0], p17[0]);
        assert_eq!(p16[2], p17[2]);
        assert!(p16[1] > 0.0 && p17[1] < 0.0);

        let p1 = tooth_position(id(1), &arch);
        let p32 = tooth_position(id(32), &arch);
        assert_eq!(p1[0], p32[0]);
        assert_eq!(p1[1], -p32[1]);
    }

    #[test]
    fn test_first_and_last_at_arch_ends() {
        let arch = ArchConfig::default();
        let p1 = tooth_position(ToothId::FIRST, &arch);
        let p32 = tooth_position(ToothId::LAST, &arch);

        let max_x = ARCH_CENTER * arch.spacing;
        assert!((p1[0] - max_x).abs() < 1e-6);
        assert!((p32[0] - max_x).abs() < 1e-6);
        assert_ne!(p1, p32);
    }

    #[test]
    fn test_front_teeth_are_forward() {
        let arch = ArchConfig::default();
        let incisor = tooth_position(id(8), &arch);
        let molar = tooth_position(id(1), &arch);
        assert!(incisor[2] > molar[2]);
        assert!(incisor[2] <= 0.0);
    }

    #[test]
    fn test_positions_unique() {
        let arch = ArchConfig::default();
        let positions: Vec<[f32; 3]> = ToothId::all().map(|t| tooth_position(t, &arch)).collect();
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_yaw_symmetric() {
        let arch = ArchConfig::default();
        let left = tooth_yaw(id(1), &arch);
        let right = tooth_yaw(id(16), &arch);
        assert!((left + right).abs() < 1e-6);
        assert!(left.abs() > 0.0);
    }
}
