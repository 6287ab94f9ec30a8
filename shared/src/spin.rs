use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::settings::SpinSettings;

/// Rotation that brings `target_angle` under the fixed pointer, in `[0, 360)`.
pub fn alignment_angle(target_angle: f64) -> f64 {
    let target = if target_angle.is_finite() { target_angle } else { 0.0 };
    let aligned = (360.0 - target).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if aligned >= 360.0 {
        0.0
    } else {
        aligned
    }
}

/// Normalises an accumulated rotation to the wheel's resting angle.
pub fn resting_angle(rotation: f64) -> f64 {
    if !rotation.is_finite() {
        return 0.0;
    }
    let rest = rotation.rem_euclid(360.0);
    if rest >= 360.0 {
        0.0
    } else {
        rest
    }
}

/// Everything the view needs to animate one spin and schedule its reveal.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinPlan {
    /// Increments per successful spin so repeated plans are never equal.
    pub sequence: u64,
    /// Angle the wheel rests at before this spin starts.
    pub start_rotation: f64,
    pub final_rotation: f64,
    pub full_rotations: u32,
    pub duration_secs: f64,
    pub reveal_delay_ms: u32,
    pub easing: String,
}

impl SpinPlan {
    pub fn transition_css(&self) -> String {
        format!("transform {:.2}s {}", self.duration_secs, self.easing)
    }

    pub fn start_transform_css(&self) -> String {
        format!("rotate({}deg)", self.start_rotation)
    }

    pub fn final_transform_css(&self) -> String {
        format!("rotate({}deg)", self.final_rotation)
    }

    pub fn resting_angle(&self) -> f64 {
        resting_angle(self.final_rotation)
    }
}

/// Picks a random duration in the configured range and plans the spin.
pub fn plan_spin<R: Rng + ?Sized>(
    settings: &SpinSettings,
    target_angle: f64,
    start_rotation: f64,
    sequence: u64,
    rng: &mut R,
) -> SpinPlan {
    let spread = (settings.max_duration_secs - settings.min_duration_secs).max(0.0);
    let duration = settings.min_duration_secs + rng.gen::<f64>() * spread;
    plan_spin_with_duration(settings, target_angle, start_rotation, sequence, duration)
}

pub fn plan_spin_with_duration(
    settings: &SpinSettings,
    target_angle: f64,
    start_rotation: f64,
    sequence: u64,
    duration_secs: f64,
) -> SpinPlan {
    let proportional = (duration_secs * settings.rotations_per_second).round().max(0.0) as u32;
    let full_rotations = proportional.max(settings.min_rotations);
    let final_rotation = f64::from(full_rotations) * 360.0 + alignment_angle(target_angle);
    let animation_ms = (duration_secs * 1000.0).round().max(0.0) as u32;
    let reveal_delay_ms = animation_ms.saturating_add(settings.reveal_buffer_ms);

    SpinPlan {
        sequence,
        start_rotation,
        final_rotation,
        full_rotations,
        duration_secs,
        reveal_delay_ms,
        easing: settings.easing.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alignment_stays_in_range() {
        let mut angle = 0.0;
        while angle < 360.0 {
            let aligned = alignment_angle(angle);
            assert!((0.0..360.0).contains(&aligned), "{} -> {}", angle, aligned);
            angle += 0.25;
        }
        assert_eq!(alignment_angle(0.0), 0.0);
        assert_eq!(alignment_angle(359.99), 360.0 - 359.99);
    }

    #[test]
    fn test_final_rotation_lands_on_alignment() {
        let settings = SpinSettings::default();
        let mut rng = StdRng::seed_from_u64(7);
        for target in [0.0, 12.5, 90.0, 180.0, 271.3, 359.5] {
            let plan = plan_spin(&settings, target, 0.0, 1, &mut rng);
            let expected = alignment_angle(target);
            assert!((plan.resting_angle() - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_quarter_turn_target() {
        let plan = plan_spin_with_duration(&SpinSettings::default(), 90.0, 0.0, 1, 6.0);
        assert_eq!(plan.final_rotation % 360.0, 270.0);
        assert_eq!(plan.full_rotations, 60);
        assert_eq!(plan.reveal_delay_ms, 6200);
    }

    #[test]
    fn test_short_spin_uses_minimum_rotations() {
        let plan = plan_spin_with_duration(&SpinSettings::default(), 0.0, 0.0, 1, 4.2);
        assert_eq!(plan.full_rotations, 50);
        assert_eq!(plan.final_rotation, 50.0 * 360.0);
    }

    #[test]
    fn test_duration_stays_within_bounds() {
        let settings = SpinSettings::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let plan = plan_spin(&settings, 45.0, 0.0, 1, &mut rng);
            assert!(plan.duration_secs >= 5.0 && plan.duration_secs < 10.0);
            assert!(plan.full_rotations >= 50 && plan.full_rotations <= 100);
        }
    }

    #[test]
    fn test_reveal_buffer_is_configurable() {
        let settings = SpinSettings { reveal_buffer_ms: 750, ..SpinSettings::default() };
        let plan = plan_spin_with_duration(&settings, 10.0, 0.0, 1, 5.5);
        assert_eq!(plan.reveal_delay_ms, 6250);
    }

    #[test]
    fn test_reveal_delay_never_wraps() {
        let settings = SpinSettings { reveal_buffer_ms: u32::MAX, ..SpinSettings::default() };
        let plan = plan_spin_with_duration(&settings, 0.0, 0.0, 1, 6.0);
        assert_eq!(plan.reveal_delay_ms, u32::MAX);

        let plan = plan_spin_with_duration(&SpinSettings::default(), 0.0, 0.0, 1, 5_000_000.0);
        assert_eq!(plan.reveal_delay_ms, u32::MAX);
    }

    #[test]
    fn test_resting_angle_of_large_rotation() {
        assert_eq!(resting_angle(100.0 * 360.0 + 270.0), 270.0);
        assert_eq!(resting_angle(-90.0), 270.0);
        assert_eq!(resting_angle(720.0), 0.0);
        assert_eq!(resting_angle(f64::NAN), 0.0);
    }

    #[test]
    fn test_transition_css_formatting() {
        let plan = plan_spin_with_duration(&SpinSettings::default(), 90.0, 45.0, 3, 7.456);
        assert_eq!(plan.transition_css(), "transform 7.46s cubic-bezier(0.12, 0.8, 0.2, 1)");
        assert_eq!(plan.start_transform_css(), "rotate(45deg)");
        assert_eq!(plan.final_transform_css(), "rotate(27270deg)");
    }
}
