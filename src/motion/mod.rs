// SPDX-License-Identifier: MPL-2.0
//! Spring animation engine.
//!
//! The only stateful part of the animation pipeline: the transform mapper
//! produces targets, the springs here chase them frame by frame, and the
//! canvas layer reads the interpolated values when painting.

pub mod oscillator;
pub mod spring;

pub use oscillator::Oscillator;
pub use spring::{Spring, SpringConfig};

use crate::transform::CardTarget;
use iced::Vector;

/// One spring per animated card value, plus the non-animated wheel phase.
#[derive(Debug, Clone, Copy)]
pub struct CardSprings {
    pub x: Spring,
    pub y: Spring,
    pub rotate_x: Spring,
    pub rotate_y: Spring,
    pub rotate_z: Spring,
    pub scale: Spring,
    pub zoom: Spring,
    /// Wheel phase is written with `Spring::set` and never interpolated.
    pub wheel_y: Spring,
}

impl Default for CardSprings {
    fn default() -> Self {
        let card = |value| Spring::new(value, SpringConfig::CARD);
        Self {
            x: card(0.0),
            y: card(0.0),
            rotate_x: card(0.0),
            rotate_y: card(0.0),
            rotate_z: card(0.0),
            scale: card(crate::transform::REST_SCALE),
            zoom: card(0.0),
            wheel_y: Spring::new(0.0, SpringConfig::CARD),
        }
    }
}

impl CardSprings {
    /// Points every spring at the mapper's latest targets. The wheel phase
    /// jumps immediately; everything else animates.
    pub fn chase(&mut self, target: &CardTarget) {
        self.x.retarget(target.x);
        self.y.retarget(target.y);
        self.rotate_x.retarget(target.rotate_x);
        self.rotate_y.retarget(target.rotate_y);
        self.rotate_z.retarget(target.rotate_z);
        self.scale.retarget(target.scale);
        self.zoom.retarget(target.zoom);
        self.wheel_y.set(target.wheel_y);
    }

    /// Jumps every spring straight to its target (reduced-motion mode).
    pub fn snap(&mut self, target: &CardTarget) {
        self.x.set(target.x);
        self.y.set(target.y);
        self.rotate_x.set(target.rotate_x);
        self.rotate_y.set(target.rotate_y);
        self.rotate_z.set(target.rotate_z);
        self.scale.set(target.scale);
        self.zoom.set(target.zoom);
        self.wheel_y.set(target.wheel_y);
    }

    pub fn step(&mut self, dt: f32) {
        self.x.step(dt);
        self.y.step(dt);
        self.rotate_x.step(dt);
        self.rotate_y.step(dt);
        self.rotate_z.step(dt);
        self.scale.step(dt);
        self.zoom.step(dt);
    }

    /// True once every spring has reached its target; gates the tick
    /// subscription so an idle scene schedules no frames.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.x.is_settled()
            && self.y.is_settled()
            && self.rotate_x.is_settled()
            && self.rotate_y.is_settled()
            && self.rotate_z.is_settled()
            && self.scale.is_settled()
            && self.zoom.is_settled()
    }

    /// Current interpolated translation, used as the tilt reference.
    #[must_use]
    pub fn translation(&self) -> Vector {
        Vector::new(self.x.value(), self.y.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, SPRING_EPSILON};
    use crate::transform::{CardTarget, REST_SCALE};

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn default_card_springs_are_settled() {
        let springs = CardSprings::default();
        assert!(springs.is_settled());
        assert_abs_diff_eq!(springs.scale.value(), REST_SCALE);
    }

    #[test]
    fn chase_animates_transforms_but_sets_wheel() {
        let mut springs = CardSprings::default();
        let target = CardTarget {
            x: 50.0,
            wheel_y: 420.0,
            ..CardTarget::default()
        };

        springs.chase(&target);

        // Wheel jumped, translation has not yet.
        assert_abs_diff_eq!(springs.wheel_y.value(), 420.0);
        assert_abs_diff_eq!(springs.x.value(), 0.0);
        assert!(!springs.is_settled());
    }

    #[test]
    fn stepping_converges_all_springs() {
        let mut springs = CardSprings::default();
        let target = CardTarget {
            x: 50.0,
            y: -20.0,
            rotate_x: 4.0,
            rotate_y: -3.0,
            scale: 1.1,
            ..CardTarget::default()
        };
        springs.chase(&target);

        for _ in 0..600 {
            springs.step(DT);
        }

        assert!(springs.is_settled());
        assert_abs_diff_eq!(springs.x.value(), 50.0, epsilon = SPRING_EPSILON);
        assert_abs_diff_eq!(springs.y.value(), -20.0, epsilon = SPRING_EPSILON);
        assert_abs_diff_eq!(springs.scale.value(), 1.1, epsilon = SPRING_EPSILON);
    }

    #[test]
    fn snap_settles_immediately() {
        let mut springs = CardSprings::default();
        let target = CardTarget {
            x: 50.0,
            rotate_z: 15.0,
            ..CardTarget::default()
        };

        springs.snap(&target);

        assert!(springs.is_settled());
        assert_abs_diff_eq!(springs.x.value(), 50.0);
        assert_abs_diff_eq!(springs.rotate_z.value(), 15.0);
    }
}
