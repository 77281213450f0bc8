// SPDX-License-Identifier: MPL-2.0
//! Damped spring interpolation.
//!
//! Each animated value is driven by a mass/tension/friction spring stepped
//! with semi-implicit Euler at the animation tick rate. Springs own all
//! interpolation state; callers only retarget them.

/// Spring tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
}

impl SpringConfig {
    /// Heavy, snappy response used for the card transforms.
    pub const CARD: SpringConfig = SpringConfig {
        mass: 5.0,
        tension: 350.0,
        friction: 40.0,
    };

    /// Light response for scene scrolling and the headline bob.
    pub const GENTLE: SpringConfig = SpringConfig {
        mass: 1.0,
        tension: 170.0,
        friction: 26.0,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::GENTLE
    }
}

/// Displacement below which a spring may settle, in value units.
const REST_DISPLACEMENT: f32 = 0.01;

/// Velocity below which a spring may settle, in value units per second.
const REST_VELOCITY: f32 = 0.01;

/// A single animated scalar chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
}

impl Spring {
    #[must_use]
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config,
        }
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Retargets the spring, keeping current value and velocity so an
    /// in-flight animation is redirected rather than restarted.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    /// Hard-sets value and target, zeroing velocity. Used for values that
    /// must not animate (the wheel phase) and for initial state.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Whether the spring has reached its target and stopped moving.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DISPLACEMENT
            && self.velocity.abs() < REST_VELOCITY
    }

    /// Advances the simulation by `dt` seconds (semi-implicit Euler).
    /// Snaps to the target once within the rest thresholds.
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let displacement = self.value - self.target;
        let acceleration =
            (-self.config.tension * displacement - self.config.friction * self.velocity)
                / self.config.mass;
        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}
