// SPDX-License-Identifier: MPL-2.0
//! Reversing loop animation.
//!
//! Drives a value back and forth between two bounds with the same spring
//! step used elsewhere, flipping the target whenever the spring settles.
//! Used for the bobbing headline on the first page.

use super::spring::{Spring, SpringConfig};

#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    spring: Spring,
    from: f32,
    to: f32,
    heading_to: bool,
}

impl Oscillator {
    #[must_use]
    pub fn new(from: f32, to: f32, config: SpringConfig) -> Self {
        let mut spring = Spring::new(from, config);
        spring.retarget(to);
        Self {
            spring,
            from,
            to,
            heading_to: true,
        }
    }

    /// Current value, in `[from, to]` modulo spring overshoot.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.spring.value()
    }

    /// Steps the underlying spring and reverses direction on arrival.
    pub fn step(&mut self, dt: f32) {
        self.spring.step(dt);
        if self.spring.is_settled() {
            self.heading_to = !self.heading_to;
            let next = if self.heading_to { self.to } else { self.from };
            self.spring.retarget(next);
        }
    }
}
