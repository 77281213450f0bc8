// SPDX-License-Identifier: MPL-2.0
//! Pointer/gesture transform mapping.
//!
//! Pure functions that turn the latest input sample (cursor position, drag
//! offset, pinch distance/angle, wheel phase) into the target transform
//! values the spring engine interpolates toward. Nothing here is animated or
//! stateful beyond [`CardTarget`] being a plain bag of targets; the springs
//! in [`crate::motion`] own all interpolation state.

use iced::{Point, Size, Vector};

/// Damping divisor applied to the cursor's distance from the viewport center
/// when deriving tilt angles.
pub const TILT_DAMPING: f32 = 20.0;

/// Scale applied to the card while the cursor hovers or drags it.
pub const HOVER_SCALE: f32 = 1.1;

/// Resting card scale.
pub const REST_SCALE: f32 = 1.0;

/// Divisor turning pinch distance (px) into additional zoom.
pub const PINCH_ZOOM_DIVISOR: f32 = 200.0;

/// Tilt around the horizontal axis, following the cursor's vertical offset
/// from the viewport center. `last_translate_y` is the card's current
/// vertical translation so a dragged-away card tilts about its own center.
///
/// Linear in `pointer_y` with slope `-1/20`; a centered cursor yields zero.
#[must_use]
pub fn tilt_x(pointer_y: f32, last_translate_y: f32, viewport_height: f32) -> f32 {
    -(pointer_y - last_translate_y - viewport_height / 2.0) / TILT_DAMPING
}

/// Tilt around the vertical axis, following the cursor's horizontal offset
/// from the viewport center.
///
/// Linear in `pointer_x` with slope `1/20`; a centered cursor yields zero.
#[must_use]
pub fn tilt_y(pointer_x: f32, last_translate_x: f32, viewport_width: f32) -> f32 {
    (pointer_x - last_translate_x - viewport_width / 2.0) / TILT_DAMPING
}

/// Height of one banner image inside the card, derived from viewport width.
#[must_use]
pub fn banner_height(viewport_width: f32) -> f32 {
    viewport_width * 0.3 - 20.0
}

/// Wraparound vertical translation for the card's banner strip.
///
/// With `h = banner_height(viewport_width)`, the phase wraps with period
/// `5h`, so the strip loops as `scroll_y` grows without bound. The wrapped
/// term uses the Euclidean remainder, which stays in `[0, 5h)` for negative
/// operands as well. The leading constant is `6h` for negative scroll and
/// `1h` otherwise; `scroll_y == 0` takes the non-negative branch.
#[must_use]
pub fn loop_offset(scroll_y: f32, viewport_width: f32) -> f32 {
    let h = banner_height(viewport_width);
    let lead = if scroll_y < 0.0 { 6.0 } else { 1.0 };
    -h * lead - scroll_y.rem_euclid(h * 5.0)
}

/// High-level gestures recognized from raw input events.
///
/// Distances and offsets are in logical pixels; angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Pointer drag over the card. `offset` is cumulative across drags.
    Drag { active: bool, offset: Vector },
    /// Two-finger pinch: inter-finger distance and segment angle.
    Pinch { distance: f32, angle: f32 },
    /// Cursor movement over the card while no drag is active.
    Move { position: Point },
    /// Cursor left the card.
    HoverEnd,
    /// Wheel input captured by the card; `offset_y` is cumulative.
    Wheel { offset_y: f32 },
}

/// Target transform values for the card. Each qualifying input event
/// overwrites the affected values; the spring engine chases them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTarget {
    pub x: f32,
    pub y: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub rotate_z: f32,
    pub scale: f32,
    pub zoom: f32,
    /// Banner loop phase. Hard-set, never interpolated.
    pub wheel_y: f32,
}

impl Default for CardTarget {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            rotate_z: 0.0,
            scale: REST_SCALE,
            zoom: 0.0,
            wheel_y: 0.0,
        }
    }
}

impl CardTarget {
    /// Applies one gesture to the targets.
    ///
    /// `current_translate` is the card's present (spring-interpolated)
    /// translation, used as the tilt reference so hover tilt follows a card
    /// that has been dragged away from center.
    pub fn apply(&mut self, gesture: Gesture, viewport: Size, current_translate: Vector) {
        match gesture {
            Gesture::Drag { active, offset } => {
                self.x = offset.x;
                self.y = offset.y;
                self.rotate_x = 0.0;
                self.rotate_y = 0.0;
                self.scale = if active { HOVER_SCALE } else { REST_SCALE };
            }
            Gesture::Pinch { distance, angle } => {
                self.zoom = distance / PINCH_ZOOM_DIVISOR;
                self.rotate_z = angle;
            }
            Gesture::Move { position } => {
                self.rotate_x = tilt_x(position.y, current_translate.y, viewport.height);
                self.rotate_y = tilt_y(position.x, current_translate.x, viewport.width);
                self.scale = HOVER_SCALE;
            }
            Gesture::HoverEnd => {
                self.rotate_x = 0.0;
                self.rotate_y = 0.0;
                self.scale = REST_SCALE;
            }
            Gesture::Wheel { offset_y } => {
                self.wheel_y = offset_y;
            }
        }
    }

    /// Scale the renderer applies: hover/drag scale plus pinch zoom.
    #[must_use]
    pub fn rendered_scale(&self) -> f32 {
        self.scale + self.zoom
    }
}
