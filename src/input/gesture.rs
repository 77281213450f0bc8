// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition over raw Iced events.
//!
//! Tracks the last known input sample (cursor, pressed buttons, touch
//! fingers, wheel phase) and emits gestures for the card plus scroll/click
//! actions for the scene. Drag and wheel offsets are cumulative across
//! gestures, so releasing and re-grabbing the card continues from where it
//! was left.

use crate::transform::Gesture;
use iced::{mouse, touch, Point, Rectangle, Vector};

/// Pixels represented by one wheel "line" when the platform reports line
/// deltas instead of pixel deltas.
pub const WHEEL_LINE_PX: f32 = 40.0;

/// Actions produced from one raw event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Forward a gesture to the card's transform mapper.
    Card(Gesture),
    /// Scroll the parallax scene by a pixel delta.
    ScrollScene(f32),
    /// The hero layer was clicked; glide to its target page.
    HeroClicked,
}

#[derive(Debug, Clone, Copy, Default)]
struct DragTracking {
    dragging: bool,
    press_position: Option<Point>,
    start_offset: Vector,
}

#[derive(Debug, Clone, Copy, Default)]
struct PinchTracking {
    /// Distance and angle of the two-finger segment when the pinch began.
    baseline: Option<(f32, f32)>,
    /// Offsets committed by previous pinches.
    accumulated: (f32, f32),
}

/// Stateful gesture recognizer. One instance lives in the app and sees every
/// raw event in arrival order.
#[derive(Debug, Default)]
pub struct Recognizer {
    cursor: Option<Point>,
    hovering: bool,
    drag: DragTracking,
    drag_offset: Vector,
    wheel_offset: f32,
    fingers: Vec<(touch::Finger, Point)>,
    pinch: PinchTracking,
}

impl Recognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumulative drag offset, surviving between drags.
    #[must_use]
    pub fn drag_offset(&self) -> Vector {
        self.drag_offset
    }

    /// Cumulative wheel phase consumed by the card.
    #[must_use]
    pub fn wheel_offset(&self) -> f32 {
        self.wheel_offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.fingers.len() >= 2
    }

    /// Feeds one raw event through the recognizer.
    ///
    /// `card` is the card's current on-screen bounds; `hero` is the hero
    /// layer's clickable region (empty when scrolled off screen).
    pub fn handle_event(
        &mut self,
        event: &iced::Event,
        card: Rectangle,
        hero: Rectangle,
    ) -> Vec<InputAction> {
        match event {
            iced::Event::Mouse(mouse_event) => self.handle_mouse(mouse_event, card, hero),
            iced::Event::Touch(touch_event) => self.handle_touch(touch_event),
            _ => Vec::new(),
        }
    }

    fn handle_mouse(
        &mut self,
        event: &mouse::Event,
        card: Rectangle,
        hero: Rectangle,
    ) -> Vec<InputAction> {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor = Some(*position);
                self.on_cursor_moved(*position, card)
            }
            mouse::Event::CursorLeft => {
                self.cursor = None;
                self.end_hover()
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => self.on_press(card),
            mouse::Event::ButtonReleased(mouse::Button::Left) => self.on_release(hero),
            mouse::Event::WheelScrolled { delta } => self.on_wheel(*delta, card),
            _ => Vec::new(),
        }
    }

    fn on_cursor_moved(&mut self, position: Point, card: Rectangle) -> Vec<InputAction> {
        // Two active fingers own the interaction; single-pointer gestures
        // stay quiet until the pinch ends.
        if self.is_pinching() {
            return Vec::new();
        }

        if self.drag.dragging {
            let offset = self.current_drag_offset(position);
            return vec![InputAction::Card(Gesture::Drag {
                active: true,
                offset,
            })];
        }

        if card.contains(position) {
            self.hovering = true;
            vec![InputAction::Card(Gesture::Move { position })]
        } else {
            self.end_hover()
        }
    }

    fn on_press(&mut self, card: Rectangle) -> Vec<InputAction> {
        if self.is_pinching() {
            return Vec::new();
        }
        let Some(position) = self.cursor else {
            return Vec::new();
        };
        if !card.contains(position) {
            return Vec::new();
        }

        self.drag.dragging = true;
        self.drag.press_position = Some(position);
        self.drag.start_offset = self.drag_offset;
        vec![InputAction::Card(Gesture::Drag {
            active: true,
            offset: self.drag_offset,
        })]
    }

    fn on_release(&mut self, hero: Rectangle) -> Vec<InputAction> {
        if self.drag.dragging {
            if let Some(position) = self.cursor {
                self.drag_offset = self.current_drag_offset(position);
            }
            self.drag.dragging = false;
            self.drag.press_position = None;
            return vec![InputAction::Card(Gesture::Drag {
                active: false,
                offset: self.drag_offset,
            })];
        }

        match self.cursor {
            Some(position) if hero.contains(position) => vec![InputAction::HeroClicked],
            _ => Vec::new(),
        }
    }

    fn on_wheel(&mut self, delta: mouse::ScrollDelta, card: Rectangle) -> Vec<InputAction> {
        let delta_px = match delta {
            // Wheel up reports positive y; scrolling down moves content up.
            mouse::ScrollDelta::Lines { y, .. } => -y * WHEEL_LINE_PX,
            mouse::ScrollDelta::Pixels { y, .. } => -y,
        };

        match self.cursor {
            // Over the card the wheel feeds the looping banner and the scene
            // stays put.
            Some(position) if card.contains(position) => {
                self.wheel_offset += delta_px;
                vec![InputAction::Card(Gesture::Wheel {
                    offset_y: self.wheel_offset,
                })]
            }
            _ => vec![InputAction::ScrollScene(delta_px)],
        }
    }

    fn handle_touch(&mut self, event: &touch::Event) -> Vec<InputAction> {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                self.upsert_finger(id, position);
                if self.fingers.len() == 2 {
                    self.pinch.baseline = self.segment();
                }
                Vec::new()
            }
            touch::Event::FingerMoved { id, position } => {
                self.upsert_finger(id, position);
                self.emit_pinch()
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                self.remove_finger(id);
                Vec::new()
            }
        }
    }

    fn upsert_finger(&mut self, id: touch::Finger, position: Point) {
        if let Some(entry) = self.fingers.iter_mut().find(|(finger, _)| *finger == id) {
            entry.1 = position;
        } else {
            self.fingers.push((id, position));
        }
    }

    fn remove_finger(&mut self, id: touch::Finger) {
        // Leaving a two-finger pinch commits its offsets.
        if self.fingers.len() == 2 {
            if let (Some((d0, a0)), Some((d, a))) = (self.pinch.baseline, self.segment()) {
                self.pinch.accumulated.0 += d - d0;
                self.pinch.accumulated.1 += a - a0;
            }
            self.pinch.baseline = None;
        }
        self.fingers.retain(|(finger, _)| *finger != id);
    }

    /// Distance (px) and angle (degrees) of the first two fingers' segment.
    fn segment(&self) -> Option<(f32, f32)> {
        let (_, a) = *self.fingers.first()?;
        let (_, b) = *self.fingers.get(1)?;
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let distance = (dx * dx + dy * dy).sqrt();
        let angle = dy.atan2(dx).to_degrees();
        Some((distance, angle))
    }

    fn emit_pinch(&self) -> Vec<InputAction> {
        if !self.is_pinching() {
            return Vec::new();
        }
        let (Some((d0, a0)), Some((d, a))) = (self.pinch.baseline, self.segment()) else {
            return Vec::new();
        };
        vec![InputAction::Card(Gesture::Pinch {
            distance: self.pinch.accumulated.0 + (d - d0),
            angle: self.pinch.accumulated.1 + (a - a0),
        })]
    }

    fn current_drag_offset(&self, position: Point) -> Vector {
        match self.drag.press_position {
            Some(press) => Vector::new(
                self.drag.start_offset.x + (position.x - press.x),
                self.drag.start_offset.y + (position.y - press.y),
            ),
            None => self.drag.start_offset,
        }
    }

    fn end_hover(&mut self) -> Vec<InputAction> {
        if self.hovering {
            self.hovering = false;
            vec![InputAction::Card(Gesture::HoverEnd)]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::{Point, Rectangle, Size};

    fn card() -> Rectangle {
        Rectangle::new(Point::new(300.0, 200.0), Size::new(200.0, 300.0))
    }

    fn hero() -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(800.0, 150.0))
    }

    fn moved(position: Point) -> iced::Event {
        iced::Event::Mouse(mouse::Event::CursorMoved { position })
    }

    fn pressed() -> iced::Event {
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn released() -> iced::Event {
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    fn wheel_lines(y: f32) -> iced::Event {
        iced::Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y },
        })
    }

    #[test]
    fn hover_over_card_emits_move_gesture() {
        let mut recognizer = Recognizer::new();
        let actions = recognizer.handle_event(&moved(Point::new(400.0, 300.0)), card(), hero());

        assert_eq!(
            actions,
            vec![InputAction::Card(Gesture::Move {
                position: Point::new(400.0, 300.0)
            })]
        );
    }

    #[test]
    fn leaving_card_emits_hover_end_once() {
        let mut recognizer = Recognizer::new();
        let _ = recognizer.handle_event(&moved(Point::new(400.0, 300.0)), card(), hero());

        let first = recognizer.handle_event(&moved(Point::new(10.0, 10.0)), card(), hero());
        let second = recognizer.handle_event(&moved(Point::new(20.0, 20.0)), card(), hero());

        assert_eq!(first, vec![InputAction::Card(Gesture::HoverEnd)]);
        assert!(second.is_empty());
    }

    #[test]
    fn drag_reports_cumulative_offset_across_grabs() {
        let mut recognizer = Recognizer::new();
        let _ = recognizer.handle_event(&moved(Point::new(400.0, 300.0)), card(), hero());
        let _ = recognizer.handle_event(&pressed(), card(), hero());
        let _ = recognizer.handle_event(&moved(Point::new(430.0, 280.0)), card(), hero());
        let release = recognizer.handle_event(&released(), card(), hero());

        assert_eq!(
            release,
            vec![InputAction::Card(Gesture::Drag {
                active: false,
                offset: Vector::new(30.0, -20.0)
            })]
        );

        // Second drag continues from the committed offset.
        let _ = recognizer.handle_event(&moved(Point::new(400.0, 300.0)), card(), hero());
        let _ = recognizer.handle_event(&pressed(), card(), hero());
        let actions = recognizer.handle_event(&moved(Point::new(410.0, 305.0)), card(), hero());

        assert_eq!(
            actions,
            vec![InputAction::Card(Gesture::Drag {
                active: true,
                offset: Vector::new(40.0, -15.0)
            })]
        );
    }

    #[test]
    fn press_outside_card_does_not_start_drag() {
        let mut recognizer = Recognizer::new();
        let _ = recognizer.handle_event(&moved(Point::new(10.0, 10.0)), card(), hero());
        let actions = recognizer.handle_event(&pressed(), card(), hero());

        assert!(actions.is_empty());
        assert!(!recognizer.is_dragging());
    }

    #[test]
    fn click_on_hero_layer_requests_scroll() {
        let mut recognizer = Recognizer::new();
        let _ = recognizer.handle_event(&moved(Point::new(100.0, 50.0)), card(), hero());
        let _ = recognizer.handle_event(&pressed(), card(), hero());
        let actions = recognizer.handle_event(&released(), card(), hero());

        assert_eq!(actions, vec![InputAction::HeroClicked]);
    }

    #[test]
    fn wheel_over_card_accumulates_and_suppresses_scene_scroll() {
        let mut recognizer = Recognizer::new();
        let _ = recognizer.handle_event(&moved(Point::new(400.0, 300.0)), card(), hero());

        let first = recognizer.handle_event(&wheel_lines(-1.0), card(), hero());
        let second = recognizer.handle_event(&wheel_lines(-2.0), card(), hero());

        assert_eq!(
            first,
            vec![InputAction::Card(Gesture::Wheel {
                offset_y: WHEEL_LINE_PX
            })]
        );
        assert_eq!(
            second,
            vec![InputAction::Card(Gesture::Wheel {
                offset_y: 3.0 * WHEEL_LINE_PX
            })]
        );
    }

    #[test]
    fn wheel_off_card_scrolls_scene() {
        let mut recognizer = Recognizer::new();
        let _ = recognizer.handle_event(&moved(Point::new(10.0, 10.0)), card(), hero());
        let actions = recognizer.handle_event(&wheel_lines(-1.0), card(), hero());

        assert_eq!(actions, vec![InputAction::ScrollScene(WHEEL_LINE_PX)]);
    }

    #[test]
    fn two_finger_pinch_reports_distance_and_angle_deltas() {
        let mut recognizer = Recognizer::new();
        let finger = |id: u64| touch::Finger(id);

        let _ = recognizer.handle_event(
            &iced::Event::Touch(touch::Event::FingerPressed {
                id: finger(1),
                position: Point::new(100.0, 100.0),
            }),
            card(),
            hero(),
        );
        let _ = recognizer.handle_event(
            &iced::Event::Touch(touch::Event::FingerPressed {
                id: finger(2),
                position: Point::new(200.0, 100.0),
            }),
            card(),
            hero(),
        );
        assert!(recognizer.is_pinching());

        // Spread horizontally by 100 px: distance +100, angle unchanged.
        let actions = recognizer.handle_event(
            &iced::Event::Touch(touch::Event::FingerMoved {
                id: finger(2),
                position: Point::new(300.0, 100.0),
            }),
            card(),
            hero(),
        );

        assert_eq!(actions.len(), 1);
        let InputAction::Card(Gesture::Pinch { distance, angle }) = actions[0] else {
            panic!("expected a pinch gesture, got {actions:?}");
        };
        assert_abs_diff_eq!(distance, 100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn rotating_the_finger_segment_reports_angle() {
        let mut recognizer = Recognizer::new();
        let finger = |id: u64| touch::Finger(id);

        let press = |id, position| {
            iced::Event::Touch(touch::Event::FingerPressed { id, position })
        };
        let _ = recognizer.handle_event(&press(finger(1), Point::new(0.0, 0.0)), card(), hero());
        let _ = recognizer.handle_event(&press(finger(2), Point::new(100.0, 0.0)), card(), hero());

        // Rotate the second finger 90 degrees around the first.
        let actions = recognizer.handle_event(
            &iced::Event::Touch(touch::Event::FingerMoved {
                id: finger(2),
                position: Point::new(0.0, 100.0),
            }),
            card(),
            hero(),
        );

        assert_eq!(actions.len(), 1);
        let InputAction::Card(Gesture::Pinch { angle, .. }) = actions[0] else {
            panic!("expected a pinch gesture, got {actions:?}");
        };
        assert_abs_diff_eq!(angle, 90.0, epsilon = 1e-3);
    }

    #[test]
    fn lifting_a_finger_commits_pinch_offsets() {
        let mut recognizer = Recognizer::new();
        let finger = |id: u64| touch::Finger(id);
        let press = |id, position| {
            iced::Event::Touch(touch::Event::FingerPressed { id, position })
        };

        let _ = recognizer.handle_event(&press(finger(1), Point::new(0.0, 0.0)), card(), hero());
        let _ = recognizer.handle_event(&press(finger(2), Point::new(100.0, 0.0)), card(), hero());
        let _ = recognizer.handle_event(
            &iced::Event::Touch(touch::Event::FingerMoved {
                id: finger(2),
                position: Point::new(150.0, 0.0),
            }),
            card(),
            hero(),
        );
        let _ = recognizer.handle_event(
            &iced::Event::Touch(touch::Event::FingerLifted {
                id: finger(2),
                position: Point::new(150.0, 0.0),
            }),
            card(),
            hero(),
        );

        // A new pinch starts from the committed +50 distance offset.
        let _ = recognizer.handle_event(&press(finger(3), Point::new(100.0, 0.0)), card(), hero());
        let actions = recognizer.handle_event(
            &iced::Event::Touch(touch::Event::FingerMoved {
                id: finger(3),
                position: Point::new(120.0, 0.0),
            }),
            card(),
            hero(),
        );

        assert_eq!(actions.len(), 1);
        let InputAction::Card(Gesture::Pinch { distance, .. }) = actions[0] else {
            panic!("expected a pinch gesture, got {actions:?}");
        };
        assert_abs_diff_eq!(distance, 70.0, epsilon = 1e-3);
    }

    #[test]
    fn pinch_suppresses_drag_and_hover() {
        let mut recognizer = Recognizer::new();
        let finger = |id: u64| touch::Finger(id);
        let press = |id, position| {
            iced::Event::Touch(touch::Event::FingerPressed { id, position })
        };
        let _ = recognizer.handle_event(&press(finger(1), Point::new(0.0, 0.0)), card(), hero());
        let _ = recognizer.handle_event(&press(finger(2), Point::new(50.0, 0.0)), card(), hero());

        let actions = recognizer.handle_event(&moved(Point::new(400.0, 300.0)), card(), hero());
        assert!(actions.is_empty());
    }
}
