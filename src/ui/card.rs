// SPDX-License-Identifier: MPL-2.0
//! The interactive card.
//!
//! A full-viewport canvas layer that paints the card quad under its current
//! spring-interpolated pose: translation, three rotation axes flattened
//! through a perspective projection, and the combined hover/pinch scale. The
//! banner strip inside the card loops vertically with the captured wheel
//! phase.

use crate::transform;
use crate::ui::design_tokens::sizing;
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Path, Stroke};
use iced::{mouse, Color, Point, Rectangle, Renderer, Theme, Vector};

/// Rigid pose of the card, before translation. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub rotate_z: f32,
    pub scale: f32,
}

impl Default for CardPose {
    fn default() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            rotate_z: 0.0,
            scale: 1.0,
        }
    }
}

impl CardPose {
    /// Projects a card-local point (origin at the card center, y down) to
    /// viewport-plane coordinates.
    ///
    /// Rotation order matches the composite transform the pose mirrors:
    /// roll (z), then yaw (y), then pitch (x), then a perspective divide
    /// with focal length [`sizing::CARD_FOCAL_LENGTH`]. Positive z points
    /// toward the viewer; the divisor is clamped so extreme tilts cannot
    /// flip the quad through the camera.
    #[must_use]
    pub fn project(&self, local: Point) -> Point {
        let (sin_c, cos_c) = self.rotate_z.to_radians().sin_cos();
        let (sin_b, cos_b) = self.rotate_y.to_radians().sin_cos();
        let (sin_a, cos_a) = self.rotate_x.to_radians().sin_cos();

        let x = local.x * self.scale;
        let y = local.y * self.scale;

        // Roll about z.
        let x1 = x * cos_c - y * sin_c;
        let y1 = x * sin_c + y * cos_c;

        // Yaw about y (z starts at zero on the card plane).
        let x2 = x1 * cos_b;
        let z2 = -x1 * sin_b;

        // Pitch about x.
        let y2 = y1 * cos_a - z2 * sin_a;
        let z3 = y1 * sin_a + z2 * cos_a;

        let focal = sizing::CARD_FOCAL_LENGTH;
        let depth = (focal - z3).max(focal * 0.1);
        let factor = focal / depth;

        Point::new(x2 * factor, y2 * factor)
    }
}

/// Canvas program painting the card. Rebuilt from the spring values every
/// frame; there is nothing worth caching while the card animates.
#[derive(Debug, Clone)]
pub struct CardCanvas {
    /// Card center in viewport coordinates, before the drag translation.
    pub center: Point,
    /// Spring-interpolated drag translation.
    pub translate: Vector,
    pub pose: CardPose,
    /// Captured wheel phase driving the banner loop.
    pub wheel_y: f32,
    pub scheme: ColorScheme,
}

impl CardCanvas {
    fn corner(&self, local: Point) -> Point {
        let projected = self.pose.project(local);
        Point::new(
            self.center.x + self.translate.x + projected.x,
            self.center.y + self.translate.y + projected.y,
        )
    }

    fn quad(&self, rect: Rectangle) -> Path {
        let corners = [
            Point::new(rect.x, rect.y),
            Point::new(rect.x + rect.width, rect.y),
            Point::new(rect.x + rect.width, rect.y + rect.height),
            Point::new(rect.x, rect.y + rect.height),
        ];
        let projected = corners.map(|c| self.corner(c));

        Path::new(|p| {
            p.move_to(projected[0]);
            p.line_to(projected[1]);
            p.line_to(projected[2]);
            p.line_to(projected[3]);
            p.close();
        })
    }

    /// Banner stripes in card-local space, clipped to the card before
    /// projection so the strip never bleeds past the card edge.
    fn banner_stripes(&self, viewport_width: f32) -> Vec<Rectangle> {
        let half_w = sizing::CARD_WIDTH / 2.0;
        let half_h = sizing::CARD_HEIGHT / 2.0;
        let band = transform::banner_height(viewport_width).max(1.0);
        let phase = transform::loop_offset(self.wheel_y, viewport_width);

        let mut stripes = Vec::new();
        let mut index = 0usize;
        loop {
            let top = phase + index as f32 * band - half_h;
            if top > half_h {
                break;
            }
            let bottom = top + band;
            // Every other band is painted; the gaps make the loop visible.
            if index % 2 == 0 && bottom > -half_h {
                let clipped_top = top.max(-half_h);
                let clipped_bottom = bottom.min(half_h);
                if clipped_bottom > clipped_top {
                    stripes.push(Rectangle::new(
                        Point::new(-half_w, clipped_top),
                        iced::Size::new(sizing::CARD_WIDTH, clipped_bottom - clipped_top),
                    ));
                }
            }
            index += 1;
        }
        stripes
    }
}

impl<Message> canvas::Program<Message> for CardCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let face = Rectangle::new(
            Point::new(-sizing::CARD_WIDTH / 2.0, -sizing::CARD_HEIGHT / 2.0),
            iced::Size::new(sizing::CARD_WIDTH, sizing::CARD_HEIGHT),
        );

        frame.fill(&self.quad(face), self.scheme.card_face);

        let banner = Color {
            a: self.scheme.banner.a * 0.8,
            ..self.scheme.banner
        };
        for stripe in self.banner_stripes(bounds.width) {
            frame.fill(&self.quad(stripe), banner);
        }

        frame.stroke(
            &self.quad(face),
            Stroke::default()
                .with_color(self.scheme.card_border)
                .with_width(2.0),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn identity_pose_projects_points_unchanged() {
        let pose = CardPose::default();
        let p = pose.project(Point::new(55.0, -20.0));
        assert_abs_diff_eq!(p.x, 55.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(p.y, -20.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn scale_multiplies_distances_from_center() {
        let pose = CardPose {
            scale: 1.5,
            ..CardPose::default()
        };
        let p = pose.project(Point::new(40.0, 40.0));
        assert_abs_diff_eq!(p.x, 60.0, epsilon = 1e-4);
        assert_abs_diff_eq!(p.y, 60.0, epsilon = 1e-4);
    }

    #[test]
    fn quarter_roll_swaps_axes() {
        let pose = CardPose {
            rotate_z: 90.0,
            ..CardPose::default()
        };
        let p = pose.project(Point::new(100.0, 0.0));
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(p.y, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn yaw_brings_one_edge_closer() {
        let pose = CardPose {
            rotate_y: 30.0,
            ..CardPose::default()
        };
        // The left edge rotates toward the viewer and projects wider.
        let left = pose.project(Point::new(-100.0, 50.0));
        let right = pose.project(Point::new(100.0, 50.0));
        assert!(left.y.abs() > right.y.abs());
    }

    #[test]
    fn pitch_foreshortens_vertically() {
        let pose = CardPose {
            rotate_x: 45.0,
            ..CardPose::default()
        };
        let p = pose.project(Point::new(0.0, 100.0));
        assert!(p.y.abs() < 100.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn extreme_pitch_never_flips_through_the_camera() {
        let pose = CardPose {
            rotate_x: 89.0,
            scale: 4.0,
            ..CardPose::default()
        };
        let near = pose.project(Point::new(0.0, -160.0));
        let far = pose.project(Point::new(0.0, 160.0));
        assert!(near.y.is_finite() && far.y.is_finite());
    }

    #[test]
    fn banner_stripes_stay_inside_the_card() {
        let canvas = CardCanvas {
            center: Point::ORIGIN,
            translate: Vector::new(0.0, 0.0),
            pose: CardPose::default(),
            wheel_y: 730.0,
            scheme: ColorScheme::night(),
        };
        let stripes = canvas.banner_stripes(1000.0);
        assert!(!stripes.is_empty());
        for stripe in stripes {
            assert!(stripe.y >= -sizing::CARD_HEIGHT / 2.0 - 1e-3);
            assert!(stripe.y + stripe.height <= sizing::CARD_HEIGHT / 2.0 + 1e-3);
        }
    }

    #[test]
    fn banner_stripes_shift_with_wheel_phase() {
        let at = |wheel_y: f32| CardCanvas {
            center: Point::ORIGIN,
            translate: Vector::new(0.0, 0.0),
            pose: CardPose::default(),
            wheel_y,
            scheme: ColorScheme::night(),
        };
        let before = at(0.0).banner_stripes(1000.0);
        let after = at(40.0).banner_stripes(1000.0);
        assert_ne!(before, after);
    }
}
