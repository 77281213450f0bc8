// SPDX-License-Identifier: MPL-2.0
//! Parallax background painting.
//!
//! One full-viewport canvas that walks [`crate::scene::LAYERS`] back to
//! front and paints the decorative layers at their parallax positions. The
//! hero headline and info panel are real widgets layered on top elsewhere;
//! this canvas only skips past their entries.

use crate::scene::{self, Layer, LayerKind};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Path};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme};

/// Canvas program for the decorative parallax layers.
#[derive(Debug, Clone)]
pub struct LayersCanvas {
    pub scroll_px: f32,
    pub scheme: ColorScheme,
}

/// Small deterministic hash in `[0, 1)`, used to scatter speckles and blobs
/// without carrying an RNG.
fn hash01(seed: u32) -> f32 {
    let mut x = seed.wrapping_mul(0x9E37_79B9).wrapping_add(0x85EB_CA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2_AE35);
    x ^= x >> 16;
    (x & 0x00FF_FFFF) as f32 / 16_777_216.0
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

impl LayersCanvas {
    fn paint_layer(&self, frame: &mut canvas::Frame, layer: &Layer, viewport: Size) {
        let page_h = viewport.height;
        let top = scene::viewport_y(layer.offset, layer.speed, self.scroll_px, page_h);
        let band = Rectangle::new(
            Point::new(0.0, top),
            Size::new(viewport.width, layer.factor * page_h),
        );

        // Entirely off screen; nothing to paint.
        if band.y > viewport.height || band.y + band.height < 0.0 {
            return;
        }

        match layer.kind {
            LayerKind::Speckle => self.paint_speckles(frame, band, layer.opacity),
            LayerKind::Planet => self.paint_planet(frame, band, layer.opacity),
            LayerKind::TextureCluster => {
                // Seed the scatter from the layer anchor so clusters differ.
                let seed = (layer.offset * 977.0) as u32;
                self.paint_cluster(frame, band, layer.opacity, seed);
            }
            LayerKind::Flower => self.paint_flower(frame, band, layer.opacity),
            LayerKind::Hero | LayerKind::InfoPanel => {}
        }
    }

    fn paint_speckles(&self, frame: &mut canvas::Frame, band: Rectangle, opacity: f32) {
        let color = with_alpha(self.scheme.speckle, self.scheme.speckle.a * opacity);
        for i in 0..240u32 {
            let x = band.x + hash01(i * 2 + 1) * band.width;
            let y = band.y + hash01(i * 2 + 2) * band.height;
            let radius = 0.5 + hash01(i + 4_096) * 1.5;
            frame.fill(&Path::circle(Point::new(x, y), radius), color);
        }
    }

    fn paint_planet(&self, frame: &mut canvas::Frame, band: Rectangle, opacity: f32) {
        let radius = band.width * 0.09;
        let center = Point::new(band.x + band.width * 0.82, band.y + band.height * 0.35);
        let body = with_alpha(self.scheme.texture, opacity);

        frame.fill(&Path::circle(center, radius), body);
        // A faint ring, drawn as a wider translucent disc behind the body.
        frame.fill(
            &Path::circle(center, radius * 1.35),
            with_alpha(body, body.a * 0.25),
        );
    }

    fn paint_cluster(&self, frame: &mut canvas::Frame, band: Rectangle, opacity: f32, seed: u32) {
        let color = with_alpha(self.scheme.texture, opacity);
        for i in 0..6u32 {
            let n = seed.wrapping_add(i * 3);
            let x = band.x + hash01(n) * band.width;
            let y = band.y + hash01(n + 1) * band.height;
            let radius = band.width * (0.02 + hash01(n + 2) * 0.05);
            frame.fill(&Path::circle(Point::new(x, y), radius), color);
        }
    }

    fn paint_flower(&self, frame: &mut canvas::Frame, band: Rectangle, opacity: f32) {
        let center = Point::new(band.x + band.width * 0.2, band.y + band.height * 0.55);
        let petal_r = band.width * 0.03;
        let orbit = petal_r * 1.4;
        let color = with_alpha(self.scheme.texture, opacity);

        for i in 0..6 {
            let angle = i as f32 * std::f32::consts::FRAC_PI_3;
            let petal = Point::new(
                center.x + orbit * angle.cos(),
                center.y + orbit * angle.sin(),
            );
            frame.fill(&Path::circle(petal, petal_r), color);
        }
        frame.fill(
            &Path::circle(center, petal_r * 0.9),
            with_alpha(color, (opacity * 1.6).min(1.0)),
        );
    }
}

impl<Message> canvas::Program<Message> for LayersCanvas {
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

        frame.fill(
            &Path::rectangle(Point::ORIGIN, bounds.size()),
            self.scheme.backdrop,
        );

        for layer in scene::LAYERS {
            self.paint_layer(&mut frame, layer, bounds.size());
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_and_bounded() {
        for seed in [0, 1, 977, 4_096, u32::MAX] {
            let a = hash01(seed);
            let b = hash01(seed);
            assert_eq!(a, b);
            assert!((0.0..1.0).contains(&a));
        }
    }

    #[test]
    fn hash_scatters_distinct_seeds() {
        assert_ne!(hash01(1), hash01(2));
        assert_ne!(hash01(100), hash01(101));
    }

    #[test]
    fn with_alpha_keeps_the_hue() {
        let c = with_alpha(Color::from_rgb(0.2, 0.4, 0.8), 0.3);
        assert_eq!(c.r, 0.2);
        assert_eq!(c.b, 0.8);
        assert_eq!(c.a, 0.3);
    }
}
