// SPDX-License-Identifier: MPL-2.0
//! Parallax scene model.
//!
//! A retained list of layers, each keyed by a page offset and a speed
//! multiplier, plus the scroll state that positions them. The layer list is
//! static; only the scroll value changes at runtime.

use crate::motion::{Spring, SpringConfig};
use crate::ui::design_tokens::sizing;
use iced::{Point, Rectangle, Size, Vector};

/// Number of vertically stacked pages in the scene.
pub const PAGE_COUNT: f32 = 3.0;

/// Parallax speed of the hero and card layers.
pub const HERO_LAYER_SPEED: f32 = 0.1;
pub const CARD_LAYER_SPEED: f32 = 0.1;

/// Page the hero layer scrolls to when clicked.
pub const HERO_TARGET_PAGE: f32 = 1.0;

/// Page the card layer is centered on.
pub const CARD_PAGE: f32 = 1.5;

/// What a layer paints. The shapes are vector stand-ins for the original
/// artwork: a speckle field, a planet disc, drifting texture blobs, a flower
/// silhouette, and the two widget anchors (hero headline, info panel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Speckle,
    Planet,
    TextureCluster,
    Flower,
    Hero,
    InfoPanel,
}

/// One parallax layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Vertical anchor, in page units.
    pub offset: f32,
    /// Parallax speed multiplier. 0 scrolls with the content, negative lags
    /// behind it, -1 pins the layer to the viewport.
    pub speed: f32,
    /// Height multiplier, in page units.
    pub factor: f32,
    pub opacity: f32,
    pub kind: LayerKind,
}

impl Layer {
    const fn new(offset: f32, speed: f32, factor: f32, opacity: f32, kind: LayerKind) -> Self {
        Self {
            offset,
            speed,
            factor,
            opacity,
            kind,
        }
    }
}

/// The scene's static layer list, back to front.
pub const LAYERS: &[Layer] = &[
    Layer::new(0.0, 0.0, 3.0, 0.5, LayerKind::Speckle),
    Layer::new(0.5, -0.3, 1.0, 1.0, LayerKind::Planet),
    Layer::new(1.0, 0.8, 1.0, 0.1, LayerKind::TextureCluster),
    Layer::new(1.75, 0.5, 1.0, 0.1, LayerKind::TextureCluster),
    Layer::new(1.0, 0.2, 1.0, 0.3, LayerKind::TextureCluster),
    Layer::new(1.6, -0.1, 1.0, 0.3, LayerKind::TextureCluster),
    Layer::new(2.75, 0.4, 1.0, 0.3, LayerKind::TextureCluster),
    Layer::new(2.5, -0.4, 1.0, 0.5, LayerKind::Flower),
    Layer::new(0.0, 0.1, 1.0, 1.0, LayerKind::Hero),
    Layer::new(2.0, 0.0, 1.0, 1.0, LayerKind::InfoPanel),
];

/// Viewport-relative vertical position of a layer anchor, in pixels.
///
/// Invariant: when the scroll reaches a layer's own page
/// (`scroll_px == offset * page_h`) the anchor sits at the viewport top for
/// every speed. Positive speeds lead the scroll, negative speeds lag it,
/// and speed -1 pins the layer in place.
#[must_use]
pub fn viewport_y(offset: f32, speed: f32, scroll_px: f32, page_h: f32) -> f32 {
    (offset * page_h - scroll_px) * (1.0 + speed)
}

/// On-screen bounds of the card, used for gesture hit-testing. The card is
/// horizontally centered on its page and carries the spring-interpolated
/// drag translation. The hover scale is deliberately ignored here so the hit
/// region does not wobble while the card animates.
#[must_use]
pub fn card_bounds(viewport: Size, scroll_px: f32, translate: Vector) -> Rectangle {
    let page_h = viewport.height;
    let anchor = viewport_y(CARD_PAGE, CARD_LAYER_SPEED, scroll_px, page_h);
    let center = Point::new(
        viewport.width / 2.0 + translate.x,
        anchor + page_h / 2.0 + translate.y,
    );
    Rectangle::new(
        Point::new(
            center.x - sizing::CARD_WIDTH / 2.0,
            center.y - sizing::CARD_HEIGHT / 2.0,
        ),
        Size::new(sizing::CARD_WIDTH, sizing::CARD_HEIGHT),
    )
}

/// On-screen bounds of the hero layer's clickable region (its full page).
#[must_use]
pub fn hero_bounds(viewport: Size, scroll_px: f32) -> Rectangle {
    let page_h = viewport.height;
    let top = viewport_y(0.0, HERO_LAYER_SPEED, scroll_px, page_h);
    Rectangle::new(Point::new(0.0, top), Size::new(viewport.width, page_h))
}

/// Scroll state: a spring in pixel units so `scroll_to` glides while wheel
/// input lands immediately.
#[derive(Debug, Clone, Copy)]
pub struct ScrollState {
    spring: Spring,
    page_h: f32,
}

impl ScrollState {
    #[must_use]
    pub fn new(page_h: f32) -> Self {
        Self {
            spring: Spring::new(0.0, SpringConfig::GENTLE),
            page_h,
        }
    }

    /// Current scroll position in pixels.
    #[must_use]
    pub fn scroll_px(&self) -> f32 {
        self.spring.value()
    }

    /// Current scroll position in page units.
    #[must_use]
    pub fn page(&self) -> f32 {
        if self.page_h > 0.0 {
            self.spring.value() / self.page_h
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn max_scroll_px(&self) -> f32 {
        (PAGE_COUNT - 1.0) * self.page_h
    }

    /// Applies a wheel delta without animation, clamped to the scene.
    pub fn scroll_by(&mut self, delta_px: f32) {
        let next = (self.spring.value() + delta_px).clamp(0.0, self.max_scroll_px());
        self.spring.set(next);
    }

    /// Glides to the given page.
    pub fn scroll_to(&mut self, page: f32) {
        let target = (page * self.page_h).clamp(0.0, self.max_scroll_px());
        self.spring.retarget(target);
    }

    /// Jumps to the given page (startup, reduced motion).
    pub fn jump_to(&mut self, page: f32) {
        let target = (page * self.page_h).clamp(0.0, self.max_scroll_px());
        self.spring.set(target);
    }

    /// Updates the page height after a window resize, preserving the page
    /// position rather than the pixel position.
    pub fn resize(&mut self, page_h: f32) {
        let page = self.page();
        self.page_h = page_h;
        self.jump_to(page);
    }

    pub fn step(&mut self, dt: f32) {
        self.spring.step(dt);
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }
}
