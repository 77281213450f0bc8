// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the demo's design tokens.

## Organization

- **Palette**: Base colors (blue-on-black night scheme)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale

## Examples

```
use iced_drift::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (night-sky blue scale)
    /// Primary accent: soft sky blue.
    pub const PRIMARY: Color = Color::from_rgba(0.259, 0.639, 1.0, 0.89);
    /// Primary contrast text.
    pub const PRIMARY_TEXT: Color = Color::from_rgb(0.282, 0.690, 1.0);
    /// Secondary accent: electric cyan.
    pub const SECONDARY: Color = Color::from_rgb(0.286, 0.933, 1.0);
    /// Translucent deep-blue panel background.
    pub const PAPER: Color = Color::from_rgba(0.0, 0.306, 0.765, 0.42);
    /// Panel border blue.
    pub const PANEL_BORDER: Color = Color::from_rgb(0.396, 0.643, 1.0);

    // Scene accents
    pub const PLANET: Color = Color::from_rgb(0.45, 0.36, 0.30);
    pub const FLOWER: Color = Color::from_rgb(0.58, 0.42, 0.78);

    // Semantic colors
    pub const ERROR: Color = Color::from_rgb(0.839, 0.055, 0.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Card footprint before any transform.
    pub const CARD_WIDTH: f32 = 240.0;
    pub const CARD_HEIGHT: f32 = 320.0;

    /// Focal length of the card's perspective projection, in px.
    pub const CARD_FOCAL_LENGTH: f32 = 400.0;

    /// Info panel footprint, as fractions of the viewport.
    pub const PANEL_WIDTH_FRACTION: f32 = 0.35;
    pub const PANEL_HEIGHT_FRACTION: f32 = 0.45;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const TITLE_MD: f32 = 24.0;

    /// Standard body - panel text.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::CARD_HEIGHT > sizing::CARD_WIDTH);
    assert!(sizing::CARD_FOCAL_LENGTH > 0.0);
    assert!(sizing::PANEL_WIDTH_FRACTION > 0.0 && sizing::PANEL_WIDTH_FRACTION < 1.0);

    // Color validation
    assert!(palette::PRIMARY.b >= 0.0 && palette::PRIMARY.b <= 1.0);
};
