// SPDX-License-Identifier: MPL-2.0
//! Widget layers stacked over the canvases.
//!
//! The hero headline and the info panel are ordinary widgets positioned with
//! spacer columns at their parallax-derived offsets. Neither widget handles
//! input itself; clicks on the hero region are recognized from raw events.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{column, container, text, Space};
use iced::{Background, Border, Element, Length, Size};

/// Spacer height placing a widget's top edge, or `None` once that edge has
/// moved past the viewport top. Spacers cannot go negative, so a widget that
/// should sit above the viewport is not built rather than pinned at zero.
fn spacer_height(top: f32) -> Option<f32> {
    (top >= 0.0).then_some(top)
}

/// The hero headline, bobbing on its idle loop.
pub fn hero_headline<'a, Message: 'a>(
    band_top: f32,
    band_height: f32,
    bob: f32,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let Some(spacer) = spacer_height(band_top + band_height * 0.4 + bob) else {
        return Space::new(Length::Shrink, Length::Shrink).into();
    };

    let headline = text("Hello World")
        .size(typography::TITLE_MD)
        .color(scheme.headline);

    column![
        Space::new(Length::Shrink, Length::Fixed(spacer)),
        container(headline).width(Length::Fill).center_x(Length::Fill),
    ]
    .into()
}

/// The translucent info panel on the last page.
pub fn info_panel<'a, Message: 'a>(
    band_top: f32,
    viewport: Size,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let top = band_top + viewport.height * 0.25;
    let Some(spacer) = spacer_height(top).filter(|top| *top <= viewport.height) else {
        return Space::new(Length::Shrink, Length::Shrink).into();
    };

    let background = scheme.panel_background;
    let border_color = scheme.panel_border;
    let body = scheme.body_text;

    let panel = container(
        column![
            text("the end of the scene").size(typography::TITLE_MD).color(scheme.headline),
            text("Every gesture you tried on the card fed the same spring engine \
                  that moved these layers past you.")
                .size(typography::BODY)
                .color(body),
        ]
        .spacing(spacing::SM),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(viewport.width * sizing::PANEL_WIDTH_FRACTION))
    .max_height(viewport.height * sizing::PANEL_HEIGHT_FRACTION)
    .style(move |_theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: (spacing::XS).into(),
        },
        ..container::Style::default()
    });

    column![
        Space::new(Length::Shrink, Length::Fixed(spacer)),
        container(panel).width(Length::Fill).center_x(Length::Fill),
    ]
    .into()
}
