// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between input, springs, and the
//! layered view.
//!
//! The `App` struct owns the single gesture recognizer, the card's target
//! transform and springs, and the scene scroll. Raw window events flow in
//! through one subscription, become gestures, and move the targets; a gated
//! tick subscription steps every spring while anything is still moving. This
//! file intentionally keeps policy decisions (window size, reduced motion,
//! start page) close to the main update loop so user-facing behavior is easy
//! to audit.

use crate::config;
use crate::input::{InputAction, Recognizer};
use crate::motion::{CardSprings, Oscillator, SpringConfig};
use crate::scene::{self, ScrollState};
use crate::transform::CardTarget;
use crate::ui::card::{CardCanvas, CardPose};
use crate::ui::layers::LayersCanvas;
use crate::ui::overlay;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{canvas, stack};
use iced::{event, time, window, Element, Length, Point, Size, Subscription, Task, Theme};
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Bounds of the hero headline's idle bob, in px.
const BOB_RANGE: (f32, f32) = (0.0, 10.0);

/// Upper bound on one frame's dt so a long gap between ticks (window hidden,
/// subscription restarted) cannot launch the springs.
const MAX_FRAME_DT: f32 = 0.1;

/// Root Iced application state.
pub struct App {
    viewport: Size,
    recognizer: Recognizer,
    target: CardTarget,
    springs: CardSprings,
    scroll: ScrollState,
    bob: Oscillator,
    theme_mode: ThemeMode,
    scheme: ColorScheme,
    reduced_motion: bool,
    last_tick: Option<Instant>,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// A raw window event forwarded to the gesture recognizer.
    RawEvent {
        window: window::Id,
        event: iced::Event,
    },
    /// Periodic animation tick while springs are live.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Initial scroll position in page units, overriding the config.
    pub start_page: Option<f32>,
    /// Skip spring interpolation and jump straight to targets.
    pub reduced_motion: bool,
}

/// Unwraps a config load, reporting a failure before falling back to the
/// defaults.
fn config_or_default(loaded: crate::error::Result<config::Config>) -> config::Config {
    loaded.unwrap_or_else(|err| {
        eprintln!("Failed to load config: {err}");
        config::Config::default()
    })
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(|state: &App| state.title(), App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run_with(move || App::new(flags))
}

impl Default for App {
    fn default() -> Self {
        let viewport = Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);
        Self {
            viewport,
            recognizer: Recognizer::new(),
            target: CardTarget::default(),
            springs: CardSprings::default(),
            scroll: ScrollState::new(viewport.height),
            bob: Oscillator::new(BOB_RANGE.0, BOB_RANGE.1, SpringConfig::GENTLE),
            theme_mode: ThemeMode::System,
            scheme: ColorScheme::night(),
            reduced_motion: false,
            last_tick: None,
        }
    }
}

impl App {
    /// Initializes application state from the persisted config and the CLI
    /// flags; flags win where both specify a value.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config_or_default(config::load());

        let mut app = App {
            theme_mode: config.theme_mode,
            scheme: config.theme_mode.color_scheme(),
            reduced_motion: flags.reduced_motion || config.reduced_motion.unwrap_or(false),
            ..Self::default()
        };

        let start_page = flags
            .start_page
            .or(config.start_page)
            .unwrap_or(config::DEFAULT_START_PAGE);
        app.scroll.jump_to(start_page);

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Drift")
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => {
                if self.theme_mode.is_dark() {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
        }
    }

    /// Card center in viewport coordinates, before the drag translation.
    fn card_center(&self) -> Point {
        let page_h = self.viewport.height;
        let anchor = scene::viewport_y(
            scene::CARD_PAGE,
            scene::CARD_LAYER_SPEED,
            self.scroll.scroll_px(),
            page_h,
        );
        Point::new(self.viewport.width / 2.0, anchor + page_h / 2.0)
    }

    fn hero_band_top(&self) -> f32 {
        scene::viewport_y(
            0.0,
            scene::HERO_LAYER_SPEED,
            self.scroll.scroll_px(),
            self.viewport.height,
        )
    }

    fn hero_is_visible(&self) -> bool {
        let top = self.hero_band_top();
        top + self.viewport.height > 0.0 && top < self.viewport.height
    }

    /// Gates the tick subscription: idle springs and a settled scroll
    /// schedule no frames, except while the bobbing hero is on screen.
    fn needs_ticks(&self) -> bool {
        !self.springs.is_settled() || !self.scroll.is_settled() || self.hero_is_visible()
    }

    fn apply_action(&mut self, action: InputAction) {
        match action {
            InputAction::Card(gesture) => {
                self.target
                    .apply(gesture, self.viewport, self.springs.translation());
                if self.reduced_motion {
                    self.springs.snap(&self.target);
                } else {
                    self.springs.chase(&self.target);
                }
            }
            InputAction::ScrollScene(delta_px) => self.scroll.scroll_by(delta_px),
            InputAction::HeroClicked => {
                if self.reduced_motion {
                    self.scroll.jump_to(scene::HERO_TARGET_PAGE);
                } else {
                    self.scroll.scroll_to(scene::HERO_TARGET_PAGE);
                }
            }
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RawEvent { window: _, event } => {
                if let iced::Event::Window(window::Event::Resized(size)) = &event {
                    self.viewport = *size;
                    self.scroll.resize(size.height);
                    return Task::none();
                }

                let card = scene::card_bounds(
                    self.viewport,
                    self.scroll.scroll_px(),
                    self.springs.translation(),
                );
                let hero = scene::hero_bounds(self.viewport, self.scroll.scroll_px());
                for action in self.recognizer.handle_event(&event, card, hero) {
                    self.apply_action(action);
                }
                Task::none()
            }
            Message::Tick(now) => {
                let dt = self
                    .last_tick
                    .map(|last| now.duration_since(last).as_secs_f32())
                    .unwrap_or(config::TICK_INTERVAL_MS as f32 / 1000.0)
                    .min(MAX_FRAME_DT);
                self.last_tick = Some(now);

                self.springs.step(dt);
                self.scroll.step(dt);
                if self.hero_is_visible() {
                    self.bob.step(dt);
                }
                Task::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_subscription = event::listen_with(|event, _status, window_id| match &event {
            event::Event::Mouse(_) | event::Event::Touch(_) => Some(Message::RawEvent {
                window: window_id,
                event: event.clone(),
            }),
            event::Event::Window(window::Event::Resized(_)) => Some(Message::RawEvent {
                window: window_id,
                event: event.clone(),
            }),
            _ => None,
        });

        let tick_subscription = if self.needs_ticks() {
            time::every(std::time::Duration::from_millis(config::TICK_INTERVAL_MS))
                .map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([event_subscription, tick_subscription])
    }

    fn view(&self) -> Element<'_, Message> {
        let scroll_px = self.scroll.scroll_px();

        let background = canvas(LayersCanvas {
            scroll_px,
            scheme: self.scheme.clone(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let card = canvas(CardCanvas {
            center: self.card_center(),
            translate: self.springs.translation(),
            pose: CardPose {
                rotate_x: self.springs.rotate_x.value(),
                rotate_y: self.springs.rotate_y.value(),
                rotate_z: self.springs.rotate_z.value(),
                scale: self.springs.scale.value() + self.springs.zoom.value(),
            },
            wheel_y: self.springs.wheel_y.value(),
            scheme: self.scheme.clone(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let hero = overlay::hero_headline(
            self.hero_band_top(),
            self.viewport.height,
            self.bob.value(),
            &self.scheme,
        );

        let panel_top = scene::viewport_y(2.0, 0.0, scroll_px, self.viewport.height);
        let panel = overlay::info_panel(panel_top, self.viewport, &self.scheme);

        stack![background, card, hero, panel]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
