// SPDX-License-Identifier: MPL-2.0
//! Interactive map component: slippy tiles, pan/zoom, click-to-pick.
//!
//! Owns the camera and the tile cache. The inner canvas program translates
//! raw pointer input into camera moves and picked coordinates; this module
//! applies them, keeps the cache stocked for the visible region, and
//! reports what the application needs to act on.

pub mod canvas;
pub mod drag;

pub use canvas::MapCanvas;

use crate::error::Result;
use crate::geo::{Coordinates, MapProvider};
use crate::i18n::fluent::I18n;
use crate::map::{Camera, TileCache, TileCacheConfig, TileId};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::Cache;
use iced::widget::{button, container, image, text, Canvas, Column, Container, Stack, Text};
use iced::{Element, Length, Size};

/// Side of the square zoom control buttons.
const ZOOM_BUTTON_SIZE: f32 = 32.0;

/// Map component state.
pub struct State {
    camera: Camera,
    tiles: TileCache,
    provider: MapProvider,
    viewport: Option<Size>,
    cache: Cache,
}

/// Messages emitted by the map canvas and its overlay controls.
#[derive(Debug, Clone)]
pub enum Message {
    /// Canvas measured a new viewport (first draw or window resize).
    ViewportResized(Size),
    /// Camera moved by a drag in progress.
    Panned(Camera),
    /// Camera zoom changed by wheel or keyboard, anchored at the cursor.
    Zoomed(Camera),
    /// Zoom control button pressed.
    ZoomInPressed,
    /// Zoom control button pressed.
    ZoomOutPressed,
    /// A click (not a drag) resolved to a geographic point.
    Clicked(Coordinates),
    /// A tile download finished, successfully or not.
    TileFetched {
        provider: MapProvider,
        tile: TileId,
        result: Result<image::Handle>,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// No action needed.
    None,
    /// Start downloads for tiles missing from the cache.
    FetchTiles(Vec<TileId>),
    /// The user picked a location by clicking the map.
    LocationPicked(Coordinates),
}

impl State {
    #[must_use]
    pub fn new(provider: MapProvider, cache_config: TileCacheConfig) -> Self {
        Self {
            camera: Camera::start(provider),
            tiles: TileCache::new(cache_config),
            provider,
            viewport: None,
            cache: Cache::default(),
        }
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn provider(&self) -> MapProvider {
        self.provider
    }

    /// Switches the basemap. The camera stays where it is; only the tiles
    /// change. Returns the downloads needed for the new provider, since its
    /// cache entries are kept separately.
    pub fn set_provider(&mut self, provider: MapProvider) -> Vec<TileId> {
        if provider == self.provider {
            return Vec::new();
        }
        self.provider = provider;
        self.cache.clear();
        log::debug!(
            "Switched basemap to {} (tile cache: {:?})",
            provider.id(),
            self.tiles.stats()
        );
        self.missing_tiles()
    }

    /// Recenters on an externally selected location (search result) and
    /// zooms in close. Returns the downloads needed for the new view.
    pub fn jump_to(&mut self, center: Coordinates, zoom: u8) -> Vec<TileId> {
        self.camera.jump_to(center, zoom);
        self.cache.clear();
        self.missing_tiles()
    }

    /// Forces the canvas geometry to be rebuilt on the next draw. Needed
    /// when data drawn by the canvas (the marker) changes outside of it.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    /// Tiles covering the current view that are neither cached nor already
    /// being fetched. Marks them as pending as a side effect.
    fn missing_tiles(&mut self) -> Vec<TileId> {
        let Some(viewport) = self.viewport else {
            return Vec::new();
        };
        self.camera
            .visible_tiles(viewport)
            .into_iter()
            .filter(|tile| self.tiles.request(self.provider, *tile))
            .collect()
    }
}

/// Process a map message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ViewportResized(size) => {
            state.viewport = Some(size);
            state.cache.clear();
            fetch_missing(state)
        }
        Message::Panned(camera) | Message::Zoomed(camera) => {
            state.camera = camera;
            state.cache.clear();
            fetch_missing(state)
        }
        Message::ZoomInPressed => {
            state.camera.zoom_in();
            state.cache.clear();
            fetch_missing(state)
        }
        Message::ZoomOutPressed => {
            state.camera.zoom_out();
            state.cache.clear();
            fetch_missing(state)
        }
        Message::Clicked(coord) => Event::LocationPicked(coord),
        Message::TileFetched {
            provider,
            tile,
            result,
        } => {
            match result {
                Ok(handle) => {
                    state.tiles.insert(provider, tile, handle);
                    // Only redraw when the arrival is visible
                    if provider == state.provider {
                        state.cache.clear();
                    }
                }
                Err(error) => {
                    state.tiles.fetch_failed(provider, tile);
                    log::warn!("Tile {tile} download failed: {error}");
                }
            }
            Event::None
        }
    }
}

fn fetch_missing(state: &mut State) -> Event {
    let needed = state.missing_tiles();
    if needed.is_empty() {
        Event::None
    } else {
        Event::FetchTiles(needed)
    }
}

/// Contextual data needed to render the map pane.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub i18n: &'a I18n,
    /// Currently selected location, drawn as a pin.
    pub marker: Option<Coordinates>,
    /// Whether the Google basemap is usable (an API key is present).
    pub google_ready: bool,
}

/// Render the map pane: the tile canvas plus attribution and zoom controls.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.state.provider == MapProvider::Google && !ctx.google_ready {
        return missing_key_notice(ctx.i18n);
    }

    let canvas = Canvas::new(MapCanvas {
        camera: &ctx.state.camera,
        tiles: &ctx.state.tiles,
        cache: &ctx.state.cache,
        provider: ctx.state.provider,
        marker: ctx.marker,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(canvas)
        .push(build_zoom_controls())
        .push(build_attribution(ctx.i18n, ctx.state.provider))
        .into()
}

/// Zoom in/out buttons floating in the lower right corner.
fn build_zoom_controls<'a>() -> Element<'a, Message> {
    let zoom_button = |label: &'a str, message: Message| {
        button(
            text(label)
                .size(typography::BODY_LG)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .on_press(message)
        .style(styles::button::secondary)
        .width(Length::Fixed(ZOOM_BUTTON_SIZE))
        .height(Length::Fixed(ZOOM_BUTTON_SIZE))
        .padding(spacing::XXS)
    };

    let controls = Column::new()
        .spacing(spacing::XXS)
        .push(zoom_button("+", Message::ZoomInPressed))
        .push(zoom_button("−", Message::ZoomOutPressed));

    Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .into()
}

/// Tile attribution chip pinned to the lower left corner.
fn build_attribution<'a>(i18n: &'a I18n, provider: MapProvider) -> Element<'a, Message> {
    let key = match provider {
        MapProvider::Osm => "map-attribution-osm",
        MapProvider::Google => "map-attribution-google",
    };

    let chip = container(
        Text::new(i18n.tr(key))
            .size(typography::CAPTION)
            .color(palette::GRAY_700),
    )
    .style(styles::container::attribution)
    .padding([spacing::XXS, spacing::XS]);

    Container::new(chip)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Bottom)
        .into()
}

/// Full-pane notice shown when Google is selected without an API key.
fn missing_key_notice<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    Container::new(
        Text::new(i18n.tr("map-missing-key"))
            .size(typography::BODY_LG)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::XL)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::placeholder)
    .into()
}
