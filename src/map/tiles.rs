// SPDX-License-Identifier: MPL-2.0
//! Slippy-map tiles: addressing, per-provider URL schemes, downloading,
//! and the LRU cache that keeps recently shown tiles in memory.
//!
//! # Design
//!
//! - **LRU eviction**: least recently shown tiles are evicted first
//! - **Count-bounded**: tiles are a fixed 256x256, so a tile count is an
//!   effective memory bound
//! - **Provider-keyed**: OSM and Google tiles coexist under distinct keys,
//!   so switching provider never throws warm tiles away
//! - **Deduplicated fetches**: a tile already cached or already being
//!   downloaded is never requested twice

use crate::error::{Error, Result};
use crate::geo::MapProvider;
use iced::widget::image;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Default number of tiles kept in memory. A maximized full-HD window shows
/// around 40 tiles; 256 covers several pan and zoom steps of backtracking.
pub const DEFAULT_CACHE_TILES: usize = 256;

/// Minimum tiles to cache.
pub const MIN_CACHE_TILES: usize = 64;

/// Maximum tiles to cache.
pub const MAX_CACHE_TILES: usize = 1024;

/// Address of one 256x256 tile in the slippy-map pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

impl TileId {
    #[must_use]
    pub fn new(zoom: u8, x: u32, y: u32) -> Self {
        Self { zoom, x, y }
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Raster URL for a tile. OSM serves from a single host; Google's classic
/// raster endpoint is spread across its four `mt` subdomains so parallel
/// downloads are not funneled through one connection pool.
#[must_use]
pub fn tile_url(provider: MapProvider, tile: TileId) -> String {
    match provider {
        MapProvider::Osm => format!(
            "https://tile.openstreetmap.org/{}/{}/{}.png",
            tile.zoom, tile.x, tile.y
        ),
        MapProvider::Google => {
            let subdomain = (tile.x + tile.y) % 4;
            format!(
                "https://mt{subdomain}.google.com/vt/lyrs=m&x={}&y={}&z={}",
                tile.x, tile.y, tile.zoom
            )
        }
    }
}

/// Downloads one tile and decodes it into an image handle.
///
/// Returns the provider and tile alongside the result so the completion
/// can be matched against the cache even after the user kept panning.
pub async fn fetch(
    client: reqwest::Client,
    provider: MapProvider,
    tile: TileId,
) -> (MapProvider, TileId, Result<image::Handle>) {
    let result = download(&client, provider, tile).await;
    (provider, tile, result)
}

async fn download(
    client: &reqwest::Client,
    provider: MapProvider,
    tile: TileId,
) -> Result<image::Handle> {
    let url = tile_url(provider, tile);

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "Tile server returned {} for {tile}",
            response.status()
        )));
    }

    let bytes = response.bytes().await?;
    Ok(image::Handle::from_bytes(bytes.to_vec()))
}

/// Configuration for the tile cache.
#[derive(Debug, Clone, Copy)]
pub struct TileCacheConfig {
    /// Maximum number of tiles to keep.
    pub max_tiles: usize,
}

impl Default for TileCacheConfig {
    fn default() -> Self {
        Self {
            max_tiles: DEFAULT_CACHE_TILES,
        }
    }
}

impl TileCacheConfig {
    /// Creates a configuration with the tile count clamped to sane bounds.
    #[must_use]
    pub fn new(max_tiles: usize) -> Self {
        Self {
            max_tiles: max_tiles.clamp(MIN_CACHE_TILES, MAX_CACHE_TILES),
        }
    }
}

/// Cache performance counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileStats {
    /// Number of tiles currently held.
    pub tile_count: usize,

    /// Viewport requests answered from the cache.
    pub hits: u64,

    /// Viewport requests that had to start a download.
    pub misses: u64,

    /// Tiles evicted to make room.
    pub evictions: u64,

    /// Tiles inserted after a successful download.
    pub insertions: u64,
}

impl TileStats {
    /// Cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

type Key = (MapProvider, TileId);

/// LRU cache of downloaded map tiles, shared by both providers.
pub struct TileCache {
    cache: LruCache<Key, image::Handle>,
    /// Tiles with a download in flight, to suppress duplicate requests.
    pending: HashSet<Key>,
    stats: TileStats,
}

impl TileCache {
    /// Creates a tile cache with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if `DEFAULT_CACHE_TILES` is zero, which would indicate a build
    /// configuration error.
    #[must_use]
    pub fn new(config: TileCacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_tiles).unwrap_or(
            NonZeroUsize::new(DEFAULT_CACHE_TILES).expect("DEFAULT_CACHE_TILES must be non-zero"),
        );

        Self {
            cache: LruCache::new(capacity),
            pending: HashSet::new(),
            stats: TileStats::default(),
        }
    }

    /// Creates a tile cache with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(TileCacheConfig::default())
    }

    /// Asks whether a download for this tile should be started.
    ///
    /// Cached tiles are refreshed in LRU order and counted as hits; tiles
    /// already in flight are left alone. Returns `true` exactly when the
    /// caller should spawn a fetch.
    pub fn request(&mut self, provider: MapProvider, tile: TileId) -> bool {
        let key = (provider, tile);

        if self.cache.contains(&key) {
            self.stats.hits += 1;
            self.cache.promote(&key);
            return false;
        }
        if self.pending.contains(&key) {
            return false;
        }

        self.stats.misses += 1;
        self.pending.insert(key);
        true
    }

    /// Stores a downloaded tile and clears its in-flight marker.
    pub fn insert(&mut self, provider: MapProvider, tile: TileId, handle: image::Handle) {
        let key = (provider, tile);
        self.pending.remove(&key);

        if self.cache.len() == self.cache.cap().get() && !self.cache.contains(&key) {
            self.stats.evictions += 1;
        }

        self.cache.put(key, handle);
        self.stats.insertions += 1;
        self.stats.tile_count = self.cache.len();
    }

    /// Clears the in-flight marker after a failed download so the tile can
    /// be retried on the next viewport change.
    pub fn fetch_failed(&mut self, provider: MapProvider, tile: TileId) {
        self.pending.remove(&(provider, tile));
    }

    /// Looks a tile up without touching LRU order. This is the draw path.
    #[must_use]
    pub fn peek(&self, provider: MapProvider, tile: TileId) -> Option<&image::Handle> {
        self.cache.peek(&(provider, tile))
    }

    /// Returns the number of cached tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the current cache statistics.
    #[must_use]
    pub fn stats(&self) -> TileStats {
        self.stats
    }
}

impl std::fmt::Debug for TileCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileCache")
            .field("tile_count", &self.cache.len())
            .field("pending", &self.pending.len())
            .field("max_tiles", &self.cache.cap().get())
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_handle() -> image::Handle {
        // A handle only needs to exist for cache tests, not decode.
        image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn osm_urls_follow_the_slippy_scheme() {
        let url = tile_url(MapProvider::Osm, TileId::new(5, 31, 20));
        assert_eq!(url, "https://tile.openstreetmap.org/5/31/20.png");
    }

    #[test]
    fn google_urls_rotate_subdomains() {
        let a = tile_url(MapProvider::Google, TileId::new(6, 0, 0));
        let b = tile_url(MapProvider::Google, TileId::new(6, 1, 0));
        let c = tile_url(MapProvider::Google, TileId::new(6, 1, 1));
        let d = tile_url(MapProvider::Google, TileId::new(6, 2, 1));

        assert!(a.starts_with("https://mt0.google.com/vt/lyrs=m&x=0&y=0&z=6"));
        assert!(b.starts_with("https://mt1.google.com/"));
        assert!(c.starts_with("https://mt2.google.com/"));
        assert!(d.starts_with("https://mt3.google.com/"));
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = TileCache::with_defaults();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn request_marks_pending_exactly_once() {
        let mut cache = TileCache::with_defaults();
        let tile = TileId::new(5, 10, 20);

        assert!(cache.request(MapProvider::Osm, tile));
        assert!(!cache.request(MapProvider::Osm, tile), "already in flight");
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn cached_tile_is_a_hit_and_not_refetched() {
        let mut cache = TileCache::with_defaults();
        let tile = TileId::new(5, 10, 20);

        assert!(cache.request(MapProvider::Osm, tile));
        cache.insert(MapProvider::Osm, tile, test_handle());

        assert!(!cache.request(MapProvider::Osm, tile));
        assert_eq!(cache.stats().hits, 1);
        assert!(cache.peek(MapProvider::Osm, tile).is_some());
    }

    #[test]
    fn providers_do_not_share_tiles() {
        let mut cache = TileCache::with_defaults();
        let tile = TileId::new(5, 10, 20);
        cache.insert(MapProvider::Osm, tile, test_handle());

        assert!(cache.peek(MapProvider::Google, tile).is_none());
        assert!(cache.request(MapProvider::Google, tile));
    }

    #[test]
    fn failed_fetch_can_be_retried() {
        let mut cache = TileCache::with_defaults();
        let tile = TileId::new(5, 10, 20);

        assert!(cache.request(MapProvider::Osm, tile));
        cache.fetch_failed(MapProvider::Osm, tile);
        assert!(cache.request(MapProvider::Osm, tile), "retry after failure");
    }

    #[test]
    fn lru_eviction_at_capacity() {
        let config = TileCacheConfig { max_tiles: 2 };
        let mut cache = TileCache::new(config);

        cache.insert(MapProvider::Osm, TileId::new(1, 0, 0), test_handle());
        cache.insert(MapProvider::Osm, TileId::new(1, 1, 0), test_handle());
        cache.insert(MapProvider::Osm, TileId::new(1, 0, 1), test_handle());

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().evictions, 1);
        assert!(
            cache.peek(MapProvider::Osm, TileId::new(1, 0, 0)).is_none(),
            "oldest tile evicted"
        );
    }

    #[test]
    fn config_clamps_values() {
        let config = TileCacheConfig::new(0);
        assert_eq!(config.max_tiles, MIN_CACHE_TILES);

        let config = TileCacheConfig::new(usize::MAX);
        assert_eq!(config.max_tiles, MAX_CACHE_TILES);
    }

    #[test]
    fn stats_track_hit_rate() {
        let mut cache = TileCache::with_defaults();
        let tile = TileId::new(3, 1, 1);

        assert!(cache.request(MapProvider::Osm, tile));
        cache.insert(MapProvider::Osm, tile, test_handle());
        let _ = cache.request(MapProvider::Osm, tile);

        assert!((cache.stats().hit_rate() - 50.0).abs() < 0.01);
    }
}
