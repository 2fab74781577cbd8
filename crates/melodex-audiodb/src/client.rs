// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{AudioDbError, Result};
use crate::models::{Album, Artist, MusicVideo, Track, TrendingEntry};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace, warn};
use url::Url;

const AUDIODB_API_BASE: &str = "https://www.theaudiodb.com/api/v1/json/2";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_TRENDING_COUNTRY: &str = "us";
const DEFAULT_TRENDING_SOURCE: &str = "itunes";

/// TheAudioDB API client.
///
/// Holds a configured [`reqwest::Client`] and a base URL; no other state
/// is retained between calls. Every operation issues exactly one GET and
/// normalizes the wrapper-keyed response body.
#[derive(Debug, Clone)]
pub struct AudioDbClient {
    client: Client,
    base_url: String,
}

impl AudioDbClient {
    /// Create a client with default settings (public endpoint, 10s timeout).
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> AudioDbClientBuilder {
        AudioDbClientBuilder::default()
    }

    /// Search for artists by name.
    ///
    /// Results keep upstream order; an unknown name yields an empty list.
    ///
    /// # Example
    /// ```no_run
    /// # use melodex_audiodb::AudioDbClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AudioDbClient::new()?;
    /// let artists = client.search_artists("Radiohead").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_artists(&self, name: &str) -> Result<Vec<Artist>> {
        let url = self.endpoint("search.php", &[("s", name)])?;
        let body = self.get(url).await?;
        wrapped_list(&body, "artists")
    }

    /// Search for albums by artist name, optionally narrowed by album name.
    pub async fn search_albums(&self, artist: &str, album: Option<&str>) -> Result<Vec<Album>> {
        let url = match album {
            Some(album) => self.endpoint("searchalbum.php", &[("s", artist), ("a", album)])?,
            None => self.endpoint("searchalbum.php", &[("s", artist)])?,
        };
        let body = self.get(url).await?;
        wrapped_list(&body, "album")
    }

    /// Search for a track by artist name and track name.
    ///
    /// Both parameters are always sent, even when empty; input validation
    /// is the caller's concern.
    pub async fn search_tracks(&self, artist: &str, track: &str) -> Result<Vec<Track>> {
        let url = self.endpoint("searchtrack.php", &[("s", artist), ("t", track)])?;
        let body = self.get(url).await?;
        wrapped_list(&body, "track")
    }

    /// Look up an artist by id. Returns `None` when the id matches nothing.
    ///
    /// # Example
    /// ```no_run
    /// # use melodex_audiodb::AudioDbClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AudioDbClient::new()?;
    /// let artist = client.artist_by_id("111239").await?; // Coldplay
    /// # Ok(())
    /// # }
    /// ```
    pub async fn artist_by_id(&self, id: &str) -> Result<Option<Artist>> {
        let url = self.endpoint("artist.php", &[("i", id)])?;
        let body = self.get(url).await?;
        wrapped_first(&body, "artists")
    }

    /// All albums for an artist id.
    pub async fn albums_by_artist(&self, artist_id: &str) -> Result<Vec<Album>> {
        let url = self.endpoint("album.php", &[("i", artist_id)])?;
        let body = self.get(url).await?;
        wrapped_list(&body, "album")
    }

    /// Look up an album by id. Returns `None` when the id matches nothing.
    pub async fn album_by_id(&self, album_id: &str) -> Result<Option<Album>> {
        let url = self.endpoint("album.php", &[("m", album_id)])?;
        let body = self.get(url).await?;
        wrapped_first(&body, "album")
    }

    /// All tracks on an album, in upstream (track number) order.
    pub async fn tracks_by_album(&self, album_id: &str) -> Result<Vec<Track>> {
        let url = self.endpoint("track.php", &[("m", album_id)])?;
        let body = self.get(url).await?;
        wrapped_list(&body, "track")
    }

    /// Look up a single track by id.
    pub async fn track_by_id(&self, track_id: &str) -> Result<Option<Track>> {
        let url = self.endpoint("track.php", &[("h", track_id)])?;
        let body = self.get(url).await?;
        wrapped_first(&body, "track")
    }

    /// Music videos for an artist id.
    pub async fn music_videos_by_artist(&self, artist_id: &str) -> Result<Vec<MusicVideo>> {
        let url = self.endpoint("mvid.php", &[("i", artist_id)])?;
        let body = self.get(url).await?;
        wrapped_list(&body, "mvids")
    }

    /// Top-10 tracks for an artist name.
    pub async fn top_tracks(&self, artist: &str) -> Result<Vec<Track>> {
        let url = self.endpoint("track-top10.php", &[("s", artist)])?;
        let body = self.get(url).await?;
        wrapped_list(&body, "track")
    }

    /// Trending chart releases for a country and chart source (defaults:
    /// `us`, `itunes`).
    ///
    /// Chart data is supplementary, so this is the one best-effort
    /// operation: any transport failure is logged and degrades to an
    /// empty list instead of propagating. Everything else in this client
    /// surfaces failures to the caller.
    pub async fn trending(
        &self,
        country: Option<&str>,
        source: Option<&str>,
    ) -> Vec<TrendingEntry> {
        match self.trending_inner(country, source).await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(target: "audiodb", "trending lookup failed, degrading to empty chart: {err}");
                Vec::new()
            }
        }
    }

    async fn trending_inner(
        &self,
        country: Option<&str>,
        source: Option<&str>,
    ) -> Result<Vec<TrendingEntry>> {
        let url = self.endpoint(
            "trending.php",
            &[
                ("country", country.unwrap_or(DEFAULT_TRENDING_COUNTRY)),
                ("type", source.unwrap_or(DEFAULT_TRENDING_SOURCE)),
                ("format", "albums"),
            ],
        )?;
        let body = self.get(url).await?;
        wrapped_list(&body, "trending")
    }

    /// Build a request URL. Free-text parameters go through
    /// `query_pairs_mut`, which percent-encodes reserved characters, so a
    /// query like `AC/DC` cannot corrupt the path.
    fn endpoint(&self, resource: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, resource))
            .map_err(|e| AudioDbError::InvalidResponse(e.to_string()))?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }

    /// Internal method to perform a single GET and parse the JSON body.
    async fn get(&self, url: Url) -> Result<Value> {
        trace!(target: "audiodb", "GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        debug!(target: "audiodb", "response status: {}", status);

        if !status.is_success() {
            return Err(AudioDbError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| AudioDbError::InvalidResponse(format!("failed to parse response: {e}")))
    }
}

/// Pull a list out of a wrapper property. A missing or `null` wrapper is
/// a valid "no results" state upstream, never an error here.
pub(crate) fn wrapped_list<T: DeserializeOwned>(body: &Value, key: &str) -> Result<Vec<T>> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(raw) => serde_json::from_value(raw.clone()).map_err(|e| {
            AudioDbError::InvalidResponse(format!("unexpected shape under `{key}`: {e}"))
        }),
    }
}

/// Pull the first element out of a wrapper property. Singular lookups are
/// represented upstream as a list with zero or one element; missing,
/// `null`, or empty all mean "not found".
pub(crate) fn wrapped_first<T: DeserializeOwned>(body: &Value, key: &str) -> Result<Option<T>> {
    let mut items: Vec<Value> = wrapped_list(body, key)?;
    if items.is_empty() {
        return Ok(None);
    }
    serde_json::from_value(items.swap_remove(0))
        .map(Some)
        .map_err(|e| AudioDbError::InvalidResponse(format!("unexpected shape under `{key}`: {e}")))
}

/// Builder for configuring an [`AudioDbClient`].
#[derive(Debug)]
pub struct AudioDbClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for AudioDbClientBuilder {
    fn default() -> Self {
        Self {
            base_url: AUDIODB_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AudioDbClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout. Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AudioDbClient> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()?;

        Ok(AudioDbClient {
            client,
            base_url: self.base_url,
        })
    }
}
