use axum::extract::{Path, Query, State};
use axum::Json;
use melodex_audiodb::{Album, Track};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, ErrorResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AlbumSearchParams {
    /// Artist name free text.
    pub s: String,
    /// Optional album name to narrow the search.
    pub a: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlbumResponse {
    pub id: String,
    pub artist_id: String,
    pub title: String,
    pub artist: String,
    pub year_released: Option<String>,
    pub thumb: Option<String>,
    pub genre: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
}

impl From<Album> for AlbumResponse {
    fn from(album: Album) -> Self {
        Self {
            id: album.id,
            artist_id: album.artist_id,
            title: album.title,
            artist: album.artist,
            year_released: album.year_released,
            thumb: album.thumb,
            genre: album.genre,
            label: album.label,
            description: album.description,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrackResponse {
    pub id: String,
    pub album_id: String,
    pub artist_id: String,
    pub title: String,
    pub album: String,
    pub artist: String,
    pub track_number: Option<String>,
    pub duration: Option<String>,
    pub music_video: Option<String>,
    pub thumb: Option<String>,
}

impl From<Track> for TrackResponse {
    fn from(track: Track) -> Self {
        Self {
            id: track.id,
            album_id: track.album_id,
            artist_id: track.artist_id,
            title: track.title,
            album: track.album,
            artist: track.artist,
            track_number: track.track_number,
            duration: track.duration,
            music_video: track.music_video,
            thumb: track.thumb,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlbumDetailResponse {
    pub album: AlbumResponse,
    pub tracks: Vec<TrackResponse>,
}

/// Search albums by artist name, optionally narrowed by album name (the
/// Albums view).
#[utoipa::path(
    get,
    path = "/albums",
    params(
        ("s" = String, Query, description = "Artist name to search for"),
        ("a" = Option<String>, Query, description = "Album name to narrow the search")
    ),
    responses(
        (status = 200, description = "Matching albums, upstream order", body = [AlbumResponse]),
        (status = 502, description = "Upstream failure", body = ErrorResponse)
    ),
    tag = "albums"
)]
pub async fn list_albums(
    State(state): State<AppState>,
    Query(params): Query<AlbumSearchParams>,
) -> Result<Json<Vec<AlbumResponse>>, ApiError> {
    let albums = state
        .client
        .search_albums(&params.s, params.a.as_deref())
        .await?;
    Ok(Json(albums.into_iter().map(AlbumResponse::from).collect()))
}

/// Album detail (the AlbumDetail view): the album and its track listing.
#[utoipa::path(
    get,
    path = "/album/{id}",
    params(("id" = String, Path, description = "Album id")),
    responses(
        (status = 200, description = "Album with its tracks", body = AlbumDetailResponse),
        (status = 404, description = "No album with this id", body = ErrorResponse),
        (status = 502, description = "Upstream failure", body = ErrorResponse)
    ),
    tag = "albums"
)]
pub async fn album_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AlbumDetailResponse>, ApiError> {
    let album = state
        .client
        .album_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no album with id {id}")))?;

    let tracks = state.client.tracks_by_album(&id).await?;

    Ok(Json(AlbumDetailResponse {
        album: AlbumResponse::from(album),
        tracks: tracks.into_iter().map(TrackResponse::from).collect(),
    }))
}
