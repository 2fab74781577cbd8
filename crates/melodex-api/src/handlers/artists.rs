use axum::extract::{Path, Query, State};
use axum::Json;
use melodex_audiodb::{Artist, MusicVideo};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::albums::{AlbumResponse, TrackResponse};
use crate::error::{ApiError, ErrorResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ArtistSearchParams {
    /// Artist name free text.
    pub s: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistResponse {
    pub id: String,
    pub name: String,
    pub thumb: Option<String>,
    pub banner: Option<String>,
    pub genre: Option<String>,
    pub country: Option<String>,
    pub formed_year: Option<String>,
    pub website: Option<String>,
    pub biography: Option<String>,
}

impl From<Artist> for ArtistResponse {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            thumb: artist.thumb,
            banner: artist.banner,
            genre: artist.genre,
            country: artist.country,
            formed_year: artist.formed_year,
            website: artist.website,
            biography: artist.biography,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MusicVideoResponse {
    pub id: String,
    pub title: String,
    pub video: String,
    pub thumb: Option<String>,
}

impl From<MusicVideo> for MusicVideoResponse {
    fn from(video: MusicVideo) -> Self {
        Self {
            id: video.id,
            title: video.title,
            video: video.video,
            thumb: video.thumb,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistDetailResponse {
    pub artist: ArtistResponse,
    pub albums: Vec<AlbumResponse>,
    pub music_videos: Vec<MusicVideoResponse>,
    pub top_tracks: Vec<TrackResponse>,
}

/// Search artists by name (the Artists view).
#[utoipa::path(
    get,
    path = "/artists",
    params(("s" = String, Query, description = "Artist name to search for")),
    responses(
        (status = 200, description = "Matching artists, upstream order", body = [ArtistResponse]),
        (status = 502, description = "Upstream failure", body = ErrorResponse)
    ),
    tag = "artists"
)]
pub async fn list_artists(
    State(state): State<AppState>,
    Query(params): Query<ArtistSearchParams>,
) -> Result<Json<Vec<ArtistResponse>>, ApiError> {
    let artists = state.client.search_artists(&params.s).await?;
    Ok(Json(artists.into_iter().map(ArtistResponse::from).collect()))
}

/// Artist detail (the ArtistDetail view): the artist plus albums, music
/// videos, and top tracks. The three sub-fetches are independent requests
/// issued concurrently; no ordering between them is assumed.
#[utoipa::path(
    get,
    path = "/artist/{id}",
    params(("id" = String, Path, description = "Artist id")),
    responses(
        (status = 200, description = "Artist with albums, videos, and top tracks", body = ArtistDetailResponse),
        (status = 404, description = "No artist with this id", body = ErrorResponse),
        (status = 502, description = "Upstream failure", body = ErrorResponse)
    ),
    tag = "artists"
)]
pub async fn artist_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArtistDetailResponse>, ApiError> {
    let artist = state
        .client
        .artist_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no artist with id {id}")))?;

    let (albums, videos, top) = tokio::join!(
        state.client.albums_by_artist(&id),
        state.client.music_videos_by_artist(&id),
        state.client.top_tracks(&artist.name),
    );

    Ok(Json(ArtistDetailResponse {
        albums: albums?.into_iter().map(AlbumResponse::from).collect(),
        music_videos: videos?.into_iter().map(MusicVideoResponse::from).collect(),
        top_tracks: top?.into_iter().map(TrackResponse::from).collect(),
        artist: ArtistResponse::from(artist),
    }))
}
