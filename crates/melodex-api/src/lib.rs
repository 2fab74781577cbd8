//! HTTP surface for browsing music metadata.
//!
//! The six view routes are declared once, as data, in [`routes::ROUTES`];
//! [`router`] builds the axum router from that table. Handlers are the
//! views: they call the domain access layer in `melodex-audiodb` and
//! convert its models into response DTOs.

pub mod error;
pub mod handlers;
pub mod routes;

use axum::routing::{get, MethodRouter};
use axum::{Json, Router};
use melodex_audiodb::AudioDbClient;
use serde::Serialize;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use handlers::albums::{album_detail, list_albums};
use handlers::artists::{artist_detail, list_artists};
use handlers::charts::charts;
use handlers::home::home;
use routes::{View, ROUTES};

/// Shared state handed to every view handler. The client is the only way
/// views reach the upstream API; nothing talks to the transport directly.
#[derive(Clone)]
pub struct AppState {
    pub client: AudioDbClient,
    pub trending_country: String,
    pub trending_source: String,
}

#[derive(Serialize, utoipa::ToSchema)]
struct HealthResponse {
    status: &'static str,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "system"
)]
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_handler,
        handlers::home::home,
        handlers::artists::list_artists,
        handlers::artists::artist_detail,
        handlers::albums::list_albums,
        handlers::albums::album_detail,
        handlers::charts::charts,
    ),
    components(
        schemas(
            HealthResponse,
            handlers::home::HomeResponse,
            handlers::home::RouteDescriptor,
            handlers::artists::ArtistResponse,
            handlers::artists::ArtistDetailResponse,
            handlers::artists::MusicVideoResponse,
            handlers::albums::AlbumResponse,
            handlers::albums::AlbumDetailResponse,
            handlers::albums::TrackResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "Service health and descriptor endpoints"),
        (name = "artists", description = "Artist search and detail views"),
        (name = "albums", description = "Album search and detail views"),
        (name = "charts", description = "Best-effort trending chart view")
    ),
    info(
        title = "Melodex API",
        version = "0.1.0",
        description = "Music metadata browser backed by TheAudioDB",
    )
)]
struct ApiDoc;

fn view_handler(view: View) -> MethodRouter<AppState> {
    match view {
        View::Home => get(home),
        View::Artists => get(list_artists),
        View::ArtistDetail => get(artist_detail),
        View::Albums => get(list_albums),
        View::AlbumDetail => get(album_detail),
        View::Charts => get(charts),
    }
}

pub fn router(state: AppState) -> Router {
    info!(target: "api", "building router");

    let mut views = Router::new();
    for route in ROUTES {
        views = views.route(route.path, view_handler(route.view));
    }

    let openapi = ApiDoc::openapi();

    views
        .route("/health", get(health_handler))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", openapi))
        .with_state(state)
}
