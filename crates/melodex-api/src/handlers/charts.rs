use axum::extract::{Query, State};
use axum::Json;
use melodex_audiodb::TrendingEntry;
use serde::Deserialize;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ChartsParams {
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub source: Option<String>,
}

/// Trending chart (the Charts view). Best-effort: an upstream failure
/// renders as an empty chart, never as an error page.
#[utoipa::path(
    get,
    path = "/charts",
    params(
        ("country" = Option<String>, Query, description = "Country code (defaults to the configured country)"),
        ("type" = Option<String>, Query, description = "Chart source (defaults to the configured source)")
    ),
    responses(
        (status = 200, description = "Trending entries, possibly empty")
    ),
    tag = "charts"
)]
pub async fn charts(
    State(state): State<AppState>,
    Query(params): Query<ChartsParams>,
) -> Json<Vec<TrendingEntry>> {
    let country = params.country.as_deref().unwrap_or(&state.trending_country);
    let source = params.source.as_deref().unwrap_or(&state.trending_source);

    Json(state.client.trending(Some(country), Some(source)).await)
}
