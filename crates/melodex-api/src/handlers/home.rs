use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::routes::{RouteDef, ROUTES};

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteDescriptor {
    pub name: &'static str,
    pub path: &'static str,
    pub takes_id: bool,
}

impl From<&RouteDef> for RouteDescriptor {
    fn from(route: &RouteDef) -> Self {
        Self {
            name: route.view.name(),
            path: route.path,
            takes_id: route.takes_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HomeResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub routes: Vec<RouteDescriptor>,
}

/// Service descriptor and the routing surface (the Home view).
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service descriptor and routing surface", body = HomeResponse)
    ),
    tag = "system"
)]
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        service: "melodex",
        version: env!("CARGO_PKG_VERSION"),
        routes: ROUTES.iter().map(RouteDescriptor::from).collect(),
    })
}
