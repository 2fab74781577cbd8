//! The routing surface as data. The axum router is built by iterating
//! [`ROUTES`]; nothing else in the crate declares a view path.

/// View identifiers for the browse surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Artists,
    ArtistDetail,
    Albums,
    AlbumDetail,
    Charts,
}

impl View {
    pub fn name(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Artists => "Artists",
            View::ArtistDetail => "ArtistDetail",
            View::Albums => "Albums",
            View::AlbumDetail => "AlbumDetail",
            View::Charts => "Charts",
        }
    }
}

/// One entry of the routing surface.
#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub path: &'static str,
    pub view: View,
    /// Whether the path carries a required identifier segment. The id is
    /// passed to the view unchanged; no validation or coercion happens at
    /// this layer.
    pub takes_id: bool,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/",
        view: View::Home,
        takes_id: false,
    },
    RouteDef {
        path: "/artists",
        view: View::Artists,
        takes_id: false,
    },
    RouteDef {
        path: "/artist/:id",
        view: View::ArtistDetail,
        takes_id: true,
    },
    RouteDef {
        path: "/albums",
        view: View::Albums,
        takes_id: false,
    },
    RouteDef {
        path: "/album/:id",
        view: View::AlbumDetail,
        takes_id: true,
    },
    RouteDef {
        path: "/charts",
        view: View::Charts,
        takes_id: false,
    },
];
