// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Artist record from TheAudioDB.
///
/// Upstream uses string-typed fields throughout (including numeric ones
/// like `intFormedYear`); only `idArtist` and `strArtist` are guaranteed
/// present, everything else may be absent or `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    #[serde(rename = "idArtist")]
    pub id: String,
    #[serde(rename = "strArtist")]
    pub name: String,
    #[serde(rename = "strArtistThumb", default)]
    pub thumb: Option<String>,
    #[serde(rename = "strArtistLogo", default)]
    pub logo: Option<String>,
    #[serde(rename = "strArtistBanner", default)]
    pub banner: Option<String>,
    #[serde(rename = "strBiographyEN", default)]
    pub biography: Option<String>,
    #[serde(rename = "strGenre", default)]
    pub genre: Option<String>,
    #[serde(rename = "strWebsite", default)]
    pub website: Option<String>,
    #[serde(rename = "strFacebook", default)]
    pub facebook: Option<String>,
    #[serde(rename = "strTwitter", default)]
    pub twitter: Option<String>,
    #[serde(rename = "strCountry", default)]
    pub country: Option<String>,
    #[serde(rename = "intFormedYear", default)]
    pub formed_year: Option<String>,
    #[serde(rename = "strDisbanded", default)]
    pub disbanded: Option<String>,
    #[serde(rename = "strStyle", default)]
    pub style: Option<String>,
    #[serde(rename = "strMood", default)]
    pub mood: Option<String>,
}

/// Album record from TheAudioDB.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Album {
    #[serde(rename = "idAlbum")]
    pub id: String,
    #[serde(rename = "idArtist")]
    pub artist_id: String,
    #[serde(rename = "strAlbum")]
    pub title: String,
    #[serde(rename = "strArtist")]
    pub artist: String,
    #[serde(rename = "intYearReleased", default)]
    pub year_released: Option<String>,
    #[serde(rename = "strAlbumThumb", default)]
    pub thumb: Option<String>,
    #[serde(rename = "strAlbumCDart", default)]
    pub cd_art: Option<String>,
    #[serde(rename = "strAlbumSpine", default)]
    pub spine: Option<String>,
    #[serde(rename = "strAlbum3DCase", default)]
    pub case_3d: Option<String>,
    #[serde(rename = "strAlbum3DFlat", default)]
    pub flat_3d: Option<String>,
    #[serde(rename = "strAlbum3DFace", default)]
    pub face_3d: Option<String>,
    #[serde(rename = "strAlbum3DThumb", default)]
    pub thumb_3d: Option<String>,
    #[serde(rename = "strDescriptionEN", default)]
    pub description: Option<String>,
    #[serde(rename = "strGenre", default)]
    pub genre: Option<String>,
    #[serde(rename = "strLabel", default)]
    pub label: Option<String>,
    #[serde(rename = "strReleaseFormat", default)]
    pub release_format: Option<String>,
    #[serde(rename = "intSales", default)]
    pub sales: Option<String>,
}

/// Track record from TheAudioDB.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    #[serde(rename = "idTrack")]
    pub id: String,
    #[serde(rename = "idAlbum")]
    pub album_id: String,
    #[serde(rename = "idArtist")]
    pub artist_id: String,
    #[serde(rename = "strTrack")]
    pub title: String,
    #[serde(rename = "strAlbum")]
    pub album: String,
    #[serde(rename = "strArtist")]
    pub artist: String,
    #[serde(rename = "intTrackNumber", default)]
    pub track_number: Option<String>,
    #[serde(rename = "strTrackThumb", default)]
    pub thumb: Option<String>,
    #[serde(rename = "strMusicVid", default)]
    pub music_video: Option<String>,
    #[serde(rename = "intDuration", default)]
    pub duration: Option<String>,
    #[serde(rename = "strDescriptionEN", default)]
    pub description: Option<String>,
    #[serde(rename = "strGenre", default)]
    pub genre: Option<String>,
}

/// Music video record. Unlike [`Track`], the video URL is mandatory here;
/// the `mvid.php` endpoint only returns tracks that have one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MusicVideo {
    #[serde(rename = "idTrack")]
    pub id: String,
    #[serde(rename = "idAlbum")]
    pub album_id: String,
    #[serde(rename = "idArtist")]
    pub artist_id: String,
    #[serde(rename = "strTrack")]
    pub title: String,
    #[serde(rename = "strMusicVid")]
    pub video: String,
    #[serde(rename = "strTrackThumb", default)]
    pub thumb: Option<String>,
    #[serde(rename = "intTrackNumber", default)]
    pub track_number: Option<String>,
    #[serde(rename = "strGenre", default)]
    pub genre: Option<String>,
    #[serde(rename = "intDuration", default)]
    pub duration: Option<String>,
}

/// One entry of the trending chart. The trending endpoint does not
/// guarantee a schema, so only a handful of well-known fields are typed
/// and the rest is kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendingEntry {
    #[serde(rename = "idArtist", default)]
    pub artist_id: Option<String>,
    #[serde(rename = "strArtist", default)]
    pub artist: Option<String>,
    #[serde(rename = "idAlbum", default)]
    pub album_id: Option<String>,
    #[serde(rename = "strAlbum", default)]
    pub album: Option<String>,
    #[serde(rename = "intChartPlace", default)]
    pub chart_place: Option<String>,
    #[serde(rename = "strAlbumThumb", default)]
    pub thumb: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
