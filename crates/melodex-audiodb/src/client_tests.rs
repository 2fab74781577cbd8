// SPDX-License-Identifier: GPL-3.0-or-later

#[cfg(test)]
mod tests {
    use crate::client::{wrapped_first, wrapped_list};
    use crate::{Album, Artist, AudioDbClient, AudioDbError, Track};
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const COLDPLAY_ID: &str = "111239";
    const PARACHUTES_ID: &str = "2108938";

    fn artist_search_response() -> serde_json::Value {
        serde_json::json!({
            "artists": [{
                "idArtist": COLDPLAY_ID,
                "strArtist": "Coldplay",
                "strArtistThumb": "https://img/coldplay-thumb.jpg",
                "strGenre": "Alternative Rock",
                "strCountry": "London, England",
                "intFormedYear": "1996",
                "strWebsite": "www.coldplay.com"
            }]
        })
    }

    fn album_search_response() -> serde_json::Value {
        serde_json::json!({
            "album": [{
                "idAlbum": PARACHUTES_ID,
                "idArtist": COLDPLAY_ID,
                "strAlbum": "Parachutes",
                "strArtist": "Coldplay",
                "intYearReleased": "2000",
                "strAlbumThumb": "https://img/parachutes.jpg",
                "strGenre": "Alternative Rock",
                "strLabel": "Parlophone"
            }]
        })
    }

    fn track_list_response() -> serde_json::Value {
        serde_json::json!({
            "track": [{
                "idTrack": "32793500",
                "idAlbum": PARACHUTES_ID,
                "idArtist": COLDPLAY_ID,
                "strTrack": "Yellow",
                "strAlbum": "Parachutes",
                "strArtist": "Coldplay",
                "intTrackNumber": "5",
                "intDuration": "266000",
                "strMusicVid": "https://www.youtube.com/watch?v=yKNxeF4KMsY"
            }]
        })
    }

    fn mvid_response() -> serde_json::Value {
        serde_json::json!({
            "mvids": [{
                "idTrack": "32793500",
                "idAlbum": PARACHUTES_ID,
                "idArtist": COLDPLAY_ID,
                "strTrack": "Yellow",
                "strMusicVid": "https://www.youtube.com/watch?v=yKNxeF4KMsY",
                "intTrackNumber": "5"
            }]
        })
    }

    fn client_for(server: &MockServer) -> AudioDbClient {
        AudioDbClient::builder()
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_search_artists() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search.php"))
            .and(query_param("s", "Coldplay"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artist_search_response()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let artists = client.search_artists("Coldplay").await.unwrap();

        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].id, COLDPLAY_ID);
        assert_eq!(artists[0].name, "Coldplay");
        assert_eq!(artists[0].formed_year, Some("1996".to_string()));
        assert_eq!(artists[0].biography, None);
    }

    #[tokio::test]
    async fn test_search_artists_encodes_reserved_characters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search.php"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "artists": null })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let artists = client.search_artists("AC/DC").await.unwrap();
        assert!(artists.is_empty());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let query = requests[0].url.query().unwrap();
        assert!(
            query.contains("s=AC%2FDC"),
            "slash must be percent-encoded, got query: {query}"
        );
    }

    #[tokio::test]
    async fn test_search_tracks_encodes_ampersand_and_percent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/searchtrack.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let tracks = client
            .search_tracks("Simon & Garfunkel", "100% love")
            .await
            .unwrap();
        assert!(tracks.is_empty());

        let requests = server.received_requests().await.unwrap();
        let query = requests[0].url.query().unwrap();
        assert!(query.contains("s=Simon+%26+Garfunkel"), "got: {query}");
        assert!(query.contains("t=100%25+love"), "got: {query}");

        // Round-trip: a standards-compliant decoder recovers the originals.
        let decoded: Vec<(String, String)> = requests[0]
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(decoded.contains(&("s".to_string(), "Simon & Garfunkel".to_string())));
        assert!(decoded.contains(&("t".to_string(), "100% love".to_string())));
    }

    #[tokio::test]
    async fn test_search_albums_narrowed_by_album_name() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/searchalbum.php"))
            .and(query_param("s", "Coldplay"))
            .and(query_param("a", "Parachutes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(album_search_response()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let albums = client
            .search_albums("Coldplay", Some("Parachutes"))
            .await
            .unwrap();

        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].title, "Parachutes");
        assert_eq!(albums[0].artist_id, COLDPLAY_ID);
        assert_eq!(albums[0].label, Some("Parlophone".to_string()));
    }

    #[tokio::test]
    async fn test_search_albums_without_album_name_omits_param() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/searchalbum.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(album_search_response()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let albums = client.search_albums("Coldplay", None).await.unwrap();
        assert_eq!(albums.len(), 1);

        let requests = server.received_requests().await.unwrap();
        let query = requests[0].url.query().unwrap();
        assert!(query.contains("s=Coldplay"));
        assert!(!query.contains("a="), "got: {query}");
    }

    #[tokio::test]
    async fn test_search_tracks_empty_track_name_still_sent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/searchtrack.php"))
            .and(query_param("s", "Queen"))
            .and(query_param("t", ""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let tracks = client.search_tracks("Queen", "").await.unwrap();
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_artist_by_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artist.php"))
            .and(query_param("i", COLDPLAY_ID))
            .respond_with(ResponseTemplate::new(200).set_body_json(artist_search_response()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let artist = client.artist_by_id(COLDPLAY_ID).await.unwrap();

        let artist = artist.expect("artist should be found");
        assert_eq!(artist.name, "Coldplay");
        assert_eq!(artist.thumb, Some("https://img/coldplay-thumb.jpg".to_string()));
    }

    #[tokio::test]
    async fn test_artist_by_id_null_wrapper_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artist.php"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "artists": null })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let artist = client.artist_by_id("999999999").await.unwrap();
        assert!(artist.is_none());
    }

    #[tokio::test]
    async fn test_album_by_id_null_wrapper_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/album.php"))
            .and(query_param("m", PARACHUTES_ID))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "album": null })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let album = client.album_by_id(PARACHUTES_ID).await.unwrap();
        assert!(album.is_none());
    }

    #[tokio::test]
    async fn test_tracks_by_album_missing_wrapper_is_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/track.php"))
            .and(query_param("m", "X"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let tracks = client.tracks_by_album("X").await.unwrap();
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_track_by_id_empty_wrapper_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/track.php"))
            .and(query_param("h", "123"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "track": [] })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let track = client.track_by_id("123").await.unwrap();
        assert!(track.is_none());
    }

    #[tokio::test]
    async fn test_music_videos_by_artist() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/mvid.php"))
            .and(query_param("i", COLDPLAY_ID))
            .respond_with(ResponseTemplate::new(200).set_body_json(mvid_response()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let videos = client.music_videos_by_artist(COLDPLAY_ID).await.unwrap();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "Yellow");
        assert_eq!(videos[0].video, "https://www.youtube.com/watch?v=yKNxeF4KMsY");
    }

    #[tokio::test]
    async fn test_top_tracks() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/track-top10.php"))
            .and(query_param("s", "Coldplay"))
            .respond_with(ResponseTemplate::new(200).set_body_json(track_list_response()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let tracks = client.top_tracks("Coldplay").await.unwrap();

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Yellow");
        assert_eq!(tracks[0].track_number, Some("5".to_string()));
    }

    #[tokio::test]
    async fn test_trending_sends_defaults() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/trending.php"))
            .and(query_param("country", "us"))
            .and(query_param("type", "itunes"))
            .and(query_param("format", "albums"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "trending": [{
                    "idArtist": COLDPLAY_ID,
                    "strArtist": "Coldplay",
                    "intChartPlace": "1",
                    "strItunesLink": "https://music.apple.com/album/x"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let entries = client.trending(None, None).await;

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].chart_place, Some("1".to_string()));
        assert!(entries[0].extra.contains_key("strItunesLink"));
    }

    #[tokio::test]
    async fn test_trending_degrades_on_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/trending.php"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let entries = client.trending(Some("gb"), Some("itunes")).await;
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_trending_degrades_on_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/trending.php"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "trending": [] }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = AudioDbClient::builder()
            .base_url(server.uri())
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();

        let entries = client.trending(None, None).await;
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_timeout_propagates_for_lookups() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artist.php"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(artist_search_response())
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = AudioDbClient::builder()
            .base_url(server.uri())
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();

        let result = client.artist_by_id(COLDPLAY_ID).await;
        assert!(matches!(result.unwrap_err(), AudioDbError::Timeout));
    }

    #[tokio::test]
    async fn test_http_error_propagates_for_lookups() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/album.php"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.albums_by_artist(COLDPLAY_ID).await;

        assert!(matches!(
            result.unwrap_err(),
            AudioDbError::HttpStatus { status: 503 }
        ));
    }

    #[tokio::test]
    async fn test_network_error_propagates() {
        // Nothing listens on this port; connection is refused immediately.
        let client = AudioDbClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();

        let result = client.search_artists("Coldplay").await;
        assert!(matches!(result.unwrap_err(), AudioDbError::Network(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search.php"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.search_artists("Coldplay").await;
        assert!(matches!(
            result.unwrap_err(),
            AudioDbError::InvalidResponse(_)
        ));
    }

    #[test]
    fn test_wrapped_list_shapes() {
        let missing = serde_json::json!({});
        let null = serde_json::json!({ "track": null });
        let empty = serde_json::json!({ "track": [] });

        assert!(wrapped_list::<Track>(&missing, "track").unwrap().is_empty());
        assert!(wrapped_list::<Track>(&null, "track").unwrap().is_empty());
        assert!(wrapped_list::<Track>(&empty, "track").unwrap().is_empty());
    }

    #[test]
    fn test_wrapped_first_shapes() {
        let missing = serde_json::json!({});
        let null = serde_json::json!({ "album": null });
        let empty = serde_json::json!({ "album": [] });

        assert!(wrapped_first::<Album>(&missing, "album").unwrap().is_none());
        assert!(wrapped_first::<Album>(&null, "album").unwrap().is_none());
        assert!(wrapped_first::<Album>(&empty, "album").unwrap().is_none());
    }

    #[test]
    fn test_wrapped_list_rejects_non_array_wrapper() {
        let body = serde_json::json!({ "artists": "oops" });
        assert!(wrapped_list::<Artist>(&body, "artists").is_err());
    }
}
