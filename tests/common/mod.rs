#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value, json};
use spotdup::{
    config::Config,
    spotify::SpotifyClient,
    types::{AccessToken, ClientId, ClientSecret, RedirectUri},
};
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

pub const TOKEN: &str = "test-token";

pub fn test_config(server: &MockServer) -> Config {
    Config {
        api_url: server.uri(),
        accounts_url: server.uri(),
        ..Config::new(
            ClientId::new("client-id"),
            ClientSecret::new("client-secret"),
            RedirectUri::new("http://localhost:8080/callback/"),
        )
    }
}

pub fn test_client(server: &MockServer) -> SpotifyClient {
    SpotifyClient::new(test_config(server)).expect("client")
}

pub fn token() -> AccessToken {
    AccessToken::new(TOKEN)
}

pub fn track_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Track {}", id),
        "href": format!("https://api.spotify.com/v1/tracks/{}", id),
        "album": {
            "id": format!("album-{}", id),
            "name": "Album",
            "album_type": "album",
            "href": ""
        },
        "artists": [{ "id": "artist-1", "name": "Artist", "href": "" }]
    })
}

/// A local file entry as Spotify lists it: every id is `null`.
pub fn local_track_json(name: &str) -> Value {
    json!({
        "id": null,
        "name": name,
        "href": null,
        "is_local": true,
        "uri": format!("spotify:local:Artist:Album:{}:180", name),
        "album": { "id": null, "name": "", "album_type": null, "href": null },
        "artists": [{ "id": null, "name": "Artist", "href": null }]
    })
}

pub fn playlist_json(id: &str, name: &str, owner: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "href": format!("https://api.spotify.com/v1/playlists/{}", id),
        "owner": { "id": owner, "href": format!("https://api.spotify.com/v1/users/{}", owner) }
    })
}

pub fn page_json(items: Vec<Value>, total: usize, limit: usize, offset: usize) -> Value {
    json!({
        "href": "",
        "items": items,
        "limit": limit,
        "offset": offset,
        "next": null,
        "previous": null,
        "total": total
    })
}

/// Serves a track listing page for whatever `offset`/`limit` is requested.
pub struct TrackPages {
    pub ids: Vec<String>,
}

impl TrackPages {
    pub fn numbered(count: usize) -> Self {
        Self {
            ids: (0..count).map(|i| format!("t{}", i)).collect(),
        }
    }
}

impl Respond for TrackPages {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let param = |name: &str| {
            request
                .url
                .query_pairs()
                .find(|(k, _)| k == name)
                .and_then(|(_, v)| v.parse::<usize>().ok())
        };
        let limit = param("limit").unwrap_or(5);
        let offset = param("offset").unwrap_or(0);

        let items = self
            .ids
            .iter()
            .skip(offset)
            .take(limit)
            .map(|id| json!({ "track": track_json(id) }))
            .collect();

        ResponseTemplate::new(200).set_body_json(page_json(items, self.ids.len(), limit, offset))
    }
}

/// Answers each call with `snap-<n>`, counting from 1.
#[derive(Default)]
pub struct SnapshotSequence {
    calls: AtomicUsize,
}

impl Respond for SnapshotSequence {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        ResponseTemplate::new(201).set_body_json(json!({ "snapshot_id": format!("snap-{}", n) }))
    }
}

pub async fn requests_to(server: &MockServer, method: &str, path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == method && r.url.path() == path)
        .collect()
}

pub fn uris_of(request: &Request) -> Vec<String> {
    let body: Value = serde_json::from_slice(&request.body).expect("json body");
    body["uris"]
        .as_array()
        .expect("uris array")
        .iter()
        .map(|u| u.as_str().expect("uri string").to_string())
        .collect()
}
