mod common;

use std::{net::SocketAddr, sync::Arc};

use reqwest::{StatusCode, header::LOCATION, redirect::Policy};
use serde_json::{Value, json};
use spotdup::server;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{SnapshotSequence, TrackPages, page_json, playlist_json, test_client};

async fn spawn_server(spotify: &MockServer) -> SocketAddr {
    let listener = server::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let client = Arc::new(test_client(spotify));
    tokio::spawn(async move {
        let _ = server::start_api_server(listener, client).await;
    });
    addr
}

fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("client")
}

#[tokio::test]
async fn test_health() {
    let spotify = MockServer::start().await;
    let addr = spawn_server(&spotify).await;

    let body: Value = browser()
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .expect("response")
        .json()
        .await
        .expect("json");

    assert_eq!(body["status"], "ok");
    assert_eq!(body["name"], "spotdup");
}

#[tokio::test]
async fn test_login_redirects_to_authorize() {
    let spotify = MockServer::start().await;
    let addr = spawn_server(&spotify).await;

    let response = browser()
        .get(format!("http://{}/login/", addr))
        .send()
        .await
        .expect("response");

    assert!(response.status().is_redirection());
    let location = response.headers()[LOCATION].to_str().expect("location");
    assert!(location.starts_with(&format!("{}/authorize?", spotify.uri())));
    assert!(location.contains("client_id=client-id"));
    assert!(location.contains("response_type=code"));
}

#[tokio::test]
async fn test_callback_without_code() {
    let spotify = MockServer::start().await;
    let addr = spawn_server(&spotify).await;

    let response = browser()
        .get(format!("http://{}/callback/?error=access_denied", addr))
        .send()
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.expect("body").contains("Missing authorization code"));
}

#[tokio::test]
async fn test_callback_forwards_to_playlists() {
    let spotify = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "BQC-access",
            "token_type": "Bearer",
            "expires_in": 3600,
            "refresh_token": "AQC-refresh"
        })))
        .expect(1)
        .mount(&spotify)
        .await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "alice",
            "display_name": "Alice",
            "email": "alice@example.com",
            "uri": "spotify:user:alice"
        })))
        .expect(1)
        .mount(&spotify)
        .await;
    let addr = spawn_server(&spotify).await;

    let response = browser()
        .get(format!("http://{}/callback/?code=auth-code", addr))
        .send()
        .await
        .expect("response");

    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers()[LOCATION].to_str().expect("location"),
        "/listplaylists/alice/BQC-access"
    );
}

#[tokio::test]
async fn test_list_playlists_page() {
    let spotify = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![
                playlist_json("p1", "Rock & Roll", "alice"),
                playlist_json("p2", "Shared", "carol"),
            ],
            2,
            5,
            0,
        )))
        .mount(&spotify)
        .await;
    let addr = spawn_server(&spotify).await;

    let body = browser()
        .get(format!("http://{}/listplaylists/alice/tok", addr))
        .send()
        .await
        .expect("response")
        .text()
        .await
        .expect("body");

    assert!(body.contains("href=\"/tracks/alice/tok/p1\""));
    assert!(body.contains("List tracks - Rock &amp; Roll"));
    assert!(body.contains("href=\"/duplicate/carol/alice/tok/p2\""));
}

#[tokio::test]
async fn test_tracks_page() {
    let spotify = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice/playlists/p1/tracks"))
        .respond_with(TrackPages::numbered(2))
        .mount(&spotify)
        .await;
    let addr = spawn_server(&spotify).await;

    let body = browser()
        .get(format!("http://{}/tracks/alice/tok/p1", addr))
        .send()
        .await
        .expect("response")
        .text()
        .await
        .expect("body");

    assert!(body.contains("<p>t0 - Track t0 - Album</p>"));
    assert!(body.contains("<p>t1 - Track t1 - Album</p>"));
    assert!(body.contains("<p>Artist</p>"));
}

#[tokio::test]
async fn test_duplicate_page() {
    let spotify = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/carol/playlists/p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_json("p2", "Shared", "carol")))
        .mount(&spotify)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/carol/playlists/p2/tracks"))
        .respond_with(TrackPages::numbered(7))
        .mount(&spotify)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/alice/playlists"))
        .respond_with(ResponseTemplate::new(201).set_body_json(playlist_json("c1", "Copy of Shared", "alice")))
        .expect(1)
        .mount(&spotify)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/alice/playlists/c1/tracks"))
        .respond_with(SnapshotSequence::default())
        .expect(1)
        .mount(&spotify)
        .await;
    let addr = spawn_server(&spotify).await;

    let body = browser()
        .get(format!("http://{}/duplicate/carol/alice/tok/p2", addr))
        .send()
        .await
        .expect("response")
        .text()
        .await
        .expect("body");

    assert!(body.contains("<p>Original: p2-Shared</p>"));
    assert!(body.contains("<p>Copy: c1-Copy of Shared</p>"));
    assert!(body.contains("<p>Snapshot ID: snap-1</p>"));
}

#[tokio::test]
async fn test_tracks_page_with_reserved_characters_in_id() {
    let spotify = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice/playlists/a%2Fb%3Fc/tracks"))
        .respond_with(TrackPages::numbered(1))
        .expect(1)
        .mount(&spotify)
        .await;
    let addr = spawn_server(&spotify).await;

    let body = browser()
        .get(format!("http://{}/tracks/alice/tok/a%2Fb%3Fc", addr))
        .send()
        .await
        .expect("response")
        .text()
        .await
        .expect("body");

    assert!(body.contains("<p>t0 - Track t0 - Album</p>"));
}

#[tokio::test]
async fn test_list_playlists_links_encode_ids() {
    let spotify = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![playlist_json("a/b?c", "Odd", "alice")],
            1,
            5,
            0,
        )))
        .mount(&spotify)
        .await;
    let addr = spawn_server(&spotify).await;

    let body = browser()
        .get(format!("http://{}/listplaylists/alice/tok", addr))
        .send()
        .await
        .expect("response")
        .text()
        .await
        .expect("body");

    assert!(body.contains("href=\"/tracks/alice/tok/a%2Fb%3Fc\""));
    assert!(body.contains("href=\"/duplicate/alice/alice/tok/a%2Fb%3Fc\""));
}
