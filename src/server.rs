use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::net::TcpListener;

use crate::{Res, api, spotify::SpotifyClient};

/// Routes of the demo server. The Spotify redirect URI is commonly registered
/// with a trailing slash, so `/login` and `/callback` accept both forms.
pub fn router(client: Arc<SpotifyClient>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/login/", get(api::login))
        .route("/callback", get(api::callback))
        .route("/callback/", get(api::callback))
        .route("/listplaylists/{username}/{token}", get(api::list_playlists))
        .route("/tracks/{owner}/{token}/{playlist_id}", get(api::show_tracks))
        .route(
            "/duplicate/{owner}/{creator}/{token}/{playlist_id}",
            get(api::duplicate_playlist),
        )
        .layer(Extension(client))
}

/// Binds the listener, so callers can log the resolved address before serving.
pub async fn bind(addr: &str) -> Res<TcpListener> {
    let addr = SocketAddr::from_str(addr)?;
    Ok(TcpListener::bind(&addr).await?)
}

/// Serves the demo routes on `listener` until the process ends.
pub async fn start_api_server(listener: TcpListener, client: Arc<SpotifyClient>) -> Res<()> {
    axum::serve(listener, router(client)).await?;
    Ok(())
}
