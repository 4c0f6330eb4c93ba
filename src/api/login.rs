use std::sync::Arc;

use axum::{
    Extension,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{spotify::SpotifyClient, warning};

/// Sends the browser to the Spotify authorization page.
pub async fn login(Extension(client): Extension<Arc<SpotifyClient>>) -> Response {
    match client.authorize_url() {
        Ok(url) => Redirect::to(url.as_str()).into_response(),
        Err(e) => {
            warning!("Cannot build authorization URL: {}", e);
            Html("<h4>Login is not configured correctly.</h4>").into_response()
        }
    }
}
