use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{info, spotify::SpotifyClient, utils, warning};

/// OAuth redirect target. Exchanges the `code` for a token, looks up the
/// user and forwards to their playlist page.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(client): Extension<Arc<SpotifyClient>>,
) -> Response {
    let Some(code) = params.get("code") else {
        if let Some(reason) = params.get("error") {
            warning!("Authorization was denied: {}", reason);
        }
        return Html("<h4>Missing authorization code.</h4>").into_response();
    };

    let token = match client.exchange_code(code).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            return Html("<h4>Login failed.</h4>").into_response();
        }
    };

    let user = match client.get_user_info(&token.access_token).await {
        Ok(user) => user,
        Err(e) => {
            warning!("Cannot fetch user profile: {}", e);
            return Html("<h4>Login failed.</h4>").into_response();
        }
    };

    info!("Logged in as {}", user.id);
    Redirect::to(&utils::playlists_path(&user.id, &token.access_token)).into_response()
}
