use std::sync::Arc;

use axum::{Extension, extract::Path, response::Html};

use crate::{
    spotify::SpotifyClient,
    types::{AccessToken, Username},
    utils::{duplicate_path, escape_html, tracks_path},
    warning,
};

/// Lists the user's playlists with links to their tracks and to duplicate
/// them into the user's account.
pub async fn list_playlists(
    Path((username, token)): Path<(Username, AccessToken)>,
    Extension(client): Extension<Arc<SpotifyClient>>,
) -> Html<String> {
    let playlists = match client.get_user_playlists(&token, &username).await {
        Ok(playlists) => playlists,
        Err(e) => {
            warning!("Cannot list playlists of {}: {}", username, e);
            return Html(String::new());
        }
    };

    let mut html = String::new();
    for playlist in &playlists {
        let name = escape_html(&playlist.name);
        html.push_str(&format!(
            "<a href=\"{}\">List tracks - {}</a> - \n",
            escape_html(&tracks_path(&playlist.owner.id, &token, &playlist.id)),
            name
        ));
        html.push_str(&format!(
            "<a href=\"{}\">Duplicate - {}</a><br/>\n",
            escape_html(&duplicate_path(
                &playlist.owner.id,
                &username,
                &token,
                &playlist.id
            )),
            name
        ));
    }

    Html(html)
}
