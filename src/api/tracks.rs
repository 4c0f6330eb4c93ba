use std::sync::Arc;

use axum::{Extension, extract::Path, response::Html};

use crate::{
    spotify::SpotifyClient,
    types::{AccessToken, PlaylistId, Username},
    utils::escape_html,
    warning,
};

pub async fn show_tracks(
    Path((owner, token, playlist_id)): Path<(Username, AccessToken, PlaylistId)>,
    Extension(client): Extension<Arc<SpotifyClient>>,
) -> Html<String> {
    let tracks = match client.get_playlist_tracks(&token, &owner, &playlist_id).await {
        Ok(tracks) => tracks,
        Err(e) => {
            warning!("Cannot list tracks of playlist {}: {}", playlist_id, e);
            return Html(String::new());
        }
    };

    let mut html = String::new();
    for track in &tracks {
        html.push_str(&format!(
            "<p>{} - {} - {}</p>\n",
            escape_html(track.id.as_deref().unwrap_or("local")),
            escape_html(&track.name),
            escape_html(&track.album.name)
        ));
        for artist in &track.artists {
            html.push_str(&format!("<p>{}</p>\n", escape_html(&artist.name)));
        }
    }

    Html(html)
}
