use std::sync::Arc;

use axum::{Extension, extract::Path, response::Html};

use crate::{
    management::{DuplicationManager, DuplicationStage},
    spotify::SpotifyClient,
    success,
    types::{AccessToken, PlaylistId, Username},
    utils::escape_html,
    warning,
};

/// Copies `playlist_id` of `owner` into a new playlist of `creator`.
pub async fn duplicate_playlist(
    Path((owner, creator, token, playlist_id)): Path<(Username, Username, AccessToken, PlaylistId)>,
    Extension(client): Extension<Arc<SpotifyClient>>,
) -> Html<String> {
    let mut manager = DuplicationManager::new(&client, token);

    let report = match manager.duplicate(&owner, &creator, &playlist_id).await {
        Ok(report) => report,
        Err(e) => {
            warning!("Duplicating playlist {} failed: {}", playlist_id, e);
            // a copy may already exist when the failure happened while writing
            if e.stage == DuplicationStage::WriteTracksInBatches {
                return Html("<p>Copy created, but not all tracks could be added.</p>\n".to_string());
            }
            return Html(String::new());
        }
    };

    success!(
        "Copied {} tracks of {} into {}",
        report.track_count,
        report.source.id,
        report.destination.id
    );

    let mut html = String::new();
    html.push_str(&format!(
        "<p>Original: {}-{}</p>\n",
        escape_html(report.source.id.as_str()),
        escape_html(&report.source.name)
    ));
    html.push_str(&format!(
        "<p>Copy: {}-{}</p>\n",
        escape_html(report.destination.id.as_str()),
        escape_html(&report.destination.name)
    ));
    html.push_str(&format!(
        "<p>Snapshot ID: {}</p>\n",
        escape_html(report.snapshot_id.as_deref().unwrap_or("-"))
    ));

    Html(html)
}
