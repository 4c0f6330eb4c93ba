use crate::types::{AccessToken, PlaylistId, Username};

/// Escapes text for safe inclusion in HTML element content and attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// The demo pages pass the session in path segments:
//   /listplaylists/{username}/{token}
//   /tracks/{owner}/{token}/{playlist_id}
//   /duplicate/{owner}/{creator}/{token}/{playlist_id}
// Each value is percent-encoded so that it fills exactly one segment.

fn route(name: &str, segments: &[&str]) -> String {
    let mut path = format!("/{}", name);
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path
}

pub fn playlists_path(username: &Username, token: &AccessToken) -> String {
    route("listplaylists", &[username.as_str(), token.as_str()])
}

pub fn tracks_path(owner: &Username, token: &AccessToken, playlist_id: &PlaylistId) -> String {
    route("tracks", &[owner.as_str(), token.as_str(), playlist_id.as_str()])
}

pub fn duplicate_path(
    owner: &Username,
    creator: &Username,
    token: &AccessToken,
    playlist_id: &PlaylistId,
) -> String {
    route(
        "duplicate",
        &[owner.as_str(), creator.as_str(), token.as_str(), playlist_id.as_str()],
    )
}
