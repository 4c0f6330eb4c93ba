use std::fmt;

use serde::{Deserialize, Serialize};

/// URI scheme prefix Spotify expects for track references in write requests.
pub const TRACK_URI_PREFIX: &str = "spotify:track:";

macro_rules! string_newtype {
    (@impls $name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, redacted) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&"***").finish()
            }
        }

        string_newtype!(@impls $name);
    };
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        string_newtype!(@impls $name);
    };
}

string_newtype!(
    /// Bearer credential returned by the token exchange.
    AccessToken,
    redacted
);
string_newtype!(
    /// Spotify user id, as returned by `GET /me`.
    Username
);
string_newtype!(ClientId);
string_newtype!(ClientSecret, redacted);
string_newtype!(
    /// Redirect URI registered with the Spotify application. Must match exactly.
    RedirectUri
);
string_newtype!(PlaylistId);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: AccessToken,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Username,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub uri: String,
}

/// Offset based pagination envelope used by every Spotify listing endpoint.
///
/// `total` is the authoritative item count across all pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub href: Option<String>,
    pub items: Vec<T>,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: Username,
    #[serde(default)]
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub owner: PlaylistOwner,
    #[serde(default)]
    pub href: String,
}

/// Item wrapper of the playlist track listing. Spotify reports `null` for
/// tracks that are no longer available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub track: Option<Track>,
}

/// A track as embedded in playlist listings.
///
/// Local files added from a Spotify desktop client show up with `is_local`
/// set and `null` ids on the track, its album and its artists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub is_local: bool,
    pub album: Album,
    pub artists: Vec<Artist>,
}

impl Track {
    /// Track reference in the form accepted by the playlist write endpoint.
    ///
    /// `None` for local files, which cannot be added through the Web API.
    pub fn uri(&self) -> Option<String> {
        if self.is_local {
            return None;
        }
        self.id
            .as_deref()
            .map(|id| format!("{}{}", TRACK_URI_PREFIX, id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub album_type: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}

/// Outcome of a successful playlist duplication.
#[derive(Debug, Clone)]
pub struct DuplicationReport {
    pub source: Playlist,
    pub destination: Playlist,
    /// Tracks written to the copy. Local files of the source are not counted.
    pub track_count: usize,
    /// Snapshot of the last accepted write batch. `None` when the source was empty.
    pub snapshot_id: Option<String>,
}
