use thiserror::Error;

/// Failures surfaced by the Spotify client. None of them are retried.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// The HTTP client could not be constructed.
    #[error("cannot create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The configured API base cannot have path segments appended to it.
    #[error("invalid API base URL {url}: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// An identifier that would not survive as a single path segment, such as
    /// an empty string or `..`.
    #[error("invalid identifier {segment:?} in request path")]
    InvalidSegment { segment: String },

    /// The token exchange request failed or was rejected.
    #[error("token exchange failed: {0}")]
    Auth(#[source] reqwest::Error),

    #[error("empty response body from {url}")]
    EmptyResponse { url: String },

    #[error("cannot decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot create playlist {name:?}: {source}")]
    Create {
        name: String,
        #[source]
        source: Box<SpotifyError>,
    },

    /// Appending a batch of tracks failed. `batch` is the zero-based index of
    /// the rejected batch; snapshots of earlier batches are not kept.
    #[error("cannot write track batch {batch}: {source}")]
    Write {
        batch: usize,
        #[source]
        source: Box<SpotifyError>,
    },
}
