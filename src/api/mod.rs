//! # API Module
//!
//! HTTP endpoints of the spotdup demo server.
//!
//! ## Endpoints
//!
//! - [`health`] - status and version for monitoring
//! - [`login`] - redirects to the Spotify authorization page
//! - [`callback`] - OAuth redirect target; exchanges the code for a token and
//!   forwards to the playlist page
//! - [`list_playlists`] - `/listplaylists/{username}/{token}`
//! - [`show_tracks`] - `/tracks/{owner}/{token}/{playlist_id}`
//! - [`duplicate_playlist`] - `/duplicate/{owner}/{creator}/{token}/{playlist_id}`
//!
//! ## Security Considerations
//!
//! The session (username and access token) travels in URL path segments.
//! This keeps the server stateless but exposes the token in browser history
//! and logs, so the server is meant for local demonstration only.
//!
//! Failures are logged and the page is rendered without further content.

mod callback;
mod duplicate;
mod health;
mod login;
mod playlists;
mod tracks;

pub use callback::callback;
pub use duplicate::duplicate_playlist;
pub use health::health;
pub use login::login;
pub use playlists::list_playlists;
pub use tracks::show_tracks;
