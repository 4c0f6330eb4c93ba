//! # Spotify Integration Module
//!
//! Client for the parts of the Spotify Web API used by spotdup. Every
//! operation is a method on [`SpotifyClient`], which carries the injected
//! [`Config`](crate::config::Config) and the HTTP connection pool.
//!
//! ## Operations
//!
//! - [`auth`] - authorization URL and authorization code exchange
//! - [`user`] - profile of the authenticated user
//! - [`pagination`] - offset/limit listing flattened into one collection
//! - [`playlist`] - playlist listing, lookup, creation and batched track writes
//!
//! ## API Coverage
//!
//! - `POST /api/token` - token exchange
//! - `GET /me` - user profile
//! - `GET /users/{user}/playlists` - paginated playlists
//! - `GET /users/{user}/playlists/{id}` - single playlist
//! - `GET /users/{user}/playlists/{id}/tracks` - paginated tracks
//! - `POST /users/{user}/playlists` - create playlist
//! - `POST /users/{user}/playlists/{id}/tracks` - add tracks
//!
//! ## Request Paths
//!
//! User and playlist ids are appended to the API base URL as single
//! percent-encoded path segments. An id that contains `/` or `?` therefore
//! reaches the endpoint it names and never a neighbouring one.
//!
//! ## Error Handling
//!
//! Every failure is returned to the caller as a [`SpotifyError`]. Requests
//! are issued one at a time and never retried; tokens are not refreshed.

pub mod auth;
mod client;
mod error;
pub mod pagination;
pub mod playlist;
pub mod user;

pub use client::SpotifyClient;
pub use error::SpotifyError;
pub use playlist::MAX_TRACKS_PER_REQUEST;
