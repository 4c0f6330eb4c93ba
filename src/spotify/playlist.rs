use crate::{
    spotify::{SpotifyClient, SpotifyError},
    types::{
        AccessToken, AddTracksRequest, CreatePlaylistRequest, Playlist, PlaylistId,
        PlaylistTrack, SnapshotResponse, Track, Username,
    },
    warning,
};

/// Maximum number of track URIs Spotify accepts in a single add request.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

impl SpotifyClient {
    /// Lists every playlist of `username`, following pagination to the end.
    ///
    /// # Arguments
    ///
    /// * `token` - Access token of the logged-in user
    /// * `username` - Spotify user id whose playlists are listed
    ///
    /// # Errors
    ///
    /// [`SpotifyError::InvalidSegment`] for an empty or dot-only username,
    /// otherwise whatever [`fetch_all`](SpotifyClient::fetch_all) returns.
    pub async fn get_user_playlists(
        &self,
        token: &AccessToken,
        username: &Username,
    ) -> Result<Vec<Playlist>, SpotifyError> {
        let url = self.api_url(&["users", username.as_str(), "playlists"])?;
        self.fetch_all(&url, token).await
    }

    /// Retrieves the metadata of a single playlist.
    ///
    /// # Arguments
    ///
    /// * `token` - Access token of the logged-in user
    /// * `owner` - User id the playlist is addressed under
    /// * `playlist_id` - Spotify id of the playlist
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Playlist)` - Id, name and owner of the playlist
    /// - `Err(SpotifyError::Fetch)` - Transport error or non-2xx status, e.g.
    ///   404 for an unknown playlist
    /// - `Err(SpotifyError::Decode)` - The body is not a playlist object
    ///
    /// # API Endpoint
    ///
    /// `GET /users/{owner}/playlists/{playlist_id}`
    ///
    /// # Example
    ///
    /// ```
    /// let playlist = client
    ///     .get_playlist(&token, &Username::new("alice"), &PlaylistId::new("37i9dQZF1DXcBWIGoYBM5M"))
    ///     .await?;
    /// println!("{} by {}", playlist.name, playlist.owner.id);
    /// ```
    pub async fn get_playlist(
        &self,
        token: &AccessToken,
        owner: &Username,
        playlist_id: &PlaylistId,
    ) -> Result<Playlist, SpotifyError> {
        let url = self.api_url(&["users", owner.as_str(), "playlists", playlist_id.as_str()])?;
        self.get_json(&url, token, &[]).await
    }

    /// Lists every track of a playlist in playlist order.
    ///
    /// Entries whose track is no longer available (`"track": null`) are
    /// skipped. Local files are kept; they have no Spotify id.
    ///
    /// # API Endpoint
    ///
    /// `GET /users/{owner}/playlists/{playlist_id}/tracks`, paged with the
    /// configured limit. Each item wraps the track in a `track` field.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_all`](SpotifyClient::fetch_all).
    pub async fn get_playlist_tracks(
        &self,
        token: &AccessToken,
        owner: &Username,
        playlist_id: &PlaylistId,
    ) -> Result<Vec<Track>, SpotifyError> {
        let url = self.api_url(&[
            "users",
            owner.as_str(),
            "playlists",
            playlist_id.as_str(),
            "tracks",
        ])?;
        let entries: Vec<PlaylistTrack> = self.fetch_all(&url, token).await?;
        let listed = entries.len();

        let tracks: Vec<Track> = entries.into_iter().filter_map(|entry| entry.track).collect();
        if tracks.len() < listed {
            warning!(
                "Skipped {} unavailable tracks in playlist {}",
                listed - tracks.len(),
                playlist_id
            );
        }

        Ok(tracks)
    }

    /// Creates a new, empty playlist owned by `owner`.
    ///
    /// # Arguments
    ///
    /// * `token` - Access token; must carry a playlist modify scope
    /// * `owner` - User the playlist is created for
    /// * `name` - Display name of the new playlist
    /// * `public` - Whether the playlist is listed on the owner's profile
    ///
    /// # Errors
    ///
    /// Every failure is wrapped in [`SpotifyError::Create`] carrying `name`.
    ///
    /// # Example
    ///
    /// ```
    /// let copy = client
    ///     .create_playlist(&token, &Username::new("bob"), "Copy of Mix", false)
    ///     .await?;
    /// println!("created {}", copy.id);
    /// ```
    pub async fn create_playlist(
        &self,
        token: &AccessToken,
        owner: &Username,
        name: &str,
        public: bool,
    ) -> Result<Playlist, SpotifyError> {
        let request = CreatePlaylistRequest {
            name: name.to_string(),
            public,
        };

        let created = match self.api_url(&["users", owner.as_str(), "playlists"]) {
            Ok(url) => self.post_json(&url, token, &request).await,
            Err(e) => Err(e),
        };

        created.map_err(|source| SpotifyError::Create {
            name: name.to_string(),
            source: Box::new(source),
        })
    }

    /// Appends `tracks` to `playlist`, in order, in batches of at most
    /// [`MAX_TRACKS_PER_REQUEST`].
    ///
    /// Tracks without a Spotify id (local files) cannot be referenced by a
    /// write request and are left out with a warning. Batches are cut from
    /// the remaining tracks.
    ///
    /// # Arguments
    ///
    /// * `token` - Access token; must carry a playlist modify scope
    /// * `owner` - User id the destination playlist is addressed under
    /// * `playlist` - Destination playlist, usually fresh from
    ///   [`create_playlist`](SpotifyClient::create_playlist)
    /// * `tracks` - Tracks to append, in the order they should appear
    ///
    /// # Returns
    ///
    /// The snapshot of the last batch, or `None` without issuing any request
    /// when nothing is left to write. Only the final snapshot is reported.
    ///
    /// # API Endpoint
    ///
    /// `POST /users/{owner}/playlists/{playlist_id}/tracks` with body
    /// `{"uris": ["spotify:track:..."]}`, once per batch.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected batch with [`SpotifyError::Write`]. Batches
    /// written before it stay in the playlist.
    pub async fn add_tracks_to_playlist(
        &self,
        token: &AccessToken,
        owner: &Username,
        playlist: &Playlist,
        tracks: &[Track],
    ) -> Result<Option<SnapshotResponse>, SpotifyError> {
        let uris: Vec<String> = tracks.iter().filter_map(Track::uri).collect();
        if uris.len() < tracks.len() {
            warning!(
                "Skipped {} tracks without a Spotify id when writing to {}",
                tracks.len() - uris.len(),
                playlist.id
            );
        }
        if uris.is_empty() {
            return Ok(None);
        }

        let url = self.api_url(&[
            "users",
            owner.as_str(),
            "playlists",
            playlist.id.as_str(),
            "tracks",
        ])?;
        let mut snapshot: Option<SnapshotResponse> = None;

        for (batch, chunk) in uris.chunks(MAX_TRACKS_PER_REQUEST).enumerate() {
            let request = AddTracksRequest {
                uris: chunk.to_vec(),
            };

            let response: SnapshotResponse = self
                .post_json(&url, token, &request)
                .await
                .map_err(|source| SpotifyError::Write {
                    batch,
                    source: Box::new(source),
                })?;

            snapshot = Some(response);
        }

        Ok(snapshot)
    }
}
