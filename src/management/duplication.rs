use std::fmt;

use thiserror::Error;

use crate::{
    spotify::{SpotifyClient, SpotifyError},
    types::{AccessToken, DuplicationReport, PlaylistId, Username},
};

/// Progress of a [`DuplicationManager`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuplicationStage {
    Pending,
    FetchSourceMetadata,
    FetchSourceTracks,
    CreateDestinationPlaylist,
    WriteTracksInBatches,
    Done,
    Failed(String),
}

impl fmt::Display for DuplicationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::FetchSourceMetadata => f.write_str("fetching source playlist"),
            Self::FetchSourceTracks => f.write_str("fetching source tracks"),
            Self::CreateDestinationPlaylist => f.write_str("creating destination playlist"),
            Self::WriteTracksInBatches => f.write_str("writing tracks"),
            Self::Done => f.write_str("done"),
            Self::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

#[derive(Debug, Error)]
#[error("duplication failed while {stage}: {source}")]
pub struct DuplicationError {
    /// Stage that was running when the failure occurred.
    pub stage: DuplicationStage,
    #[source]
    pub source: SpotifyError,
}

/// Name given to the copy of a playlist.
pub fn copy_name(source_name: &str) -> String {
    format!("Copy of {}", source_name)
}

/// Copies a playlist into a new private playlist of another (or the same)
/// user.
///
/// Steps run strictly in order and each one waits for the previous request to
/// complete. A failure leaves whatever was already created in place: a
/// destination playlist that exists but holds only some of the tracks is not
/// removed. Running the same duplication twice creates two copies.
pub struct DuplicationManager<'a> {
    client: &'a SpotifyClient,
    token: AccessToken,
    stage: DuplicationStage,
}

impl<'a> DuplicationManager<'a> {
    pub fn new(client: &'a SpotifyClient, token: AccessToken) -> Self {
        Self {
            client,
            token,
            stage: DuplicationStage::Pending,
        }
    }

    pub fn stage(&self) -> &DuplicationStage {
        &self.stage
    }

    /// Duplicates `playlist_id` owned by `owner` into a playlist owned by
    /// `creator` named `Copy of <source name>`.
    ///
    /// The copy is private. On return [`stage`](Self::stage) is
    /// [`DuplicationStage::Done`] or [`DuplicationStage::Failed`].
    ///
    /// # Errors
    ///
    /// A [`DuplicationError`] naming the stage that failed. When that stage is
    /// [`DuplicationStage::WriteTracksInBatches`] the copy already exists.
    ///
    /// # Example
    ///
    /// ```
    /// let mut manager = DuplicationManager::new(&client, token);
    /// let report = manager
    ///     .duplicate(&Username::new("alice"), &Username::new("bob"), &PlaylistId::new("mix"))
    ///     .await?;
    /// println!("{} tracks copied", report.track_count);
    /// ```
    pub async fn duplicate(
        &mut self,
        owner: &Username,
        creator: &Username,
        playlist_id: &PlaylistId,
    ) -> Result<DuplicationReport, DuplicationError> {
        match self.run(owner, creator, playlist_id).await {
            Ok(report) => {
                self.stage = DuplicationStage::Done;
                Ok(report)
            }
            Err(e) => {
                self.stage = DuplicationStage::Failed(e.source.to_string());
                Err(e)
            }
        }
    }

    async fn run(
        &mut self,
        owner: &Username,
        creator: &Username,
        playlist_id: &PlaylistId,
    ) -> Result<DuplicationReport, DuplicationError> {
        // source metadata must be read before the copy exists
        self.stage = DuplicationStage::FetchSourceMetadata;
        let source = self
            .client
            .get_playlist(&self.token, owner, playlist_id)
            .await
            .map_err(|e| failed(DuplicationStage::FetchSourceMetadata, e))?;

        self.stage = DuplicationStage::FetchSourceTracks;
        let tracks = self
            .client
            .get_playlist_tracks(&self.token, owner, playlist_id)
            .await
            .map_err(|e| failed(DuplicationStage::FetchSourceTracks, e))?;

        self.stage = DuplicationStage::CreateDestinationPlaylist;
        let destination = self
            .client
            .create_playlist(&self.token, creator, &copy_name(&source.name), false)
            .await
            .map_err(|e| failed(DuplicationStage::CreateDestinationPlaylist, e))?;

        self.stage = DuplicationStage::WriteTracksInBatches;
        let snapshot = self
            .client
            .add_tracks_to_playlist(&self.token, creator, &destination, &tracks)
            .await
            .map_err(|e| failed(DuplicationStage::WriteTracksInBatches, e))?;

        Ok(DuplicationReport {
            source,
            destination,
            track_count: tracks.iter().filter(|t| t.uri().is_some()).count(),
            snapshot_id: snapshot.map(|s| s.snapshot_id),
        })
    }
}

fn failed(stage: DuplicationStage, source: SpotifyError) -> DuplicationError {
    DuplicationError { stage, source }
}
