use crate::{
    spotify::{SpotifyClient, SpotifyError},
    types::{AccessToken, UserInfo},
};

impl SpotifyClient {
    /// Retrieves the profile of the user the token was issued for.
    ///
    /// The returned id is the username used by every playlist endpoint.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::Fetch`] when the token is rejected or the request
    /// fails, [`SpotifyError::Decode`] when the profile cannot be read.
    pub async fn get_user_info(&self, token: &AccessToken) -> Result<UserInfo, SpotifyError> {
        let url = self.api_url(&["me"])?;
        self.get_json(&url, token, &[]).await
    }
}
