use url::Url;

use crate::{
    spotify::{SpotifyClient, SpotifyError, client::decode_body},
    types::TokenResponse,
};

impl SpotifyClient {
    /// Builds the Spotify authorization URL the user's browser is sent to.
    ///
    /// After approval Spotify redirects to the configured redirect URI with a
    /// `code` query parameter, which is then passed to [`exchange_code`].
    ///
    /// The query carries `client_id`, `scope`, `response_type=code` and
    /// `redirect_uri`, all form-encoded.
    ///
    /// # Errors
    ///
    /// Fails only when the configured accounts URL is not an absolute URL.
    ///
    /// [`exchange_code`]: SpotifyClient::exchange_code
    pub fn authorize_url(&self) -> Result<Url, url::ParseError> {
        let config = self.config();
        Url::parse_with_params(
            &format!("{}/authorize", config.accounts_url),
            &[
                ("client_id", config.client_id.as_str()),
                ("scope", config.scope.as_str()),
                ("response_type", "code"),
                ("redirect_uri", config.redirect_uri.as_str()),
            ],
        )
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Sends a single form-encoded POST to the accounts service using the
    /// client credentials of the configuration. The redirect URI must be the
    /// one used to obtain the code.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Auth`] when the request fails or is rejected
    /// - [`SpotifyError::EmptyResponse`] when the response has no body
    /// - [`SpotifyError::Decode`] when the body is not a token envelope
    ///
    /// # Example
    ///
    /// ```
    /// let token = client.exchange_code(&params.code).await?;
    /// let user = client.get_user_info(&token.access_token).await?;
    /// ```
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, SpotifyError> {
        let config = self.config();
        let url = format!("{}/api/token", config.accounts_url);

        let response = self
            .http()
            .post(&url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", config.redirect_uri.as_str()),
                ("client_id", config.client_id.as_str()),
                ("client_secret", config.client_secret.as_str()),
            ])
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(SpotifyError::Auth)?;

        let body = response.text().await.map_err(SpotifyError::Auth)?;

        decode_body(&url, &body)
    }
}
