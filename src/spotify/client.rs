use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::{config::Config, spotify::SpotifyError, types::AccessToken};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Spotify Web API client.
///
/// Holds the read-only [`Config`] and a pooled HTTP client. Cloning is cheap
/// and every operation allocates its own state, so one instance can be shared
/// across server handlers.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Config,
    api_base: Url,
}

impl SpotifyClient {
    /// Creates a client for the Web API and accounts service named in
    /// `config`.
    ///
    /// No request is sent; credentials are only checked by the first
    /// operation that uses them.
    ///
    /// # Arguments
    ///
    /// * `config` - Credentials, endpoints and paging settings
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::BaseUrl`] when `config.api_url` is not an absolute
    ///   URL that path segments can be appended to
    /// - [`SpotifyError::Client`] when the HTTP client cannot be built
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_env()?;
    /// let client = SpotifyClient::new(config)?;
    /// ```
    pub fn new(config: Config) -> Result<Self, SpotifyError> {
        let api_base = parse_base(&config.api_url)?;
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(SpotifyError::Client)?;

        Ok(Self {
            http,
            config,
            api_base,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Appends `segments` to the API base URL, percent-encoding each one so
    /// that a `/`, `?` or `#` inside an identifier stays within its segment.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::InvalidSegment`] for empty, `.` or `..` segments, which
    /// the URL parser would drop or resolve against their parent.
    pub(crate) fn api_url(&self, segments: &[&str]) -> Result<Url, SpotifyError> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(SpotifyError::InvalidSegment {
                segment: segment.to_string(),
            });
        }

        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| base_error(&self.config.api_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Authenticated GET decoding the body as `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        token: &AccessToken,
        query: &[(&str, u32)],
    ) -> Result<T, SpotifyError> {
        let response = self
            .http
            .get(url.clone())
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|source| fetch_error(url, source))?;

        let body = response
            .text()
            .await
            .map_err(|source| fetch_error(url, source))?;

        decode_body(url.as_str(), &body)
    }

    /// Authenticated POST of a JSON body, decoding the response as `T`.
    pub(crate) async fn post_json<B, T>(
        &self,
        url: &Url,
        token: &AccessToken,
        payload: &B,
    ) -> Result<T, SpotifyError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(url.clone())
            .bearer_auth(token)
            .json(payload)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|source| fetch_error(url, source))?;

        let body = response
            .text()
            .await
            .map_err(|source| fetch_error(url, source))?;

        decode_body(url.as_str(), &body)
    }
}

fn parse_base(api_url: &str) -> Result<Url, SpotifyError> {
    let url = Url::parse(api_url).map_err(|source| SpotifyError::BaseUrl {
        url: api_url.to_string(),
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(base_error(api_url));
    }
    Ok(url)
}

fn base_error(api_url: &str) -> SpotifyError {
    SpotifyError::BaseUrl {
        url: api_url.to_string(),
        source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
    }
}

fn fetch_error(url: &Url, source: reqwest::Error) -> SpotifyError {
    SpotifyError::Fetch {
        url: url.to_string(),
        source,
    }
}

/// Decodes a response body, telling an empty body apart from malformed JSON.
pub(crate) fn decode_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, SpotifyError> {
    if body.trim().is_empty() {
        return Err(SpotifyError::EmptyResponse {
            url: url.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|source| SpotifyError::Decode {
        url: url.to_string(),
        source,
    })
}
