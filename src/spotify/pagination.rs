use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    spotify::{SpotifyClient, SpotifyError},
    types::{AccessToken, Page},
    warning,
};

impl SpotifyClient {
    /// Fetches every page of an offset paginated listing using the configured
    /// page limit.
    ///
    /// See [`fetch_all_with_limit`](SpotifyClient::fetch_all_with_limit).
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        url: &Url,
        token: &AccessToken,
    ) -> Result<Vec<T>, SpotifyError> {
        self.fetch_all_with_limit(url, token, self.config().page_limit)
            .await
    }

    /// Fetches every page of an offset paginated listing.
    ///
    /// Requests are issued one after another starting at offset 0 and advance
    /// by `limit` until the number of accumulated items reaches the `total`
    /// reported by the server. Items keep the order in which the server
    /// returned them. A listing with `total == 0` costs exactly one request.
    ///
    /// A page that comes back empty before `total` is reached ends the listing
    /// early with what was accumulated so far. So does an offset that would
    /// no longer fit in a `u32`.
    ///
    /// # Arguments
    ///
    /// * `url` - Listing endpoint; `limit` and `offset` are added as query
    ///   parameters
    /// * `token` - Access token sent as bearer credential
    /// * `limit` - Page size; 0 is treated as 1
    ///
    /// # Errors
    ///
    /// Any failing request or undecodable page aborts the listing and the
    /// items accumulated so far are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// let url = Url::parse("https://api.spotify.com/v1/users/alice/playlists")?;
    /// let playlists: Vec<Playlist> = client.fetch_all_with_limit(&url, &token, 50).await?;
    /// ```
    pub async fn fetch_all_with_limit<T: DeserializeOwned>(
        &self,
        url: &Url,
        token: &AccessToken,
        limit: u32,
    ) -> Result<Vec<T>, SpotifyError> {
        let limit = limit.max(1);
        let mut offset: u32 = 0;
        let mut items: Vec<T> = Vec::new();

        loop {
            let page: Page<T> = self
                .get_json(url, token, &[("limit", limit), ("offset", offset)])
                .await?;

            let total = page.total as usize;
            let received = page.items.len();
            items.extend(page.items);

            if items.len() >= total {
                break;
            }

            if received == 0 {
                warning!(
                    "{} reported {} items but returned only {}",
                    url,
                    total,
                    items.len()
                );
                break;
            }

            offset = match offset.checked_add(limit) {
                Some(next) => next,
                None => {
                    warning!(
                        "{} reported {} items but paging stopped at offset {}",
                        url,
                        total,
                        offset
                    );
                    break;
                }
            };
        }

        Ok(items)
    }
}
