//! # CLI Module
//!
//! Command implementations behind the `spotdup` binary.
//!
//! - [`serve`] - starts the demo web server, optionally opening the login
//!   page in the default browser
//! - [`duplicate`] - duplicates a playlist from the terminal with an access
//!   token obtained through the demo server
//!
//! Both commands read the [`Config`](crate::config::Config) from the
//! environment and exit with an error message when it is incomplete.
//!
//! ## Usage
//!
//! ```bash
//! spotdup serve --open
//! spotdup duplicate --token BQC... --owner alice --playlist 37i9dQZF1DXcBWIGoYBM5M
//! ```

mod duplicate;
mod serve;

pub use duplicate::duplicate;
pub use serve::serve;

use crate::{config::Config, error, spotify::SpotifyClient};

fn config_from_env() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    }
}

fn build_client(config: Config) -> SpotifyClient {
    match SpotifyClient::new(config) {
        Ok(client) => client,
        Err(e) => error!("Cannot create Spotify client: {}", e),
    }
}
