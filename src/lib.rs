//! spotdup Library
//!
//! A small client for the Spotify Web API that lists a user's playlists and
//! tracks and duplicates playlists, together with a demo web server that drives
//! it from the browser.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the demo server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration record and environment loading
//! - `management` - Playlist duplication workflow
//! - `server` - Demo HTTP server wiring
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures and identifier types
//! - `utils` - HTML and route helpers
//!
//! # Example
//!
//! ```
//! use spotdup::{config::Config, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> spotdup::Res<()> {
//!     spotdup::config::load_env().await?;
//!     let client = SpotifyClient::new(Config::from_env()?)?;
//!     let token = client.exchange_code("AQD...").await?.access_token;
//!     let username = client.get_user_info(&token).await?.id;
//!     let playlists = client.get_user_playlists(&token, &username).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the application edges (CLI, server start-up) where errors of
/// different modules meet. Library operations return their own typed errors.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Copied {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal start-up errors; request handling never calls it.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable failures such as a rejected Spotify request while
/// serving a page.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
