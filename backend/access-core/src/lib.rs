pub mod cache;
pub mod config;
pub mod credential;
pub mod error;
pub mod links;
pub mod resources;
pub mod router;
pub mod transport;

mod client;
#[cfg(test)]
mod tests;

pub use client::ConsoleClient;

pub const DEFAULT_API_HOST: &str = "localhost";
pub const DEFAULT_API_PORT: u16 = 5409;
pub const DEFAULT_API_BASE_URL: &str =
    const_format::concatcp!("http://", DEFAULT_API_HOST, ":", DEFAULT_API_PORT);

/// Environment variable that overrides the configured API base URL.
pub const API_BASE_URL_ENV: &str = "CONSOLE_API_BASE_URL";

/// Route every unauthenticated navigation and every 401 lands on.
pub const LOGIN_ROUTE: &str = "/login";
