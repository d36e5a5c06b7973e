//! Client API for the Faceki KYC service.

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

use tokio::sync::Mutex;

mod config;
mod credentials;
mod dispatch;
mod error;
mod face_match;
mod generate_kyc_link;
mod get_kyc_records;
mod get_kyc_records_by_request_id;
mod get_kyc_rules;
mod get_kyc_summary;
mod kyc_verification;
mod multi_kyc_verification;
pub mod operation;
mod request;
mod serde_util;
mod token;
mod types;

#[cfg(test)]
mod tests;

pub use config::*;
pub use credentials::*;
pub use error::*;
pub use kyc_verification::*;
pub use multi_kyc_verification::*;
pub use token::*;
pub use types::*;

/// The Faceki client.
///
/// Every call authenticates on its own, unless [`TokenStrategy::Cached`] is configured.
#[derive(Debug)]
pub struct Client {
    /// Underlying HTTP client used to execute network calls.
    reqwest: reqwest::Client,
    /// The base URL to use for the routes, without a trailing slash.
    base_url: String,
    /// The credentials exchanged for access tokens.
    credentials: Credentials,
    /// How access tokens are reused across calls.
    token_strategy: TokenStrategy,
    /// The last issued token, only populated under [`TokenStrategy::Cached`].
    token_cache: Mutex<Option<IssuedToken>>,
}

impl Client {
    /// Create a client against the default host with a default HTTP client.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(reqwest::Client::new(), Config::default(), credentials)
    }

    /// Create a client from an explicit HTTP client and configuration.
    pub fn with_config(reqwest: reqwest::Client, config: Config, credentials: Credentials) -> Self {
        let Config {
            base_url,
            token_strategy,
        } = config;
        Self {
            reqwest,
            base_url: base_url.trim_end_matches('/').to_owned(),
            credentials,
            token_strategy,
            token_cache: Mutex::new(None),
        }
    }

    /// The base URL the routes are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credentials this client authenticates with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}
