//! POST `/auth/api/access-token`

use std::{
    fmt,
    time::{Duration, Instant},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    dispatch::{exchange, Exchange},
    operation::ACCESS_TOKEN,
    AuthenticationError, Client, Error,
};

/// An opaque bearer token.
///
/// Might be empty if the service did not return one, it is passed through as is.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Token(String);

impl Token {
    /// The token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the service returned no token at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// A token along with the moment we got it.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The token.
    pub token: Token,
    /// When the exchange that returned the token completed.
    pub issued_at: Instant,
}

impl IssuedToken {
    /// Whether the token is still younger than `validity` at `now`.
    pub fn is_fresh(&self, validity: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.issued_at) < validity
    }
}

/// How the client reuses access tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenStrategy {
    /// Obtain a fresh token for every call.
    #[default]
    PerCall,
    /// Reuse a token until it gets older than `validity`.
    ///
    /// The service does not report an expiry, so the window has to be picked by the user.
    Cached {
        /// For how long a token is reused.
        #[serde(
            rename = "validity_secs",
            deserialize_with = "crate::serde_util::duration_from_secs"
        )]
        validity: Duration,
    },
}

/// Input data for the access token request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AccessTokenRequest<'a> {
    /// The client identifier.
    client_id: &'a str,
    /// The client secret.
    client_secret: &'a str,
}

/// The response from the access token request.
#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    /// The issued token, whatever JSON value the service put there.
    #[serde(default)]
    token: Option<serde_json::Value>,
}

impl From<Option<serde_json::Value>> for Token {
    fn from(value: Option<serde_json::Value>) -> Self {
        match value {
            None | Some(serde_json::Value::Null) => Self::default(),
            Some(serde_json::Value::String(token)) => Self(token),
            Some(other) => Self(other.to_string()),
        }
    }
}

impl Client {
    /// Exchange the credentials for a fresh access token.
    ///
    /// Always performs the exchange, regardless of the configured [`TokenStrategy`].
    pub async fn acquire_token(&self) -> Result<Token, Error> {
        let req = AccessTokenRequest {
            client_id: self.credentials.client_id(),
            client_secret: self.credentials.client_secret(),
        };
        let req = self.build_json(&ACCESS_TOKEN, None, &req);
        let AccessTokenResponse { token } = match exchange(&ACCESS_TOKEN, req).await {
            Ok(Exchange::Success(response)) => response,
            Ok(Exchange::Failure(response)) => {
                return Err(AuthenticationError::Status(response).into())
            }
            Err(err) => return Err(AuthenticationError::Reqwest(err).into()),
        };
        let token = Token::from(token);
        debug!(message = "obtained access token", empty = token.is_empty());
        Ok(token)
    }

    /// Obtain a token for a call, according to the configured [`TokenStrategy`].
    pub(crate) async fn token(&self) -> Result<Token, Error> {
        let validity = match self.token_strategy {
            TokenStrategy::PerCall => return self.acquire_token().await,
            TokenStrategy::Cached { validity } => validity,
        };

        let mut cached = self.token_cache.lock().await;
        if let Some(issued) = cached
            .as_ref()
            .filter(|issued| issued.is_fresh(validity, Instant::now()))
        {
            debug!(message = "reusing cached access token");
            return Ok(issued.token.clone());
        }

        let token = self.acquire_token().await?;
        *cached = Some(IssuedToken {
            token: token.clone(),
            issued_at: Instant::now(),
        });
        Ok(token)
    }
}
