//! Sending the prepared requests and normalizing the outcome.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{error, trace};

use crate::{operation::OperationSpec, Client, Error, UnexpectedStatus};

/// The outcome of a completed exchange.
#[derive(Debug)]
pub(crate) enum Exchange<T> {
    /// The server responded with 200 and the body decoded.
    Success(T),
    /// The server responded with any other status.
    Failure(UnexpectedStatus),
}

/// Execute exactly one exchange for `spec`.
///
/// 200 is the only success status, anything else is captured along with the body text.
pub(crate) async fn exchange<T>(
    spec: &OperationSpec,
    req: RequestBuilder,
) -> Result<Exchange<T>, reqwest::Error>
where
    T: DeserializeOwned,
{
    trace!(
        message = "sending request",
        operation = spec.name,
        method = %spec.method,
    );
    let outcome = send(req).await;
    match &outcome {
        Ok(Exchange::Success(_)) => trace!(message = "request succeeded", operation = spec.name),
        Ok(Exchange::Failure(response)) => error!(
            message = "request got an unexpected status",
            operation = spec.name,
            status = response.status.as_u16(),
            body = %response.body,
        ),
        Err(err) => error!(
            message = "request failed",
            operation = spec.name,
            error = %err,
        ),
    }
    outcome
}

/// Send the request and read the response.
async fn send<T>(req: RequestBuilder) -> Result<Exchange<T>, reqwest::Error>
where
    T: DeserializeOwned,
{
    let res = req.send().await?;
    match res.status() {
        StatusCode::OK => Ok(Exchange::Success(res.json().await?)),
        status => Ok(Exchange::Failure(UnexpectedStatus {
            status,
            body: res.text().await?,
        })),
    }
}

impl Client {
    /// Dispatch a business call and normalize the failures.
    pub(crate) async fn dispatch<T>(
        &self,
        spec: &OperationSpec,
        req: RequestBuilder,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        match exchange(spec, req).await? {
            Exchange::Success(response) => Ok(response),
            Exchange::Failure(response) => Err(Error::Request {
                operation: spec.failure,
                response,
            }),
        }
    }
}
