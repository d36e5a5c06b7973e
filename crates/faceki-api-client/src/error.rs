//! The error types shared by all the calls.

use std::{fmt, path::PathBuf};

use reqwest::StatusCode;
use thiserror::Error;

/// A non-200 response, captured as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedStatus {
    /// The status code the server responded with.
    pub status: StatusCode,
    /// The raw response body.
    pub body: String,
}

impl fmt::Display for UnexpectedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Status code: {}, Response: {}",
            self.status.as_u16(),
            self.body
        )
    }
}

/// The access token exchange failure.
#[derive(Error, Debug)]
pub enum AuthenticationError {
    /// The token endpoint responded with something other than 200.
    #[error("{0}")]
    Status(UnexpectedStatus),
    /// The token request did not complete, or its response could not be decoded.
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// The error type for the client calls.
#[derive(Error, Debug)]
pub enum Error {
    /// Obtaining the access token failed, the call itself was not sent.
    #[error("token generation failed: {0}")]
    Authentication(#[from] AuthenticationError),
    /// The call was answered with something other than 200.
    #[error("{operation}. {response}")]
    Request {
        /// What the failed call was trying to do.
        operation: &'static str,
        /// The response as received.
        response: UnexpectedStatus,
    },
    /// An error coming from the underlying reqwest layer.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The file to upload could not be read.
    #[error("unable to read file {path:?}: {source}")]
    FileAccess {
        /// The path as passed by the caller.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
}

/// The coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`Error::Authentication`].
    Authentication,
    /// See [`Error::Request`].
    Request,
    /// See [`Error::Transport`].
    Transport,
    /// See [`Error::FileAccess`].
    FileAccess,
}

impl Error {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Request { .. } => ErrorKind::Request,
            Self::Transport(_) => ErrorKind::Transport,
            Self::FileAccess { .. } => ErrorKind::FileAccess,
        }
    }

    /// The response that caused this error, if the server answered with a non-200 status.
    pub fn unexpected_status(&self) -> Option<&UnexpectedStatus> {
        match self {
            Self::Authentication(AuthenticationError::Status(response))
            | Self::Request { response, .. } => Some(response),
            _ => None,
        }
    }
}
