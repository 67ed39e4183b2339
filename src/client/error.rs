//! Client-side error type.

use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    /// Local storage could not be read or written.
    Storage(std::io::Error),
    /// The HTTP request itself failed.
    Http(reqwest::Error),
    /// A response body could not be decoded.
    Decode(serde_json::Error),
    /// The server returned a token the client could not decode.
    MalformedToken,
    /// The server answered with an error status.
    Api { status: u16, message: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Storage(err) => write!(f, "storage error: {}", err),
            ClientError::Http(err) => write!(f, "http error: {}", err),
            ClientError::Decode(err) => write!(f, "decode error: {}", err),
            ClientError::MalformedToken => write!(f, "server returned a malformed token"),
            ClientError::Api { status, message } => {
                write!(f, "api error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Storage(err)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err)
    }
}
