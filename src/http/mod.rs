use reqwest::Client;
use serde::Deserialize;
use std::ops::Deref;
use thiserror::Error;

/// GitHub answers with this message when the workflow token lacks write scopes
const INTEGRATION_ACCESS_DENIED: &str = "Resource not accessible by integration";

#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    GenericResponseError { status: u16, message: String },
    #[error("Failed to send request")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}

impl Error {
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::GenericResponseError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// A 403 alone is not enough, rate limiting answers with it too
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Error::GenericResponseError { message, .. } => {
                message.contains(INTEGRATION_ACCESS_DENIED)
            }
            _ => false,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[allow(async_fn_in_trait)]
pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for reqwest::Result<reqwest::Response> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;
        let status = response.status().as_u16();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text);

            return Err(Error::GenericResponseError { status, message });
        }

        Ok(text)
    }
}

pub fn parse<T>(payload: &str) -> Result<T, Error>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str::<T>(payload).map_err(|cause| Error::ParseResponseError { cause })
}
