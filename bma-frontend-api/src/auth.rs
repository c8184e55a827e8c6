use gloo_net::http::Request;
use thiserror::Error;

use bma_boundary::{AuthError, Credentials, SignInResponse};

/// Client of the hosted identity provider.
#[derive(Clone)]
pub struct AuthApi {
    url: String,
}

/// Unlike the document store, the identity provider rejects requests
/// with its own error envelope, so sign-in has its own error type.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SignInError {
    #[error("{0}")]
    Fetch(String),

    #[error("{}", .0.message)]
    Rejected(AuthError),
}

impl From<gloo_net::Error> for SignInError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl AuthApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn sign_in(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<SignInResponse, SignInError> {
        let url = format!("{}/sign-in", self.url);
        let response = Request::post(&url).json(credentials)?.send().await?;
        if response.ok() {
            Ok(response.json().await?)
        } else {
            let err: AuthError = response.json().await?;
            Err(SignInError::Rejected(err))
        }
    }
}
