//! Typed `gloo-net` clients for the remote collaborators of the admin
//! panel: the hosted document store, the object storage service, the
//! identity provider and the public geocoding API.

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod auth;
mod documents;
mod geocoding;
mod storage;

pub use self::{auth::*, documents::*, geocoding::*, storage::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0:?}")]
    Api(#[from] bma_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub(crate) fn auth_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(response.json::<bma_boundary::Error>().await?.into())
    }
}

/// Like [`into_json`] for endpoints that reply without a body.
pub async fn expect_ok(response: Response) -> Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(response.json::<bma_boundary::Error>().await?.into())
    }
}
