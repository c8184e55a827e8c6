use gloo_net::http::{Request, RequestBuilder};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use bma_boundary::StoredObject;

use crate::{auth_header_value, expect_ok, into_json, Result};

/// Object path prefix for coffee shop pictures.
pub const COFFEE_SHOP_IMAGES: &str = "coffee-shops";
/// Object path prefix for event banner images.
pub const EVENT_IMAGES: &str = "events";
/// Object path prefix for user avatars.
pub const USER_AVATARS: &str = "users/avatars";

/// Authorized client of the object storage service.
#[derive(Clone)]
pub struct StorageApi {
    url: String,
    token: String,
}

impl StorageApi {
    #[must_use]
    pub const fn new(url: String, token: String) -> Self {
        Self { url, token }
    }

    fn add_auth_headers(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("Authorization", &auth_header_value(&self.token))
    }

    /// Uploads a file under `{prefix}/{millis}-{file name}` and returns
    /// the publicly resolvable address of the stored object. The
    /// timestamp disambiguates repeated uploads of the same file name.
    pub async fn upload(&self, prefix: &str, file: web_sys::File) -> Result<String> {
        let name = utf8_percent_encode(&file.name(), NON_ALPHANUMERIC).to_string();
        let millis = js_sys::Date::now() as u64;
        let url = format!("{}/{prefix}/{millis}-{name}", self.url);
        let response = self
            .add_auth_headers(Request::post(&url))
            .body(file)?
            .send()
            .await?;
        let stored: StoredObject = into_json(response).await?;
        Ok(stored.url)
    }

    /// Deletes a stored object by the address [`Self::upload`] returned.
    pub async fn delete(&self, address: &str) -> Result<()> {
        let response = self.add_auth_headers(Request::delete(address)).send().await?;
        expect_ok(response).await
    }
}
