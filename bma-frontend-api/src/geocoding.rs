use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use bma_boundary::{GeoSearchResult, PlaceSuggestion, ReverseGeocodeResponse};
use bma_core::geo::{coords_label, MAX_SUGGESTIONS};

use crate::{Error, Result};

/// Client of the public geocoding API.
///
/// The geocoding service is best effort: any failure degrades to an
/// empty suggestion list or a plain coordinate label and is never
/// surfaced to the admin.
#[derive(Clone)]
pub struct GeocodingApi {
    url: String,
}

impl GeocodingApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    /// Free-text forward search, at most [`MAX_SUGGESTIONS`] results.
    pub async fn search(&self, text: &str) -> Vec<PlaceSuggestion> {
        match self.try_search(text).await {
            Ok(suggestions) => suggestions,
            Err(err) => {
                log::warn!("Place search failed: {err}");
                Vec::new()
            }
        }
    }

    async fn try_search(&self, text: &str) -> Result<Vec<PlaceSuggestion>> {
        let encoded_txt = utf8_percent_encode(text, NON_ALPHANUMERIC);
        let url = format!(
            "{}/search?q={encoded_txt}&format=json&limit={MAX_SUGGESTIONS}",
            self.url
        );
        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(Error::Fetch(format!("HTTP {}", response.status())));
        }
        let results: Vec<GeoSearchResult> = response.json().await?;
        Ok(results
            .into_iter()
            .filter_map(suggestion)
            .take(MAX_SUGGESTIONS)
            .collect())
    }

    /// Resolves coordinates to a display name, falling back to a
    /// `"lat, lon"` label when the service has no answer.
    pub async fn reverse(&self, lat: f64, lon: f64) -> String {
        match self.try_reverse(lat, lon).await {
            Ok(Some(name)) if !name.is_empty() => name,
            Ok(_) => coords_label(lat, lon),
            Err(err) => {
                log::warn!("Reverse geocoding failed: {err}");
                coords_label(lat, lon)
            }
        }
    }

    async fn try_reverse(&self, lat: f64, lon: f64) -> Result<Option<String>> {
        let url = format!("{}/reverse?lat={lat}&lon={lon}&format=json", self.url);
        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(Error::Fetch(format!("HTTP {}", response.status())));
        }
        let reverse: ReverseGeocodeResponse = response.json().await?;
        Ok(reverse.display_name)
    }
}

/// Drops results whose coordinates do not parse instead of failing the
/// whole search.
fn suggestion(result: GeoSearchResult) -> Option<PlaceSuggestion> {
    let GeoSearchResult {
        display_name,
        lat,
        lon,
    } = result;
    let lat = lat.parse().ok()?;
    let lon = lon.parse().ok()?;
    Some(PlaceSuggestion {
        name: display_name,
        lat,
        lon,
    })
}
