//! Serializable, anemic data structures for the JSON documents of the hosted
//! store and the payloads of the other hosted services (identity provider,
//! object storage, geocoding).
//!
//! Field names follow the store's camelCase convention. Input (`New*`) and
//! partial-update (`*Patch`) shapes are explicit per entity; a patch only
//! serializes the fields that are actually set.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

// ------ -------- ------
//     Document store
// ------ -------- ------

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id                   : String,
    pub email                : String,
    pub username             : String,
    #[serde(default)]
    pub full_name            : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age                  : Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender               : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio                  : Option<String>,
    #[serde(default)]
    pub interests            : Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude             : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude            : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fcm_token            : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_location_update : Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at           : Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at           : Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct CoffeeShop {
    pub id        : String,
    pub name      : String,
    pub address   : String,
    pub latitude  : f64,
    pub longitude : f64,
    /// Legacy single-image field, superseded by `pictures`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pictures  : Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewCoffeeShop {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pictures: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct CoffeeShopPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pictures: Option<Vec<String>>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub id         : String,
    pub name       : String,
    #[serde(default)]
    pub date_added : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at : Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewInterest {
    pub name: String,
    pub date_added: String,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct InterestPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id          : String,
    pub name        : String,
    #[serde(default)]
    pub country     : String,
    pub rating      : u8,
    #[serde(default)]
    pub review_text : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at  : Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at  : Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub name: String,
    pub country: String,
    pub rating: u8,
    pub review_text: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct ReviewPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id              : String,
    pub event_name      : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description     : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location        : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude        : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude       : Option<f64>,
    // Flat cafe snapshot fields, as stored in the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cafe_name       : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cafe_address    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cafe_latitude   : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cafe_longitude  : Option<f64>,
    pub event_date      : i64,
    pub max_attendees   : u32,
    #[serde(default)]
    pub attendees_count : u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url       : Option<String>,
    #[serde(default)]
    pub created_by      : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at      : Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at      : Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub event_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafe_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafe_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafe_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafe_longitude: Option<f64>,
    pub event_date: i64,
    pub max_attendees: u32,
    pub attendees_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafe_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafe_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafe_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafe_longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Response of a successful document creation.
///
/// The store only returns the assigned id, never the stored document.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CreatedDoc {
    pub id: String,
}

/// Error payload returned by the document store API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(thiserror::Error, Debug, Clone, PartialEq, Eq)
)]
#[cfg_attr(feature = "extra-derive", error("{message} (HTTP {http_status})"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

/// Response of the object storage service after an upload: the publicly
/// resolvable address of the stored object.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct StoredObject {
    pub url: String,
}

// ------ -------- ------
//    Identity provider
// ------ -------- ------

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    /// Bearer credential for subsequent store requests.
    pub id_token: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Rejection payload of the identity provider.
///
/// `code` is a stable identifier like `auth/wrong-password`; the
/// `auth/` prefix is optional.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct AuthError {
    pub code: String,
    pub message: String,
}

// ------ -------- ------
//       Geocoding
// ------ -------- ------

/// One search hit of the public geocoding service.
///
/// Coordinates arrive as strings, exactly as the service sends them.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct GeoSearchResult {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ReverseGeocodeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Parsed place suggestion handed to the UI.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlaceSuggestion {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = ReviewPatch {
            rating: Some(4),
            updated_at: Some(1_700_000_000_000),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "rating": 4, "updatedAt": 1_700_000_000_000_i64 })
        );
    }

    #[test]
    fn user_document_field_names_are_camel_case() {
        let json = serde_json::json!({
            "id": "u1",
            "email": "jane@example.com",
            "username": "jane",
            "fullName": "Jane Doe",
            "interests": ["Latte Art"],
            "profileImageUrl": "https://img/jane.jpg",
            "createdAt": 1_700_000_000_000_i64,
        });
        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.full_name, "Jane Doe");
        assert_eq!(user.profile_image_url.as_deref(), Some("https://img/jane.jpg"));
        assert_eq!(user.created_at, Some(1_700_000_000_000));
        assert_eq!(user.age, None);
    }

    #[test]
    fn event_document_tolerates_missing_optionals() {
        let json = serde_json::json!({
            "id": "e1",
            "eventName": "Cupping",
            "eventDate": 1_700_000_000_000_i64,
            "maxAttendees": 10,
        });
        let event: Event = serde_json::from_value(json).unwrap();
        assert_eq!(event.attendees_count, 0);
        assert!(event.cafe_name.is_none());
        assert!(event.created_by.is_empty());
    }
}
