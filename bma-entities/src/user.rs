use std::str::FromStr;

use thiserror::Error;

use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id                   : Id,
    pub email                : String,
    pub username             : String,
    pub full_name            : String,
    pub age                  : Option<u8>,
    pub gender               : Option<Gender>,
    pub bio                  : Option<String>,
    /// Interest *names*, not references to the interest collection.
    pub interests            : Vec<String>,
    pub latitude             : Option<f64>,
    pub longitude            : Option<f64>,
    pub profile_image_url    : Option<String>,
    /// Opaque push-notification token of the mobile app.
    pub fcm_token            : Option<String>,
    pub last_location_update : Option<Timestamp>,
    pub created_at           : Option<Timestamp>,
    pub updated_at           : Option<Timestamp>,
}

impl User {
    /// Name shown in the admin panel.
    ///
    /// Falls back to the local part of the email address when the
    /// full name is missing, like the mobile app does.
    pub fn display_name(&self) -> &str {
        if !self.full_name.is_empty() {
            return &self.full_name;
        }
        self.email
            .split('@')
            .next()
            .filter(|local| !local.is_empty())
            .unwrap_or("Unknown")
    }

    /// Single-letter avatar placeholder.
    pub fn avatar_letter(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Error)]
#[error("Invalid gender")]
pub struct GenderParseError;

impl FromStr for Gender {
    type Err = GenderParseError;
    fn from_str(s: &str) -> Result<Gender, Self::Err> {
        match &*s.to_lowercase() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(GenderParseError),
        }
    }
}

impl Gender {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    #[test]
    fn gender_from_str() {
        assert_eq!(Gender::from_str("male").unwrap(), Gender::Male);
        assert_eq!(Gender::from_str("Female").unwrap(), Gender::Female);
        assert_eq!(Gender::from_str("OTHER").unwrap(), Gender::Other);
        assert!(Gender::from_str("foo").is_err());
        assert!(Gender::from_str("").is_err());
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        let user = User::build().email("jane.doe@example.com").finish();
        assert_eq!(user.display_name(), "jane.doe");
        assert_eq!(user.avatar_letter(), "J");

        let user = User::build()
            .email("jane.doe@example.com")
            .full_name("Jane Doe")
            .finish();
        assert_eq!(user.display_name(), "Jane Doe");
        assert_eq!(user.avatar_letter(), "J");
    }
}
