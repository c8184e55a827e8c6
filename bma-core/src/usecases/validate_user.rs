use bma_entities::user::Gender;

use super::prelude::*;

/// UI-enforced cap, mirrored from the mobile app.
pub const MAX_INTERESTS: usize = 5;

/// Form state of the user overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub bio: String,
    pub interests: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub profile_image_url: Option<String>,
}

pub fn validate_user(draft: &UserDraft) -> Result<()> {
    if draft.email.trim().is_empty()
        || draft.username.trim().is_empty()
        || draft.full_name.trim().is_empty()
    {
        return Err(Error::MissingField);
    }
    // Only a structural check; the identity provider is the authority
    // on deliverable addresses.
    if !draft.email.contains('@') {
        return Err(Error::Email);
    }
    if draft.interests.len() > MAX_INTERESTS {
        return Err(Error::TooManyInterests);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> UserDraft {
        UserDraft {
            email: "jane@example.com".into(),
            username: "jane".into(),
            full_name: "Jane Doe".into(),
            interests: vec!["Latte Art".into(), "Pour Over".into()],
            ..Default::default()
        }
    }

    #[test]
    fn accept_valid_user() {
        assert!(validate_user(&valid_draft()).is_ok());
    }

    #[test]
    fn reject_more_than_five_interests() {
        let draft = UserDraft {
            interests: (0..6).map(|i| format!("interest-{i}")).collect(),
            ..valid_draft()
        };
        assert_eq!(validate_user(&draft), Err(Error::TooManyInterests));
    }

    #[test]
    fn exactly_five_interests_are_fine() {
        let draft = UserDraft {
            interests: (0..5).map(|i| format!("interest-{i}")).collect(),
            ..valid_draft()
        };
        assert!(validate_user(&draft).is_ok());
    }

    #[test]
    fn reject_missing_required_fields() {
        for field in ["email", "username", "full_name"] {
            let mut draft = valid_draft();
            match field {
                "email" => draft.email.clear(),
                "username" => draft.username.clear(),
                _ => draft.full_name.clear(),
            }
            assert_eq!(validate_user(&draft), Err(Error::MissingField));
        }
    }

    #[test]
    fn reject_email_without_at_sign() {
        let draft = UserDraft {
            email: "jane.example.com".into(),
            ..valid_draft()
        };
        assert_eq!(validate_user(&draft), Err(Error::Email));
    }
}
