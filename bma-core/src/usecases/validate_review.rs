use super::prelude::*;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Form state of the review overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub name: String,
    pub country: String,
    pub rating: u8,
    pub review_text: String,
}

pub fn validate_review(draft: &ReviewDraft) -> Result<()> {
    if draft.name.trim().is_empty()
        || draft.country.trim().is_empty()
        || draft.review_text.trim().is_empty()
    {
        return Err(Error::MissingField);
    }
    if draft.rating < MIN_RATING {
        return Err(Error::RatingTooLow);
    }
    if draft.rating > MAX_RATING {
        return Err(Error::RatingTooHigh);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ReviewDraft {
        ReviewDraft {
            name: "Jane".into(),
            country: "DE".into(),
            rating: 4,
            review_text: "Great flat white.".into(),
        }
    }

    #[test]
    fn accept_valid_review() {
        assert!(validate_review(&valid_draft()).is_ok());
    }

    #[test]
    fn reject_zero_rating() {
        let draft = ReviewDraft {
            rating: 0,
            ..valid_draft()
        };
        assert_eq!(validate_review(&draft), Err(Error::RatingTooLow));
    }

    #[test]
    fn reject_rating_above_five() {
        let draft = ReviewDraft {
            rating: 6,
            ..valid_draft()
        };
        assert_eq!(validate_review(&draft), Err(Error::RatingTooHigh));
    }

    #[test]
    fn reject_empty_review_text() {
        let draft = ReviewDraft {
            review_text: "   ".into(),
            ..valid_draft()
        };
        assert_eq!(validate_review(&draft), Err(Error::MissingField));
    }

    #[test]
    fn reject_missing_reviewer_name() {
        let draft = ReviewDraft {
            name: "".into(),
            ..valid_draft()
        };
        assert_eq!(validate_review(&draft), Err(Error::MissingField));
    }
}
