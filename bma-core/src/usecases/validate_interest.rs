use super::prelude::*;

/// Form state of the interest overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestDraft {
    pub name: String,
}

/// No uniqueness check: the store does not enforce one either, and the
/// full collection may have changed since it was fetched.
pub fn validate_interest(draft: &InterestDraft) -> Result<()> {
    if draft.name.trim().is_empty() {
        return Err(Error::MissingField);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_blank_name() {
        let draft = InterestDraft { name: "  ".into() };
        assert_eq!(validate_interest(&draft), Err(Error::MissingField));
        let draft = InterestDraft {
            name: "Cold Brew".into(),
        };
        assert!(validate_interest(&draft).is_ok());
    }
}
