use super::prelude::*;

/// Form state of the coffee shop overlay.
///
/// `pictures` holds the already uploaded image addresses; uploading
/// happens before the shop document is created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopDraft {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub pictures: Vec<String>,
}

pub fn validate_shop(draft: &ShopDraft) -> Result<()> {
    if draft.name.trim().is_empty() || draft.address.trim().is_empty() {
        return Err(Error::MissingField);
    }
    if draft.pictures.is_empty() {
        return Err(Error::MissingPicture);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ShopDraft {
        ShopDraft {
            name: "Bonanza".into(),
            address: "Oderberger Str. 35, Berlin".into(),
            latitude: 52.54,
            longitude: 13.41,
            pictures: vec!["https://img/bonanza.jpg".into()],
        }
    }

    #[test]
    fn accept_valid_shop() {
        assert!(validate_shop(&valid_draft()).is_ok());
    }

    #[test]
    fn reject_shop_without_pictures() {
        let draft = ShopDraft {
            pictures: vec![],
            ..valid_draft()
        };
        assert_eq!(validate_shop(&draft), Err(Error::MissingPicture));
    }

    #[test]
    fn reject_shop_without_name_or_address() {
        let draft = ShopDraft {
            name: " ".into(),
            ..valid_draft()
        };
        assert_eq!(validate_shop(&draft), Err(Error::MissingField));
        let draft = ShopDraft {
            address: "".into(),
            ..valid_draft()
        };
        assert_eq!(validate_shop(&draft), Err(Error::MissingField));
    }
}
