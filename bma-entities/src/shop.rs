use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeShop {
    pub id        : Id,
    pub name      : String,
    pub address   : String,
    pub latitude  : f64,
    pub longitude : f64,
    /// Ordered image addresses; the first element is by convention
    /// the primary image, there is no explicit primary flag.
    pub pictures  : Vec<String>,
}

impl CoffeeShop {
    pub fn primary_picture(&self) -> Option<&str> {
        self.pictures.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use crate::builders::*;

    #[test]
    fn first_picture_is_primary() {
        let shop = super::CoffeeShop::build()
            .pictures(vec!["https://img/first.jpg", "https://img/second.jpg"])
            .finish();
        assert_eq!(shop.primary_picture(), Some("https://img/first.jpg"));
    }

    #[test]
    fn no_pictures_no_primary() {
        let shop = super::CoffeeShop::build().finish();
        assert_eq!(shop.primary_picture(), None);
    }
}
