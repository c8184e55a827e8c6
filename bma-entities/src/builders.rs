pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{
    event_builder::*, interest_builder::*, review_builder::*, shop_builder::*, user_builder::*,
};

pub mod user_builder {

    use super::*;
    use crate::{id::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self
        }
        pub fn full_name(mut self, full_name: &str) -> Self {
            self.user.full_name = full_name.into();
            self
        }
        pub fn interests(mut self, interests: Vec<impl Into<String>>) -> Self {
            self.user.interests = interests.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    email: "".into(),
                    username: "".into(),
                    full_name: "".into(),
                    age: None,
                    gender: None,
                    bio: None,
                    interests: vec![],
                    latitude: None,
                    longitude: None,
                    profile_image_url: None,
                    fcm_token: None,
                    last_location_update: None,
                    created_at: None,
                    updated_at: None,
                },
            }
        }
    }
}

pub mod shop_builder {

    use super::*;
    use crate::{id::*, shop::*};

    #[derive(Debug)]
    pub struct CoffeeShopBuild {
        shop: CoffeeShop,
    }

    impl CoffeeShopBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.shop.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.shop.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.shop.address = address.into();
            self
        }
        pub fn pos(mut self, latitude: f64, longitude: f64) -> Self {
            self.shop.latitude = latitude;
            self.shop.longitude = longitude;
            self
        }
        pub fn pictures(mut self, pictures: Vec<impl Into<String>>) -> Self {
            self.shop.pictures = pictures.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> CoffeeShop {
            self.shop
        }
    }

    impl Builder for CoffeeShop {
        type Build = CoffeeShopBuild;
        fn build() -> CoffeeShopBuild {
            CoffeeShopBuild {
                shop: CoffeeShop {
                    id: Id::new(),
                    name: "".into(),
                    address: "".into(),
                    latitude: 0.0,
                    longitude: 0.0,
                    pictures: vec![],
                },
            }
        }
    }
}

pub mod interest_builder {

    use super::*;
    use crate::{id::*, interest::*};

    #[derive(Debug)]
    pub struct InterestBuild {
        interest: Interest,
    }

    impl InterestBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.interest.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.interest.name = name.into();
            self
        }
        pub fn finish(self) -> Interest {
            self.interest
        }
    }

    impl Builder for Interest {
        type Build = InterestBuild;
        fn build() -> InterestBuild {
            InterestBuild {
                interest: Interest {
                    id: Id::new(),
                    name: "".into(),
                    date_added: "".into(),
                    created_at: None,
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, review::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.review.name = name.into();
            self
        }
        pub fn country(mut self, country: &str) -> Self {
            self.review.country = country.into();
            self
        }
        pub fn rating(mut self, rating: u8) -> Self {
            self.review.rating = rating;
            self
        }
        pub fn review_text(mut self, text: &str) -> Self {
            self.review.review_text = text.into();
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    name: "".into(),
                    country: "".into(),
                    rating: 0,
                    review_text: "".into(),
                    created_at: None,
                    updated_at: None,
                },
            }
        }
    }
}

pub mod event_builder {

    use super::*;
    use crate::{event::*, id::*, time::*};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn event_name(mut self, name: &str) -> Self {
            self.event.event_name = name.into();
            self
        }
        pub fn event_date(mut self, date: Timestamp) -> Self {
            self.event.event_date = date;
            self
        }
        pub fn max_attendees(mut self, max: u32) -> Self {
            self.event.max_attendees = max;
            self
        }
        pub fn cafe(mut self, cafe: CafeSnapshot) -> Self {
            self.event.cafe = Some(cafe);
            self
        }
        pub fn created_by(mut self, created_by: &str) -> Self {
            self.event.created_by = created_by.into();
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> EventBuild {
            EventBuild {
                event: Event {
                    id: Id::new(),
                    event_name: "".into(),
                    description: None,
                    location: None,
                    latitude: None,
                    longitude: None,
                    cafe: None,
                    event_date: Timestamp::from_milliseconds(0),
                    max_attendees: 0,
                    attendees_count: 0,
                    image_url: None,
                    created_by: "".into(),
                    created_at: None,
                    updated_at: None,
                },
            }
        }
    }
}
