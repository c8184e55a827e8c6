use super::*;
use bma_entities as e;
use e::time::Timestamp;

fn into_timestamp(ms: Option<i64>) -> Option<Timestamp> {
    ms.map(Timestamp::from_milliseconds)
}

fn into_milliseconds(ts: Option<Timestamp>) -> Option<i64> {
    ts.map(Timestamp::into_milliseconds)
}

impl From<User> for e::user::User {
    fn from(from: User) -> Self {
        let User {
            id,
            email,
            username,
            full_name,
            age,
            gender,
            bio,
            interests,
            latitude,
            longitude,
            profile_image_url,
            fcm_token,
            last_location_update,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            email,
            username,
            full_name,
            age,
            // Unknown gender strings written out-of-band are dropped,
            // not rejected.
            gender: gender.as_deref().and_then(|g| g.parse().ok()),
            bio,
            interests,
            latitude,
            longitude,
            profile_image_url,
            fcm_token,
            last_location_update: into_timestamp(last_location_update),
            created_at: into_timestamp(created_at),
            updated_at: into_timestamp(updated_at),
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            username,
            full_name,
            age,
            gender,
            bio,
            interests,
            latitude,
            longitude,
            profile_image_url,
            fcm_token,
            last_location_update,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            email,
            username,
            full_name,
            age,
            gender: gender.map(|g| g.as_str().to_string()),
            bio,
            interests,
            latitude,
            longitude,
            profile_image_url,
            fcm_token,
            last_location_update: into_milliseconds(last_location_update),
            created_at: into_milliseconds(created_at),
            updated_at: into_milliseconds(updated_at),
        }
    }
}

impl From<CoffeeShop> for e::shop::CoffeeShop {
    fn from(from: CoffeeShop) -> Self {
        let CoffeeShop {
            id,
            name,
            address,
            latitude,
            longitude,
            image_url,
            pictures,
        } = from;
        // Documents written before the pictures array existed only
        // carry the legacy imageUrl field.
        let pictures = pictures
            .filter(|pictures| !pictures.is_empty())
            .or_else(|| image_url.map(|url| vec![url]))
            .unwrap_or_default();
        Self {
            id: id.into(),
            name,
            address,
            latitude,
            longitude,
            pictures,
        }
    }
}

impl From<e::shop::CoffeeShop> for CoffeeShop {
    fn from(from: e::shop::CoffeeShop) -> Self {
        let e::shop::CoffeeShop {
            id,
            name,
            address,
            latitude,
            longitude,
            pictures,
        } = from;
        Self {
            id: id.into(),
            name,
            address,
            latitude,
            longitude,
            image_url: pictures.first().cloned(),
            pictures: Some(pictures),
        }
    }
}

impl From<Interest> for e::interest::Interest {
    fn from(from: Interest) -> Self {
        let Interest {
            id,
            name,
            date_added,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            date_added,
            created_at: into_timestamp(created_at),
        }
    }
}

impl From<e::interest::Interest> for Interest {
    fn from(from: e::interest::Interest) -> Self {
        let e::interest::Interest {
            id,
            name,
            date_added,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            date_added,
            created_at: into_milliseconds(created_at),
        }
    }
}

impl From<Review> for e::review::Review {
    fn from(from: Review) -> Self {
        let Review {
            id,
            name,
            country,
            rating,
            review_text,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            name,
            country,
            rating,
            review_text,
            created_at: into_timestamp(created_at),
            updated_at: into_timestamp(updated_at),
        }
    }
}

impl From<e::review::Review> for Review {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            id,
            name,
            country,
            rating,
            review_text,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            name,
            country,
            rating,
            review_text,
            created_at: into_milliseconds(created_at),
            updated_at: into_milliseconds(updated_at),
        }
    }
}

impl From<Event> for e::event::Event {
    fn from(from: Event) -> Self {
        let Event {
            id,
            event_name,
            description,
            location,
            latitude,
            longitude,
            cafe_name,
            cafe_address,
            cafe_latitude,
            cafe_longitude,
            event_date,
            max_attendees,
            attendees_count,
            image_url,
            created_by,
            created_at,
            updated_at,
        } = from;
        let cafe = if cafe_name.is_some() || cafe_address.is_some() {
            Some(e::event::CafeSnapshot {
                name: cafe_name.unwrap_or_default(),
                address: cafe_address.unwrap_or_default(),
                latitude: cafe_latitude,
                longitude: cafe_longitude,
            })
        } else {
            None
        };
        Self {
            id: id.into(),
            event_name,
            description,
            location,
            latitude,
            longitude,
            cafe,
            event_date: Timestamp::from_milliseconds(event_date),
            max_attendees,
            attendees_count,
            image_url,
            created_by,
            created_at: into_timestamp(created_at),
            updated_at: into_timestamp(updated_at),
        }
    }
}

impl From<e::event::Event> for Event {
    fn from(from: e::event::Event) -> Self {
        let e::event::Event {
            id,
            event_name,
            description,
            location,
            latitude,
            longitude,
            cafe,
            event_date,
            max_attendees,
            attendees_count,
            image_url,
            created_by,
            created_at,
            updated_at,
        } = from;
        let (cafe_name, cafe_address, cafe_latitude, cafe_longitude) = match cafe {
            Some(e::event::CafeSnapshot {
                name,
                address,
                latitude,
                longitude,
            }) => (Some(name), Some(address), latitude, longitude),
            None => (None, None, None, None),
        };
        Self {
            id: id.into(),
            event_name,
            description,
            location,
            latitude,
            longitude,
            cafe_name,
            cafe_address,
            cafe_latitude,
            cafe_longitude,
            event_date: event_date.into_milliseconds(),
            max_attendees,
            attendees_count,
            image_url,
            created_by,
            created_at: into_milliseconds(created_at),
            updated_at: into_milliseconds(updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_image_url_becomes_single_picture() {
        let shop = CoffeeShop {
            id: "s1".into(),
            name: "Blue Bottle".into(),
            address: "Somewhere 1".into(),
            latitude: 52.5,
            longitude: 13.4,
            image_url: Some("https://img/legacy.jpg".into()),
            pictures: None,
        };
        let shop = e::shop::CoffeeShop::from(shop);
        assert_eq!(shop.pictures, vec!["https://img/legacy.jpg".to_string()]);
    }

    #[test]
    fn pictures_take_precedence_over_legacy_image_url() {
        let shop = CoffeeShop {
            id: "s1".into(),
            name: "Blue Bottle".into(),
            address: "Somewhere 1".into(),
            latitude: 52.5,
            longitude: 13.4,
            image_url: Some("https://img/legacy.jpg".into()),
            pictures: Some(vec!["https://img/a.jpg".into(), "https://img/b.jpg".into()]),
        };
        let shop = e::shop::CoffeeShop::from(shop);
        assert_eq!(shop.pictures.len(), 2);
        assert_eq!(shop.primary_picture(), Some("https://img/a.jpg"));
    }

    #[test]
    fn flat_cafe_fields_become_snapshot() {
        let event = Event {
            id: "e1".into(),
            event_name: "Cupping".into(),
            description: None,
            location: None,
            latitude: None,
            longitude: None,
            cafe_name: Some("Roasters".into()),
            cafe_address: Some("Main St 5".into()),
            cafe_latitude: Some(48.1),
            cafe_longitude: Some(11.5),
            event_date: 1_700_000_000_000,
            max_attendees: 12,
            attendees_count: 3,
            image_url: None,
            created_by: "admin".into(),
            created_at: None,
            updated_at: None,
        };
        let event = e::event::Event::from(event);
        let cafe = event.cafe.expect("cafe snapshot");
        assert_eq!(cafe.name, "Roasters");
        assert_eq!(cafe.latitude, Some(48.1));
    }

    #[test]
    fn unknown_gender_is_dropped_on_read() {
        let user = User {
            id: "u1".into(),
            email: "x@example.com".into(),
            username: "x".into(),
            full_name: "X".into(),
            age: None,
            gender: Some("n/a".into()),
            bio: None,
            interests: vec![],
            latitude: None,
            longitude: None,
            profile_image_url: None,
            fcm_token: None,
            last_location_update: None,
            created_at: None,
            updated_at: None,
        };
        let user = e::user::User::from(user);
        assert_eq!(user.gender, None);
    }
}
