//! Client-side validation that gates every overlay submission.
//!
//! A draft that does not validate never reaches the remote data gateway;
//! the overlay stays open and shows the error. None of these rules are
//! enforced by the remote store itself, so out-of-band writers can
//! violate all of them.

mod error;
mod validate_event;
mod validate_interest;
mod validate_review;
mod validate_shop;
mod validate_user;

pub use self::{
    error::Error, validate_event::*, validate_interest::*, validate_review::*, validate_shop::*,
    validate_user::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
}
