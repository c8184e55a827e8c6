use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use bma_frontend_api::DocumentApi;

mod coffee_shops;
mod events;
mod interests;
mod login;
mod reviews;
mod users;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    Login,
    #[default]
    Users,
    CoffeeShops,
    Interests,
    Reviews,
    Events,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Users => "/",
            Self::CoffeeShops => "/coffee-shops",
            Self::Interests => "/interests",
            Self::Reviews => "/reviews",
            Self::Events => "/events",
        }
    }
}

/// Every collection page is gated on a live session.
pub(crate) fn redirect_to_login_if_anonymous(api: Signal<Option<DocumentApi>>) {
    create_effect(move |_| {
        if api.with(Option::is_none) {
            let navigate = use_navigate();
            request_animation_frame(move || {
                navigate(Page::Login.path(), NavigateOptions::default());
            });
        }
    });
}

pub use self::{
    coffee_shops::*, events::*, interests::*, login::*, reviews::*, users::*,
};
