use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use leptos_router::*;

use bma_core::session::{Session, SessionState};
use bma_frontend_api as api;

mod pages;
use pages::*;

mod components;
use components::*;

const DOCUMENT_API_URL: &str = "/api/documents";
const STORAGE_API_URL: &str = "/api/storage";
const AUTH_API_URL: &str = "/api/auth";
const GEOCODING_API_URL: &str = "https://nominatim.openstreetmap.org";

// Keys shared with earlier revisions of the panel; changing them would
// sign out every admin on deploy.
const TOKEN_STORAGE_KEY: &str = "adminToken";
const USERNAME_STORAGE_KEY: &str = "adminUsername";

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let session = RwSignal::new(SessionState::default());
    let logged_in = Signal::derive(move || session.with(SessionState::is_authenticated));
    let admin_name = Signal::derive(move || {
        session.with(|state| state.session().map(|session| session.display_name.clone()))
    });
    let document_api = Signal::derive(move || {
        session.with(|state| {
            state
                .session()
                .map(|session| api::DocumentApi::new(DOCUMENT_API_URL.to_string(), session.token.clone()))
        })
    });
    let storage_api = Signal::derive(move || {
        session.with(|state| {
            state
                .session()
                .map(|session| api::StorageApi::new(STORAGE_API_URL.to_string(), session.token.clone()))
        })
    });

    // -- callbacks -- //

    let on_logout = move || {
        session.update(SessionState::sign_out);
    };

    // -- init API -- //

    let auth_api = store_value(api::AuthApi::new(AUTH_API_URL.to_string()));
    let geocoding_api = store_value(api::GeocodingApi::new(GEOCODING_API_URL.to_string()));

    if let (Ok(token), Ok(username)) = (
        LocalStorage::get::<String>(TOKEN_STORAGE_KEY),
        LocalStorage::get::<String>(USERNAME_STORAGE_KEY),
    ) {
        session.update(|state| {
            state.finish_sign_in(Session {
                token,
                display_name: username,
            });
        });
    }

    log::debug!("Admin is logged in: {}", logged_in.get_untracked());

    // -- effects -- //

    Effect::new(move |_| {
        let restored = session.with(|state| state.session().cloned());
        if let Some(Session {
            token,
            display_name,
        }) = restored
        {
            log::debug!("Session started: save token in LocalStorage");
            LocalStorage::set(TOKEN_STORAGE_KEY, &token).expect("LocalStorage::set");
            LocalStorage::set(USERNAME_STORAGE_KEY, &display_name).expect("LocalStorage::set");
        } else {
            log::debug!("Session ended: delete token from LocalStorage");
            LocalStorage::delete(TOKEN_STORAGE_KEY);
            LocalStorage::delete(USERNAME_STORAGE_KEY);
        }
    });

    view! {
      <Router>
        <NavBar admin_name logged_in on_logout />
        <main>
          <Routes>
            <Route
              path=Page::Login.path()
              view=move || view! {
                <Login
                  auth_api = auth_api.get_value()
                  session
                  on_success = move || {
                      log::info!("Successfully logged in");
                      let navigate = use_navigate();
                      navigate(Page::Users.path(), NavigateOptions::default());
                  } />
              }
            />
            <Route
              path=Page::Users.path()
              view=move || view! { <Users api = document_api storage = storage_api /> }
            />
            <Route
              path=Page::CoffeeShops.path()
              view=move || view! {
                <CoffeeShops
                  api = document_api
                  storage = storage_api
                  geocoding = geocoding_api.get_value()
                />
              }
            />
            <Route
              path=Page::Interests.path()
              view=move || view! { <Interests api = document_api /> }
            />
            <Route
              path=Page::Reviews.path()
              view=move || view! { <Reviews api = document_api /> }
            />
            <Route
              path=Page::Events.path()
              view=move || view! {
                <Events
                  api = document_api
                  storage = storage_api
                  geocoding = geocoding_api.get_value()
                  admin_name
                />
              }
            />
          </Routes>
        </main>
      </Router>
    }
}
