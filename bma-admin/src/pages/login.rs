use leptos::{ev, *};

use bma_boundary::Credentials;
use bma_core::session::{self, LoginQualifier, Session, SessionState};
use bma_frontend_api::{AuthApi, SignInError};

use crate::components::INPUT_CLASS;

#[component]
pub fn Login<F>(auth_api: AuthApi, session: RwSignal<SessionState>, on_success: F) -> impl IntoView
where
    F: Fn() + 'static + Clone,
{
    // -- signals -- //

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (login_error, set_login_error) = create_signal(None::<String>);
    let (wait_for_response, set_wait_for_response) = create_signal(false);
    let auth_api = store_value(auth_api);

    // A bare user name is qualified with the default mail domain before
    // it is sent to the identity provider.
    let qualifier = LoginQualifier::default();
    let credentials = Signal::derive(move || {
        let qualifier = qualifier.clone();
        username.with(|username| {
            let username = username.trim();
            if username.is_empty() {
                return None;
            }
            password.with(|password| {
                if password.trim().is_empty() {
                    return None;
                }
                // Clone the signal data at the very last moment
                Some(Credentials {
                    email: qualifier.qualify(username),
                    password: password.to_owned(),
                })
            })
        })
    });

    // -- actions -- //

    let login_action = create_action(move |credentials: &Credentials| {
        log::info!("Logging in with {email}", email = credentials.email);
        let credentials = credentials.to_owned();
        let on_success = on_success.clone();
        async move {
            set_wait_for_response.update(|w| *w = true);
            session.update(SessionState::begin_sign_in);
            let result = auth_api.get_value().sign_in(&credentials).await;
            set_wait_for_response.update(|w| *w = false);
            match result {
                Ok(response) => {
                    set_login_error.update(|e| *e = None);
                    let display_name = response.display_name.clone().unwrap_or_else(|| {
                        session::admin_display_name(&response.email).to_string()
                    });
                    session.update(|s| {
                        s.finish_sign_in(Session {
                            token: response.id_token,
                            display_name,
                        });
                    });
                    on_success();
                }
                Err(err) => {
                    let msg = match err {
                        SignInError::Fetch(js_err) => js_err,
                        SignInError::Rejected(err) => {
                            session::sign_in_error_message(&err.code, &err.message)
                        }
                    };
                    log::error!("Unable to login with {}: {msg}", credentials.email);
                    session.update(SessionState::fail_sign_in);
                    set_login_error.update(|e| *e = Some(msg));
                }
            }
        }
    });

    let disabled = Signal::derive(move || wait_for_response.get());
    let submit_disabled = Signal::derive(move || disabled.get() || credentials.get().is_none());
    let submit = move || {
        if let Some(credentials) = credentials.get() {
            login_action.dispatch(credentials);
        }
    };

    view! {
      <section>
        <div class="container py-12 px-6 mx-auto">
          <div class="flex justify-center items-center flex-wrap h-full g-6 text-gray-800">
            <div class="xl:w-5/12">
              <div class="block bg-white shadow-lg rounded-lg">
                <div class="px-4 md:px-0 mx-auto">
                  <div class="md:p-12 md:mx-6">
                    <form on:submit=|ev|ev.prevent_default()>
                      <div class="text-center">
                        <h4 class="text-xl font-semibold mt-1 mb-12 pb-1">"BrewMate Admin"</h4>
                      </div>
                      <p class="mb-4 text-gray-600">"Please login to your account"</p>
                      {move || login_error.get().map(|err| view!{
                        <p class="mb-4 text-red-700">{ err }</p>
                      })}
                      <div class="mb-4">
                        <input
                          type = "text"
                          required
                          placeholder = "Username"
                          class = INPUT_CLASS
                          prop:disabled = move || disabled.get()
                          on:keyup = move |ev: ev::KeyboardEvent| {
                            let val = event_target_value(&ev);
                            set_username.update(|v|*v = val);
                          }
                          // The `change` event fires when the browser fills the form automatically,
                          on:change = move |ev| {
                            let val = event_target_value(&ev);
                            set_username.update(|v|*v = val);
                          }
                        />
                      </div>
                      <div class="mb-4">
                        <input
                          type = "password"
                          required
                          placeholder = "Password"
                          class = INPUT_CLASS
                          prop:disabled = move || disabled.get()
                          on:keyup = move |ev: ev::KeyboardEvent| {
                            match &*ev.key() {
                                "Enter" => {
                                  submit();
                                }
                                _=> {
                                   let val = event_target_value(&ev);
                                   set_password.update(|p|*p = val);
                                }
                            }
                          }
                          // The `change` event fires when the browser fills the form automatically,
                          on:change = move |ev| {
                            let val = event_target_value(&ev);
                            set_password.update(|p|*p = val);
                          }
                        />
                      </div>
                      <div class="text-center pt-1 mb-12 pb-1">
                        <button
                          prop:disabled = move || submit_disabled.get()
                          on:click = move |_| submit()
                          class="inline-block px-6 py-2.5 font-medium text-xs leading-tight uppercase rounded shadow-md hover:bg-amber-800 hover:text-white hover:shadow-lg focus:shadow-lg focus:outline-none focus:ring-0 active:shadow-lg transition duration-150 ease-in-out w-full mb-3 bg-amber-700 text-white disabled:bg-amber-200"
                        >
                          "Log in"
                        </button>
                      </div>
                    </form>
                  </div>
                </div>
              </div>
            </div>
          </div>
        </div>
      </section>
    }
}
