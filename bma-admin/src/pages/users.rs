use leptos::*;

use bma_boundary::{NewUser, UserPatch};
use bma_core::{
    collection::CollectionState,
    text::matches_query,
    usecases::{self, UserDraft},
};
use bma_entities::{
    id::Id,
    time::Timestamp,
    user::{Gender, User},
};
use bma_frontend_api::{DocumentApi, StorageApi, USER_AVATARS};

use crate::{components::*, pages::redirect_to_login_if_anonymous};

#[component]
pub fn Users(
    api: Signal<Option<DocumentApi>>,
    storage: Signal<Option<StorageApi>>,
) -> impl IntoView {
    redirect_to_login_if_anonymous(api);

    // -- signals -- //

    let users = create_rw_signal(CollectionState::<User>::default());
    let search = create_rw_signal(String::new());
    let overlay = create_rw_signal(None::<OverlayIntent>);
    let editing_id = create_rw_signal(None::<Id>);
    let form_error = create_rw_signal(None::<String>);
    let pending_deletion = create_rw_signal(None::<User>);
    let uploading = create_rw_signal(false);

    // -- form state -- //

    let email = create_rw_signal(String::new());
    let username = create_rw_signal(String::new());
    let full_name = create_rw_signal(String::new());
    let age = create_rw_signal(String::new());
    let gender = create_rw_signal(String::new());
    let bio = create_rw_signal(String::new());
    let interests = create_rw_signal(String::new());
    let latitude = create_rw_signal(String::new());
    let longitude = create_rw_signal(String::new());
    let profile_image_url = create_rw_signal(None::<String>);

    let current_draft = move || UserDraft {
        email: email.get_untracked().trim().to_string(),
        username: username.get_untracked().trim().to_string(),
        full_name: full_name.get_untracked().trim().to_string(),
        age: age.get_untracked().trim().parse().ok(),
        gender: gender.get_untracked().parse().ok(),
        bio: bio.get_untracked().trim().to_string(),
        interests: split_interests(&interests.get_untracked()),
        latitude: latitude.get_untracked().trim().parse().ok(),
        longitude: longitude.get_untracked().trim().parse().ok(),
        profile_image_url: profile_image_url.get_untracked(),
    };

    let open_overlay = move |intent: OverlayIntent, user: Option<User>| {
        match user {
            Some(user) => {
                email.set(user.email);
                username.set(user.username);
                full_name.set(user.full_name);
                age.set(user.age.map(|age| age.to_string()).unwrap_or_default());
                gender.set(
                    user.gender
                        .map(|gender| gender.as_str().to_string())
                        .unwrap_or_default(),
                );
                bio.set(user.bio.unwrap_or_default());
                interests.set(user.interests.join(", "));
                latitude.set(user.latitude.map(|lat| lat.to_string()).unwrap_or_default());
                longitude.set(user.longitude.map(|lon| lon.to_string()).unwrap_or_default());
                profile_image_url.set(user.profile_image_url);
                editing_id.set(Some(user.id));
            }
            None => {
                email.set(String::new());
                username.set(String::new());
                full_name.set(String::new());
                age.set(String::new());
                gender.set(String::new());
                bio.set(String::new());
                interests.set(String::new());
                latitude.set(String::new());
                longitude.set(String::new());
                profile_image_url.set(None);
                editing_id.set(None);
            }
        }
        form_error.set(None);
        overlay.set(Some(intent));
    };

    let close_overlay = move || overlay.set(None);

    // -- actions -- //

    let fetch_users = create_action(move |api: &DocumentApi| {
        let api = api.clone();
        async move {
            users.update(CollectionState::begin_load);
            match api.users().await {
                Ok(rows) => {
                    users.update(|s| s.finish_load(rows.into_iter().map(Into::into).collect()));
                }
                Err(err) => {
                    users.update(|s| s.fail_load(err.to_string()));
                }
            }
        }
    });

    let save_user = create_action(move |(api, intent): &(DocumentApi, OverlayIntent)| {
        let api = api.clone();
        let intent = *intent;
        async move {
            let draft = current_draft();
            if let Err(err) = usecases::validate_user(&draft) {
                form_error.set(Some(err.to_string()));
                return;
            }
            form_error.set(None);
            let now = Timestamp::now();
            match intent {
                OverlayIntent::Create => {
                    let new_user = NewUser {
                        email: draft.email.clone(),
                        username: draft.username.clone(),
                        full_name: draft.full_name.clone(),
                        age: draft.age,
                        gender: draft.gender.map(|g| g.as_str().to_string()),
                        bio: none_if_empty(&draft.bio),
                        interests: draft.interests.clone(),
                        latitude: draft.latitude,
                        longitude: draft.longitude,
                        profile_image_url: draft.profile_image_url.clone(),
                        created_at: now.into_milliseconds(),
                        updated_at: now.into_milliseconds(),
                    };
                    users.update(CollectionState::begin_mutation);
                    match api.create_user(&new_user).await {
                        Ok(id) => {
                            let user = User {
                                id: id.into(),
                                email: draft.email,
                                username: draft.username,
                                full_name: draft.full_name,
                                age: draft.age,
                                gender: draft.gender,
                                bio: none_if_empty(&draft.bio),
                                interests: draft.interests,
                                latitude: draft.latitude,
                                longitude: draft.longitude,
                                profile_image_url: draft.profile_image_url,
                                fcm_token: None,
                                last_location_update: None,
                                created_at: Some(now),
                                updated_at: Some(now),
                            };
                            users.update(|s| s.finish_create(user));
                            overlay.set(None);
                        }
                        Err(err) => {
                            users.update(CollectionState::fail_mutation);
                            form_error.set(Some(err.to_string()));
                        }
                    }
                }
                OverlayIntent::Edit => {
                    let Some(id) = editing_id.get_untracked() else {
                        return;
                    };
                    let Some(existing) = users.with_untracked(|state| {
                        state
                            .rows()
                            .and_then(|rows| rows.iter().find(|u| u.id == id).cloned())
                    }) else {
                        return;
                    };
                    let patch = UserPatch {
                        email: Some(draft.email.clone()),
                        username: Some(draft.username.clone()),
                        full_name: Some(draft.full_name.clone()),
                        age: draft.age,
                        gender: draft.gender.map(|g| g.as_str().to_string()),
                        bio: none_if_empty(&draft.bio),
                        interests: Some(draft.interests.clone()),
                        latitude: draft.latitude,
                        longitude: draft.longitude,
                        profile_image_url: draft.profile_image_url.clone(),
                        updated_at: Some(now.into_milliseconds()),
                    };
                    users.update(CollectionState::begin_mutation);
                    match api.update_user(id.as_str(), &patch).await {
                        Ok(()) => {
                            let user = User {
                                id,
                                email: draft.email,
                                username: draft.username,
                                full_name: draft.full_name,
                                age: draft.age,
                                gender: draft.gender,
                                bio: none_if_empty(&draft.bio),
                                interests: draft.interests,
                                latitude: draft.latitude,
                                longitude: draft.longitude,
                                profile_image_url: draft.profile_image_url,
                                fcm_token: existing.fcm_token,
                                last_location_update: existing.last_location_update,
                                created_at: existing.created_at,
                                updated_at: Some(now),
                            };
                            users.update(|s| s.finish_update(user));
                            overlay.set(None);
                        }
                        Err(err) => {
                            users.update(CollectionState::fail_mutation);
                            form_error.set(Some(err.to_string()));
                        }
                    }
                }
                OverlayIntent::View => {}
            }
        }
    });

    let delete_user = create_action(move |(api, id): &(DocumentApi, Id)| {
        let api = api.clone();
        let id = id.clone();
        async move {
            users.update(CollectionState::begin_mutation);
            match api.delete_user(id.as_str()).await {
                Ok(()) => {
                    users.update(|s| s.finish_delete(&id));
                }
                Err(err) => {
                    users.update(CollectionState::fail_mutation);
                    log::warn!("Unable to delete user: {err}");
                }
            }
            pending_deletion.set(None);
        }
    });

    let upload_avatar = create_action(move |(storage, file): &(StorageApi, web_sys::File)| {
        let storage = storage.clone();
        let file = file.clone();
        async move {
            uploading.set(true);
            match storage.upload(USER_AVATARS, file).await {
                Ok(url) => {
                    profile_image_url.set(Some(url));
                }
                Err(err) => {
                    form_error.set(Some(format!("Unable to upload image: {err}")));
                }
            }
            uploading.set(false);
        }
    });

    // -- effects -- //

    create_effect(move |_| {
        if let Some(api) = api.get() {
            fetch_users.dispatch(api);
        }
    });

    // -- memos -- //

    let filtered = create_memo(move |_| {
        search.with(|query| {
            users.with(|state| {
                state.filtered(|user: &User| {
                    matches_query(query, &[&user.full_name, &user.email, &user.username])
                })
            })
        })
    });

    let retry = move || {
        if let Some(api) = api.get_untracked() {
            fetch_users.dispatch(api);
        }
    };

    let on_avatar_selected = move |ev: ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Some(storage) = storage.get_untracked() else {
            return;
        };
        upload_avatar.dispatch((storage, file));
    };

    view! {
      <section class="container mx-auto">
        <div class="mx-auto max-w-7xl py-6 sm:px-6 lg:px-8">
          <div class="overflow-hidden bg-white sm:rounded-lg sm:shadow">
            <div class="flex items-center justify-between border-b border-gray-200 bg-white px-4 py-5 sm:px-6">
              <h3 class="text-base font-semibold leading-6 text-gray-900">"Users"</h3>
              <button
                class=PRIMARY_BUTTON
                on:click = move |_| open_overlay(OverlayIntent::Create, None)
              >
                "Add User"
              </button>
            </div>
            <div class="p-5">
              <SearchInput query = search placeholder = "Search users by name, email or username..." />
              { move || {
                  if users.with(CollectionState::is_loading) {
                      return view! { <LoadingIndicator /> }.into_view();
                  }
                  if let Some(message) = users.with(|s| s.error().map(ToString::to_string)) {
                      return view! { <LoadError message on_retry = retry /> }.into_view();
                  }
                  view! {
                    <table class="min-w-full divide-y divide-gray-200">
                      <thead>
                        <tr class="text-left text-sm font-semibold text-gray-900">
                          <th class="px-3 py-2">"Name"</th>
                          <th class="px-3 py-2">"Email"</th>
                          <th class="px-3 py-2">"Username"</th>
                          <th class="px-3 py-2">"Interests"</th>
                          <th class="px-3 py-2"></th>
                        </tr>
                      </thead>
                      <tbody class="divide-y divide-gray-100">
                        <For
                          each = move || filtered.get()
                          key = |user| user.id.clone()
                          children = move |user| {
                            let view_user = user.clone();
                            let edit_user = user.clone();
                            let delete_user = user.clone();
                            view! {
                              <tr class="text-sm text-gray-700">
                                <td class="px-3 py-2">
                                  <div class="flex items-center gap-x-3">
                                    { match &user.profile_image_url {
                                        Some(url) => view! {
                                          <img class="h-8 w-8 rounded-full object-cover" src=url.clone() />
                                        }.into_view(),
                                        None => view! {
                                          <span class="flex h-8 w-8 items-center justify-center rounded-full bg-amber-700 text-white">
                                            { user.avatar_letter() }
                                          </span>
                                        }.into_view(),
                                    }}
                                    <span class="font-medium text-gray-900">{ user.display_name().to_string() }</span>
                                  </div>
                                </td>
                                <td class="px-3 py-2">{ user.email.clone() }</td>
                                <td class="px-3 py-2">{ user.username.clone() }</td>
                                <td class="px-3 py-2">{ user.interests.len() }</td>
                                <td class="px-3 py-2 text-right whitespace-nowrap">
                                  <button
                                    class="text-amber-700 hover:text-amber-900 mr-3"
                                    on:click = move |_| open_overlay(OverlayIntent::View, Some(view_user.clone()))
                                  >"View"</button>
                                  <button
                                    class="text-amber-700 hover:text-amber-900 mr-3"
                                    on:click = move |_| open_overlay(OverlayIntent::Edit, Some(edit_user.clone()))
                                  >"Edit"</button>
                                  <button
                                    class="text-red-600 hover:text-red-800"
                                    on:click = move |_| pending_deletion.set(Some(delete_user.clone()))
                                  >"Delete"</button>
                                </td>
                              </tr>
                            }
                          }
                        />
                      </tbody>
                    </table>
                  }.into_view()
              }}
            </div>
          </div>
        </div>

        { move || overlay.get().map(|intent| {
            let read_only = intent.read_only();
            let disabled = Signal::derive(move || read_only);
            let saving = Signal::derive(move || {
                users.with(CollectionState::is_mutating) || uploading.get()
            });
            view! {
              <Overlay
                title = format!("{} User", intent.title_prefix())
                on_close = close_overlay
              >
                { move || form_error.get().map(|err| view!{
                  <p class="mb-4 text-red-700">{ err }</p>
                })}
                <TextField label = "Email" value = email disabled />
                <TextField label = "Username" value = username disabled />
                <TextField label = "Full name" value = full_name disabled />
                <div class="grid grid-cols-2 gap-x-4">
                  <NumberField label = "Age" value = age disabled />
                  <SelectField
                    label = "Gender"
                    value = gender
                    options = vec![("", "Not specified"), ("Male", "Male"), ("Female", "Female"), ("Other", "Other")]
                    disabled
                  />
                </div>
                <TextAreaField label = "Bio" value = bio disabled />
                <TextField label = "Interests (comma separated, at most 5)" value = interests disabled />
                <div class="grid grid-cols-2 gap-x-4">
                  <NumberField label = "Latitude" value = latitude disabled />
                  <NumberField label = "Longitude" value = longitude disabled />
                </div>
                <div class="mb-4">
                  <label class="block mb-1 text-sm font-medium text-gray-600">"Profile image"</label>
                  { move || profile_image_url.get().map(|url| view! {
                      <img class="h-16 w-16 rounded-full object-cover mb-2" src=url />
                  })}
                  <Show when = move || !read_only>
                    <input
                      type = "file"
                      accept = "image/*"
                      on:change = on_avatar_selected
                    />
                  </Show>
                </div>
                <div class="flex justify-end gap-x-3 pt-2">
                  { if read_only {
                      view! {
                        <button
                          class=PRIMARY_BUTTON
                          on:click = move |_| overlay.set(Some(OverlayIntent::Edit))
                        >"Edit"</button>
                      }.into_view()
                    } else {
                      view! {
                        <button
                          class=SECONDARY_BUTTON
                          on:click = move |_| close_overlay()
                        >"Cancel"</button>
                        <button
                          class=PRIMARY_BUTTON
                          prop:disabled = move || saving.get()
                          on:click = move |_| {
                            if let Some(api) = api.get_untracked() {
                                save_user.dispatch((api, intent));
                            }
                          }
                        >"Save"</button>
                      }.into_view()
                    }
                  }
                </div>
              </Overlay>
            }
        })}

        { move || pending_deletion.get().map(|user| {
            let id = user.id.clone();
            view! {
              <ConfirmDeletion
                label = format!("user {}", user.display_name())
                on_confirm = move || {
                  if let Some(api) = api.get_untracked() {
                      delete_user.dispatch((api, id.clone()));
                  }
                }
                on_cancel = move || pending_deletion.set(None)
              />
            }
        })}
      </section>
    }
}

fn split_interests(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn none_if_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
