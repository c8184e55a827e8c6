use leptos::*;
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

use bma_boundary::{InterestPatch, NewInterest};
use bma_core::{
    collection::CollectionState,
    text::matches_query,
    usecases::{self, InterestDraft},
};
use bma_entities::{id::Id, interest::Interest, time::Timestamp};
use bma_frontend_api::DocumentApi;

use crate::{components::*, pages::redirect_to_login_if_anonymous};

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[component]
pub fn Interests(api: Signal<Option<DocumentApi>>) -> impl IntoView {
    redirect_to_login_if_anonymous(api);

    // -- signals -- //

    let interests = create_rw_signal(CollectionState::<Interest>::default());
    let search = create_rw_signal(String::new());
    let overlay = create_rw_signal(None::<OverlayIntent>);
    let editing_id = create_rw_signal(None::<Id>);
    let form_error = create_rw_signal(None::<String>);
    let pending_deletion = create_rw_signal(None::<Interest>);

    // -- form state -- //

    let name = create_rw_signal(String::new());

    let open_overlay = move |intent: OverlayIntent, interest: Option<Interest>| {
        match interest {
            Some(interest) => {
                name.set(interest.name);
                editing_id.set(Some(interest.id));
            }
            None => {
                name.set(String::new());
                editing_id.set(None);
            }
        }
        form_error.set(None);
        overlay.set(Some(intent));
    };

    let close_overlay = move || overlay.set(None);

    // -- actions -- //

    let fetch_interests = create_action(move |api: &DocumentApi| {
        let api = api.clone();
        async move {
            interests.update(CollectionState::begin_load);
            match api.interests().await {
                Ok(rows) => {
                    interests
                        .update(|s| s.finish_load(rows.into_iter().map(Into::into).collect()));
                }
                Err(err) => {
                    interests.update(|s| s.fail_load(err.to_string()));
                }
            }
        }
    });

    let save_interest = create_action(move |(api, intent): &(DocumentApi, OverlayIntent)| {
        let api = api.clone();
        let intent = *intent;
        async move {
            let draft = InterestDraft {
                name: name.get_untracked().trim().to_string(),
            };
            if let Err(err) = usecases::validate_interest(&draft) {
                form_error.set(Some(err.to_string()));
                return;
            }
            form_error.set(None);
            let now = Timestamp::now();
            match intent {
                OverlayIntent::Create => {
                    let date_added = OffsetDateTime::from(now)
                        .format(&DATE_FORMAT)
                        .unwrap_or_default();
                    let new_interest = NewInterest {
                        name: draft.name.clone(),
                        date_added: date_added.clone(),
                        created_at: now.into_milliseconds(),
                    };
                    interests.update(CollectionState::begin_mutation);
                    match api.create_interest(&new_interest).await {
                        Ok(id) => {
                            let interest = Interest {
                                id: id.into(),
                                name: draft.name,
                                date_added,
                                created_at: Some(now),
                            };
                            interests.update(|s| s.finish_create(interest));
                            overlay.set(None);
                        }
                        Err(err) => {
                            interests.update(CollectionState::fail_mutation);
                            form_error.set(Some(err.to_string()));
                        }
                    }
                }
                OverlayIntent::Edit => {
                    let Some(id) = editing_id.get_untracked() else {
                        return;
                    };
                    let Some(existing) = interests.with_untracked(|state| {
                        state
                            .rows()
                            .and_then(|rows| rows.iter().find(|i| i.id == id).cloned())
                    }) else {
                        return;
                    };
                    let patch = InterestPatch {
                        name: Some(draft.name.clone()),
                        date_added: None,
                    };
                    interests.update(CollectionState::begin_mutation);
                    match api.update_interest(id.as_str(), &patch).await {
                        Ok(()) => {
                            let interest = Interest {
                                id,
                                name: draft.name,
                                date_added: existing.date_added,
                                created_at: existing.created_at,
                            };
                            interests.update(|s| s.finish_update(interest));
                            overlay.set(None);
                        }
                        Err(err) => {
                            interests.update(CollectionState::fail_mutation);
                            form_error.set(Some(err.to_string()));
                        }
                    }
                }
                OverlayIntent::View => {}
            }
        }
    });

    let delete_interest = create_action(move |(api, id): &(DocumentApi, Id)| {
        let api = api.clone();
        let id = id.clone();
        async move {
            interests.update(CollectionState::begin_mutation);
            match api.delete_interest(id.as_str()).await {
                Ok(()) => {
                    interests.update(|s| s.finish_delete(&id));
                }
                Err(err) => {
                    interests.update(CollectionState::fail_mutation);
                    log::warn!("Unable to delete interest: {err}");
                }
            }
            pending_deletion.set(None);
        }
    });

    // -- effects -- //

    create_effect(move |_| {
        if let Some(api) = api.get() {
            fetch_interests.dispatch(api);
        }
    });

    // -- memos -- //

    let filtered = create_memo(move |_| {
        search.with(|query| {
            interests.with(|state| {
                state.filtered(|interest: &Interest| matches_query(query, &[&interest.name]))
            })
        })
    });

    let retry = move || {
        if let Some(api) = api.get_untracked() {
            fetch_interests.dispatch(api);
        }
    };

    view! {
      <section class="container mx-auto">
        <div class="mx-auto max-w-3xl py-6 sm:px-6 lg:px-8">
          <div class="overflow-hidden bg-white sm:rounded-lg sm:shadow">
            <div class="flex items-center justify-between border-b border-gray-200 bg-white px-4 py-5 sm:px-6">
              <h3 class="text-base font-semibold leading-6 text-gray-900">"Interests"</h3>
              <button
                class=PRIMARY_BUTTON
                on:click = move |_| open_overlay(OverlayIntent::Create, None)
              >
                "Add Interest"
              </button>
            </div>
            <div class="p-5">
              <SearchInput query = search placeholder = "Search interests..." />
              { move || {
                  if interests.with(CollectionState::is_loading) {
                      return view! { <LoadingIndicator /> }.into_view();
                  }
                  if let Some(message) = interests.with(|s| s.error().map(ToString::to_string)) {
                      return view! { <LoadError message on_retry = retry /> }.into_view();
                  }
                  view! {
                    <ul role="list" class="divide-y divide-gray-100">
                      <For
                        each = move || filtered.get()
                        key = |interest| interest.id.clone()
                        children = move |interest| {
                          let edit_interest = interest.clone();
                          let delete_interest = interest.clone();
                          view! {
                            <li class="flex items-center justify-between gap-x-6 py-3">
                              <div>
                                <p class="text-sm font-semibold text-gray-900">{ interest.name.clone() }</p>
                                <p class="text-xs text-gray-500">{ format!("Added {}", interest.date_added) }</p>
                              </div>
                              <div class="flex flex-none items-center gap-x-3 text-sm">
                                <button
                                  class="text-amber-700 hover:text-amber-900"
                                  on:click = move |_| open_overlay(OverlayIntent::Edit, Some(edit_interest.clone()))
                                >"Edit"</button>
                                <button
                                  class="text-red-600 hover:text-red-800"
                                  on:click = move |_| pending_deletion.set(Some(delete_interest.clone()))
                                >"Delete"</button>
                              </div>
                            </li>
                          }
                        }
                      />
                    </ul>
                  }.into_view()
              }}
            </div>
          </div>
        </div>

        { move || overlay.get().map(|intent| {
            let saving = Signal::derive(move || interests.with(CollectionState::is_mutating));
            view! {
              <Overlay
                title = format!("{} Interest", intent.title_prefix())
                on_close = close_overlay
              >
                { move || form_error.get().map(|err| view!{
                  <p class="mb-4 text-red-700">{ err }</p>
                })}
                <TextField label = "Name" value = name />
                <div class="flex justify-end gap-x-3 pt-2">
                  <button
                    class=SECONDARY_BUTTON
                    on:click = move |_| close_overlay()
                  >"Cancel"</button>
                  <button
                    class=PRIMARY_BUTTON
                    prop:disabled = move || saving.get()
                    on:click = move |_| {
                      if let Some(api) = api.get_untracked() {
                          save_interest.dispatch((api, intent));
                      }
                    }
                  >"Save"</button>
                </div>
              </Overlay>
            }
        })}

        { move || pending_deletion.get().map(|interest| {
            let id = interest.id.clone();
            view! {
              <ConfirmDeletion
                label = format!("interest {}", interest.name)
                on_confirm = move || {
                  if let Some(api) = api.get_untracked() {
                      delete_interest.dispatch((api, id.clone()));
                  }
                }
                on_cancel = move || pending_deletion.set(None)
              />
            }
        })}
      </section>
    }
}
