use leptos::*;

use bma_boundary::{NewReview, ReviewPatch};
use bma_core::{
    collection::CollectionState,
    text::matches_query,
    usecases::{self, ReviewDraft},
};
use bma_entities::{id::Id, review::Review, time::Timestamp};
use bma_frontend_api::DocumentApi;

use crate::{components::*, pages::redirect_to_login_if_anonymous};

#[component]
pub fn Reviews(api: Signal<Option<DocumentApi>>) -> impl IntoView {
    redirect_to_login_if_anonymous(api);

    // -- signals -- //

    let reviews = create_rw_signal(CollectionState::<Review>::default());
    let search = create_rw_signal(String::new());
    let overlay = create_rw_signal(None::<OverlayIntent>);
    let editing_id = create_rw_signal(None::<Id>);
    let form_error = create_rw_signal(None::<String>);
    let pending_deletion = create_rw_signal(None::<Review>);

    // -- form state -- //

    let name = create_rw_signal(String::new());
    let country = create_rw_signal(String::new());
    let rating = create_rw_signal(String::new());
    let review_text = create_rw_signal(String::new());

    let current_draft = move || ReviewDraft {
        name: name.get_untracked().trim().to_string(),
        country: country.get_untracked().trim().to_string(),
        rating: rating.get_untracked().trim().parse().unwrap_or_default(),
        review_text: review_text.get_untracked().trim().to_string(),
    };

    let open_overlay = move |intent: OverlayIntent, review: Option<Review>| {
        match review {
            Some(review) => {
                name.set(review.name);
                country.set(review.country);
                rating.set(review.rating.to_string());
                review_text.set(review.review_text);
                editing_id.set(Some(review.id));
            }
            None => {
                name.set(String::new());
                country.set(String::new());
                rating.set(String::new());
                review_text.set(String::new());
                editing_id.set(None);
            }
        }
        form_error.set(None);
        overlay.set(Some(intent));
    };

    let close_overlay = move || overlay.set(None);

    // -- actions -- //

    let fetch_reviews = create_action(move |api: &DocumentApi| {
        let api = api.clone();
        async move {
            reviews.update(CollectionState::begin_load);
            match api.reviews().await {
                Ok(rows) => {
                    reviews.update(|s| s.finish_load(rows.into_iter().map(Into::into).collect()));
                }
                Err(err) => {
                    reviews.update(|s| s.fail_load(err.to_string()));
                }
            }
        }
    });

    let save_review = create_action(move |(api, intent): &(DocumentApi, OverlayIntent)| {
        let api = api.clone();
        let intent = *intent;
        async move {
            let draft = current_draft();
            if let Err(err) = usecases::validate_review(&draft) {
                form_error.set(Some(err.to_string()));
                return;
            }
            form_error.set(None);
            let now = Timestamp::now();
            match intent {
                OverlayIntent::Create => {
                    let new_review = NewReview {
                        name: draft.name.clone(),
                        country: draft.country.clone(),
                        rating: draft.rating,
                        review_text: draft.review_text.clone(),
                        created_at: now.into_milliseconds(),
                        updated_at: now.into_milliseconds(),
                    };
                    reviews.update(CollectionState::begin_mutation);
                    match api.create_review(&new_review).await {
                        Ok(id) => {
                            let review = Review {
                                id: id.into(),
                                name: draft.name,
                                country: draft.country,
                                rating: draft.rating,
                                review_text: draft.review_text,
                                created_at: Some(now),
                                updated_at: Some(now),
                            };
                            reviews.update(|s| s.finish_create(review));
                            overlay.set(None);
                        }
                        Err(err) => {
                            reviews.update(CollectionState::fail_mutation);
                            form_error.set(Some(err.to_string()));
                        }
                    }
                }
                OverlayIntent::Edit => {
                    let Some(id) = editing_id.get_untracked() else {
                        return;
                    };
                    let Some(existing) = reviews.with_untracked(|state| {
                        state
                            .rows()
                            .and_then(|rows| rows.iter().find(|r| r.id == id).cloned())
                    }) else {
                        return;
                    };
                    let patch = ReviewPatch {
                        name: Some(draft.name.clone()),
                        country: Some(draft.country.clone()),
                        rating: Some(draft.rating),
                        review_text: Some(draft.review_text.clone()),
                        updated_at: Some(now.into_milliseconds()),
                    };
                    reviews.update(CollectionState::begin_mutation);
                    match api.update_review(id.as_str(), &patch).await {
                        Ok(()) => {
                            let review = Review {
                                id,
                                name: draft.name,
                                country: draft.country,
                                rating: draft.rating,
                                review_text: draft.review_text,
                                created_at: existing.created_at,
                                updated_at: Some(now),
                            };
                            reviews.update(|s| s.finish_update(review));
                            overlay.set(None);
                        }
                        Err(err) => {
                            reviews.update(CollectionState::fail_mutation);
                            form_error.set(Some(err.to_string()));
                        }
                    }
                }
                OverlayIntent::View => {}
            }
        }
    });

    let delete_review = create_action(move |(api, id): &(DocumentApi, Id)| {
        let api = api.clone();
        let id = id.clone();
        async move {
            reviews.update(CollectionState::begin_mutation);
            match api.delete_review(id.as_str()).await {
                Ok(()) => {
                    reviews.update(|s| s.finish_delete(&id));
                }
                Err(err) => {
                    reviews.update(CollectionState::fail_mutation);
                    log::warn!("Unable to delete review: {err}");
                }
            }
            pending_deletion.set(None);
        }
    });

    // -- effects -- //

    create_effect(move |_| {
        if let Some(api) = api.get() {
            fetch_reviews.dispatch(api);
        }
    });

    // -- memos -- //

    let filtered = create_memo(move |_| {
        search.with(|query| {
            reviews.with(|state| {
                state.filtered(|review: &Review| {
                    matches_query(query, &[&review.name, &review.country, &review.review_text])
                })
            })
        })
    });

    let retry = move || {
        if let Some(api) = api.get_untracked() {
            fetch_reviews.dispatch(api);
        }
    };

    view! {
      <section class="container mx-auto">
        <div class="mx-auto max-w-5xl py-6 sm:px-6 lg:px-8">
          <div class="overflow-hidden bg-white sm:rounded-lg sm:shadow">
            <div class="flex items-center justify-between border-b border-gray-200 bg-white px-4 py-5 sm:px-6">
              <h3 class="text-base font-semibold leading-6 text-gray-900">"Reviews"</h3>
              <button
                class=PRIMARY_BUTTON
                on:click = move |_| open_overlay(OverlayIntent::Create, None)
              >
                "Add Review"
              </button>
            </div>
            <div class="p-5">
              <SearchInput query = search placeholder = "Search reviews by name, country or text..." />
              { move || {
                  if reviews.with(CollectionState::is_loading) {
                      return view! { <LoadingIndicator /> }.into_view();
                  }
                  if let Some(message) = reviews.with(|s| s.error().map(ToString::to_string)) {
                      return view! { <LoadError message on_retry = retry /> }.into_view();
                  }
                  view! {
                    <ul role="list" class="divide-y divide-gray-100">
                      <For
                        each = move || filtered.get()
                        key = |review| review.id.clone()
                        children = move |review| {
                          let view_review = review.clone();
                          let edit_review = review.clone();
                          let delete_review = review.clone();
                          view! {
                            <li class="py-4">
                              <div class="flex items-center justify-between gap-x-6">
                                <div class="min-w-0">
                                  <div class="flex items-center gap-x-3">
                                    <p class="text-sm font-semibold text-gray-900">{ review.name.clone() }</p>
                                    <p class="text-xs text-gray-500">{ review.country.clone() }</p>
                                    <p class="text-xs text-amber-600">{ stars(review.rating) }</p>
                                  </div>
                                  <p class="mt-1 text-sm text-gray-600 truncate">{ review.review_text.clone() }</p>
                                </div>
                                <div class="flex flex-none items-center gap-x-3 text-sm">
                                  <button
                                    class="text-amber-700 hover:text-amber-900"
                                    on:click = move |_| open_overlay(OverlayIntent::View, Some(view_review.clone()))
                                  >"View"</button>
                                  <button
                                    class="text-amber-700 hover:text-amber-900"
                                    on:click = move |_| open_overlay(OverlayIntent::Edit, Some(edit_review.clone()))
                                  >"Edit"</button>
                                  <button
                                    class="text-red-600 hover:text-red-800"
                                    on:click = move |_| pending_deletion.set(Some(delete_review.clone()))
                                  >"Delete"</button>
                                </div>
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
            let read_only = intent.read_only();
            let disabled = Signal::derive(move || read_only);
            let saving = Signal::derive(move || reviews.with(CollectionState::is_mutating));
            view! {
              <Overlay
                title = format!("{} Review", intent.title_prefix())
                on_close = close_overlay
              >
                { move || form_error.get().map(|err| view!{
                  <p class="mb-4 text-red-700">{ err }</p>
                })}
                <TextField label = "Name" value = name disabled />
                <TextField label = "Country" value = country disabled />
                <SelectField
                  label = "Rating"
                  value = rating
                  options = vec![
                    ("", "Select rating"),
                    ("1", "1 star"),
                    ("2", "2 stars"),
                    ("3", "3 stars"),
                    ("4", "4 stars"),
                    ("5", "5 stars"),
                  ]
                  disabled
                />
                <TextAreaField label = "Review" value = review_text disabled />
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
                                save_review.dispatch((api, intent));
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

        { move || pending_deletion.get().map(|review| {
            let id = review.id.clone();
            view! {
              <ConfirmDeletion
                label = format!("the review by {}", review.name)
                on_confirm = move || {
                  if let Some(api) = api.get_untracked() {
                      delete_review.dispatch((api, id.clone()));
                  }
                }
                on_cancel = move || pending_deletion.set(None)
              />
            }
        })}
      </section>
    }
}

fn stars(rating: u8) -> String {
    "★".repeat(usize::from(rating))
}
