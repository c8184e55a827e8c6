use leptos::*;
use time::{
    format_description::FormatItem, macros::format_description, OffsetDateTime, PrimitiveDateTime,
};

use bma_boundary::{EventPatch, NewEvent, PlaceSuggestion};
use bma_core::{
    collection::CollectionState,
    geo,
    text::matches_query,
    usecases::{self, EventDraft},
};
use bma_entities::{
    event::{CafeSnapshot, Event},
    id::Id,
    shop::CoffeeShop,
    time::Timestamp,
};
use bma_frontend_api::{DocumentApi, GeocodingApi, StorageApi, EVENT_IMAGES};

use crate::{components::*, pages::redirect_to_login_if_anonymous};

/// Format of the browser's `datetime-local` input value.
const DATETIME_LOCAL_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

#[component]
pub fn Events(
    api: Signal<Option<DocumentApi>>,
    storage: Signal<Option<StorageApi>>,
    geocoding: GeocodingApi,
    admin_name: Signal<Option<String>>,
) -> impl IntoView {
    redirect_to_login_if_anonymous(api);

    // -- signals -- //

    let events = create_rw_signal(CollectionState::<Event>::default());
    let cafes = create_rw_signal(Vec::<CoffeeShop>::new());
    let search = create_rw_signal(String::new());
    let overlay = create_rw_signal(None::<OverlayIntent>);
    let editing_id = create_rw_signal(None::<Id>);
    let form_error = create_rw_signal(None::<String>);
    let pending_deletion = create_rw_signal(None::<Event>);
    let uploading = create_rw_signal(false);
    let geocoding = store_value(geocoding);

    // -- form state -- //

    let event_name = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let location = create_rw_signal(String::new());
    let latitude = create_rw_signal(String::new());
    let longitude = create_rw_signal(String::new());
    let cafe = create_rw_signal(None::<CafeSnapshot>);
    let event_date = create_rw_signal(String::new());
    let max_attendees = create_rw_signal(String::new());
    let image_url = create_rw_signal(None::<String>);

    let current_draft = move || {
        let cafe = cafe.get_untracked();
        EventDraft {
            event_name: event_name.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            location: location.get_untracked().trim().to_string(),
            latitude: latitude.get_untracked().trim().parse().ok(),
            longitude: longitude.get_untracked().trim().parse().ok(),
            cafe_name: cafe
                .as_ref()
                .map(|cafe| cafe.name.clone())
                .unwrap_or_default(),
            cafe_address: cafe
                .as_ref()
                .map(|cafe| cafe.address.clone())
                .unwrap_or_default(),
            cafe_latitude: cafe.as_ref().and_then(|cafe| cafe.latitude),
            cafe_longitude: cafe.as_ref().and_then(|cafe| cafe.longitude),
            event_date: parse_event_date(&event_date.get_untracked()),
            max_attendees: max_attendees
                .get_untracked()
                .trim()
                .parse()
                .unwrap_or_default(),
            image_url: image_url.get_untracked(),
        }
    };

    let open_overlay = move |intent: OverlayIntent, event: Option<Event>| {
        match event {
            Some(event) => {
                event_name.set(event.event_name);
                description.set(event.description.unwrap_or_default());
                location.set(event.location.unwrap_or_default());
                latitude.set(event.latitude.map(|lat| lat.to_string()).unwrap_or_default());
                longitude.set(event.longitude.map(|lon| lon.to_string()).unwrap_or_default());
                cafe.set(event.cafe);
                event_date.set(format_event_date(event.event_date));
                max_attendees.set(event.max_attendees.to_string());
                image_url.set(event.image_url);
                editing_id.set(Some(event.id));
            }
            None => {
                event_name.set(String::new());
                description.set(String::new());
                location.set(String::new());
                latitude.set(String::new());
                longitude.set(String::new());
                cafe.set(None);
                event_date.set(String::new());
                max_attendees.set(String::new());
                image_url.set(None);
                editing_id.set(None);
            }
        }
        form_error.set(None);
        overlay.set(Some(intent));
    };

    let close_overlay = move || overlay.set(None);

    // -- actions -- //

    let fetch_events = create_action(move |api: &DocumentApi| {
        let api = api.clone();
        async move {
            events.update(CollectionState::begin_load);
            match api.events().await {
                Ok(rows) => {
                    events.update(|s| s.finish_load(rows.into_iter().map(Into::into).collect()));
                }
                Err(err) => {
                    events.update(|s| s.fail_load(err.to_string()));
                }
            }
        }
    });

    // The cafe dropdown needs the shop collection as well; a failure
    // here only disables linking, the page itself still works.
    let fetch_cafes = create_action(move |api: &DocumentApi| {
        let api = api.clone();
        async move {
            match api.coffee_shops().await {
                Ok(rows) => {
                    cafes.set(rows.into_iter().map(Into::into).collect());
                }
                Err(err) => {
                    log::warn!("Unable to fetch coffee shops: {err}");
                }
            }
        }
    });

    let save_event = create_action(move |(api, intent): &(DocumentApi, OverlayIntent)| {
        let api = api.clone();
        let intent = *intent;
        async move {
            let draft = current_draft();
            if let Err(err) = usecases::validate_event(&draft) {
                form_error.set(Some(err.to_string()));
                return;
            }
            form_error.set(None);
            let now = Timestamp::now();
            // Checked by the validation above.
            let Some(date) = draft.event_date else {
                return;
            };
            let snapshot = cafe.get_untracked();
            match intent {
                OverlayIntent::Create => {
                    let created_by = admin_name.get_untracked().unwrap_or_default();
                    let new_event = NewEvent {
                        event_name: draft.event_name.clone(),
                        description: none_if_empty(&draft.description),
                        location: none_if_empty(&draft.location),
                        latitude: draft.latitude,
                        longitude: draft.longitude,
                        cafe_name: none_if_empty(&draft.cafe_name),
                        cafe_address: none_if_empty(&draft.cafe_address),
                        cafe_latitude: draft.cafe_latitude,
                        cafe_longitude: draft.cafe_longitude,
                        event_date: date.into_milliseconds(),
                        max_attendees: draft.max_attendees,
                        attendees_count: 0,
                        image_url: draft.image_url.clone(),
                        created_by: created_by.clone(),
                        created_at: now.into_milliseconds(),
                        updated_at: now.into_milliseconds(),
                    };
                    events.update(CollectionState::begin_mutation);
                    match api.create_event(&new_event).await {
                        Ok(id) => {
                            let event = Event {
                                id: id.into(),
                                event_name: draft.event_name,
                                description: none_if_empty(&draft.description),
                                location: none_if_empty(&draft.location),
                                latitude: draft.latitude,
                                longitude: draft.longitude,
                                cafe: snapshot,
                                event_date: date,
                                max_attendees: draft.max_attendees,
                                attendees_count: 0,
                                image_url: draft.image_url,
                                created_by,
                                created_at: Some(now),
                                updated_at: Some(now),
                            };
                            events.update(|s| s.finish_create(event));
                            overlay.set(None);
                        }
                        Err(err) => {
                            events.update(CollectionState::fail_mutation);
                            form_error.set(Some(err.to_string()));
                        }
                    }
                }
                OverlayIntent::Edit => {
                    let Some(id) = editing_id.get_untracked() else {
                        return;
                    };
                    let Some(existing) = events.with_untracked(|state| {
                        state
                            .rows()
                            .and_then(|rows| rows.iter().find(|e| e.id == id).cloned())
                    }) else {
                        return;
                    };
                    let patch = EventPatch {
                        event_name: Some(draft.event_name.clone()),
                        description: none_if_empty(&draft.description),
                        location: none_if_empty(&draft.location),
                        latitude: draft.latitude,
                        longitude: draft.longitude,
                        cafe_name: none_if_empty(&draft.cafe_name),
                        cafe_address: none_if_empty(&draft.cafe_address),
                        cafe_latitude: draft.cafe_latitude,
                        cafe_longitude: draft.cafe_longitude,
                        event_date: Some(date.into_milliseconds()),
                        max_attendees: Some(draft.max_attendees),
                        attendees_count: None,
                        image_url: draft.image_url.clone(),
                        updated_at: Some(now.into_milliseconds()),
                    };
                    events.update(CollectionState::begin_mutation);
                    match api.update_event(id.as_str(), &patch).await {
                        Ok(()) => {
                            let event = Event {
                                id,
                                event_name: draft.event_name,
                                description: none_if_empty(&draft.description),
                                location: none_if_empty(&draft.location),
                                latitude: draft.latitude,
                                longitude: draft.longitude,
                                cafe: snapshot,
                                event_date: date,
                                max_attendees: draft.max_attendees,
                                attendees_count: existing.attendees_count,
                                image_url: draft.image_url,
                                created_by: existing.created_by,
                                created_at: existing.created_at,
                                updated_at: Some(now),
                            };
                            events.update(|s| s.finish_update(event));
                            overlay.set(None);
                        }
                        Err(err) => {
                            events.update(CollectionState::fail_mutation);
                            form_error.set(Some(err.to_string()));
                        }
                    }
                }
                OverlayIntent::View => {}
            }
        }
    });

    let delete_event = create_action(move |(api, id): &(DocumentApi, Id)| {
        let api = api.clone();
        let id = id.clone();
        async move {
            events.update(CollectionState::begin_mutation);
            match api.delete_event(id.as_str()).await {
                Ok(()) => {
                    events.update(|s| s.finish_delete(&id));
                }
                Err(err) => {
                    events.update(CollectionState::fail_mutation);
                    log::warn!("Unable to delete event: {err}");
                }
            }
            pending_deletion.set(None);
        }
    });

    let upload_image = create_action(move |(storage, file): &(StorageApi, web_sys::File)| {
        let storage = storage.clone();
        let file = file.clone();
        async move {
            uploading.set(true);
            match storage.upload(EVENT_IMAGES, file).await {
                Ok(url) => {
                    image_url.set(Some(url));
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
            fetch_events.dispatch(api.clone());
            fetch_cafes.dispatch(api);
        }
    });

    // -- memos -- //

    let filtered = create_memo(move |_| {
        search.with(|query| {
            events.with(|state| {
                state.filtered(|event: &Event| {
                    let cafe_name = event
                        .cafe
                        .as_ref()
                        .map(|cafe| cafe.name.as_str())
                        .unwrap_or_default();
                    matches_query(query, &[&event.event_name, cafe_name])
                })
            })
        })
    });

    let retry = move || {
        if let Some(api) = api.get_untracked() {
            fetch_events.dispatch(api);
        }
    };

    let on_image_selected = move |ev: ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Some(storage) = storage.get_untracked() else {
            return;
        };
        upload_image.dispatch((storage, file));
    };

    let on_suggestion_picked = move |suggestion: PlaceSuggestion| {
        location.set(suggestion.name);
        latitude.set(suggestion.lat.to_string());
        longitude.set(suggestion.lon.to_string());
    };

    // The other direction: manually entered coordinates resolve to a
    // location name, falling back to a bare coordinate label.
    let resolve_location = create_action(move |coords: &(f64, f64)| {
        let (lat, lon) = *coords;
        async move {
            location.set(geocoding.get_value().reverse(lat, lon).await);
        }
    });

    let on_resolve_location = move |_| {
        let Some(coords) =
            geo::parse_coords(&latitude.get_untracked(), &longitude.get_untracked())
        else {
            return;
        };
        resolve_location.dispatch(coords);
    };

    let on_cafe_selected = move |ev: ev::Event| {
        let id = event_target_value(&ev);
        if id.is_empty() {
            cafe.set(None);
            return;
        }
        let snapshot = cafes.with_untracked(|cafes| {
            cafes
                .iter()
                .find(|shop| shop.id.as_str() == id)
                .map(|shop| CafeSnapshot {
                    name: shop.name.clone(),
                    address: shop.address.clone(),
                    latitude: Some(shop.latitude),
                    longitude: Some(shop.longitude),
                })
        });
        cafe.set(snapshot);
    };

    view! {
      <section class="container mx-auto">
        <div class="mx-auto max-w-7xl py-6 sm:px-6 lg:px-8">
          <div class="overflow-hidden bg-white sm:rounded-lg sm:shadow">
            <div class="flex items-center justify-between border-b border-gray-200 bg-white px-4 py-5 sm:px-6">
              <h3 class="text-base font-semibold leading-6 text-gray-900">"Events"</h3>
              <button
                class=PRIMARY_BUTTON
                on:click = move |_| open_overlay(OverlayIntent::Create, None)
              >
                "Add Event"
              </button>
            </div>
            <div class="p-5">
              <SearchInput query = search placeholder = "Search events by name or cafe..." />
              { move || {
                  if events.with(CollectionState::is_loading) {
                      return view! { <LoadingIndicator /> }.into_view();
                  }
                  if let Some(message) = events.with(|s| s.error().map(ToString::to_string)) {
                      return view! { <LoadError message on_retry = retry /> }.into_view();
                  }
                  view! {
                    <ul role="list" class="divide-y divide-gray-100">
                      <For
                        each = move || filtered.get()
                        key = |event| event.id.clone()
                        children = move |event| {
                          let view_event = event.clone();
                          let edit_event = event.clone();
                          let delete_event = event.clone();
                          let place = event
                              .cafe
                              .as_ref()
                              .map(|cafe| cafe.name.clone())
                              .or_else(|| event.location.clone())
                              .unwrap_or_default();
                          view! {
                            <li class="flex items-center justify-between gap-x-6 py-4">
                              <div class="min-w-0">
                                <div class="flex items-center gap-x-3">
                                  <p class="text-sm font-semibold text-gray-900">{ event.event_name.clone() }</p>
                                  <Show when = { let event = event.clone(); move || event.is_full() }>
                                    <p class="rounded-md whitespace-nowrap px-1.5 py-0.5 text-xs font-medium ring-1 ring-inset text-red-700 bg-red-50 ring-red-600/20">"full"</p>
                                  </Show>
                                </div>
                                <div class="mt-1 flex items-center gap-x-2 text-xs leading-5 text-gray-500">
                                  <p class="whitespace-nowrap">{ format_event_date_label(event.event_date) }</p>
                                  <svg viewBox="0 0 2 2" class="h-0.5 w-0.5 fill-current">
                                    <circle cx="1" cy="1" r="1" />
                                  </svg>
                                  <p>{ format!("{}/{} attendees", event.attendees_count, event.max_attendees) }</p>
                                  <svg viewBox="0 0 2 2" class="h-0.5 w-0.5 fill-current">
                                    <circle cx="1" cy="1" r="1" />
                                  </svg>
                                  <p class="truncate">{ place }</p>
                                </div>
                              </div>
                              <div class="flex flex-none items-center gap-x-3 text-sm">
                                <button
                                  class="text-amber-700 hover:text-amber-900"
                                  on:click = move |_| open_overlay(OverlayIntent::View, Some(view_event.clone()))
                                >"View"</button>
                                <button
                                  class="text-amber-700 hover:text-amber-900"
                                  on:click = move |_| open_overlay(OverlayIntent::Edit, Some(edit_event.clone()))
                                >"Edit"</button>
                                <button
                                  class="text-red-600 hover:text-red-800"
                                  on:click = move |_| pending_deletion.set(Some(delete_event.clone()))
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
            let read_only = intent.read_only();
            let disabled = Signal::derive(move || read_only);
            let saving = Signal::derive(move || {
                events.with(CollectionState::is_mutating) || uploading.get()
            });
            view! {
              <Overlay
                title = format!("{} Event", intent.title_prefix())
                on_close = close_overlay
              >
                { move || form_error.get().map(|err| view!{
                  <p class="mb-4 text-red-700">{ err }</p>
                })}
                <TextField label = "Event name" value = event_name disabled />
                <TextAreaField label = "Description" value = description disabled />
                <div class="mb-4">
                  <label class="block mb-1 text-sm font-medium text-gray-600">"Cafe"</label>
                  <select
                    class = INPUT_CLASS
                    prop:disabled = move || read_only
                    on:change = on_cafe_selected
                  >
                    <option value="" selected = move || cafe.with(Option::is_none)>
                      "No cafe"
                    </option>
                    <For
                      each = move || cafes.get()
                      key = |shop| shop.id.clone()
                      children = move |shop| {
                        let name = shop.name.clone();
                        let shop_name = shop.name.clone();
                        view! {
                          <option
                            value = shop.id.to_string()
                            selected = move || cafe.with(|cafe| {
                              cafe.as_ref().is_some_and(|cafe| cafe.name == shop_name)
                            })
                          >
                            { name }
                          </option>
                        }
                      }
                    />
                  </select>
                </div>
                <Show when = move || !read_only>
                  <PlaceSearch
                    geocoding = geocoding.get_value()
                    label = "Find location"
                    on_pick = on_suggestion_picked
                  />
                </Show>
                <TextField label = "Location" value = location disabled />
                <div class="grid grid-cols-2 gap-x-4">
                  <NumberField label = "Latitude" value = latitude disabled />
                  <NumberField label = "Longitude" value = longitude disabled />
                </div>
                <Show when = move || !read_only>
                  <button
                    class="mb-4 text-sm text-amber-700 hover:text-amber-900"
                    on:click = on_resolve_location
                  >"Fill location from coordinates"</button>
                </Show>
                <div class="grid grid-cols-2 gap-x-4">
                  <DateTimeField label = "Date" value = event_date disabled />
                  <NumberField label = "Max attendees" value = max_attendees disabled />
                </div>
                <div class="mb-4">
                  <label class="block mb-1 text-sm font-medium text-gray-600">"Event image"</label>
                  { move || image_url.get().map(|url| view! {
                      <img class="h-24 w-full rounded-md object-cover mb-2" src=url />
                  })}
                  <Show when = move || !read_only>
                    <input
                      type = "file"
                      accept = "image/*"
                      on:change = on_image_selected
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
                                save_event.dispatch((api, intent));
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

        { move || pending_deletion.get().map(|event| {
            let id = event.id.clone();
            view! {
              <ConfirmDeletion
                label = format!("event {}", event.event_name)
                on_confirm = move || {
                  if let Some(api) = api.get_untracked() {
                      delete_event.dispatch((api, id.clone()));
                  }
                }
                on_cancel = move || pending_deletion.set(None)
              />
            }
        })}
      </section>
    }
}

fn parse_event_date(value: &str) -> Option<Timestamp> {
    PrimitiveDateTime::parse(value.trim(), &DATETIME_LOCAL_FORMAT)
        .ok()
        .map(|dt| dt.assume_utc().into())
}

fn format_event_date(date: Timestamp) -> String {
    OffsetDateTime::from(date)
        .format(&DATETIME_LOCAL_FORMAT)
        .unwrap_or_default()
}

fn format_event_date_label(date: Timestamp) -> String {
    const LABEL_FORMAT: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]");
    OffsetDateTime::from(date)
        .format(&LABEL_FORMAT)
        .unwrap_or_default()
}

fn none_if_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
