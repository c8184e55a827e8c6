use leptos::*;

use bma_boundary::{CoffeeShopPatch, NewCoffeeShop, PlaceSuggestion};
use bma_core::{
    collection::CollectionState,
    geo,
    text::matches_query,
    usecases::{self, ShopDraft},
};
use bma_entities::{id::Id, shop::CoffeeShop};
use bma_frontend_api::{DocumentApi, GeocodingApi, StorageApi, COFFEE_SHOP_IMAGES};

use crate::{components::*, pages::redirect_to_login_if_anonymous};

#[component]
pub fn CoffeeShops(
    api: Signal<Option<DocumentApi>>,
    storage: Signal<Option<StorageApi>>,
    geocoding: GeocodingApi,
) -> impl IntoView {
    redirect_to_login_if_anonymous(api);

    // -- signals -- //

    let shops = create_rw_signal(CollectionState::<CoffeeShop>::default());
    let search = create_rw_signal(String::new());
    let overlay = create_rw_signal(None::<OverlayIntent>);
    let editing_id = create_rw_signal(None::<Id>);
    let form_error = create_rw_signal(None::<String>);
    let pending_deletion = create_rw_signal(None::<CoffeeShop>);
    let uploading = create_rw_signal(false);
    let geocoding = store_value(geocoding);

    // -- form state -- //

    let name = create_rw_signal(String::new());
    let address = create_rw_signal(String::new());
    let latitude = create_rw_signal(String::new());
    let longitude = create_rw_signal(String::new());
    let pictures = create_rw_signal(Vec::<String>::new());

    let current_draft = move || ShopDraft {
        name: name.get_untracked().trim().to_string(),
        address: address.get_untracked().trim().to_string(),
        latitude: latitude.get_untracked().trim().parse().unwrap_or_default(),
        longitude: longitude.get_untracked().trim().parse().unwrap_or_default(),
        pictures: pictures.get_untracked(),
    };

    let open_overlay = move |intent: OverlayIntent, shop: Option<CoffeeShop>| {
        match shop {
            Some(shop) => {
                name.set(shop.name);
                address.set(shop.address);
                latitude.set(shop.latitude.to_string());
                longitude.set(shop.longitude.to_string());
                pictures.set(shop.pictures);
                editing_id.set(Some(shop.id));
            }
            None => {
                name.set(String::new());
                address.set(String::new());
                latitude.set(String::new());
                longitude.set(String::new());
                pictures.set(Vec::new());
                editing_id.set(None);
            }
        }
        form_error.set(None);
        overlay.set(Some(intent));
    };

    let close_overlay = move || overlay.set(None);

    // -- actions -- //

    let fetch_shops = create_action(move |api: &DocumentApi| {
        let api = api.clone();
        async move {
            shops.update(CollectionState::begin_load);
            match api.coffee_shops().await {
                Ok(rows) => {
                    shops.update(|s| s.finish_load(rows.into_iter().map(Into::into).collect()));
                }
                Err(err) => {
                    shops.update(|s| s.fail_load(err.to_string()));
                }
            }
        }
    });

    let save_shop = create_action(move |(api, intent): &(DocumentApi, OverlayIntent)| {
        let api = api.clone();
        let intent = *intent;
        async move {
            let draft = current_draft();
            if let Err(err) = usecases::validate_shop(&draft) {
                form_error.set(Some(err.to_string()));
                return;
            }
            form_error.set(None);
            match intent {
                OverlayIntent::Create => {
                    let new_shop = NewCoffeeShop {
                        name: draft.name.clone(),
                        address: draft.address.clone(),
                        latitude: draft.latitude,
                        longitude: draft.longitude,
                        image_url: draft.pictures.first().cloned(),
                        pictures: Some(draft.pictures.clone()),
                    };
                    shops.update(CollectionState::begin_mutation);
                    match api.create_coffee_shop(&new_shop).await {
                        Ok(id) => {
                            let shop = CoffeeShop {
                                id: id.into(),
                                name: draft.name,
                                address: draft.address,
                                latitude: draft.latitude,
                                longitude: draft.longitude,
                                pictures: draft.pictures,
                            };
                            shops.update(|s| s.finish_create(shop));
                            overlay.set(None);
                        }
                        Err(err) => {
                            shops.update(CollectionState::fail_mutation);
                            form_error.set(Some(err.to_string()));
                        }
                    }
                }
                OverlayIntent::Edit => {
                    let Some(id) = editing_id.get_untracked() else {
                        return;
                    };
                    let patch = CoffeeShopPatch {
                        name: Some(draft.name.clone()),
                        address: Some(draft.address.clone()),
                        latitude: Some(draft.latitude),
                        longitude: Some(draft.longitude),
                        image_url: draft.pictures.first().cloned(),
                        pictures: Some(draft.pictures.clone()),
                    };
                    shops.update(CollectionState::begin_mutation);
                    match api.update_coffee_shop(id.as_str(), &patch).await {
                        Ok(()) => {
                            let shop = CoffeeShop {
                                id,
                                name: draft.name,
                                address: draft.address,
                                latitude: draft.latitude,
                                longitude: draft.longitude,
                                pictures: draft.pictures,
                            };
                            shops.update(|s| s.finish_update(shop));
                            overlay.set(None);
                        }
                        Err(err) => {
                            shops.update(CollectionState::fail_mutation);
                            form_error.set(Some(err.to_string()));
                        }
                    }
                }
                OverlayIntent::View => {}
            }
        }
    });

    let delete_shop = create_action(move |(api, id): &(DocumentApi, Id)| {
        let api = api.clone();
        let id = id.clone();
        async move {
            shops.update(CollectionState::begin_mutation);
            match api.delete_coffee_shop(id.as_str()).await {
                Ok(()) => {
                    shops.update(|s| s.finish_delete(&id));
                }
                Err(err) => {
                    shops.update(CollectionState::fail_mutation);
                    log::warn!("Unable to delete coffee shop: {err}");
                }
            }
            pending_deletion.set(None);
        }
    });

    let upload_picture = create_action(move |(storage, file): &(StorageApi, web_sys::File)| {
        let storage = storage.clone();
        let file = file.clone();
        async move {
            uploading.set(true);
            match storage.upload(COFFEE_SHOP_IMAGES, file).await {
                Ok(url) => {
                    pictures.update(|p| p.push(url));
                }
                Err(err) => {
                    form_error.set(Some(format!("Unable to upload image: {err}")));
                }
            }
            uploading.set(false);
        }
    });

    // Removing a picture from the form also deletes the stored object;
    // a failure there only loses the orphaned file, not the shop.
    let remove_picture = create_action(move |(storage, url): &(StorageApi, String)| {
        let storage = storage.clone();
        let url = url.clone();
        async move {
            pictures.update(|p| p.retain(|picture| picture != &url));
            if let Err(err) = storage.delete(&url).await {
                log::warn!("Unable to delete stored image: {err}");
            }
        }
    });

    // -- effects -- //

    create_effect(move |_| {
        if let Some(api) = api.get() {
            fetch_shops.dispatch(api);
        }
    });

    // -- memos -- //

    let filtered = create_memo(move |_| {
        search.with(|query| {
            shops.with(|state| {
                state.filtered(|shop: &CoffeeShop| {
                    matches_query(query, &[&shop.name, &shop.address])
                })
            })
        })
    });

    let retry = move || {
        if let Some(api) = api.get_untracked() {
            fetch_shops.dispatch(api);
        }
    };

    let on_picture_selected = move |ev: ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Some(storage) = storage.get_untracked() else {
            return;
        };
        upload_picture.dispatch((storage, file));
    };

    let on_suggestion_picked = move |suggestion: PlaceSuggestion| {
        address.set(suggestion.name);
        latitude.set(suggestion.lat.to_string());
        longitude.set(suggestion.lon.to_string());
    };

    // The other direction: manually entered coordinates resolve to an
    // address, falling back to a bare coordinate label.
    let resolve_address = create_action(move |coords: &(f64, f64)| {
        let (lat, lon) = *coords;
        async move {
            address.set(geocoding.get_value().reverse(lat, lon).await);
        }
    });

    let on_resolve_address = move |_| {
        let Some(coords) =
            geo::parse_coords(&latitude.get_untracked(), &longitude.get_untracked())
        else {
            return;
        };
        resolve_address.dispatch(coords);
    };

    view! {
      <section class="container mx-auto">
        <div class="mx-auto max-w-7xl py-6 sm:px-6 lg:px-8">
          <div class="overflow-hidden bg-white sm:rounded-lg sm:shadow">
            <div class="flex items-center justify-between border-b border-gray-200 bg-white px-4 py-5 sm:px-6">
              <h3 class="text-base font-semibold leading-6 text-gray-900">"Coffee Shops"</h3>
              <button
                class=PRIMARY_BUTTON
                on:click = move |_| open_overlay(OverlayIntent::Create, None)
              >
                "Add Coffee Shop"
              </button>
            </div>
            <div class="p-5">
              <SearchInput query = search placeholder = "Search coffee shops by name or address..." />
              { move || {
                  if shops.with(CollectionState::is_loading) {
                      return view! { <LoadingIndicator /> }.into_view();
                  }
                  if let Some(message) = shops.with(|s| s.error().map(ToString::to_string)) {
                      return view! { <LoadError message on_retry = retry /> }.into_view();
                  }
                  view! {
                    <ul role="list" class="divide-y divide-gray-100">
                      <For
                        each = move || filtered.get()
                        key = |shop| shop.id.clone()
                        children = move |shop| {
                          let view_shop = shop.clone();
                          let edit_shop = shop.clone();
                          let delete_shop = shop.clone();
                          view! {
                            <li class="flex items-center justify-between gap-x-6 py-4">
                              <div class="flex items-center gap-x-4 min-w-0">
                                { match shop.primary_picture() {
                                    Some(url) => view! {
                                      <img class="h-12 w-12 rounded-md object-cover" src=url.to_string() />
                                    }.into_view(),
                                    None => view! {
                                      <span class="flex h-12 w-12 items-center justify-center rounded-md bg-gray-200 text-gray-500">"?"</span>
                                    }.into_view(),
                                }}
                                <div class="min-w-0">
                                  <p class="text-sm font-semibold text-gray-900">{ shop.name.clone() }</p>
                                  <p class="text-xs text-gray-500 truncate">{ shop.address.clone() }</p>
                                </div>
                              </div>
                              <div class="flex flex-none items-center gap-x-3 text-sm">
                                <button
                                  class="text-amber-700 hover:text-amber-900"
                                  on:click = move |_| open_overlay(OverlayIntent::View, Some(view_shop.clone()))
                                >"View"</button>
                                <button
                                  class="text-amber-700 hover:text-amber-900"
                                  on:click = move |_| open_overlay(OverlayIntent::Edit, Some(edit_shop.clone()))
                                >"Edit"</button>
                                <button
                                  class="text-red-600 hover:text-red-800"
                                  on:click = move |_| pending_deletion.set(Some(delete_shop.clone()))
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
                shops.with(CollectionState::is_mutating) || uploading.get()
            });
            view! {
              <Overlay
                title = format!("{} Coffee Shop", intent.title_prefix())
                on_close = close_overlay
              >
                { move || form_error.get().map(|err| view!{
                  <p class="mb-4 text-red-700">{ err }</p>
                })}
                <TextField label = "Name" value = name disabled />
                <Show when = move || !read_only>
                  <PlaceSearch
                    geocoding = geocoding.get_value()
                    label = "Find address"
                    on_pick = on_suggestion_picked
                  />
                </Show>
                <TextField label = "Address" value = address disabled />
                <div class="grid grid-cols-2 gap-x-4">
                  <NumberField label = "Latitude" value = latitude disabled />
                  <NumberField label = "Longitude" value = longitude disabled />
                </div>
                <Show when = move || !read_only>
                  <button
                    class="mb-4 text-sm text-amber-700 hover:text-amber-900"
                    on:click = on_resolve_address
                  >"Fill address from coordinates"</button>
                </Show>
                <div class="mb-4">
                  <label class="block mb-1 text-sm font-medium text-gray-600">"Pictures"</label>
                  <div class="flex flex-wrap gap-2 mb-2">
                    <For
                      each = move || pictures.get()
                      key = |url| url.clone()
                      children = move |url| {
                        let remove_url = url.clone();
                        view! {
                          <div class="relative">
                            <img class="h-16 w-16 rounded-md object-cover" src=url.clone() />
                            <Show when = move || !read_only>
                              {
                                let remove_url = remove_url.clone();
                                view! {
                                  <button
                                    class="absolute -top-1 -right-1 h-5 w-5 rounded-full bg-red-600 text-white text-xs"
                                    on:click = move |_| {
                                      if let Some(storage) = storage.get_untracked() {
                                          remove_picture.dispatch((storage, remove_url.clone()));
                                      }
                                    }
                                  >"x"</button>
                                }
                              }
                            </Show>
                          </div>
                        }
                      }
                    />
                  </div>
                  <Show when = move || !read_only>
                    <input
                      type = "file"
                      accept = "image/*"
                      on:change = on_picture_selected
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
                                save_shop.dispatch((api, intent));
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

        { move || pending_deletion.get().map(|shop| {
            let id = shop.id.clone();
            view! {
              <ConfirmDeletion
                label = format!("coffee shop {}", shop.name)
                on_confirm = move || {
                  if let Some(api) = api.get_untracked() {
                      delete_shop.dispatch((api, id.clone()));
                  }
                }
                on_cancel = move || pending_deletion.set(None)
              />
            }
        })}
      </section>
    }
}
