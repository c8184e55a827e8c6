use gloo_timers::callback::Timeout;
use leptos::*;

use bma_boundary::PlaceSuggestion;
use bma_core::geo::{self, QuerySequence};
use bma_frontend_api::GeocodingApi;

use crate::components::INPUT_CLASS;

const DEBOUNCE_MILLIS: u32 = 400;

/// Search-as-you-type lookup against the public geocoding service.
///
/// Keystrokes are debounced; every request takes a ticket and responses
/// of superseded tickets are dropped, so a slow early response can never
/// overwrite the suggestions of a later query.
#[component]
pub fn PlaceSearch<F>(
    geocoding: GeocodingApi,
    label: &'static str,
    #[prop(optional)] initial: String,
    #[prop(into, optional)] disabled: Signal<bool>,
    on_pick: F,
) -> impl IntoView
where
    F: Fn(PlaceSuggestion) + 'static + Copy,
{
    // -- signals -- //

    let (query, set_query) = create_signal(initial);
    let (suggestions, set_suggestions) = create_signal(Vec::<PlaceSuggestion>::new());
    let geocoding = store_value(geocoding);
    let sequence = store_value(QuerySequence::default());
    let pending = store_value(None::<Timeout>);

    // -- callbacks -- //

    let schedule_search = move |text: String| {
        pending.update_value(|slot| {
            if let Some(timeout) = slot.take() {
                timeout.cancel();
            }
        });
        if !geo::is_searchable(&text) {
            set_suggestions.update(|s| s.clear());
            return;
        }
        let timeout = Timeout::new(DEBOUNCE_MILLIS, move || {
            let ticket = sequence
                .try_update_value(|seq| seq.next_ticket())
                .unwrap_or_default();
            wasm_bindgen_futures::spawn_local(async move {
                let results = geocoding.get_value().search(&text).await;
                if sequence.with_value(|seq| seq.is_current(ticket)) {
                    set_suggestions.update(|s| *s = results);
                } else {
                    log::debug!("Discarding superseded place search response");
                }
            });
        });
        pending.update_value(|slot| *slot = Some(timeout));
    };

    let pick = move |suggestion: PlaceSuggestion| {
        set_query.update(|q| *q = suggestion.name.clone());
        set_suggestions.update(|s| s.clear());
        on_pick(suggestion);
    };

    view! {
      <div class="mb-4 relative">
        <label class="block mb-1 text-sm font-medium text-gray-600">{ label }</label>
        <input
          type = "text"
          placeholder = "Search for a place..."
          class = INPUT_CLASS
          prop:value = move || query.get()
          prop:disabled = move || disabled.get()
          on:input = move |ev| {
            let val = event_target_value(&ev);
            set_query.update(|q|*q = val.clone());
            schedule_search(val);
          }
        />
        <Show when = move || !suggestions.with(Vec::is_empty)>
          <ul class="absolute z-50 w-full bg-white border border-gray-300 rounded shadow-lg mt-1 max-h-60 overflow-y-auto">
            <For
              each = move || suggestions.get()
              key = |s| (s.name.clone(), s.lat.to_bits(), s.lon.to_bits())
              children = move |suggestion| {
                let picked = suggestion.clone();
                view! {
                  <li
                    class="px-3 py-2 text-sm text-gray-700 cursor-pointer hover:bg-gray-100"
                    on:click = move |_| pick(picked.clone())
                  >
                    { suggestion.name.clone() }
                  </li>
                }
              }
            />
          </ul>
        </Show>
      </div>
    }
}
