use leptos::{ev, *};

pub const INPUT_CLASS: &str = "form-control block w-full px-3 py-1.5 text-base font-normal text-gray-700 bg-white bg-clip-padding border border-solid border-gray-300 rounded transition ease-in-out m-0 focus:text-gray-700 focus:bg-white focus:border-amber-700 focus:outline-none disabled:bg-gray-100";

const LABEL_CLASS: &str = "block mb-1 text-sm font-medium text-gray-600";

pub const PRIMARY_BUTTON: &str = "inline-block px-4 py-2 rounded-md text-sm font-semibold text-white bg-amber-700 shadow-sm hover:bg-amber-800 disabled:bg-amber-200";

pub const SECONDARY_BUTTON: &str = "inline-block px-4 py-2 rounded-md text-sm font-semibold text-gray-900 ring-1 ring-inset ring-gray-300 hover:bg-gray-50";

#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
      <div class="mb-4">
        <label class=LABEL_CLASS>{ label }</label>
        <input
          type = "text"
          placeholder = placeholder
          class = INPUT_CLASS
          prop:value = move || value.get()
          prop:disabled = move || disabled.get()
          on:input = move |ev| {
            let val = event_target_value(&ev);
            value.update(|v|*v = val);
          }
        />
      </div>
    }
}

/// Numeric input kept as text until submit; the page parses and
/// validates the final value.
#[component]
pub fn NumberField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
      <div class="mb-4">
        <label class=LABEL_CLASS>{ label }</label>
        <input
          type = "number"
          step = "any"
          placeholder = placeholder
          class = INPUT_CLASS
          prop:value = move || value.get()
          prop:disabled = move || disabled.get()
          on:input = move |ev| {
            let val = event_target_value(&ev);
            value.update(|v|*v = val);
          }
        />
      </div>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
      <div class="mb-4">
        <label class=LABEL_CLASS>{ label }</label>
        <textarea
          rows = "3"
          class = INPUT_CLASS
          prop:value = move || value.get()
          prop:disabled = move || disabled.get()
          on:input = move |ev| {
            let val = event_target_value(&ev);
            value.update(|v|*v = val);
          }
        >
        { value.get_untracked() }
        </textarea>
      </div>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
      <div class="mb-4">
        <label class=LABEL_CLASS>{ label }</label>
        <select
          class = INPUT_CLASS
          prop:value = move || value.get()
          prop:disabled = move || disabled.get()
          on:change = move |ev| {
            let val = event_target_value(&ev);
            value.update(|v|*v = val);
          }
        >
          <For
            each = move || options.clone()
            key = |(option, _)| *option
            children = move |(option, option_label)| view! {
              <option value=option selected=move || value.get() == option>{ option_label }</option>
            }
          />
        </select>
      </div>
    }
}

#[component]
pub fn DateTimeField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
      <div class="mb-4">
        <label class=LABEL_CLASS>{ label }</label>
        <input
          type = "datetime-local"
          class = INPUT_CLASS
          prop:value = move || value.get()
          prop:disabled = move || disabled.get()
          on:input = move |ev| {
            let val = event_target_value(&ev);
            value.update(|v|*v = val);
          }
        />
      </div>
    }
}

/// Search box above every collection table. Filtering is client-side,
/// so every keystroke narrows the already loaded rows.
#[component]
pub fn SearchInput(query: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
      <div class="mb-6">
        <input
          type = "search"
          placeholder = placeholder
          class = INPUT_CLASS
          prop:value = move || query.get()
          on:keyup = move |ev: ev::KeyboardEvent| {
            let val = event_target_value(&ev);
            query.update(|q|*q = val);
          }
          on:change = move |ev| {
            let val = event_target_value(&ev);
            query.update(|q|*q = val);
          }
        />
      </div>
    }
}
