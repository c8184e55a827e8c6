use leptos::*;

/// What the overlay was opened for. A `View` overlay renders the same
/// form read-only; switching to `Edit` keeps the entered state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayIntent {
    View,
    Edit,
    Create,
}

impl OverlayIntent {
    #[must_use]
    pub const fn read_only(self) -> bool {
        matches!(self, Self::View)
    }

    #[must_use]
    pub const fn title_prefix(self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Edit => "Edit",
            Self::Create => "New",
        }
    }
}

#[component]
pub fn Overlay<F>(title: String, on_close: F, children: Children) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    view! {
      <div class="fixed inset-0 z-40 bg-gray-900 bg-opacity-50 flex items-center justify-center p-4">
        <div class="bg-white rounded-lg shadow-xl w-full max-w-2xl max-h-full overflow-y-auto">
          <div class="flex items-center justify-between border-b border-gray-200 px-6 py-4">
            <h3 class="text-lg font-semibold text-gray-900">{ title }</h3>
            <button
              class="text-gray-400 hover:text-gray-600"
              on:click = move |_| on_close()
            >
              "✕"
            </button>
          </div>
          <div class="px-6 py-4">
            { children() }
          </div>
        </div>
      </div>
    }
}

/// Deletion always asks first; there is no undo on the remote store.
#[component]
pub fn ConfirmDeletion<F, G>(label: String, on_confirm: F, on_cancel: G) -> impl IntoView
where
    F: Fn() + 'static,
    G: Fn() + 'static,
{
    view! {
      <div class="fixed inset-0 z-50 bg-gray-900 bg-opacity-50 flex items-center justify-center p-4">
        <div class="bg-white rounded-lg shadow-xl w-full max-w-md p-6">
          <h3 class="text-lg font-semibold text-gray-900 mb-2">"Confirm deletion"</h3>
          <p class="text-gray-600 mb-6">
            { format!("Are you sure you want to delete {label}? This cannot be undone.") }
          </p>
          <div class="flex justify-end gap-x-3">
            <button
              class="px-4 py-2 rounded-md text-sm font-semibold text-gray-900 ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
              on:click = move |_| on_cancel()
            >
              "Cancel"
            </button>
            <button
              class="px-4 py-2 rounded-md text-sm font-semibold text-white bg-red-600 hover:bg-red-500"
              on:click = move |_| on_confirm()
            >
              "Delete"
            </button>
          </div>
        </div>
      </div>
    }
}

/// Failed initial fetch: message plus retry, never a silently empty
/// table.
#[component]
pub fn LoadError<F>(message: String, on_retry: F) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    view! {
      <div class="p-5 text-center">
        <p class="mb-4 text-red-700">{ message }</p>
        <button
          class="px-4 py-2 rounded-md text-sm font-semibold text-gray-900 ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
          on:click = move |_| on_retry()
        >
          "Retry"
        </button>
      </div>
    }
}

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
      <p class="p-5 text-center text-gray-500">"Loading..."</p>
    }
}
