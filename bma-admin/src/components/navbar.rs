use leptos::*;
use leptos_router::*;

use crate::Page;

#[component]
pub fn NavBar<F>(
    admin_name: Signal<Option<String>>,
    logged_in: Signal<bool>,
    on_logout: F,
) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
      <nav class="relative container mx-auto p-6">
        <div class="flex items-center justify-between">

          // Logo
          <div class="pt-2 font-bold">
            <A href = Page::Users.path()>"BrewMate Admin"</A>
          </div>

          // Menu items
          <div class="hidden space-x-6 md:flex">
            <AdminMenu admin_name logged_in on_logout />
          </div>

          // Hamburger Icon
          <button
            class = {move ||
              if menu_open.get() {
                "open block hamburger md:hidden focus:outline-none"
              } else {
                "block hamburger md:hidden focus:outline-none"
              }
            }
            on:click = move |_| set_menu_open.update(|s|*s = !*s)
          >
            <span class="hamburger-top"></span>
            <span class="hamburger-middle"></span>
            <span class="hamburger-bottom"></span>
          </button>
        </div>

        // Mobile Menu
        <div class="md:hidden">
          <menu
            class = {move ||
              if menu_open.get() {
                "absolute flex flex-col items-center self-end py-8 mt-10 space-y-6 font-bold bg-white sm:w-auto sm:self-center left-6 right-6 drop-shadow-md"
              } else {
                "hidden absolute flex-col items-center self-end py-8 mt-10 space-y-6 font-bold bg-white sm:w-auto sm:self-center left-6 right-6 drop-shadow-md"
              }
            }>
            <AdminMenu admin_name logged_in on_logout />
          </menu>
        </div>
      </nav>
    }
}

#[component]
fn AdminMenu<F>(
    admin_name: Signal<Option<String>>,
    logged_in: Signal<bool>,
    on_logout: F,
) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    move || {
        if logged_in.get() {
            view! {
              <MenuItem page = Page::Users label = "Users" />
              <MenuItem page = Page::CoffeeShops label = "Coffee Shops" />
              <MenuItem page = Page::Interests label = "Interests" />
              <MenuItem page = Page::Reviews label = "Reviews" />
              <MenuItem page = Page::Events label = "Events" />
              <a href="#" on:click = move |_| on_logout()>
              {
                move || match admin_name.get() {
                    Some(name) => format!("Logout ({name})"),
                    None => "Logout".to_string(),
                }
              }
              </a>
            }
            .into_view()
        } else {
            view! { <MenuItem page = Page::Login label = "Login" /> }.into_view()
        }
    }
}

// TODO: Highlight active item.
#[component]
fn MenuItem(page: Page, label: &'static str) -> impl IntoView {
    view! {
      <A href=page.path() class="hover:text-gray-600".to_string()>{ label }</A>
    }
}
