use leptos::{prelude::*, task::spawn_local};
use web_sys::KeyboardEvent;

use viewport_types::{Bounds, PlaceMatch};

use crate::components::feedback::ErrorView;
use crate::server::search_places;

/// Place-search control. Hidden until the viewport reveals it; queries are
/// biased toward the bounds currently on screen.
#[component]
pub fn SearchBox<F>(
    visible: RwSignal<bool>,
    text: RwSignal<String>,
    bias: RwSignal<Option<Bounds>>,
    on_selection: F,
) -> impl IntoView
where
    F: Fn(Vec<PlaceMatch>) + 'static + Copy + Send + Sync,
{
    let is_searching = RwSignal::new(false);
    let search_error = RwSignal::new(Option::<String>::None);

    let perform_search = move |query: String| {
        let query = query.trim().to_string();
        if query.is_empty() {
            return;
        }

        is_searching.set(true);
        search_error.set(None);

        spawn_local(async move {
            match search_places(query.clone(), bias.get_untracked()).await {
                Ok(places) => {
                    if places.is_empty() {
                        // An empty selection is not an error, just nothing to do.
                        leptos::logging::log!("no places matched '{}'", query);
                    } else {
                        on_selection(places);
                    }
                    is_searching.set(false);
                }
                Err(e) => {
                    search_error.set(Some(format!("Search failed: {}", e)));
                    is_searching.set(false);
                }
            }
        });
    };

    let handle_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            perform_search(text.get());
        }
        "Escape" => {
            search_error.set(None);
        }
        _ => {}
    };

    view! {
        <div
            class="search-box"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <div class="search-box-input-wrapper">
                <input
                    type="text"
                    class="search-box-input"
                    placeholder="Search for a place..."
                    value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                    on:keydown=handle_keydown
                    disabled=move || is_searching.get()
                />

                <button
                    class="search-box-button"
                    class:searching=move || is_searching.get()
                    on:click=move |_| perform_search(text.get())
                    disabled=move || is_searching.get() || text.get().trim().is_empty()
                >
                    {move || if is_searching.get() {
                        "Searching..."
                    } else {
                        "Search"
                    }}
                </button>
            </div>

            {move || if let Some(error) = search_error.get() {
                view! {
                    <div class="search-box-error">
                        <ErrorView message=Some(error) />
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
