use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;
use viewport_types::{Bounds, PlaceMatch};

use crate::components::search_box::SearchBox;
use crate::viewport::map_host::MapHost;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/leaflet@1.9.3/dist/leaflet.css"
                />
                <script
                    src="https://unpkg.com/leaflet@1.9.3/dist/leaflet.js"
                    defer
                ></script>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/web.css"/>

        <Title text="geopick"/>

        <ConfigProvider>
            <Router>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=PickerPage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}

/// The single page: a full-bleed map with the search control floated over its
/// top-left corner. The signals here are the whole shared state of the widget;
/// the map side and the search side only ever talk through them.
#[component]
fn PickerPage() -> impl IntoView {
    let search_text = RwSignal::new(String::new());
    let search_visible = RwSignal::new(false);
    let search_bias = RwSignal::new(None::<Bounds>);
    let selection = RwSignal::new(Vec::<PlaceMatch>::new());

    let on_selection = move |places: Vec<PlaceMatch>| selection.set(places);

    view! {
        <div class="picker-page">
            <div class="picker-search">
                <SearchBox
                    visible=search_visible
                    text=search_text
                    bias=search_bias
                    on_selection=on_selection
                />
            </div>
            <MapHost
                search_text=search_text
                search_visible=search_visible
                search_bias=search_bias
                selection=selection
            />
        </div>
    }
}
