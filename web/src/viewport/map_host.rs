use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use viewport_types::{Bounds, PlaceMatch};

use crate::components::feedback::LoadingView;

#[cfg(not(feature = "ssr"))]
use leptos_leaflet::leaflet::Map;

#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;

/// Hosts the Leaflet map and wires it to the rest of the widget: bounds
/// changes feed the search bias, search selections fit the viewport, and the
/// host bridge gets an endpoint for the lifetime of the mounted map.
#[component]
pub fn MapHost(
    search_text: RwSignal<String>,
    search_visible: RwSignal<bool>,
    search_bias: RwSignal<Option<Bounds>>,
    selection: RwSignal<Vec<PlaceMatch>>,
) -> impl IntoView {
    // Track if map is ready to render (avoid hydration issues)
    let map_ready = RwSignal::new(false);

    // Map signal - only on client
    #[cfg(not(feature = "ssr"))]
    let map = JsRwSignal::new_local(None::<Map>);

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use viewport_types::codec::LocationUpdate;
        use web_sys::EventTarget;

        use crate::host::{self, HostEndpoint};
        use crate::viewport::controller::ViewportController;
        use crate::viewport::surface::{EventSubscription, LeafletSurface};

        // Delay map rendering until after hydration
        Effect::new(move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let _ = window.request_animation_frame(
                wasm_bindgen::closure::Closure::once_into_js(move || {
                    map_ready.set(true);
                })
                .as_ref()
                .unchecked_ref(),
            );
        });

        let controller =
            StoredValue::new_local(None::<Rc<RefCell<ViewportController<LeafletSurface>>>>);
        let move_subscription = StoredValue::new_local(None::<EventSubscription>);
        let host_attachment = StoredValue::new_local(None::<host::HostAttachment>);

        // Wire everything up once the leaflet instance exists. The instance
        // appearing is the "view stabilized" signal: the first one reveals
        // the search control, later runs change nothing.
        Effect::new(move |_| {
            let Some(map_instance) = map.read_only().get() else {
                return;
            };
            if controller.with_value(|c| c.is_some()) {
                return;
            }

            let ctl = Rc::new(RefCell::new(ViewportController::new(LeafletSurface::new(
                map_instance.clone(),
            ))));

            // Viewport bounds -> search bias, one update per move for the
            // full lifetime of the view.
            let bias_source = Rc::clone(&ctl);
            let target: &EventTarget = map_instance.unchecked_ref();
            let subscription = EventSubscription::attach(target, "moveend", move |_event| {
                search_bias.set(Some(bias_source.borrow().current_bounds()));
            });
            move_subscription.set_value(Some(subscription));

            search_bias.set(Some(ctl.borrow().current_bounds()));

            if ctl.borrow_mut().view_stabilized() {
                search_visible.set(true);
            }

            let apply_target = Rc::clone(&ctl);
            let snapshot_target = Rc::clone(&ctl);
            let endpoint = HostEndpoint {
                apply: Rc::new(move |update: &LocationUpdate| {
                    apply_target.borrow().apply_update(update);
                    if let Some(search) = &update.search {
                        search_text.set(search.clone());
                    }
                }),
                snapshot: Rc::new(move || {
                    snapshot_target
                        .borrow()
                        .snapshot(&search_text.get_untracked())
                }),
            };
            host_attachment.set_value(Some(host::attach(endpoint)));

            controller.set_value(Some(ctl));
        });

        // Search selection -> viewport fit
        Effect::new(move |_| {
            let places = selection.get();
            if places.is_empty() {
                return;
            }
            controller.with_value(|ctl| {
                if let Some(ctl) = ctl {
                    ctl.borrow().apply_selection(&places);
                }
            });
        });

        on_cleanup(move || {
            host_attachment.set_value(None);
            move_subscription.set_value(None);
            controller.set_value(None);
        });
    }

    view! {
        <div class="map-host">
            {move || {
                #[cfg(not(feature = "ssr"))]
                {
                    use crate::viewport::controller::{DEFAULT_CENTER, DEFAULT_ZOOM};

                    if map_ready.get() {
                        view! {
                            <MapContainer
                                class="map-host-container"
                                center=Position::new(DEFAULT_CENTER.lat, DEFAULT_CENTER.lng)
                                zoom={DEFAULT_ZOOM as f64}
                                set_view=true
                                map=map.write_only()
                            >
                                <TileLayer
                                    url="https://tile.openstreetmap.org/{z}/{x}/{y}.png"
                                    attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                                />
                            </MapContainer>
                        }.into_any()
                    } else {
                        view! {
                            <div class="map-host-loading">
                                <LoadingView message=Some("Initializing map...".to_string()) />
                            </div>
                        }.into_any()
                    }
                }

                #[cfg(feature = "ssr")]
                {
                    view! {
                        <div class="map-host-loading">
                            <LoadingView message=Some("Initializing map...".to_string()) />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
