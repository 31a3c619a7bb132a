//! Bridge to the embedding host application.
//!
//! Outbound, the widget writes timestamped commands to `window.status`;
//! embedding web views surface those as status-bar change notifications, so
//! the channel is fire-and-forget. Inbound, the host drives the exported
//! `set_location` / `report_location` entry points on the hydrated bundle.
//! The component owning the live map attaches an endpoint while mounted and
//! detaches it again on cleanup; host calls arriving outside that window are
//! logged and dropped.

use std::cell::RefCell;
use std::rc::Rc;

use viewport_types::codec::LocationUpdate;
use viewport_types::ViewState;

/// Callbacks the live viewport registers for host-driven operations.
pub struct HostEndpoint {
    pub apply: Rc<dyn Fn(&LocationUpdate)>,
    pub snapshot: Rc<dyn Fn() -> ViewState>,
}

thread_local! {
    static ENDPOINT: RefCell<Option<HostEndpoint>> = const { RefCell::new(None) };
}

/// Guard for an attached endpoint; dropping it detaches the endpoint again.
pub struct HostAttachment(());

pub fn attach(endpoint: HostEndpoint) -> HostAttachment {
    ENDPOINT.with(|slot| *slot.borrow_mut() = Some(endpoint));
    HostAttachment(())
}

impl Drop for HostAttachment {
    fn drop(&mut self) {
        ENDPOINT.with(|slot| *slot.borrow_mut() = None);
    }
}

fn apply_update(update: &LocationUpdate) -> bool {
    ENDPOINT.with(|slot| match &*slot.borrow() {
        Some(endpoint) => {
            (endpoint.apply)(update);
            true
        }
        None => false,
    })
}

fn current_snapshot() -> Option<ViewState> {
    ENDPOINT.with(|slot| slot.borrow().as_ref().map(|endpoint| (endpoint.snapshot)()))
}

/// Applies a serialized view state sent by the host. A malformed payload
/// raises the parse error to the caller and leaves the view untouched.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn set_location(payload: &str) -> Result<(), wasm_bindgen::JsValue> {
    let update = viewport_types::codec::deserialize(payload)
        .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))?;
    if !apply_update(&update) {
        leptos::logging::warn!("set_location called before a viewport was attached");
    }
    Ok(())
}

/// Serializes the current view state and notifies the host.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn report_location() -> Result<(), wasm_bindgen::JsValue> {
    let Some(state) = current_snapshot() else {
        leptos::logging::warn!("report_location called before a viewport was attached");
        return Ok(());
    };
    let json = viewport_types::codec::serialize(&state)
        .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))?;
    notify(viewport_types::host::LOCATION_ACTION, &json);
    Ok(())
}

/// Fire-and-forget notification on the status channel.
pub fn notify(action: &str, payload: &str) {
    let command =
        viewport_types::host::format_command(js_sys::Date::now() as u64, action, payload);
    leptos::logging::log!("host command: {}", command);
    if let Some(window) = web_sys::window() {
        window.set_status(&command);
    }
}
