use leptos_leaflet::leaflet::{LatLng, LatLngBounds, Map};
use viewport_types::{Bounds, Coordinate};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// Capability set the viewport controller needs from a live map. Kept narrow
/// so tests can stand in a fake without a rendering surface.
pub trait ViewSurface {
    fn zoom(&self) -> u32;
    fn center(&self) -> Coordinate;
    fn bounds(&self) -> Bounds;
    fn set_zoom(&self, zoom: u32);
    fn set_center(&self, center: Coordinate);
    fn fit_bounds(&self, bounds: &Bounds);
}

/// The real surface: a handle onto a mounted Leaflet map.
pub struct LeafletSurface {
    map: Map,
}

impl LeafletSurface {
    pub fn new(map: Map) -> Self {
        Self { map }
    }
}

impl ViewSurface for LeafletSurface {
    fn zoom(&self) -> u32 {
        self.map.get_zoom() as u32
    }

    fn center(&self) -> Coordinate {
        let center = self.map.get_center();
        Coordinate::new(center.lat(), center.lng())
    }

    fn bounds(&self) -> Bounds {
        let bounds = self.map.get_bounds();
        let south_west = bounds.get_south_west();
        let north_east = bounds.get_north_east();
        Bounds::new(
            Coordinate::new(south_west.lat(), south_west.lng()),
            Coordinate::new(north_east.lat(), north_east.lng()),
        )
    }

    fn set_zoom(&self, zoom: u32) {
        self.map.set_zoom(zoom as f64);
    }

    fn set_center(&self, center: Coordinate) {
        self.map
            .set_view(&LatLng::new(center.lat, center.lng), self.map.get_zoom());
    }

    fn fit_bounds(&self, bounds: &Bounds) {
        let corners = LatLngBounds::new(
            &LatLng::new(bounds.sw.lat, bounds.sw.lng),
            &LatLng::new(bounds.ne.lat, bounds.ne.lng),
        );
        self.map.fit_bounds(&corners);
    }
}

/// A DOM event listener that detaches itself when dropped, so the component
/// that wired it controls exactly how long it stays live.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    handler: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Self {
        let handler = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            .expect("Failed to attach");
        Self {
            target: target.clone(),
            event,
            handler,
        }
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.handler.as_ref().unchecked_ref());
    }
}
