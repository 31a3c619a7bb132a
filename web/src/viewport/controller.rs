use viewport_types::codec::LocationUpdate;
use viewport_types::{Bounds, Coordinate, PlaceMatch, ViewState};

use super::surface::ViewSurface;

/// View shown before any host or user input: the whole world.
pub const DEFAULT_ZOOM: u32 = 1;
pub const DEFAULT_CENTER: Coordinate = Coordinate { lat: 20.0, lng: 0.0 };

/// Glue between the live map surface, the search control, and the host
/// bridge. Owns no viewport state of its own; every read goes through the
/// surface, so the map stays the single source of truth.
pub struct ViewportController<S> {
    surface: S,
    search_revealed: bool,
}

impl<S: ViewSurface> ViewportController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            search_revealed: false,
        }
    }

    /// Handles a "view stabilized" signal. The first one reveals the search
    /// control (returns true); later signals are ignored, so the control is
    /// never re-hidden.
    pub fn view_stabilized(&mut self) -> bool {
        !std::mem::replace(&mut self.search_revealed, true)
    }

    pub fn search_revealed(&self) -> bool {
        self.search_revealed
    }

    /// Fits the viewport around a search selection. Zero places leave the
    /// view untouched.
    pub fn apply_selection(&self, places: &[PlaceMatch]) -> bool {
        match selection_bounds(places) {
            Some(bounds) => {
                self.surface.fit_bounds(&bounds);
                true
            }
            None => false,
        }
    }

    /// Applies a host-supplied update. Values are forwarded as-is; the
    /// rendering layer decides what out-of-range input does.
    pub fn apply_update(&self, update: &LocationUpdate) {
        if let Some(zoom) = update.zoom {
            self.surface.set_zoom(zoom);
        }
        if let Some(center) = update.center {
            self.surface.set_center(center);
        }
    }

    pub fn current_bounds(&self) -> Bounds {
        self.surface.bounds()
    }

    /// Reads the live view into a [`ViewState`], carrying the search text
    /// only when it is non-blank.
    pub fn snapshot(&self, search: &str) -> ViewState {
        let search = search.trim();
        ViewState {
            zoom: self.surface.zoom(),
            center: self.surface.center(),
            bounds: self.surface.bounds(),
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }
}

/// Union of the selected places' viewports, with a point fallback for places
/// that carry none. A mix of both yields bounds enclosing the points as well
/// as the viewports.
pub fn selection_bounds(places: &[PlaceMatch]) -> Option<Bounds> {
    let mut selection: Option<Bounds> = None;
    for place in places {
        match (&mut selection, place.viewport) {
            (Some(acc), Some(viewport)) => acc.union(&viewport),
            (Some(acc), None) => acc.extend(place.location),
            (None, Some(viewport)) => selection = Some(viewport),
            (None, None) => selection = Some(Bounds::from_point(place.location)),
        }
    }
    selection
}
