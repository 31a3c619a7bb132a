use serde::{Deserialize, Serialize};

pub mod codec;
pub mod host;

/// A geographic point in degrees. Latitude is expected in [-90, 90] and
/// longitude in [-180, 180]; neither is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A rectangular viewport described by its southwest and northeast corners.
/// Longitude wraparound across the antimeridian is not handled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub sw: Coordinate,
    pub ne: Coordinate,
}

impl Bounds {
    pub fn new(sw: Coordinate, ne: Coordinate) -> Self {
        Self { sw, ne }
    }

    /// Degenerate bounds covering a single point.
    pub fn from_point(point: Coordinate) -> Self {
        Self {
            sw: point,
            ne: point,
        }
    }

    /// Grows the bounds just enough to include `point`.
    pub fn extend(&mut self, point: Coordinate) {
        self.sw.lat = self.sw.lat.min(point.lat);
        self.sw.lng = self.sw.lng.min(point.lng);
        self.ne.lat = self.ne.lat.max(point.lat);
        self.ne.lng = self.ne.lng.max(point.lng);
    }

    /// Grows the bounds to the smallest rectangle containing both operands.
    pub fn union(&mut self, other: &Bounds) {
        self.extend(other.sw);
        self.extend(other.ne);
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        point.lat >= self.sw.lat
            && point.lat <= self.ne.lat
            && point.lng >= self.sw.lng
            && point.lng <= self.ne.lng
    }

    pub fn encloses(&self, other: &Bounds) -> bool {
        self.contains(other.sw) && self.contains(other.ne)
    }
}

/// Everything the map is currently showing. Lives only as long as the view is
/// open; read once per serialization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub zoom: u32,
    pub center: Coordinate,
    pub bounds: Bounds,
    pub search: Option<String>,
}

/// One geocoder result. `viewport` is absent for point-only places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceMatch {
    pub name: String,
    pub location: Coordinate,
    pub viewport: Option<Bounds>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_grows_in_every_direction() {
        let mut bounds = Bounds::from_point(Coordinate::new(10.0, 10.0));
        bounds.extend(Coordinate::new(5.0, 20.0));
        assert_eq!(bounds.sw, Coordinate::new(5.0, 10.0));
        assert_eq!(bounds.ne, Coordinate::new(10.0, 20.0));
    }

    #[test]
    fn union_is_smallest_enclosing_rectangle() {
        let mut a = Bounds::new(Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 10.0));
        let b = Bounds::new(Coordinate::new(-5.0, 2.0), Coordinate::new(5.0, 15.0));
        a.union(&b);
        assert_eq!(a.sw, Coordinate::new(-5.0, 0.0));
        assert_eq!(a.ne, Coordinate::new(10.0, 15.0));
        assert!(a.encloses(&b));
    }

    #[test]
    fn contains_is_corner_inclusive() {
        let bounds = Bounds::new(Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 10.0));
        assert!(bounds.contains(Coordinate::new(0.0, 0.0)));
        assert!(bounds.contains(Coordinate::new(10.0, 10.0)));
        assert!(!bounds.contains(Coordinate::new(10.1, 5.0)));
    }

    #[test]
    fn point_bounds_enclose_only_themselves() {
        let point = Coordinate::new(47.6, -117.4);
        let bounds = Bounds::from_point(point);
        assert!(bounds.contains(point));
        assert!(!bounds.contains(Coordinate::new(47.7, -117.4)));
    }
}
