//! Client for a Nominatim-format geocoding service.
//!
//! The endpoint is configurable through `GEOPICK_GEOCODER_URL`; any service
//! speaking the `/search?format=jsonv2` dialect works. Result validation is
//! the provider's job: records we cannot read are dropped, not reported.

use serde::Deserialize;
use viewport_types::{Bounds, Coordinate, PlaceMatch};

/// One record of a jsonv2 search response. Coordinates arrive as strings;
/// `boundingbox` is `[south, north, west, east]`, also as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeRecord {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub boundingbox: Option<Vec<String>>,
}

impl GeocodeRecord {
    /// Converts the record to a [`PlaceMatch`]. Unparseable coordinates drop
    /// the record; an unparseable bounding box degrades to a point-only
    /// match, which the viewport logic handles by extending around the point.
    pub fn into_place(self) -> Option<PlaceMatch> {
        let location = Coordinate::new(self.lat.parse().ok()?, self.lon.parse().ok()?);
        let viewport = self.boundingbox.as_deref().and_then(parse_bounding_box);
        Some(PlaceMatch {
            name: self.display_name,
            location,
            viewport,
        })
    }
}

fn parse_bounding_box(raw: &[String]) -> Option<Bounds> {
    let [south, north, west, east] = raw else {
        return None;
    };
    Some(Bounds::new(
        Coordinate::new(south.parse().ok()?, west.parse().ok()?),
        Coordinate::new(north.parse().ok()?, east.parse().ok()?),
    ))
}

#[cfg(feature = "ssr")]
pub use ssr_client::{search, GeocodeError};

#[cfg(feature = "ssr")]
mod ssr_client {
    use super::GeocodeRecord;
    use thiserror::Error;
    use viewport_types::{Bounds, PlaceMatch};

    const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
    const USER_AGENT: &str = concat!("geopick/", env!("CARGO_PKG_VERSION"));
    const RESULT_LIMIT: u8 = 8;

    #[derive(Debug, Error)]
    pub enum GeocodeError {
        #[error("geocoder request failed: {0}")]
        Transport(#[from] reqwest::Error),
    }

    fn geocoder_url() -> String {
        std::env::var("GEOPICK_GEOCODER_URL")
            .unwrap_or_else(|_| DEFAULT_GEOCODER_URL.to_string())
    }

    /// Runs a forward search. `bias` nudges result ranking toward the given
    /// viewport without excluding matches outside it.
    pub async fn search(
        query: &str,
        bias: Option<Bounds>,
    ) -> Result<Vec<PlaceMatch>, GeocodeError> {
        let mut params = vec![
            ("format".to_string(), "jsonv2".to_string()),
            ("q".to_string(), query.to_string()),
            ("limit".to_string(), RESULT_LIMIT.to_string()),
        ];
        if let Some(bias) = bias {
            params.push((
                "viewbox".to_string(),
                format!(
                    "{},{},{},{}",
                    bias.sw.lng, bias.sw.lat, bias.ne.lng, bias.ne.lat
                ),
            ));
            params.push(("bounded".to_string(), "0".to_string()));
        }

        let records: Vec<GeocodeRecord> = reqwest::Client::new()
            .get(format!("{}/search", geocoder_url()))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let total = records.len();
        let places: Vec<PlaceMatch> = records
            .into_iter()
            .filter_map(GeocodeRecord::into_place)
            .collect();
        tracing::debug!(
            "geocoder returned {} records for '{}', kept {}",
            total,
            query,
            places.len()
        );
        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> GeocodeRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn record_with_bounding_box_becomes_a_viewport_match() {
        let place = record(
            r#"{
                "display_name": "Paris, France",
                "lat": "48.8588897",
                "lon": "2.3200410",
                "boundingbox": ["48.8155755", "48.9021560", "2.2241220", "2.4697602"]
            }"#,
        )
        .into_place()
        .unwrap();

        assert_eq!(place.name, "Paris, France");
        assert!((place.location.lat - 48.8588897).abs() < 1e-9);
        let viewport = place.viewport.unwrap();
        assert!((viewport.sw.lat - 48.8155755).abs() < 1e-9);
        assert!((viewport.sw.lng - 2.2241220).abs() < 1e-9);
        assert!((viewport.ne.lat - 48.9021560).abs() < 1e-9);
        assert!((viewport.ne.lng - 2.4697602).abs() < 1e-9);
        assert!(viewport.contains(place.location));
    }

    #[test]
    fn missing_bounding_box_yields_point_only_match() {
        let place = record(r#"{"display_name": "Somewhere", "lat": "1.5", "lon": "2.5"}"#)
            .into_place()
            .unwrap();
        assert!(place.viewport.is_none());
    }

    #[test]
    fn unparseable_bounding_box_degrades_to_point_only() {
        let place = record(
            r#"{
                "display_name": "Odd",
                "lat": "1.5",
                "lon": "2.5",
                "boundingbox": ["a", "b", "c", "d"]
            }"#,
        )
        .into_place()
        .unwrap();
        assert!(place.viewport.is_none());

        let short_box = record(
            r#"{"display_name": "Short", "lat": "1.5", "lon": "2.5", "boundingbox": ["1", "2"]}"#,
        )
        .into_place()
        .unwrap();
        assert!(short_box.viewport.is_none());
    }

    #[test]
    fn unparseable_coordinates_drop_the_record() {
        let dropped = record(r#"{"display_name": "Bad", "lat": "north", "lon": "2.5"}"#);
        assert!(dropped.into_place().is_none());
    }
}
