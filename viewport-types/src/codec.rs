//! Conversion between [`ViewState`] and the flat JSON string exchanged with
//! the embedding host.
//!
//! The wire schema is declared as typed records rather than inferred from key
//! shapes, so both directions are plain serde derives. Outbound records carry
//! the viewport corners flattened to `minx`/`miny`/`maxx`/`maxy`; those fields
//! are telemetry for the host and are ignored when a record comes back in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Coordinate, ViewState};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed location payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Outbound wire record. `search` is present only when the trimmed search
/// text is non-empty.
#[derive(Debug, Serialize)]
struct LocationRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    zoom: u32,
    center: Coordinate,
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
}

/// The subset of a [`ViewState`] a host may send back. Keys absent from the
/// input stay `None`; unknown keys pass through unexamined.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationUpdate {
    pub zoom: Option<u32>,
    pub center: Option<Coordinate>,
    pub search: Option<String>,
}

pub fn serialize(state: &ViewState) -> Result<String, CodecError> {
    let record = LocationRecord {
        search: state
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty()),
        zoom: state.zoom,
        center: state.center,
        minx: state.bounds.sw.lng,
        miny: state.bounds.sw.lat,
        maxx: state.bounds.ne.lng,
        maxy: state.bounds.ne.lat,
    };
    Ok(serde_json::to_string(&record)?)
}

pub fn deserialize(input: &str) -> Result<LocationUpdate, CodecError> {
    Ok(serde_json::from_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bounds;

    fn sample_state(search: Option<&str>) -> ViewState {
        ViewState {
            zoom: 5,
            center: Coordinate::new(10.0, 20.0),
            bounds: Bounds::new(Coordinate::new(5.0, 15.0), Coordinate::new(15.0, 25.0)),
            search: search.map(str::to_string),
        }
    }

    #[test]
    fn serializes_flat_record_with_corner_fields() {
        let json = serialize(&sample_state(Some("Paris"))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["zoom"], 5);
        assert_eq!(value["center"]["lat"], 10.0);
        assert_eq!(value["center"]["lng"], 20.0);
        assert_eq!(value["minx"], 15.0);
        assert_eq!(value["miny"], 5.0);
        assert_eq!(value["maxx"], 25.0);
        assert_eq!(value["maxy"], 15.0);
        assert_eq!(value["search"], "Paris");
    }

    #[test]
    fn blank_search_is_omitted() {
        for search in [None, Some(""), Some("   ")] {
            let json = serialize(&sample_state(search)).unwrap();
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert!(value.get("search").is_none(), "got search in {json}");
        }
    }

    #[test]
    fn search_text_is_trimmed_on_the_wire() {
        let json = serialize(&sample_state(Some("  Paris "))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["search"], "Paris");
    }

    #[test]
    fn round_trip_recovers_zoom_center_and_search() {
        let state = sample_state(Some("Paris"));
        let update = deserialize(&serialize(&state).unwrap()).unwrap();
        assert_eq!(update.zoom, Some(state.zoom));
        let center = update.center.unwrap();
        assert!((center.lat - state.center.lat).abs() < 1e-9);
        assert!((center.lng - state.center.lng).abs() < 1e-9);
        assert_eq!(update.search.as_deref(), Some("Paris"));
    }

    #[test]
    fn deserializes_partial_updates() {
        let update = deserialize(r#"{"zoom":3,"center":{"lat":1,"lng":2}}"#).unwrap();
        assert_eq!(update.zoom, Some(3));
        assert_eq!(update.center, Some(Coordinate::new(1.0, 2.0)));
        assert_eq!(update.search, None);
    }

    #[test]
    fn corner_telemetry_fields_are_ignored_on_input() {
        let json = serialize(&sample_state(None)).unwrap();
        let update = deserialize(&json).unwrap();
        assert_eq!(update.zoom, Some(5));
        assert_eq!(update.search, None);
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let err = deserialize("{not json").unwrap_err();
        assert!(matches!(err, CodecError::Parse(_)));
    }
}
