use leptos::prelude::*;
use leptos::server;
use viewport_types::{Bounds, PlaceMatch};

/// Forwards a place query to the geocoder, biased toward the bounds the user
/// currently has on screen.
#[server]
pub async fn search_places(
    query: String,
    bias: Option<Bounds>,
) -> Result<Vec<PlaceMatch>, ServerFnError> {
    match crate::geocode::search(&query, bias).await {
        Ok(places) => Ok(places),
        Err(e) => Err(ServerFnError::new(format!("Geocoder error: {}", e))),
    }
}
