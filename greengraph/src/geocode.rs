//! Place name resolution.

use crate::{GreengraphError, C};
use geo::geometry::Coord;
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// OpenStreetMap Nominatim search endpoint.
pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

/// One possible match for a place name.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Provider's description of the match.
    pub name: String,

    pub location: Coord<C>,
}

/// Resolves free-text place names to coordinates.
pub trait Geocoder {
    /// Returns every candidate for `place`, in the provider's order.
    fn geocode(&self, place: &str) -> Result<Vec<Candidate>, GreengraphError>;
}

impl<T: Geocoder + ?Sized> Geocoder for &T {
    fn geocode(&self, place: &str) -> Result<Vec<Candidate>, GreengraphError> {
        (**self).geocode(place)
    }
}

/// [Nominatim](https://nominatim.org/release-docs/latest/api/Search/)
/// geocoder.
pub struct Nominatim {
    client: Client,
    base_url: String,
}

impl Nominatim {
    /// Nominatim's usage policy requires an identifying `user_agent`.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, GreengraphError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: NOMINATIM_URL.to_owned(),
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Geocoder for Nominatim {
    fn geocode(&self, place: &str) -> Result<Vec<Candidate>, GreengraphError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", place), ("format", "json")])
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(GreengraphError::Geocode(format!(
                "HTTP {status} for {place:?}"
            )));
        }
        let candidates = parse_candidates(&response.text()?)?;
        debug!("geocoded {place:?}; candidates: {}", candidates.len());
        Ok(candidates)
    }
}

/// Parses a Nominatim `format=json` search response.
fn parse_candidates(body: &str) -> Result<Vec<Candidate>, GreengraphError> {
    #[derive(Deserialize)]
    struct Place {
        lat: String,
        lon: String,
        #[serde(default)]
        display_name: String,
    }

    fn degrees(val: &str) -> Result<C, GreengraphError> {
        val.trim()
            .parse()
            .map_err(|_| GreengraphError::Geocode(format!("invalid coordinate {val:?}")))
    }

    let places: Vec<Place> = serde_json::from_str(body)?;
    places
        .into_iter()
        .map(|place| {
            Ok(Candidate {
                location: Coord {
                    y: degrees(&place.lat)?,
                    x: degrees(&place.lon)?,
                },
                name: place.display_name,
            })
        })
        .collect()
}
