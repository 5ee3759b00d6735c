//! Satellite imagery providers.

use crate::{Raster, SatmapError, C};
use geo::geometry::Coord;
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

/// Google Static Maps endpoint.
pub const STATIC_MAPS_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";

/// Map style which hides every label and feature annotation.
const NO_LABELS_STYLE: &str = "feature:all|element:labels|visibility:off";

/// Parameters of a single imagery request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapParams {
    pub zoom: u8,

    /// Output width in pixels.
    pub width: u32,

    /// Output height in pixels.
    pub height: u32,

    /// Suppress labels and other map annotations.
    pub hide_labels: bool,
}

impl Default for MapParams {
    fn default() -> Self {
        Self {
            zoom: 10,
            width: 400,
            height: 400,
            hide_labels: true,
        }
    }
}

/// Something that can produce a satellite raster centered on a
/// coordinate.
pub trait ImageryProvider {
    fn fetch(&self, center: Coord<C>, params: &MapParams) -> Result<Raster, SatmapError>;
}

impl<T: ImageryProvider + ?Sized> ImageryProvider for &T {
    fn fetch(&self, center: Coord<C>, params: &MapParams) -> Result<Raster, SatmapError> {
        (**self).fetch(center, params)
    }
}

/// [Google Static Maps](https://developers.google.com/maps/documentation/maps-static)
/// satellite imagery.
pub struct GoogleStaticMaps {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoogleStaticMaps {
    /// `timeout` bounds each request; `None` disables it.
    pub fn new(api_key: Option<String>, timeout: Option<Duration>) -> Result<Self, SatmapError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: STATIC_MAPS_URL.to_owned(),
            api_key,
        })
    }

    /// Send requests somewhere other than [`STATIC_MAPS_URL`].
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the query parameters for a map centered on `center`.
    pub fn query(&self, center: Coord<C>, params: &MapParams) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("sensor", "false".to_owned()),
            ("zoom", params.zoom.to_string()),
            ("size", format!("{}x{}", params.width, params.height)),
            ("center", format!("{},{}", center.y, center.x)),
        ];
        if params.hide_labels {
            query.push(("style", NO_LABELS_STYLE.to_owned()));
        }
        query.push(("maptype", "satellite".to_owned()));
        if let Some(key) = &self.api_key {
            query.push(("key", key.clone()));
        }
        query
    }
}

impl ImageryProvider for GoogleStaticMaps {
    fn fetch(&self, center: Coord<C>, params: &MapParams) -> Result<Raster, SatmapError> {
        let query = self.query(center, params);
        debug!("fetching map; center: {center:?}, zoom: {}", params.zoom);
        let response = self.client.get(&self.base_url).query(&query).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SatmapError::Status(status.as_u16()));
        }
        let body = response.bytes()?;
        crate::decode(&body)
    }
}
