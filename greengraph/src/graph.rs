use crate::{interpolate, Geocoder, GreengraphError, C};
use geo::geometry::Coord;
use log::{debug, info};
use satmap::{ImageryProvider, MapParams, SatelliteMap};

/// Dominance threshold used when none is given.
pub const DEFAULT_THRESHOLD: f32 = 1.1;

/// One sampled location along the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub location: Coord<C>,

    /// Number of pixels classified green in the map centered on
    /// `location`.
    pub green_pixels: usize,
}

/// Measures greenness along the straight line between two places.
pub struct Greengraph<G, I> {
    start: String,
    end: String,
    geocoder: G,
    imagery: I,
    threshold: f32,
    map_params: MapParams,
}

impl<G, I> Greengraph<G, I>
where
    G: Geocoder,
    I: ImageryProvider,
{
    /// Returns a graph from `start` to `end` using the default
    /// threshold and map parameters.
    pub fn new(start: impl Into<String>, end: impl Into<String>, geocoder: G, imagery: I) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            geocoder,
            imagery,
            threshold: DEFAULT_THRESHOLD,
            map_params: MapParams::default(),
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Returns the location of the first geocoding candidate for
    /// `place`.
    pub fn geolocate(&self, place: &str) -> Result<Coord<C>, GreengraphError> {
        self.geocoder
            .geocode(place)?
            .into_iter()
            .next()
            .map(|candidate| candidate.location)
            .ok_or_else(|| GreengraphError::Resolution(place.to_owned()))
    }

    /// Fetches the map centered on `location`.
    pub fn sample_at(&self, location: Coord<C>) -> Result<SatelliteMap, GreengraphError> {
        Ok(SatelliteMap::fetch(&self.imagery, location, &self.map_params)?)
    }

    /// Returns the green pixel count at each of `steps` evenly spaced
    /// locations from start to end.
    pub fn sample_between(&self, steps: usize) -> Result<Vec<usize>, GreengraphError> {
        Ok(self
            .sample_points(steps)?
            .into_iter()
            .map(|sample| sample.green_pixels)
            .collect())
    }

    pub fn sample_points(&self, steps: usize) -> Result<Vec<SamplePoint>, GreengraphError> {
        self.sample_points_with(steps, |_, _| {})
    }

    /// Same as [`sample_points`](Self::sample_points), calling
    /// `inspect` with each sample's index as soon as it's measured.
    ///
    /// Any failure aborts the whole path.
    pub fn sample_points_with<F>(
        &self,
        steps: usize,
        mut inspect: F,
    ) -> Result<Vec<SamplePoint>, GreengraphError>
    where
        F: FnMut(usize, &SamplePoint),
    {
        if steps == 0 {
            return Err(GreengraphError::InvalidSteps(steps));
        }

        let start = self.geolocate(&self.start)?;
        let end = self.geolocate(&self.end)?;
        info!(
            "sampling {:?} {start:?} -> {:?} {end:?}; steps: {steps}",
            self.start, self.end
        );

        let path = interpolate(start, end, steps)?;
        let now = std::time::Instant::now();
        let mut samples = Vec::with_capacity(path.len());
        for (idx, location) in path.into_iter().enumerate() {
            let fetch_start = std::time::Instant::now();
            let map = self.sample_at(location)?;
            let green_pixels = map.count_green(self.threshold)?;
            debug!(
                "sample {idx}; location: {location:?}, green: {green_pixels}, exec: {:?}",
                fetch_start.elapsed()
            );
            let sample = SamplePoint {
                location,
                green_pixels,
            };
            inspect(idx, &sample);
            samples.push(sample);
        }
        debug!("path; len: {}, exec: {:?}", samples.len(), now.elapsed());

        Ok(samples)
    }
}

pub struct GreengraphBuilder {
    start: Option<String>,

    end: Option<String>,

    /// Green dominance threshold.
    threshold: f32,

    map_params: MapParams,
}

impl Default for GreengraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GreengraphBuilder {
    pub fn new() -> Self {
        Self {
            start: None,
            end: None,
            threshold: DEFAULT_THRESHOLD,
            map_params: MapParams::default(),
        }
    }

    pub fn start(mut self, place: impl Into<String>) -> Self {
        self.start = Some(place.into());
        self
    }

    pub fn end(mut self, place: impl Into<String>) -> Self {
        self.end = Some(place.into());
        self
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn map_params(mut self, map_params: MapParams) -> Self {
        self.map_params = map_params;
        self
    }

    pub fn build<G, I>(self, geocoder: G, imagery: I) -> Result<Greengraph<G, I>, GreengraphError>
    where
        G: Geocoder,
        I: ImageryProvider,
    {
        let start = self.start.ok_or(GreengraphError::Builder("start"))?;
        let end = self.end.ok_or(GreengraphError::Builder("end"))?;
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(GreengraphError::InvalidThreshold(self.threshold));
        }
        Ok(Greengraph {
            start,
            end,
            geocoder,
            imagery,
            threshold: self.threshold,
            map_params: self.map_params,
        })
    }
}
