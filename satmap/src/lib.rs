//! Satellite map samples and vegetation classification.
//!
//! A [`SatelliteMap`] owns one raster fetched for a single coordinate
//! and answers questions about how green it is.
//!
//! # References
//!
//! 1. [Maps Static API](https://developers.google.com/maps/documentation/maps-static/start)
//! 1. [Styled maps](https://developers.google.com/maps/documentation/maps-static/styling)

mod error;
mod mask;
mod provider;

pub use crate::{
    error::SatmapError,
    mask::GreenMask,
    provider::{GoogleStaticMaps, ImageryProvider, MapParams, STATIC_MAPS_URL},
};
pub use geo;
use geo::geometry::Coord;
use image::{DynamicImage, ImageFormat, Rgb, Rgb32FImage};
use std::io::Cursor;

/// Base floating point type used for all coordinates.
pub type C = f64;

/// RGB pixel intensities, each channel in `[0, 1]`.
pub type Raster = Rgb32FImage;

/// One satellite image and the coordinate it is centered on.
#[derive(Debug, Clone)]
pub struct SatelliteMap {
    center: Coord<C>,
    raster: Raster,
}

impl SatelliteMap {
    /// Fetches a raster centered on `center` from `provider`.
    pub fn fetch<P>(provider: &P, center: Coord<C>, params: &MapParams) -> Result<Self, SatmapError>
    where
        P: ImageryProvider + ?Sized,
    {
        let raster = provider.fetch(center, params)?;
        Ok(Self::from_raster(center, raster))
    }

    /// Returns a map built from an already decoded raster.
    pub fn from_raster(center: Coord<C>, raster: Raster) -> Self {
        Self { center, raster }
    }

    pub fn center(&self) -> Coord<C> {
        self.center
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Returns (width, height) in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.raster.dimensions()
    }

    /// Returns a mask of the pixels whose green channel strictly
    /// exceeds `threshold` times both red and blue.
    pub fn classify(&self, threshold: f32) -> Result<GreenMask, SatmapError> {
        let threshold = check_threshold(threshold)?;
        Ok(GreenMask::classify(&self.raster, threshold))
    }

    /// Returns the number of green pixels.
    pub fn count_green(&self, threshold: f32) -> Result<usize, SatmapError> {
        Ok(self.classify(threshold)?.count())
    }

    /// Returns a copy of this map where only the green channel of
    /// green pixels survives.
    pub fn green_raster(&self, threshold: f32) -> Result<Raster, SatmapError> {
        let mask = self.classify(threshold)?;
        let (width, height) = self.dimensions();
        Ok(Raster::from_fn(width, height, |x, y| {
            if mask.get(x, y) == Some(true) {
                Rgb([0.0, self.raster.get_pixel(x, y)[1], 0.0])
            } else {
                Rgb([0.0, 0.0, 0.0])
            }
        }))
    }

    /// Returns [`green_raster`](Self::green_raster) encoded as 16-bit
    /// PNG.
    ///
    /// Channels are quantized to 16 bits, which is exact for rasters
    /// decoded from 8 or 16-bit imagery.
    pub fn render_green(&self, threshold: f32) -> Result<Vec<u8>, SatmapError> {
        let green = DynamicImage::ImageRgb32F(self.green_raster(threshold)?).to_rgb16();
        let mut png = Vec::new();
        green.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }
}

/// Decodes an encoded image (PNG, JPEG, ...) into a [`Raster`].
pub fn decode(bytes: &[u8]) -> Result<Raster, SatmapError> {
    Ok(image::load_from_memory(bytes)?.into_rgb32f())
}

fn check_threshold(threshold: f32) -> Result<f32, SatmapError> {
    if threshold.is_finite() && threshold > 0.0 {
        Ok(threshold)
    } else {
        Err(SatmapError::InvalidThreshold(threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::{decode, Coord, ImageryProvider, MapParams, Raster, SatelliteMap, SatmapError, C};
    use approx::assert_abs_diff_eq;
    use image::Rgb;

    const CENTER: Coord<C> = Coord { y: 111.0, x: 222.0 };

    fn uniform(value: f32) -> SatelliteMap {
        SatelliteMap::from_raster(CENTER, Raster::from_pixel(5, 5, Rgb([value; 3])))
    }

    fn all_green() -> SatelliteMap {
        SatelliteMap::from_raster(CENTER, Raster::from_pixel(5, 5, Rgb([0.0, 1.0, 0.0])))
    }

    #[test]
    fn test_classify_not_green() {
        let map = uniform(1.0);
        for threshold in [1.000_1, 1.1, 2.0, 100.0] {
            let mask = map.classify(threshold).unwrap();
            assert_eq!(mask.dimensions(), (5, 5));
            assert!(mask.iter().all(|green| !green));
        }
    }

    #[test]
    fn test_classify_all_green() {
        let map = all_green();
        for threshold in [0.5, 1.1, 1e30] {
            let mask = map.classify(threshold).unwrap();
            assert!(mask.iter().all(|green| green));
        }
    }

    #[test]
    fn test_count_green() {
        assert_eq!(uniform(1.0).count_green(1.1).unwrap(), 0);
        assert_eq!(uniform(0.3).count_green(1.1).unwrap(), 0);
        assert_eq!(all_green().count_green(1.1).unwrap(), 25);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let raster = Raster::from_fn(7, 3, |x, y| {
            Rgb([x as f32 / 7.0, (x + y) as f32 / 10.0, y as f32 / 3.0])
        });
        let map = SatelliteMap::from_raster(CENTER, raster);
        assert_eq!(map.classify(1.1).unwrap(), map.classify(1.1).unwrap());
        assert_eq!(map.count_green(1.1).unwrap(), map.count_green(1.1).unwrap());
    }

    #[test]
    fn test_invalid_threshold() {
        let map = all_green();
        for threshold in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                map.classify(threshold),
                Err(SatmapError::InvalidThreshold(_))
            ));
            assert!(map.count_green(threshold).is_err());
            assert!(map.render_green(threshold).is_err());
        }
    }

    #[test]
    fn test_green_raster_not_green() {
        let green = uniform(1.0).green_raster(1.1).unwrap();
        assert_eq!(green.dimensions(), (5, 5));
        assert!(green.pixels().all(|pixel| *pixel == Rgb([0.0, 0.0, 0.0])));
    }

    #[test]
    fn test_green_raster_all_green() {
        let raster = Raster::from_fn(5, 5, |x, _| Rgb([0.1, 0.5 + x as f32 / 10.0, 0.2]));
        let map = SatelliteMap::from_raster(CENTER, raster.clone());
        let green = map.green_raster(1.1).unwrap();
        for (src, dst) in raster.pixels().zip(green.pixels()) {
            assert_eq!(*dst, Rgb([0.0, src[1], 0.0]));
        }
    }

    #[test]
    fn test_render_green() {
        let png = all_green().render_green(1.1).unwrap();
        let decoded = decode(&png).unwrap();
        assert_eq!(decoded.dimensions(), (5, 5));
        assert!(decoded.pixels().all(|pixel| *pixel == Rgb([0.0, 1.0, 0.0])));

        let png = uniform(1.0).render_green(1.1).unwrap();
        let decoded = decode(&png).unwrap();
        assert!(decoded.pixels().all(|pixel| *pixel == Rgb([0.0, 0.0, 0.0])));
    }

    #[test]
    fn test_render_green_keeps_fractional_intensity() {
        let raster = Raster::from_pixel(3, 3, Rgb([0.05, 0.3, 0.1]));
        let png = SatelliteMap::from_raster(CENTER, raster).render_green(1.1).unwrap();
        let decoded = decode(&png).unwrap();
        for pixel in decoded.pixels() {
            assert_eq!((pixel[0], pixel[2]), (0.0, 0.0));
            assert_abs_diff_eq!(pixel[1], 0.3, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode(b"<html>quota exceeded</html>"),
            Err(SatmapError::Image(_))
        ));
    }

    struct Fixed(Raster);

    impl ImageryProvider for Fixed {
        fn fetch(&self, _center: Coord<C>, _params: &MapParams) -> Result<Raster, SatmapError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_fetch() {
        let provider = Fixed(Raster::from_pixel(4, 2, Rgb([0.0, 1.0, 0.0])));
        let map = SatelliteMap::fetch(&provider, CENTER, &MapParams::default()).unwrap();
        assert_eq!(map.center(), CENTER);
        assert_eq!(map.dimensions(), (4, 2));
        assert_eq!(map.count_green(1.1).unwrap(), 8);
    }
}
