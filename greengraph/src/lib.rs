//! # Greengraph
//!
//! `greengraph` measures how green the land is along a straight line
//! between two named places, by counting green pixels in satellite
//! maps sampled at evenly spaced points.

mod error;
mod geocode;
mod graph;
mod interpolate;
mod math;

pub use {
    crate::{
        error::GreengraphError,
        geocode::{Candidate, Geocoder, Nominatim, NOMINATIM_URL},
        graph::{Greengraph, GreengraphBuilder, SamplePoint, DEFAULT_THRESHOLD},
        interpolate::interpolate,
    },
    geo, satmap,
};

/// Floating point type used for coordinates.
pub type C = satmap::C;
