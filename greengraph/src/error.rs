use satmap::SatmapError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreengraphError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("no geocoding candidates for {0:?}")]
    Resolution(String),

    #[error("geocoding failed: {0}")]
    Geocode(String),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Imagery(#[from] SatmapError),

    #[error("invalid step count {0}, must be at least 1")]
    InvalidSteps(usize),

    #[error("invalid dominance threshold {0}, must be finite and positive")]
    InvalidThreshold(f32),
}
