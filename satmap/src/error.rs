use thiserror::Error;

#[derive(Error, Debug)]
pub enum SatmapError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("imagery provider returned HTTP {0}")]
    Status(u16),

    #[error("{0}")]
    Image(#[from] image::ImageError),

    #[error("invalid dominance threshold {0}, must be finite and positive")]
    InvalidThreshold(f32),
}
