use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpatialError {
    #[error("Invalid bounds: {message}")]
    InvalidBounds { message: String },

    #[error("Invalid cell radius {radius}: {reason}")]
    InvalidRadius { radius: f32, reason: String },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
