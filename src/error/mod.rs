use crate::config::ConfigPathError;
use crate::geometry::CoordinateError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),

    #[error(transparent)]
    ConfigPath(#[from] ConfigPathError),
}
