use thiserror::Error;

/// Top-level error type for the roadpath kernel.
#[derive(Debug, Error)]
pub enum RoadpathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while building trajectories.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("composite trajectory needs at least one part")]
    EmptyComposite,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised while building tolerance parameter sets.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Convenience type alias for results using [`RoadpathError`].
pub type Result<T> = std::result::Result<T, RoadpathError>;
