use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("cannot read territory file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("territory file is not valid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("territory feature collection has no features")]
    Empty,
    #[error("territory geometry must be a Polygon or MultiPolygon, found {0}")]
    UnsupportedGeometry(String),
    #[error("territory coordinates are malformed: {0}")]
    Coordinates(String),
}
