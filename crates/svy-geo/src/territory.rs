//! Survey territory polygons and the process-wide territory cache.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::Deserialize;
use serde_json::Value;
use svy_core::geometry::{GeoFeature, Point};

use crate::error::GeoError;

/// Process-scoped survey territory.
/// Resolved on the first call to [`survey_territory`], including the
/// "no territory" outcome, and never refreshed afterwards.
static TERRITORY: OnceLock<Option<Arc<SurveyTerritory>>> = OnceLock::new();

/// Linear ring: closed or open sequence of positions.
type Ring = Vec<Point>;

/// Boundary of the surveyed area: one or more polygons, each an exterior ring
/// followed by optional holes.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyTerritory {
    polygons: Vec<Vec<Ring>>,
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<GeoFeature>,
}

impl SurveyTerritory {
    /// Territory made of a single polygon (exterior ring, then holes).
    #[must_use]
    pub fn from_polygon(rings: Vec<Ring>) -> Self {
        Self {
            polygons: vec![rings],
        }
    }

    /// Territory made of several polygons.
    #[must_use]
    pub const fn from_polygons(polygons: Vec<Vec<Ring>>) -> Self {
        Self { polygons }
    }

    /// Whether the point lies inside any polygon of the territory.
    ///
    /// Even-odd rule over every ring of a polygon, so points inside a hole are
    /// outside. Points exactly on an edge may fall either way.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.polygons.iter().any(|rings| {
            rings
                .iter()
                .filter(|ring| ring_crosses(ring, point))
                .count()
                % 2
                == 1
        })
    }

    /// Build a territory from a GeoJSON feature collection document.
    ///
    /// Only the first feature is used.
    ///
    /// # Errors
    ///
    /// Returns a `GeoError` when the document is not a feature collection,
    /// has no features, or its first geometry is not a polygon or
    /// multipolygon with well-formed coordinates.
    pub fn from_geojson(json: &str) -> Result<Self, GeoError> {
        let collection: FeatureCollection = serde_json::from_str(json)?;
        let feature = collection.features.into_iter().next().ok_or(GeoError::Empty)?;
        let geometry = feature
            .geometry
            .ok_or_else(|| GeoError::UnsupportedGeometry("null".into()))?;

        match geometry.kind.as_str() {
            "Polygon" => Ok(Self::from_polygon(parse_polygon(&geometry.coordinates)?)),
            "MultiPolygon" => {
                let polygons = geometry
                    .coordinates
                    .as_array()
                    .ok_or_else(|| GeoError::Coordinates("expected an array of polygons".into()))?
                    .iter()
                    .map(parse_polygon)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::from_polygons(polygons))
            }
            other => Err(GeoError::UnsupportedGeometry(other.to_string())),
        }
    }
}

/// Whether a horizontal ray cast east from `point` crosses the ring an odd
/// number of times.
fn ring_crosses(ring: &[Point], point: Point) -> bool {
    let mut inside = false;
    let Some(mut previous) = ring.last().copied() else {
        return false;
    };
    for &current in ring {
        if (current.lat > point.lat) != (previous.lat > point.lat) {
            let lon_at_lat = (previous.lon - current.lon) * (point.lat - current.lat)
                / (previous.lat - current.lat)
                + current.lon;
            if point.lon < lon_at_lat {
                inside = !inside;
            }
        }
        previous = current;
    }
    inside
}

fn parse_polygon(value: &Value) -> Result<Vec<Ring>, GeoError> {
    let rings = value
        .as_array()
        .ok_or_else(|| GeoError::Coordinates("expected an array of rings".into()))?;
    if rings.is_empty() {
        return Err(GeoError::Coordinates("polygon has no rings".into()));
    }
    rings.iter().map(parse_ring).collect()
}

fn parse_ring(value: &Value) -> Result<Ring, GeoError> {
    let positions = value
        .as_array()
        .ok_or_else(|| GeoError::Coordinates("expected an array of positions".into()))?;
    if positions.len() < 3 {
        return Err(GeoError::Coordinates(format!(
            "ring has {} positions, at least 3 required",
            positions.len()
        )));
    }
    positions
        .iter()
        .map(|position| {
            let values = position.as_array().filter(|values| values.len() >= 2);
            match values.map(|values| (values[0].as_f64(), values[1].as_f64())) {
                Some((Some(lon), Some(lat))) => Ok(Point::new(lon, lat)),
                _ => Err(GeoError::Coordinates(format!("invalid position {position}"))),
            }
        })
        .collect()
}

/// Read and parse the territory file at `path`.
///
/// # Errors
///
/// Returns `GeoError::Io` if the file cannot be read, or any error of
/// [`SurveyTerritory::from_geojson`].
pub fn load_territory(path: &Path) -> Result<SurveyTerritory, GeoError> {
    let content = std::fs::read_to_string(path).map_err(|source| GeoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    SurveyTerritory::from_geojson(&content)
}

/// The survey territory for this process.
///
/// The first call loads `path` (when given) and memoizes the outcome; later
/// calls return that outcome whatever path they pass. Load failures are logged
/// and yield `None`, which audit checks treat as "no territory configured".
/// Call once at startup, before audits run concurrently.
pub fn survey_territory(path: Option<&Path>) -> Option<Arc<SurveyTerritory>> {
    TERRITORY
        .get_or_init(|| {
            let Some(path) = path else {
                tracing::debug!("no survey territory configured; territory checks disabled");
                return None;
            };
            match load_territory(path) {
                Ok(territory) => {
                    tracing::info!(path = %path.display(), "survey territory loaded");
                    Some(Arc::new(territory))
                }
                Err(error) => {
                    tracing::error!(path = %path.display(), %error, "failed to load survey territory; territory checks disabled");
                    None
                }
            }
        })
        .clone()
}
