//! GeoJSON point features as they appear in survey answers.
//!
//! Survey geographies are stored as raw JSON in a [`Geography`]: any non-null
//! answer loads, and [`Geography::as_valid_point`] decides whether it is a
//! usable point. The audit layer then reports malformed geographies instead
//! of the whole interview failing to load.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value, json};

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub lon: f64,
    pub lat: f64,
}

impl Point {
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Whether both coordinates are finite and inside WGS84 bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

/// A GeoJSON geometry object, coordinates left untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Value,
}

/// A GeoJSON feature wrapping a geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoFeature {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub geometry: Option<GeoGeometry>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Map::is_empty"
    )]
    pub properties: Map<String, Value>,
}

/// GeoJSON allows `"properties": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl GeoFeature {
    /// Return the point if this is a `Feature` whose geometry is a `Point`
    /// with exactly two finite, in-range coordinates.
    #[must_use]
    pub fn as_valid_point(&self) -> Option<Point> {
        if self.kind != "Feature" {
            return None;
        }
        let geometry = self.geometry.as_ref()?;
        if geometry.kind != "Point" {
            return None;
        }
        let coordinates = geometry.coordinates.as_array()?;
        let [lon, lat] = coordinates.as_slice() else {
            return None;
        };
        let point = Point::new(lon.as_f64()?, lat.as_f64()?);
        point.is_valid().then_some(point)
    }
}

/// A geography answer as stored in the interview, not yet interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Geography(Value);

impl Geography {
    /// Build a well-formed point feature answer.
    #[must_use]
    pub fn point(lon: f64, lat: f64) -> Self {
        Self(json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [lon, lat] }
        }))
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// The answer read as a GeoJSON feature, if it has that shape.
    #[must_use]
    pub fn as_feature(&self) -> Option<GeoFeature> {
        GeoFeature::deserialize(&self.0).ok()
    }

    #[must_use]
    pub fn as_valid_point(&self) -> Option<Point> {
        self.as_feature()?.as_valid_point()
    }
}

impl From<Value> for Geography {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
