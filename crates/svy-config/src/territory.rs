//! Survey territory configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TerritoryConfig {
    /// Path to a GeoJSON feature collection whose first feature is the
    /// survey territory polygon.
    #[serde(default)]
    pub geojson_path: String,
}

impl TerritoryConfig {
    pub fn is_configured(&self) -> bool {
        !self.geojson_path.trim().is_empty()
    }

    /// Configured path, or `None` when unset.
    pub fn path(&self) -> Option<PathBuf> {
        self.is_configured()
            .then(|| PathBuf::from(self.geojson_path.trim()))
    }
}
