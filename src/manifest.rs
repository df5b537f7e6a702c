// src/manifest.rs
use crate::core::resolver::{AssetCatalog, APP_ICON_KEY};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// On-disk description of an asset bundle. Keys follow the catalog
/// conventions: bare lowercase characters for the primary images,
/// `<key>.jpeg` for the alternate naming convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub app_icon: Option<String>,
    pub assets: std::collections::HashMap<String, String>,
}

impl AssetManifest {
    pub fn into_catalog(self) -> AssetCatalog {
        let mut catalog = AssetCatalog::new();
        for (key, resource) in self.assets {
            catalog.insert(key, resource);
        }
        if let Some(icon) = self.app_icon {
            catalog.insert(APP_ICON_KEY.to_string(), icon);
        }
        catalog
    }
}

/// Reads and parses an asset manifest. Callers treat any error as
/// "use the builtin catalog"; nothing here is fatal to the translator.
pub fn load_manifest(path: &Path) -> Result<AssetManifest, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let manifest: AssetManifest = serde_json::from_reader(reader)?;

    log::debug!(
        "loaded asset manifest from {} ({} assets)",
        path.display(),
        manifest.assets.len()
    );
    Ok(manifest)
}
