use serde::{Deserialize, Serialize};
use shoebox_catalog::CatalogConfig;

/// Gallery behavior knobs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Catalog settings (capacity limit).
    pub catalog: CatalogConfig,
}

impl GalleryConfig {
    /// Config with a catalog record capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            catalog: CatalogConfig::with_capacity(capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        assert_eq!(GalleryConfig::default().catalog.capacity, None);
    }

    #[test]
    fn serde_roundtrip() {
        let config = GalleryConfig::with_capacity(10);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GalleryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
