use serde::{Deserialize, Serialize};

/// Catalog behavior knobs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Maximum number of records the catalog will hold. `None` (the
    /// default) means unbounded, matching the original accumulate-forever
    /// behavior; set a limit to fail fast instead of eventually hitting the
    /// backend's storage quota.
    pub capacity: Option<usize>,
}

impl CatalogConfig {
    /// Config with a record capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
        }
    }
}
