use std::{collections::HashMap, sync::Arc};

use log::warn;

use super::RegionMetadata;

/// Opaque lookup of region metadata, keyed by the CLDR two-letter region
/// code. Codes are matched case-insensitively; the stored key is always
/// ASCII uppercase.
#[derive(Default)]
pub struct MetadataRegistry {
    /// A mapping from a region code to the RegionMetadata for that region.
    region_to_metadata_map: HashMap<String, Arc<RegionMetadata>>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers metadata under its own region id, replacing any previous
    /// entry for that region.
    pub fn insert(&mut self, metadata: RegionMetadata) {
        self.region_to_metadata_map
            .insert(metadata.id.to_ascii_uppercase(), Arc::new(metadata));
    }

    pub fn metadata_for_region(&self, region_code: &str) -> Option<Arc<RegionMetadata>> {
        let metadata = self
            .region_to_metadata_map
            .get(&region_code.to_ascii_uppercase())
            .cloned();
        if metadata.is_none() {
            warn!("Invalid or unknown region code provided: {}", region_code);
        }
        metadata
    }

    pub fn supported_regions(&self) -> Vec<&str> {
        let mut regions = Vec::new();
        for k in self.region_to_metadata_map.keys() {
            regions.push(k.as_str());
        }
        regions
    }
}
