mod compiled;
mod region_metadata;
mod registry;

use std::sync::LazyLock;

pub use region_metadata::{CategoryDesc, RegionMetadata};
pub use registry::MetadataRegistry;

/// Registry resolved from the compiled-in metadata snapshot.
pub static METADATA_REGISTRY: LazyLock<MetadataRegistry> =
    LazyLock::new(compiled::compiled_registry);
