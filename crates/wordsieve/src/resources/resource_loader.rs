//! # Resource Loader

use std::path::PathBuf;

use crate::{errors::WSResult, resources::KeyedResource};

/// Resolves remote resources to local files.
pub trait ResourceLoader {
    /// Resolve a resource to a local path, fetching it if needed.
    fn load_resource_path(
        &mut self,
        resource: &KeyedResource,
    ) -> WSResult<PathBuf>;
}

#[cfg(feature = "download")]
impl ResourceLoader for crate::disk_cache::WordsieveDiskCache {
    fn load_resource_path(
        &mut self,
        resource: &KeyedResource,
    ) -> WSResult<PathBuf> {
        self.load_cached_path(
            resource.key.as_slice(),
            resource.urls.as_slice(),
            resource.hash.as_deref(),
            true,
        )
        .map_err(|e| crate::errors::WordsieveError::External(format!("{e:#}")))
    }
}
