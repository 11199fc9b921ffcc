use crate::loader::Resource;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to bring up the reference tables.
///
/// Any one of these aborts the whole load; there is no partially initialised
/// [`crate::ReferenceData`].
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Data file not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse {resource}: {source}")]
    Parse {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The resource the error relates to, when known.
    pub fn resource(&self) -> Option<Resource> {
        match self {
            LoadError::Parse { resource, .. } => Some(*resource),
            LoadError::Missing(path) | LoadError::Io { path, .. } => path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(Resource::from_file_name),
        }
    }
}
