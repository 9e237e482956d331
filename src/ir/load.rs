//! Loading a parsed service description from disk.
//!
//! This is the single adapter boundary for IR shape versioning: legacy
//! field spellings (`returnType`) are mapped onto the canonical shape here
//! and nowhere else. Rules only ever see the canonical IR.

use super::types::Service;
use std::path::Path;
use tracing::debug;

/// Load a service IR document (YAML or JSON, selected by extension).
pub fn load_service(path: &Path) -> anyhow::Result<Service> {
    let content = std::fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false);

    let mut service: Service = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    // Single-document services may omit sourcePaths; address the document
    // by the path it was loaded from.
    if service.source_paths.is_empty() {
        service.source_paths = vec![path.display().to_string()];
    }

    debug!(
        path = %path.display(),
        interfaces = service.interfaces.len(),
        types = service.types.len(),
        "loaded service IR"
    );

    Ok(service)
}
