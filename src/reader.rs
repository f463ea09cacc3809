use serde_yaml::Value;
use std::path::Path;
use tracing::warn;

/// Reads `<section>.image` from an environment YAML file.
///
/// Returns an empty string when the file is absent, unreadable, not YAML,
/// or lacks the field. Only the last three are logged.
pub fn read_image_ref(path: &Path, section: &str) -> String {
    if !path.exists() {
        return String::new();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return String::new();
        }
    };

    let document: Value = match serde_yaml::from_str(&contents) {
        Ok(document) => document,
        Err(e) => {
            warn!("Failed to parse {}: {}", path.display(), e);
            return String::new();
        }
    };

    match lookup_image(&document, section) {
        Some(image) => image.to_string(),
        None => {
            warn!("{} has no string at {}.image", path.display(), section);
            String::new()
        }
    }
}

fn lookup_image<'a>(document: &'a Value, section: &str) -> Option<&'a str> {
    document.get(section)?.get("image")?.as_str()
}
