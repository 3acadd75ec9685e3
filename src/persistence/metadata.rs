use crate::session::Identity;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// App metadata stored in meta.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Profile whose task collection is currently loaded, if any.
    #[serde(default)]
    pub active_profile: Option<Identity>,
    /// Profiles that have signed in before, so `login` can reuse their id
    /// (and therefore their stored collection) instead of minting a new one.
    #[serde(default)]
    pub profiles: Vec<Identity>,
}

/// Load app metadata from the meta.json file
pub fn load_metadata<P: AsRef<Path>>(path: P) -> Result<AppMetadata> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(AppMetadata::default());
    }

    let content = std::fs::read_to_string(path)?;
    let metadata: AppMetadata = serde_json::from_str(&content)?;
    Ok(metadata)
}

/// Save app metadata to the meta.json file
pub fn save_metadata<P: AsRef<Path>>(path: P, metadata: &AppMetadata) -> Result<()> {
    let json = serde_json::to_string_pretty(metadata)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_metadata() {
        let temp_dir = tempdir().unwrap();
        let meta_path = temp_dir.path().join("meta.json");

        let metadata = load_metadata(&meta_path).unwrap();
        assert!(metadata.active_profile.is_none());
        assert!(metadata.profiles.is_empty());
    }

    #[test]
    fn test_save_and_load_metadata() {
        let temp_dir = tempdir().unwrap();
        let meta_path = temp_dir.path().join("meta.json");

        let identity = Identity {
            id: "18f2c9a1b3".to_string(),
            display_name: "ploy".to_string(),
            avatar_url: Some("https://example.com/a.png".to_string()),
        };
        let metadata = AppMetadata {
            active_profile: Some(identity.clone()),
            profiles: vec![identity],
        };

        save_metadata(&meta_path, &metadata).unwrap();

        let loaded = load_metadata(&meta_path).unwrap();
        let active = loaded.active_profile.unwrap();
        assert_eq!(active.id, "18f2c9a1b3");
        assert_eq!(active.display_name, "ploy");
        assert_eq!(loaded.profiles.len(), 1);
    }
}
