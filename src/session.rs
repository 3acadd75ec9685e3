use crate::clock::Clock;
use crate::domain::generate_id;
use crate::persistence::{load_metadata, meta_file, save_metadata, tasks_key};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A local profile: the opaque id namespaces the stored task collection,
/// the rest is display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Who the current task collection belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Anonymous,
    SignedIn(Identity),
}

impl Session {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::Anonymous => None,
            Session::SignedIn(identity) => Some(identity),
        }
    }

    /// Storage key for this session's task collection.
    pub fn storage_key(&self) -> String {
        tasks_key(self.identity())
    }

    /// Name to show in the header.
    pub fn display_name(&self) -> &str {
        match self {
            Session::Anonymous => "anonymous",
            Session::SignedIn(identity) => &identity.display_name,
        }
    }
}

/// Session recorded in meta.json, or anonymous when none is.
pub fn current_session() -> Result<Session> {
    let metadata = load_metadata(meta_file()?)?;
    Ok(match metadata.active_profile {
        Some(identity) => Session::SignedIn(identity),
        None => Session::Anonymous,
    })
}

/// Activate the profile with the given name, creating it on first sign-in.
/// The previous session's collection stays untouched under its own key.
pub fn sign_in(name: &str, clock: &dyn Clock) -> Result<Identity> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Profile name must not be empty");
    }

    let meta_path = meta_file()?;
    let mut metadata = load_metadata(&meta_path)?;

    let identity = match metadata
        .profiles
        .iter()
        .find(|p| p.display_name == name)
        .cloned()
    {
        Some(existing) => existing,
        None => {
            let identity = Identity {
                id: generate_id(clock.now()),
                display_name: name.to_string(),
                avatar_url: None,
            };
            metadata.profiles.push(identity.clone());
            identity
        }
    };

    metadata.active_profile = Some(identity.clone());
    save_metadata(&meta_path, &metadata)?;
    Ok(identity)
}

/// Clear the active profile, returning whoever was signed in.
pub fn sign_out() -> Result<Option<Identity>> {
    let meta_path = meta_file()?;
    let mut metadata = load_metadata(&meta_path)?;
    let previous = metadata.active_profile.take();
    if previous.is_some() {
        save_metadata(&meta_path, &metadata)?;
    }
    Ok(previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(name: &str) -> Identity {
        Identity {
            id: format!("id-{name}"),
            display_name: name.to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn test_anonymous_session_uses_default_key() {
        assert_eq!(Session::Anonymous.storage_key(), "tasks.json");
        assert_eq!(Session::Anonymous.display_name(), "anonymous");
    }

    #[test]
    fn test_signed_in_session_scopes_key_by_id() {
        let session = Session::SignedIn(identity("ploy"));
        assert_eq!(session.storage_key(), "tasks_id-ploy.json");
        assert_eq!(session.display_name(), "ploy");
    }

    #[test]
    fn test_identity_serde_round_trip() {
        let original = identity("ploy");
        let json = serde_json::to_string(&original).unwrap();
        let restored: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
