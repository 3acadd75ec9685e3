use crate::session::Identity;

/// Default task-collection key, used when no profile is signed in.
const TASKS_KEY: &str = "tasks.json";

/// Theme preference key. Deliberately not identity-scoped: the colour
/// scheme belongs to the terminal, not to the profile.
const THEME_KEY: &str = "theme";

/// Storage key for the task collection, suffixed with the profile id when a
/// profile is active so each profile keeps its own checklist.
pub fn tasks_key(identity: Option<&Identity>) -> String {
    match identity {
        Some(identity) => format!("tasks_{}.json", identity.id),
        None => TASKS_KEY.to_string(),
    }
}

/// Storage key for the theme preference.
pub fn theme_key() -> &'static str {
    THEME_KEY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_key_without_identity() {
        assert_eq!(tasks_key(None), "tasks.json");
    }

    #[test]
    fn test_tasks_key_scoped_by_identity() {
        let identity = Identity {
            id: "18f2c9a1b3".to_string(),
            display_name: "ploy".to_string(),
            avatar_url: None,
        };
        assert_eq!(tasks_key(Some(&identity)), "tasks_18f2c9a1b3.json");
    }

    #[test]
    fn test_theme_key_is_not_identity_scoped() {
        assert_eq!(theme_key(), "theme");
    }
}
