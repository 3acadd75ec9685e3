/// Date partition a task renders under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBucket {
    Today,
    Yesterday,
    Other,
}

impl DayBucket {
    /// Section heading for the list pane.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::Other => "Older",
        }
    }
}

/// Colour scheme for the whole UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored string value ("light" / "dark").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value, defaulting to Light for anything unrecognized.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingTask,
    /// Confirmation modal for a destructive action.
    Confirming,
}
