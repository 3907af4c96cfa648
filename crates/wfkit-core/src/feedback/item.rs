//! Script-filter result items.

use serde::{Serialize, Serializer};

const SYSTEM_ICON_DIR: &str = "/System/Library/CoreServices/CoreTypes.bundle/Contents/Resources";

/// Icon shown next to an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// Informational "i" icon.
    Info,
    /// Caution triangle.
    Warning,
    /// Any other image file.
    Path(String),
}

impl Icon {
    /// Filesystem path of the icon image.
    pub fn path(&self) -> String {
        match self {
            Self::Info => format!("{SYSTEM_ICON_DIR}/ToolbarInfo.icns"),
            Self::Warning => format!("{SYSTEM_ICON_DIR}/AlertCautionIcon.icns"),
            Self::Path(path) => path.clone(),
        }
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct IconJson {
            path: String,
        }

        IconJson { path: self.path() }.serialize(serializer)
    }
}

/// A single result shown by the host UI.
///
/// Built with chained `with_*` calls:
///
/// ```
/// use wfkit_core::{Icon, Item};
///
/// let item = Item::new("log")
///     .with_subtitle("Open workflow's log file")
///     .with_icon(Icon::Info)
///     .with_valid(false);
/// assert_eq!(item.title(), "log");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    autocomplete: Option<String>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    match_text: Option<String>,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<Icon>,
}

impl Item {
    /// Create an actionable item with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            uid: None,
            autocomplete: None,
            match_text: None,
            valid: true,
            icon: None,
        }
    }

    /// Set the second line of text.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Mark whether actioning the item does anything.
    #[must_use]
    pub const fn with_valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    /// Set the identifier the host uses to learn ordering preferences.
    #[must_use]
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Set the text that replaces the query when the user tabs on the item.
    #[must_use]
    pub fn with_autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = Some(autocomplete.into());
        self
    }

    /// Set the text fuzzy filtering runs against instead of the title.
    #[must_use]
    pub fn with_match(mut self, match_text: impl Into<String>) -> Self {
        self.match_text = Some(match_text.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    pub fn autocomplete(&self) -> Option<&str> {
        self.autocomplete.as_deref()
    }

    pub fn match_text(&self) -> Option<&str> {
        self.match_text.as_deref()
    }

    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    pub const fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Text used when filtering: the match text if set, otherwise the title.
    pub fn filter_text(&self) -> &str {
        self.match_text.as_deref().unwrap_or(&self.title)
    }
}
