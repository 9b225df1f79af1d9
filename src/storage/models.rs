use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How an image file should be presented when requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayType {
    /// Rich preview page with title, description and theme color.
    Embed,
    /// Anything else: raw bytes, or a link page when `show_link` is set.
    #[default]
    Raw,
}

impl DisplayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayType::Embed => "embed",
            DisplayType::Raw => "raw",
        }
    }
}

impl From<&str> for DisplayType {
    fn from(value: &str) -> Self {
        match value {
            "embed" => DisplayType::Embed,
            _ => DisplayType::Raw,
        }
    }
}

// Stored as a plain string so unrecognised values written by other tools
// still decode (as `Raw`) instead of failing the whole record.
impl Serialize for DisplayType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DisplayType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(DisplayType::from(value.as_str()))
    }
}

/// The account that owns a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uploader {
    /// Storage path segment; objects live under `{uid}/`.
    pub uid: String,
    pub username: String,
}

/// Per-file embed overrides. `None` means "derive at render time".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedSettings {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// A file record stored in redb, keyed by filename
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub filename: String,
    pub mimetype: String,
    pub uploader: Uploader,
    pub date_uploaded: DateTime<Utc>,

    // Display preferences
    #[serde(default)]
    pub display_type: DisplayType,
    #[serde(default)]
    pub show_link: bool,
    #[serde(default)]
    pub embed: EmbedSettings,
}

impl FileRecord {
    /// Coarse media category: the part of the mimetype before `/`.
    pub fn category(&self) -> &str {
        self.mimetype.split('/').next().unwrap_or("")
    }

    /// Object store key: `{uploader.uid}/{filename}`.
    pub fn object_key(&self) -> String {
        format!("{}/{}", self.uploader.uid, self.filename)
    }
}

/// An invisible URL: an opaque public id that points at a real filename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvisibleUrl {
    pub id: String,
    pub filename: String,
}
