//! Guidebook navigation documents.
//!
//! The guidebook is a tree of directories, each holding one `data.json`
//! document that names the area and lists its sub-areas. A [`BookPath`] is the
//! position in that tree, carried in the page's `path` query parameter.

use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the document in every guidebook directory.
pub const DOCUMENT_FILE: &str = "data.json";

/// Invalid guidebook path input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BookPathError {
    #[error("guidebook path must be relative, got '{0}'")]
    Absolute(String),

    #[error("guidebook path '{0}' contains an empty segment")]
    EmptySegment(String),

    #[error("guidebook path segment '{0}' is not allowed")]
    Reserved(String),

    #[error("guidebook query is not valid UTF-8 after decoding: {0}")]
    Decode(String),
}

/// Position in the guidebook tree, relative to the guidebook root.
///
/// The root itself has no segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BookPath {
    segments: Vec<String>,
}

impl BookPath {
    /// The guidebook root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a `/`-separated path such as `"cascades/index"`.
    ///
    /// # Errors
    ///
    /// Rejects absolute paths, empty segments and `.`/`..`.
    pub fn parse(path: &str) -> Result<Self, BookPathError> {
        if path.starts_with('/') || path.starts_with('\\') {
            return Err(BookPathError::Absolute(path.to_string()));
        }
        let mut segments = Vec::new();
        for segment in path.split('/') {
            segments.push(validate_segment(segment, path)?);
        }
        Ok(Self { segments })
    }

    /// Extracts the `path` parameter from a URL query string.
    ///
    /// A missing or empty parameter yields the root.
    ///
    /// ```
    /// use gear_content::guidebook::BookPath;
    ///
    /// let path = BookPath::from_query("?lang=en&path=cascades%2Findex").unwrap();
    /// assert_eq!(path.to_string(), "cascades/index");
    /// ```
    pub fn from_query(query: &str) -> Result<Self, BookPathError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            if key != "path" {
                continue;
            }
            let value = value.replace('+', " ");
            let decoded =
                urlencoding::decode(&value).map_err(|e| BookPathError::Decode(e.to_string()))?;
            if decoded.is_empty() {
                return Ok(Self::root());
            }
            return Self::parse(&decoded);
        }
        Ok(Self::root())
    }

    /// Path of a sub-area.
    pub fn child(&self, name: &str) -> Result<Self, BookPathError> {
        let segment = validate_segment(name, name)?;
        let mut segments = self.segments.clone();
        segments.push(segment);
        Ok(Self { segments })
    }

    /// Enclosing area, `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.to_vec(),
        })
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Value for the `path` query parameter, `None` at the root.
    pub fn query_value(&self) -> Option<String> {
        (!self.is_root()).then(|| urlencoding::encode(&self.to_string()).into_owned())
    }

    /// Document location below `root`: `<root>/<a>/<b>/data.json`.
    pub fn document(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        path.extend(&self.segments);
        path.join(DOCUMENT_FILE)
    }
}

impl fmt::Display for BookPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

fn validate_segment(segment: &str, whole: &str) -> Result<String, BookPathError> {
    match segment {
        "" => Err(BookPathError::EmptySegment(whole.to_string())),
        "." | ".." => Err(BookPathError::Reserved(segment.to_string())),
        s if s.contains(['/', '\\']) => Err(BookPathError::Absolute(whole.to_string())),
        s => Ok(s.to_string()),
    }
}

/// One entry in an area listing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub name: String,
    /// Directory name of the sub-area; absent or empty for areas without a page.
    #[cfg_attr(feature = "serde", serde(default))]
    pub child: Option<String>,
}

impl Area {
    /// Child directory, if the area can be navigated into.
    pub fn link(&self) -> Option<&str> {
        self.child.as_deref().filter(|c| !c.is_empty())
    }
}

/// Contents of one `data.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaDocument {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub areas: Vec<Area>,
}

impl AreaDocument {
    /// Navigable areas first, then inactive ones, each in document order.
    pub fn ordered_areas(&self) -> Vec<&Area> {
        let (mut linked, inactive): (Vec<&Area>, Vec<&Area>) =
            self.areas.iter().partition(|area| area.link().is_some());
        linked.extend(inactive);
        linked
    }
}
