//! Symbol tables and icon resolution for fingerprint display.
//!
//! A [`SymbolTable`] maps small 1-based indices to item display names.
//! Tables are owned by the caller (typically loaded from a per-game asset
//! file) and passed into the codec read-only.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ordered mapping from 1-based symbol index to a display name.
///
/// Serializes as a plain JSON array of names, matching the shape of
/// per-game icon manifests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolTable {
    names: Vec<String>,
}

impl SymbolTable {
    /// Build a table from display names, in index order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a table from a JSON array of names.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up a display name by 1-based index.
    pub fn name(&self, index: u32) -> Option<&str> {
        if index == 0 {
            return None;
        }
        self.names.get(index as usize - 1).map(String::as_str)
    }

    /// Iterate `(index, name)` pairs with 1-based indices.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (i as u32 + 1, name.as_str()))
    }
}

/// Resolves a symbol's display name to a renderable icon path.
///
/// The returned string is embedded verbatim into the rendered markup, so
/// it can be a filesystem path, a URL, or any reference the presentation
/// layer understands.
pub trait IconResolver {
    fn icon_path(&self, name: &str) -> String;
}

/// Adapter so a plain closure can serve as an [`IconResolver`].
pub struct IconFn<F>(pub F);

impl<F> IconResolver for IconFn<F>
where
    F: Fn(&str) -> String,
{
    fn icon_path(&self, name: &str) -> String {
        (self.0)(name)
    }
}

/// Resolves icons as `<root>/<name>.png` under an asset directory.
#[derive(Debug, Clone)]
pub struct DirectoryIcons {
    root: PathBuf,
}

impl DirectoryIcons {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl IconResolver for DirectoryIcons {
    fn icon_path(&self, name: &str) -> String {
        self.root.join(format!("{name}.png")).display().to_string()
    }
}
