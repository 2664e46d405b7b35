use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

use crate::commands::Builtin;
use crate::error::ManifestError;

// =============================================================================
// Entries
// =============================================================================

/// Payload of a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileContent {
    /// Plain text, or an image URL / data URL for image files.
    Text(String),
    /// Raw bytes with no textual rendering.
    Binary(Vec<u8>),
}

/// Represents an entry in the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsEntry {
    Directory(BTreeMap<String, FsEntry>),
    File(FileContent),
    /// Binding to a built-in command, found through `PATH`.
    Executable(Builtin),
}

impl FsEntry {
    /// Create a text file.
    pub fn text(content: impl Into<String>) -> Self {
        FsEntry::File(FileContent::Text(content.into()))
    }

    /// Create an empty directory.
    pub fn empty_dir() -> Self {
        FsEntry::Directory(BTreeMap::new())
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, FsEntry::Directory(_))
    }

    /// Children of a directory (directories only).
    pub fn children(&self) -> Option<&BTreeMap<String, FsEntry>> {
        match self {
            FsEntry::Directory(children) => Some(children),
            FsEntry::File(_) | FsEntry::Executable(_) => None,
        }
    }
}

/// Directory entry returned by list_dir
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

// =============================================================================
// Manifest Format
// =============================================================================

/// Node of the JSON manifest describing the tree.
///
/// - object → directory
/// - string → text file
/// - `{"@exec": "ls"}` → executable bound to a built-in
/// - `{"@base64": "..."}` → binary file
#[derive(Deserialize)]
#[serde(untagged)]
enum ManifestNode {
    Executable(ExecutableRef),
    Binary(BinaryRef),
    Text(String),
    Directory(BTreeMap<String, ManifestNode>),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ExecutableRef {
    #[serde(rename = "@exec")]
    command: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BinaryRef {
    #[serde(rename = "@base64")]
    data: String,
}

impl ManifestNode {
    fn into_entry(self, path: &str) -> Result<FsEntry, ManifestError> {
        match self {
            ManifestNode::Text(text) => Ok(FsEntry::text(text)),
            ManifestNode::Binary(BinaryRef { data }) => STANDARD
                .decode(data.as_bytes())
                .map(|bytes| FsEntry::File(FileContent::Binary(bytes)))
                .map_err(|source| ManifestError::Binary {
                    path: path.to_string(),
                    source,
                }),
            ManifestNode::Executable(ExecutableRef { command }) => Builtin::from_name(&command)
                .map(FsEntry::Executable)
                .ok_or_else(|| ManifestError::UnknownCommand {
                    path: path.to_string(),
                    command,
                }),
            ManifestNode::Directory(nodes) => {
                let mut children = BTreeMap::new();
                for (name, node) in nodes {
                    if name.is_empty() || name.contains('/') {
                        return Err(ManifestError::InvalidName(name));
                    }
                    let child_path = format!("{}/{}", path.trim_end_matches('/'), name);
                    children.insert(name, node.into_entry(&child_path)?);
                }
                Ok(FsEntry::Directory(children))
            }
        }
    }
}

// =============================================================================
// Virtual Filesystem
// =============================================================================

/// Read-only in-memory filesystem.
///
/// The root is always a directory at `/`. Paths are absolute, `/`-separated;
/// empty segments are ignored on lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualFs {
    root: FsEntry,
}

impl VirtualFs {
    /// Create a filesystem from the children of `/`.
    pub fn new(root: BTreeMap<String, FsEntry>) -> Self {
        Self {
            root: FsEntry::Directory(root),
        }
    }

    /// Create filesystem from a JSON manifest.
    pub fn from_manifest_json(json: &str) -> Result<Self, ManifestError> {
        let node: ManifestNode = serde_json::from_str(json)?;
        if !matches!(node, ManifestNode::Directory(_)) {
            return Err(ManifestError::RootNotDirectory);
        }
        Ok(Self {
            root: node.into_entry("/")?,
        })
    }

    /// Create empty filesystem (fallback when the manifest fails to load).
    pub fn empty() -> Self {
        Self::new(BTreeMap::new())
    }

    /// The root directory.
    pub fn root(&self) -> &FsEntry {
        &self.root
    }

    /// Walk the tree along `path`.
    ///
    /// Returns `None` when a segment is missing or a non-directory is met
    /// while segments remain. `/` (no segments) yields the root.
    pub fn lookup(&self, path: &str) -> Option<&FsEntry> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(&self.root, |entry, part| entry.children()?.get(part))
    }

    /// List directory contents, directories first, each group by name.
    pub fn list_dir(&self, path: &str) -> Option<Vec<DirEntry>> {
        let children = self.lookup(path)?.children()?;
        let mut items: Vec<DirEntry> = children
            .iter()
            .map(|(name, entry)| DirEntry {
                name: name.clone(),
                is_dir: entry.is_directory(),
            })
            .collect();
        // BTreeMap already yields names in order; a stable sort keeps it
        items.sort_by_key(|entry| !entry.is_dir);
        Some(items)
    }

    /// Check if a path is a directory.
    pub fn is_directory(&self, path: &str) -> bool {
        matches!(self.lookup(path), Some(FsEntry::Directory(_)))
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::empty()
    }
}
