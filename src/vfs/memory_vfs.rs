//! In-Memory Virtual Filesystem
//!
//! The whole filesystem is a mapping from absolute, normalized path to entry,
//! keyed by the full path string rather than a tree of pointers. Lookup is
//! O(1) and serialization order is just sorted keys.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::types::*;

/// In-memory virtual filesystem loaded from a CSV image.
#[derive(Debug)]
pub struct VirtualFilesystem {
    entries: HashMap<String, VfsEntry>,
}

impl VirtualFilesystem {
    /// Create an empty filesystem holding only the root directory.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert("/".to_string(), VfsEntry::Directory);
        Self { entries }
    }

    /// Load a filesystem from a CSV image on the host disk.
    ///
    /// Fails with `NotFound` if the image file does not exist; this is the
    /// only error that is expected to abort startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VfsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(VfsError::NotFound {
                path: path.display().to_string(),
                operation: "load".to_string(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|e| VfsError::Io {
            path: path.display().to_string(),
            operation: "load".to_string(),
            message: e.to_string(),
        })?;
        Self::load_from_reader(text.as_bytes())
    }

    /// Load a filesystem from any CSV source.
    ///
    /// The root is seeded as a directory before the first row is processed,
    /// whether or not the image declares it. A leading UTF-8 byte-order mark
    /// is tolerated.
    pub fn load_from_reader<R: Read>(mut reader: R) -> Result<Self, VfsError> {
        let image_err = |message: String| VfsError::Io {
            path: "<image>".to_string(),
            operation: "load".to_string(),
            message,
        };

        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| image_err(e.to_string()))?;
        let body = text.strip_prefix('\u{feff}').unwrap_or(&text);

        let mut vfs = Self::new();
        let mut csv_reader = csv::Reader::from_reader(body.as_bytes());
        for record in csv_reader.deserialize::<ImageRecord>() {
            let record = record.map_err(|e| image_err(e.to_string()))?;
            vfs.insert_record(record);
        }
        Ok(vfs)
    }

    /// Insert one image row, synthesizing missing ancestor directories.
    fn insert_record(&mut self, record: ImageRecord) {
        let path = scrub_path(&record.path);
        if path == "/" {
            // The root is seeded up front and always stays a directory.
            return;
        }
        let entry = match record.kind {
            EntryKind::File => VfsEntry::File {
                content: record.content,
            },
            EntryKind::Dir => VfsEntry::Directory,
        };
        self.entries.insert(path.clone(), entry);

        // Synthesize every proper ancestor that the image left out. An entry
        // already present keeps its kind: a declared file is never silently
        // turned into a directory.
        let segments: Vec<&str> = path[1..].split('/').collect();
        let mut prefix = String::new();
        for segment in &segments[..segments.len() - 1] {
            prefix.push('/');
            prefix.push_str(segment);
            self.entries
                .entry(prefix.clone())
                .or_insert(VfsEntry::Directory);
        }
    }

    /// Serialize the filesystem to a CSV image on the host disk.
    pub fn save(&self, dest: impl AsRef<Path>) -> Result<(), VfsError> {
        let dest = dest.as_ref();
        let file = File::create(dest).map_err(|e| VfsError::Io {
            path: dest.display().to_string(),
            operation: "save".to_string(),
            message: e.to_string(),
        })?;
        self.save_to_writer(file)
    }

    /// Serialize every non-root entry as a `path,type,content` row, sorted
    /// by path. The output is invertible with `load_from_reader`.
    pub fn save_to_writer<W: Write>(&self, writer: W) -> Result<(), VfsError> {
        let image_err = |message: String| VfsError::Io {
            path: "<image>".to_string(),
            operation: "save".to_string(),
            message,
        };

        let mut csv_writer = csv::Writer::from_writer(writer);
        let mut rows: Vec<(&String, &VfsEntry)> = self
            .entries
            .iter()
            .filter(|(path, _)| path.as_str() != "/")
            .collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));

        for (path, entry) in rows {
            let record = ImageRecord {
                path: path.clone(),
                kind: entry.kind(),
                content: match entry {
                    VfsEntry::File { content } => content.clone(),
                    VfsEntry::Directory => String::new(),
                },
            };
            csv_writer
                .serialize(record)
                .map_err(|e| image_err(e.to_string()))?;
        }
        csv_writer.flush().map_err(|e| image_err(e.to_string()))
    }

    /// Exact lookup. No partial matches.
    pub fn get(&self, path: &str) -> Option<&VfsEntry> {
        self.entries.get(&scrub_path(path))
    }

    /// Check whether `path` names an existing directory.
    pub fn is_directory(&self, path: &str) -> bool {
        matches!(self.get(path), Some(VfsEntry::Directory))
    }

    /// Check whether `path` names an existing file.
    pub fn is_file(&self, path: &str) -> bool {
        matches!(self.get(path), Some(VfsEntry::File { .. }))
    }

    /// Names of the immediate children of `dir`, in no particular order.
    ///
    /// Empty for an empty directory and for a path with no entries under it.
    pub fn list_children(&self, dir: &str) -> Vec<String> {
        let scrubbed = scrub_path(dir);
        let prefix = if scrubbed == "/" {
            "/".to_string()
        } else {
            format!("{}/", scrubbed)
        };
        self.entries
            .keys()
            .filter_map(|path| {
                let rest = path.strip_prefix(&prefix)?;
                if rest.is_empty() || rest.contains('/') {
                    None
                } else {
                    Some(rest.to_string())
                }
            })
            .collect()
    }

    /// Insert or overwrite a file node carrying already-encoded content.
    ///
    /// The caller is responsible for making sure the parent directory
    /// exists; `put` itself performs no validation.
    pub fn put(&mut self, path: &str, content: String) {
        self.entries
            .insert(scrub_path(path), VfsEntry::File { content });
    }

    /// Decode a file's stored content to text.
    ///
    /// The transport encoding is base64 over UTF-8 bytes; a payload that is
    /// not valid base64 or not valid UTF-8 is an `Io` error.
    pub fn read_file(&self, path: &str) -> Result<String, VfsError> {
        let scrubbed = scrub_path(path);
        let entry = match self.entries.get(&scrubbed) {
            Some(entry) => entry,
            None => {
                return Err(VfsError::NotFound {
                    path: scrubbed,
                    operation: "read".to_string(),
                })
            }
        };
        let read_err = |message: &str| VfsError::Io {
            path: scrubbed.clone(),
            operation: "read".to_string(),
            message: message.to_string(),
        };
        match entry {
            VfsEntry::File { content } => {
                let bytes = STANDARD
                    .decode(content.as_bytes())
                    .map_err(|_| read_err("invalid base64 content"))?;
                String::from_utf8(bytes).map_err(|_| read_err("invalid utf-8 content"))
            }
            VfsEntry::Directory => Err(read_err("illegal operation on a directory")),
        }
    }

    /// All paths currently in the mapping, in no particular order.
    pub fn paths(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

impl Default for VirtualFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Path utilities (free functions over plain strings)
// ============================================================================

/// Normalize a stored path: backslashes become slashes, a leading slash is
/// ensured, repeated slashes collapse, and a trailing slash is stripped
/// (except on the root). The empty result maps to `/`.
pub fn scrub_path(path: &str) -> String {
    let mut scrubbed = path.replace('\\', "/");
    if !scrubbed.starts_with('/') {
        scrubbed.insert(0, '/');
    }
    while scrubbed.contains("//") {
        scrubbed = scrubbed.replace("//", "/");
    }
    while scrubbed.len() > 1 && scrubbed.ends_with('/') {
        scrubbed.pop();
    }
    scrubbed
}

/// Resolve user input to an absolute path.
///
/// Relative input is resolved against `current_dir` by concatenating its
/// segments before the `.`/`..` pass. `..` above the root pops from an empty
/// list and is a no-op.
pub fn resolve_path(path: &str, current_dir: &str) -> String {
    let combined: Vec<&str> = if path.starts_with('/') {
        path.split('/').collect()
    } else {
        current_dir.split('/').chain(path.split('/')).collect()
    };

    let mut resolved: Vec<&str> = Vec::new();
    for part in combined {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            segment => resolved.push(segment),
        }
    }

    if resolved.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", resolved.join("/"))
    }
}

/// Parent directory of a normalized path; `/` for top-level entries.
pub fn parent_dir(path: &str) -> String {
    let scrubbed = scrub_path(path);
    match scrubbed.rfind('/') {
        Some(0) => "/".to_string(),
        Some(pos) => scrubbed[..pos].to_string(),
        None => "/".to_string(),
    }
}

/// Last segment of a path.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

// ============================================================================
// Tests
// ============================================================================
