// SPDX-License-Identifier: MPL-2.0
//! Upload kinds and the checks applied to a chosen file.
//!
//! The extension lists mirror what the translation server accepts, so a
//! file rejected here would also be rejected by the server.

use std::fmt;
use std::path::{Path, PathBuf};

/// Which upload zone a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadKind {
    Image,
    Pdf,
}

impl UploadKind {
    /// Lowercase extensions accepted by this zone.
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            UploadKind::Image => &["png", "jpg", "jpeg", "webp"],
            UploadKind::Pdf => &["pdf"],
        }
    }

    /// Whether the path's extension is accepted, case-insensitively.
    #[must_use]
    pub fn accepts(self, path: &Path) -> bool {
        extension_of(path).is_some_and(|ext| self.extensions().contains(&ext.as_str()))
    }

    /// Validates a chosen file of `size_bytes` against this zone's rules.
    pub fn check(
        self,
        path: &Path,
        size_bytes: u64,
        max_bytes: u64,
    ) -> Result<SelectedFile, UploadRejection> {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            return Err(UploadRejection::NotAFile);
        };

        if !self.accepts(path) {
            return Err(UploadRejection::UnsupportedExtension {
                extension: extension_of(path).unwrap_or_default(),
            });
        }

        if size_bytes > max_bytes {
            return Err(UploadRejection::TooLarge {
                size_bytes,
                max_bytes,
            });
        }

        Ok(SelectedFile {
            path: path.to_path_buf(),
            name,
            size_bytes,
        })
    }
}

/// A file accepted by an upload zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    /// File name shown to the user and sent as the multipart filename.
    pub name: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    /// MIME type sent with the multipart part.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        mime_for(&self.path)
    }
}

/// Why a chosen file was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    /// The path has no file name (a directory or a root).
    NotAFile,
    UnsupportedExtension { extension: String },
    TooLarge { size_bytes: u64, max_bytes: u64 },
}

impl UploadRejection {
    /// Returns the i18n message key for this rejection.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UploadRejection::NotAFile => "notification-upload-not-a-file",
            UploadRejection::UnsupportedExtension { .. } => "notification-upload-unsupported",
            UploadRejection::TooLarge { .. } => "notification-upload-too-large",
        }
    }
}

impl fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadRejection::NotAFile => write!(f, "not a file"),
            UploadRejection::UnsupportedExtension { extension } => {
                write!(f, "unsupported file type: .{}", extension)
            }
            UploadRejection::TooLarge {
                size_bytes,
                max_bytes,
            } => write!(f, "file too large: {} bytes (max {})", size_bytes, max_bytes),
        }
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Best-effort MIME type from the extension.
#[must_use]
pub fn mime_for(path: &Path) -> &'static str {
    match extension_of(path).as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
