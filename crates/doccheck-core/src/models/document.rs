use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DocumentError;

/// Byte-order mark some editors write at the start of UTF-8 files.
const UTF8_BOM: char = '\u{feff}';

/// An uploaded document. The detector reads only `name` and `content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub content: String,
    pub kind: DocumentKind,
    /// Size of the original bytes.
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
}

/// Declared document format, derived from the file name.
///
/// PDF and DOCX bytes are not parsed; their content goes through the same
/// text pipeline as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Txt,
    Docx,
}

impl DocumentKind {
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            Self::Pdf
        } else if lower.ends_with(".docx") {
            Self::Docx
        } else {
            Self::Txt
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Txt => write!(f, "txt"),
            Self::Docx => write!(f, "docx"),
        }
    }
}

impl Document {
    /// Create a document from already-decoded text.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        let content = content.into();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: DocumentKind::from_name(&name),
            size: content.len() as u64,
            name,
            content,
            uploaded_at: Utc::now(),
        }
    }

    /// Read a document from disk. Bytes that are not valid UTF-8 are
    /// replaced rather than rejected, and a leading byte-order mark is
    /// dropped. `size` still counts every byte of the file.
    pub fn load(path: &Path, max_bytes: u64) -> Result<Self, DocumentError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
            .ok_or(DocumentError::EmptyName)?;

        let io_err = |source| DocumentError::Io {
            path: path.display().to_string(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if size > max_bytes {
            return Err(DocumentError::TooLarge {
                path: path.display().to_string(),
                size,
                limit: max_bytes,
            });
        }

        let bytes = std::fs::read(path).map_err(io_err)?;
        let decoded = String::from_utf8_lossy(&bytes);
        let content = decoded
            .strip_prefix(UTF8_BOM)
            .unwrap_or(&decoded)
            .to_string();

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: DocumentKind::from_name(&name),
            size: bytes.len() as u64,
            name,
            content,
            uploaded_at: Utc::now(),
        })
    }
}
