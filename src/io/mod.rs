//! Stroke document file I/O.
//!
//! # Supported Formats
//!
//! | Format | Extension | Load | Save | Notes |
//! |--------|-----------|------|------|-------|
//! | JSON | `.json` | ✓ | ✓ | Pretty-printed on save |
//!
//! # Usage
//!
//! ```no_run
//! use nib::io::{load, save};
//!
//! let gp = load("drawing.json").unwrap();
//! save(&gp, "textured.json").unwrap();
//! ```

pub mod json;

use std::path::Path;

use crate::error::{NibError, Result};
use crate::stroke::GreasePencil;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON document.
    Json,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

fn detect(path: &Path) -> Result<Format> {
    Format::from_path(path).ok_or_else(|| NibError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })
}

/// Load a document with automatic format detection, then validate it.
pub fn load<P: AsRef<Path>>(path: P) -> Result<GreasePencil> {
    let path = path.as_ref();
    let gp = match detect(path)? {
        Format::Json => json::load(path)?,
    };
    gp.validate()?;
    Ok(gp)
}

/// Save a document with automatic format detection.
pub fn save<P: AsRef<Path>>(gp: &GreasePencil, path: P) -> Result<()> {
    let path = path.as_ref();
    match detect(path)? {
        Format::Json => json::save(gp, path),
    }
}
