//! Document export — turns the rendered preview surface into a file.
//!
//! The builder only hands over a fully rendered HTML surface plus options;
//! rasterizing and writing the PDF belongs to a `DocumentExporter`.
//!
//! `AppState` carries an `Arc<dyn DocumentExporter>`; the default is
//! `CommandExporter`, which shells out to an HTML→PDF program.

pub mod command;

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub use command::CommandExporter;

pub const DEFAULT_FILE_STEM: &str = "resume";
pub const DEFAULT_MARGIN_IN: f32 = 0.5;

// ────────────────────────────────────────────────────────────────────────────
// Options
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageSize {
    A4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportOptions {
    /// Uniform page margin in inches.
    pub margin_in: f32,
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub image_format: &'static str,
    /// 0.0 – 1.0
    pub image_quality: f32,
    /// Raster scale relative to screen resolution.
    pub scale: u8,
    pub file_name: String,
}

impl ExportOptions {
    /// A4 portrait, JPEG at 0.98, 2x scale, file named after the person.
    pub fn for_name(full_name: &str, margin_in: f32) -> Self {
        Self {
            margin_in,
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            image_format: "jpeg",
            image_quality: 0.98,
            scale: 2,
            file_name: export_file_name(full_name),
        }
    }
}

/// `<name>.pdf`, or `resume.pdf` when the name is blank. Path separators and
/// control characters become `_` so the result is always a bare file name.
pub fn export_file_name(full_name: &str) -> String {
    let stem: String = full_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let stem = match stem.as_str() {
        "" | "." | ".." => DEFAULT_FILE_STEM,
        s => s,
    };
    format!("{stem}.pdf")
}

// ────────────────────────────────────────────────────────────────────────────
// Errors and results
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export requires a full name and an email address")]
    Disabled,

    #[error("Resume preview not found")]
    SurfaceMissing,

    #[error("Export failed: {0}")]
    Failed(String),

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportReceipt {
    pub file_name: String,
    pub path: PathBuf,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait DocumentExporter: Send + Sync {
    /// Produces the exported file and returns where it was written.
    async fn export(&self, html: &str, options: &ExportOptions) -> Result<PathBuf, ExportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_full_name() {
        assert_eq!(export_file_name("Jane Doe"), "Jane Doe.pdf");
        assert_eq!(export_file_name("  Jane Doe  "), "Jane Doe.pdf");
    }

    #[test]
    fn test_file_name_defaults_when_blank() {
        assert_eq!(export_file_name(""), "resume.pdf");
        assert_eq!(export_file_name("   "), "resume.pdf");
        assert_eq!(export_file_name(".."), "resume.pdf");
    }

    #[test]
    fn test_file_name_strips_path_separators() {
        assert_eq!(export_file_name("../etc/passwd"), ".._etc_passwd.pdf");
        assert_eq!(export_file_name("a\\b\nc"), "a_b_c.pdf");
    }

    #[test]
    fn test_default_options() {
        let options = ExportOptions::for_name("Jane Doe", DEFAULT_MARGIN_IN);
        assert_eq!(options.page_size, PageSize::A4);
        assert_eq!(options.orientation, Orientation::Portrait);
        assert_eq!(options.margin_in, 0.5);
        assert_eq!(options.image_quality, 0.98);
        assert_eq!(options.scale, 2);
        assert_eq!(options.file_name, "Jane Doe.pdf");
    }
}
