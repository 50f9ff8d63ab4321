//! `CommandExporter` — renders the HTML surface through an external HTML→PDF
//! program (wkhtmltopdf-compatible flags).
//!
//! The HTML is staged in a temp file that lives until the program exits; the
//! PDF lands in the configured export directory under the options' file name.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::export::{DocumentExporter, ExportError, ExportOptions, Orientation, PageSize};

pub const DEFAULT_PDF_COMMAND: &str = "wkhtmltopdf";

/// Screen resolution the raster scale is relative to.
const BASE_DPI: u32 = 96;

#[derive(Debug, Clone)]
pub struct CommandExporter {
    program: String,
    output_dir: PathBuf,
}

impl CommandExporter {
    pub fn new(program: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            output_dir: output_dir.into(),
        }
    }
}

/// Command-line arguments for one conversion.
pub fn command_args(options: &ExportOptions, input: &Path, output: &Path) -> Vec<OsString> {
    let margin = format!("{}in", options.margin_in);
    let page_size = match options.page_size {
        PageSize::A4 => "A4",
    };
    let orientation = match options.orientation {
        Orientation::Portrait => "Portrait",
    };
    let quality = ((options.image_quality * 100.0).round() as u32).min(100);
    let dpi = BASE_DPI * u32::from(options.scale.max(1));

    let mut args: Vec<OsString> = vec![
        "--quiet".into(),
        "--encoding".into(),
        "utf-8".into(),
        "--page-size".into(),
        page_size.into(),
        "--orientation".into(),
        orientation.into(),
    ];
    for flag in ["--margin-top", "--margin-bottom", "--margin-left", "--margin-right"] {
        args.push(flag.into());
        args.push(margin.clone().into());
    }
    args.push("--image-quality".into());
    args.push(quality.to_string().into());
    args.push("--image-dpi".into());
    args.push(dpi.to_string().into());
    args.push(input.as_os_str().to_owned());
    args.push(output.as_os_str().to_owned());
    args
}

#[async_trait]
impl DocumentExporter for CommandExporter {
    async fn export(&self, html: &str, options: &ExportOptions) -> Result<PathBuf, ExportError> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let staged = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".html")
            .tempfile()?;
        tokio::fs::write(staged.path(), html).await?;

        let output = self.output_dir.join(&options.file_name);
        let args = command_args(options, staged.path(), &output);
        debug!(program = %self.program, ?args, "running PDF exporter");

        let result = Command::new(&self.program)
            .args(&args)
            .output()
            .await
            .map_err(|e| ExportError::Failed(format!("could not run '{}': {e}", self.program)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ExportError::Failed(format!(
                "'{}' exited with {}: {}",
                self.program,
                result.status,
                stderr.trim()
            )));
        }

        info!(path = %output.display(), "PDF written");
        Ok(output)
    }
}
