//! Builder — the host container that owns the canonical résumé document.
//!
//! # Data flow
//! - The document lives in a `watch` channel. The form editor's change
//!   callback is the only writer; the preview surface is a reader.
//! - Each edit replaces the whole value, so a render after an edit always
//!   sees that edit and nothing partial.
//! - Export reads the rendered surface and never writes the document.

pub mod handlers;

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info};

use crate::editor::{Edit, FormEditor, IdGenerator};
use crate::export::{DocumentExporter, ExportError, ExportOptions, ExportReceipt};
use crate::models::resume::ResumeDocument;
use crate::notify::{Notification, Notifier};
use crate::preview::{render_html_document, render_preview, Preview};

/// A mounted preview: renders whatever the document currently is.
pub struct PreviewSurface {
    document: watch::Receiver<ResumeDocument>,
}

impl PreviewSurface {
    pub fn render(&self) -> Preview {
        render_preview(&self.document.borrow())
    }

    pub fn html(&self) -> String {
        render_html_document(&self.render())
    }
}

pub struct ResumeBuilder {
    document: Arc<watch::Sender<ResumeDocument>>,
    editor: FormEditor,
    surface: Option<PreviewSurface>,
    exporter: Arc<dyn DocumentExporter>,
    notifier: Arc<dyn Notifier>,
    margin_in: f32,
}

impl ResumeBuilder {
    /// Starts with an empty document and a mounted preview.
    pub fn new(
        ids: Box<dyn IdGenerator>,
        exporter: Arc<dyn DocumentExporter>,
        notifier: Arc<dyn Notifier>,
        margin_in: f32,
    ) -> Self {
        let (tx, _) = watch::channel(ResumeDocument::default());
        let document = Arc::new(tx);

        let sink = Arc::clone(&document);
        let editor = FormEditor::new(ids, move |next| {
            sink.send_replace(next);
        });

        let mut builder = Self {
            document,
            editor,
            surface: None,
            exporter,
            notifier,
            margin_in,
        };
        builder.mount_preview();
        builder
    }

    pub fn document(&self) -> ResumeDocument {
        self.document.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ResumeDocument> {
        self.document.subscribe()
    }

    // ── editing ────────────────────────────────────────────────────────────

    /// Routes one edit through the form editor. Returns whether the document
    /// changed.
    pub fn dispatch(&mut self, edit: Edit) -> bool {
        let current = self.document();
        self.editor.dispatch(&current, edit)
    }

    pub fn skill_input(&self) -> &str {
        self.editor.skill_input()
    }

    pub fn set_skill_input(&mut self, text: impl Into<String>) {
        self.editor.set_skill_input(text);
    }

    pub fn commit_skill_input(&mut self) -> bool {
        let current = self.document();
        self.editor.add_skill(&current)
    }

    // ── preview ────────────────────────────────────────────────────────────

    pub fn mount_preview(&mut self) {
        if self.surface.is_none() {
            self.surface = Some(PreviewSurface {
                document: self.document.subscribe(),
            });
        }
    }

    pub fn unmount_preview(&mut self) {
        self.surface = None;
    }

    pub fn preview(&self) -> Option<&PreviewSurface> {
        self.surface.as_ref()
    }

    // ── export ─────────────────────────────────────────────────────────────

    pub fn can_export(&self) -> bool {
        self.document.borrow().is_exportable()
    }

    pub fn export_options(&self) -> ExportOptions {
        let document = self.document.borrow();
        ExportOptions::for_name(&document.personal_info.full_name, self.margin_in)
    }

    /// Exports the rendered preview. Reports progress through the notifier;
    /// the document is untouched whatever the outcome.
    pub async fn export(&self) -> Result<ExportReceipt, ExportError> {
        if !self.can_export() {
            return Err(ExportError::Disabled);
        }

        let Some(surface) = &self.surface else {
            self.notifier.notify(Notification::destructive(
                "Error",
                "Resume preview not found. Please try again.",
            ));
            return Err(ExportError::SurfaceMissing);
        };

        let html = surface.html();
        let options = self.export_options();

        self.notifier.notify(Notification::new(
            "Generating PDF...",
            "Please wait while we prepare your resume for download.",
        ));

        match self.exporter.export(&html, &options).await {
            Ok(path) => {
                info!(file = %options.file_name, "resume exported");
                self.notifier.notify(Notification::new(
                    "Success!",
                    "Your resume has been downloaded successfully.",
                ));
                Ok(ExportReceipt {
                    file_name: options.file_name,
                    path,
                })
            }
            Err(e) => {
                error!("PDF generation error: {e}");
                self.notifier.notify(Notification::destructive(
                    "Error",
                    "Failed to generate PDF. Please try again.",
                ));
                Err(e)
            }
        }
    }
}
