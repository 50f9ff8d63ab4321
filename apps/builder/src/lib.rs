//! Local résumé builder: a typed form editor over one immutable document, a
//! live preview renderer, and PDF export of the rendered preview.
//!
//! The `resume-builder` binary serves these over HTTP for a single session.

pub mod builder;
pub mod config;
pub mod editor;
pub mod errors;
pub mod export;
pub mod models;
pub mod notify;
pub mod preview;
pub mod routes;
pub mod state;
