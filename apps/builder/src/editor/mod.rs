// Form Editor
// Typed edits over the résumé document, the editor that forwards replacements
// to the host, injectable id generation, and the field schema shown in the form.

pub mod edit;
pub mod form;
pub mod ids;
pub mod schema;

pub use edit::Edit;
pub use form::FormEditor;
pub use ids::{IdGenerator, IdScheme, SequentialIds};
