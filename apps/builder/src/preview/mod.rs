// Preview Renderer
// Pure projection from the résumé document to a semantic tree, plus HTML and
// plain-text renderings of that tree. Nothing here holds state.

pub mod html;
pub mod render;
pub mod text;
pub mod tree;

pub use html::render_html_document;
pub use render::render_preview;
pub use text::render_text;
pub use tree::Preview;
