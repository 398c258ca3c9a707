// Résumé document model and its editor.
// The editor is the only writer; renderers and the exporter only see snapshots.

pub mod editor;
pub mod model;

pub use editor::{EditOp, Editor};
pub use model::ResumeDocument;
