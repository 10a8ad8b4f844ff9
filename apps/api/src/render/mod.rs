// Document rendering: RpmResult → DocumentView → HTML.
// Pure; no I/O. The PDF path consumes the same view via layout.

pub mod date;
pub mod document;
pub mod html;
pub mod markup;
pub mod signature;

pub use document::{render, DocumentView};
