pub mod char_differ;
pub mod document_source;
