pub mod file_document;
pub mod memory_document;
