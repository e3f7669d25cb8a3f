use crate::errors::ReviewResult;
use crate::traits::document_source::DocumentSource;

/// Editor contents held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    name: String,
    content: String,
}

impl MemoryDocument {
    pub fn new(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl DocumentSource for MemoryDocument {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn get_content(&self) -> ReviewResult<String> {
        Ok(self.content.clone())
    }

    fn set_content(&mut self, content: &str) -> ReviewResult<()> {
        self.content = content.to_string();
        Ok(())
    }
}
