use crate::errors::ReviewResult;

/// The text editing surface a review reads from and writes back to.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSource {
    fn name(&self) -> String;

    fn get_content(&self) -> ReviewResult<String>;

    fn set_content(&mut self, content: &str) -> ReviewResult<()>;
}
