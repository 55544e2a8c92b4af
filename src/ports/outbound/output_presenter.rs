use crate::shared::Result;

/// OutputPresenter port for delivering a finished report or graph
///
/// Hides whether the content ends up on stdout or in a file.
pub trait OutputPresenter {
    /// Presents the content at the output destination
    ///
    /// # Errors
    /// Returns an error if writing fails, e.g. because of permissions or a
    /// missing parent directory
    fn present(&self, content: &str) -> Result<()>;
}
