//! Error types for template rendering and config emission.

use std::path::PathBuf;

/// Errors raised while compiling or rendering a [`Template`](crate::Template).
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Tera rejected the template text or could not render it.
    #[error("template error: {0}")]
    Tera(#[from] tera::Error),
}

/// Errors that abort a config emission run.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// Rendering the template failed.
    #[error("failed to render config: {0}")]
    Template(#[from] TemplateError),

    /// Writing a config file failed. Files written before this one are left
    /// in place.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
