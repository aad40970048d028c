/// Convenience result type used across the showcase.
pub type Result<T> = std::result::Result<T, ShowcaseError>;

#[derive(thiserror::Error, Debug)]
pub enum ShowcaseError {
    /// A carousel needs at least one logical page.
    #[error("page sequence is empty")]
    EmptySequence,

    #[error("expected {expected} slot mounts, got {actual}")]
    MountCount { expected: usize, actual: usize },

    /// A single page could not acquire its resources. Isolated to its slot.
    #[error("page {page} failed to load: {reason}")]
    PageLoad { page: usize, reason: String },

    #[error("dom error: {0}")]
    Dom(String),

    /// No usable rendering context (e.g. WebGL2 missing).
    #[error("rendering context unavailable: {0}")]
    Context(String),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ShowcaseError {
    pub fn page_load(page: usize, reason: impl Into<String>) -> Self {
        Self::PageLoad {
            page,
            reason: reason.into(),
        }
    }

    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }

    pub fn context(msg: impl Into<String>) -> Self {
        Self::Context(msg.into())
    }
}
