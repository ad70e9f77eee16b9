use thiserror::Error;

/// Presentation errors. Both are fatal to the screen that hits them; the host
/// shows its default error UI and keeps running.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("unknown route '{0}'")]
    UnknownRoute(String),
    #[error("missing asset '{0}'")]
    MissingAsset(String),
}
