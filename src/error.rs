//! Error taxonomy for theme resolution, persistence, and browser wiring.

/// Failures surfaced by the theme controller and its browser adapters.
///
/// Most of these are logged and swallowed by the controller; only
/// configuration errors reach the embedding page.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A string that is neither `light` nor `dark`.
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
    /// `localStorage` is disabled or absent.
    #[error("preference storage is unavailable")]
    StorageUnavailable,
    /// The store threw while writing (quota exceeded, private mode).
    #[error("failed to persist theme preference: {0}")]
    StorageWrite(String),
    /// Host-supplied config JSON did not deserialize.
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
    /// A browser API threw during event wiring.
    #[error("dom error: {0}")]
    Dom(String),
}
