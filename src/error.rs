//! Error types shared by the storage layer and the browser bindings.

/// Error returned by a [`crate::storage::PreferenceStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No durable storage is reachable (no window, storage disabled, private mode).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The backend rejected a read or write.
    #[error("preference storage rejected {op} for key {key:?}: {reason}")]
    Rejected { op: &'static str, key: String, reason: String },
}

/// Error raised while binding page behaviors to the DOM.
///
/// These never reach the user; the binding boundary logs them and moves on.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// A `web-sys` call failed; holds the debug rendering of the thrown value.
    #[error("dom call failed: {0}")]
    Dom(String),
    /// The global `window` or its document is missing.
    #[error("no browser window or document")]
    NoWindow,
    /// Page configuration JSON could not be parsed.
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
