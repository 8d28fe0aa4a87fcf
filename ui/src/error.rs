//! Error type for the fallible edges of the UI: configuration parsing and the
//! browser bridge. None of these ever reach the visitor; call sites log them
//! and carry on without the behaviour.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("site configuration is invalid: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{0} unavailable")]
    Missing(&'static str),

    #[error("browser call failed: {0}")]
    Js(String),

    #[error("not supported on this platform")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
