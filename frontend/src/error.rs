use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("Browser window is unavailable")]
    NoWindow,
    #[error("Document is unavailable")]
    NoDocument,
    #[error("Failed to attach `{event}` listener: {message}")]
    Listener { event: &'static str, message: String },
    #[error("Invalid landing config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Invalid landing config: {0}")]
    InvalidConfig(String),
}

impl FxError {
    pub fn listener(event: &'static str, cause: JsValue) -> Self {
        FxError::Listener {
            event,
            message: format!("{:?}", cause),
        }
    }
}
