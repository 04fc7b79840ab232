use wasm_bindgen::JsValue;

/// Errors raised by the gesture board.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// A browser canvas call failed.
    #[error("canvas operation failed: {0}")]
    Canvas(String),
    /// A required browser object (2D context, document, element) is missing.
    #[error("{0} unavailable")]
    Unavailable(&'static str),
    /// A hand did not carry the expected number of landmarks.
    #[error("expected {expected} landmarks, found {found}")]
    LandmarkCount { expected: usize, found: usize },
    /// The session config JSON could not be parsed.
    #[error("invalid session config: {0}")]
    ConfigJson(#[from] serde_json::Error),
    /// A session config value is out of range.
    #[error("invalid session config: {0}")]
    ConfigValue(String),
    /// A brush color is not `#rgb` or `#rrggbb`.
    #[error("invalid brush color: {0:?}")]
    Color(String),
    /// The draw layer could not be encoded as an image.
    #[cfg(any(test, feature = "headless"))]
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

impl From<JsValue> for BoardError {
    fn from(value: JsValue) -> Self {
        Self::Canvas(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<BoardError> for JsValue {
    fn from(err: BoardError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
