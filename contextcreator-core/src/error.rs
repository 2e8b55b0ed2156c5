#[derive(thiserror::Error, Debug)]
pub enum CreatorError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("context error: {0}")]
    Context(#[from] context::ContextError),
    #[error("invalid path `{0}`")]
    InvalidPath(String),
}
