use thiserror::Error;

#[derive(Error, Debug)]
pub enum CastellanError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{message} ({status})")]
    Api { status: u16, message: String },

    #[error("{kind} {id} not found")]
    RecordNotFound { kind: &'static str, id: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CastellanError>;
