use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelfmapError {
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("unknown element: {0}")]
    UnknownElement(String),

    #[error("unknown modality: {0}")]
    UnknownModality(String),

    #[error("unknown match tier: {0}")]
    UnknownTier(String),

    #[error("unknown check status: {0}")]
    UnknownStatus(String),

    #[error("mismatched lengths: {responses} responses vs {weights} weights")]
    MismatchedLengths { responses: usize, weights: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SelfmapError>;
