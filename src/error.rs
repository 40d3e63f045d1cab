use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum RosaryError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown mystery type '{0}' (expected joyful, luminous, sorrowful, glorious or their Spanish names)")]
    UnknownMysteryType(String),
    #[error("step {index} is out of range (the rosary has {total} steps)")]
    StepOutOfRange { index: usize, total: usize },
    #[error("snapshot serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("viewer failed: {0}")]
    Viewer(String),
}

pub type Result<T> = std::result::Result<T, RosaryError>;
