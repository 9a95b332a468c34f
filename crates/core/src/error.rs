use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("bad timestamp: {0}")]
    Timestamp(String),

    #[error("column {column:?} not found in {file}")]
    MissingColumn { file: String, column: String },

    #[error("object {0:?} has no entry in the batch config")]
    ObjectNotConfigured(String),

    #[error("object {object:?}: {predicts} prediction files but {losses} loss files")]
    GroupCountMismatch {
        object: String,
        predicts: usize,
        losses: usize,
    },
}
