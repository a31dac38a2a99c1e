use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrepError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{table} table: required column '{column}' not found")]
    MissingColumn { table: String, column: String },
    #[error("{0}")]
    Message(String),
}

impl PrepError {
    pub fn missing_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            table: table.into(),
            column: column.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;
