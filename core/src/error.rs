use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Missing environment variable {0}")]
    MissingEnv(&'static str),

    #[error("Record store request failed: {0}")]
    Store(#[from] reqwest::Error),

    #[error("Record store returned HTTP {status} for table '{table}'")]
    StoreStatus { table: String, status: u16 },

    #[error("Failed to decode records for table '{table}': {source}")]
    Decode {
        table: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown table '{0}'")]
    UnknownTable(String),

    #[error("Table '{table}' has no column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
