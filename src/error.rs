use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("required element '{0}' was not found on the page")]
    MissingElement(&'static str),

    #[error("unknown chart range: {0}")]
    UnknownChartRange(String),

    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
