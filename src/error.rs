// Analyzer error kinds. No retry or recovery anywhere; every error is fatal to the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Wrong argument count. Carries the invocation name for the usage line.
    #[error("Usage: {0} <result_file> [<graph-output-folder>]")]
    Usage(String),

    /// Input unreadable or output unwritable.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Required column missing, unparseable row, or no data rows at all.
    #[error("data format error: {0}")]
    DataFormat(String),

    /// Chart backend failure while drawing or presenting the figure.
    #[error("chart render error: {0}")]
    Render(String),
}

impl AnalyzerError {
    /// Map a csv crate error onto our kinds: transport problems are `Io`,
    /// everything else (bad header, bad field, wrong arity) is `DataFormat`.
    pub fn from_csv(e: csv::Error) -> Self {
        let msg = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(io) => AnalyzerError::Io(io),
            _ => AnalyzerError::DataFormat(msg),
        }
    }
}
