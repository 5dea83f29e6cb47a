// CSV loading for the sample table. Whole-file, header-driven; the file
// handle is scoped to this function and released as soon as parsing ends.

use crate::error::AnalyzerError;
use crate::models::{CPU_COLUMN, MEMORY_COLUMN, SampleTable, UsageSample};
use std::path::Path;

/// Load a monitoring CSV into a [`SampleTable`].
///
/// The header row must contain `CPUPercent` and `MemoryUsageInBytes`;
/// any other columns are ignored. Fails with `DataFormat` when a required
/// column is missing or a row does not parse, and with `Io` when the file
/// cannot be read. A header-only file (no data rows) is rejected: min/max
/// over nothing is meaningless.
pub fn load(path: &Path) -> Result<SampleTable, AnalyzerError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(AnalyzerError::from_csv)?;

    let headers = reader.headers().map_err(AnalyzerError::from_csv)?;
    for required in [CPU_COLUMN, MEMORY_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(AnalyzerError::DataFormat(format!(
                "required column '{}' not found in header",
                required
            )));
        }
    }

    let mut samples: Vec<UsageSample> = Vec::new();
    for record in reader.deserialize() {
        samples.push(record.map_err(AnalyzerError::from_csv)?);
    }

    if samples.is_empty() {
        return Err(AnalyzerError::DataFormat(
            "no data rows after header".into(),
        ));
    }

    tracing::debug!(rows = samples.len(), path = %path.display(), "loaded sample table");
    Ok(SampleTable::new(samples))
}
