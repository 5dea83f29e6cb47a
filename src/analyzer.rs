// Orchestration for one analyzer run: load -> extract series -> summarize
// -> render -> print summary -> write chart. Strictly linear, no retries;
// every step's failure ends the run.

use crate::chart;
use crate::cli::OutputTarget;
use crate::config::AppConfig;
use crate::error::AnalyzerError;
use crate::models::SeriesSummary;
use crate::report;
use crate::sample_repo;
use std::io::Write;
use std::path::Path;

pub struct Analyzer {
    config: AppConfig,
}

impl Analyzer {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run the whole analysis. Nothing is written to `out` until the input
    /// has parsed and the figure has rendered, so a bad file produces no
    /// partial output.
    pub fn analyze<W: Write>(
        &self,
        input: &Path,
        target: &OutputTarget,
        out: &mut W,
    ) -> Result<(), AnalyzerError> {
        let table = sample_repo::load(input)?;
        tracing::info!(rows = table.len(), input = %input.display(), "analyzing resource usage");

        let cpu = table.cpu_series();
        let memory = table.memory_series();

        // The loader rejects empty tables, so both summaries exist.
        let cpu_summary = SeriesSummary::of(&cpu).ok_or_else(|| {
            AnalyzerError::DataFormat("empty CPU series".into())
        })?;
        let memory_summary = SeriesSummary::of(&memory).ok_or_else(|| {
            AnalyzerError::DataFormat("empty memory series".into())
        })?;

        let svg = chart::render(&cpu, &memory, &self.config.chart)?;

        report::write_summary(out, &cpu_summary, &memory_summary)?;

        let path = self.output_path(target);
        std::fs::write(&path, svg)?;
        writeln!(out, "Writing file to: {}", path)?;
        tracing::info!(path = %path, "chart written");

        Ok(())
    }

    /// Resolve the chart file path for the chosen target. The folder form
    /// concatenates verbatim by default (the caller supplies the trailing
    /// separator); `output.join_paths` switches to a real path join.
    pub fn output_path(&self, target: &OutputTarget) -> String {
        let file_name = &self.config.output.file_name;
        match target {
            OutputTarget::DefaultLocation => file_name.clone(),
            OutputTarget::Folder(folder) => {
                if self.config.output.join_paths {
                    Path::new(folder).join(file_name).display().to_string()
                } else {
                    format!("{}{}", folder, file_name)
                }
            }
        }
    }
}
