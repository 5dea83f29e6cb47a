// Positional CLI arguments: <result_file> [<graph-output-folder>].

use crate::error::AnalyzerError;
use std::path::PathBuf;

/// Where the rendered chart goes. Chosen once at start, fixed for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// No folder argument: write to the default location (current
    /// directory). The SVG backend has no interactive display, so this
    /// stands in for showing the figure on screen.
    DefaultLocation,
    /// Folder argument as given on the command line. Kept as a raw string
    /// because the output path is built from it verbatim.
    Folder(String),
}

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub result_file: PathBuf,
    pub target: OutputTarget,
}

impl CliArgs {
    /// Parse from the full argv (program name first). Arguments past the
    /// output folder are ignored. No file argument at all is a usage error
    /// carrying the invocation name.
    pub fn parse(argv: &[String]) -> Result<Self, AnalyzerError> {
        let program = argv
            .first()
            .map(String::as_str)
            .unwrap_or("usage-analyzer");
        let result_file = argv
            .get(1)
            .ok_or_else(|| AnalyzerError::Usage(program.to_string()))?;
        let target = match argv.get(2) {
            Some(folder) => OutputTarget::Folder(folder.clone()),
            None => OutputTarget::DefaultLocation,
        };
        Ok(Self {
            result_file: PathBuf::from(result_file),
            target,
        })
    }
}
