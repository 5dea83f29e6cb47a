// End-to-end analyzer tests: summary text, output path handling, error order

use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use usage_analyzer::analyzer::Analyzer;
use usage_analyzer::cli::OutputTarget;
use usage_analyzer::config::AppConfig;
use usage_analyzer::error::AnalyzerError;

fn csv_file(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("tempfile");
    f.write_all(content.as_bytes()).expect("write csv");
    f
}

#[test]
fn test_analyze_prints_summary_then_output_path() {
    let input = csv_file("CPUPercent,MemoryUsageInBytes\n10,1048576\n20,2097152\n");
    let dir = TempDir::new().expect("tempdir");
    let folder = format!("{}/", dir.path().display());

    let analyzer = Analyzer::new(AppConfig::default());
    let mut out = Vec::new();
    analyzer
        .analyze(
            input.path(),
            &OutputTarget::Folder(folder.clone()),
            &mut out,
        )
        .expect("analyze");

    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("\nCPU\n"));
    assert!(text.contains("Min. CPU Percent: 10%"));
    assert!(text.contains("Max. CPU Percent: 20%"));
    assert!(text.contains("\nMemory\n"));
    assert!(text.contains("Min. Memory: 1.00MiB"));
    assert!(text.contains("Max. Memory: 2.00MiB"));

    // Summary comes before the write notice.
    let expected_path = format!("{}analysis.svg", folder);
    let notice = format!("Writing file to: {}", expected_path);
    assert!(text.contains(&notice));
    assert!(text.find("Max. Memory").unwrap() < text.find("Writing file to").unwrap());

    let written = std::fs::read_to_string(&expected_path).expect("svg file");
    assert!(written.contains("CPU Percent Used"));
}

#[test]
fn test_output_path_is_literal_concatenation_by_default() {
    // No trailing separator on purpose: the concatenation is verbatim.
    let analyzer = Analyzer::new(AppConfig::default());
    let path = analyzer.output_path(&OutputTarget::Folder("out".into()));
    assert_eq!(path, "outanalysis.svg");
}

#[test]
fn test_output_path_joins_when_configured() {
    let config = AppConfig::load_from_str("[output]\njoin_paths = true\n").expect("config");
    let analyzer = Analyzer::new(config);
    let path = analyzer.output_path(&OutputTarget::Folder("out".into()));
    assert_eq!(path, format!("out{}analysis.svg", std::path::MAIN_SEPARATOR));
}

#[test]
fn test_default_location_is_bare_file_name() {
    let analyzer = Analyzer::new(AppConfig::default());
    assert_eq!(
        analyzer.output_path(&OutputTarget::DefaultLocation),
        "analysis.svg"
    );
}

#[test]
fn test_missing_column_fails_before_any_output() {
    let input = csv_file("CPUPercent,Other\n10,20\n");
    let analyzer = Analyzer::new(AppConfig::default());
    let mut out = Vec::new();
    let err = analyzer
        .analyze(input.path(), &OutputTarget::DefaultLocation, &mut out)
        .unwrap_err();
    assert!(matches!(err, AnalyzerError::DataFormat(_)));
    assert!(out.is_empty(), "no output may be produced on parse failure");
}

#[test]
fn test_unreadable_input_fails_before_any_output() {
    let analyzer = Analyzer::new(AppConfig::default());
    let mut out = Vec::new();
    let err = analyzer
        .analyze(
            std::path::Path::new("/nonexistent/results.csv"),
            &OutputTarget::DefaultLocation,
            &mut out,
        )
        .unwrap_err();
    assert!(matches!(err, AnalyzerError::Io(_)));
    assert!(out.is_empty());
}

#[test]
fn test_summary_uses_same_formatting_as_axis_ticks() {
    // 1.5 GiB min/max exercises a unit the fixed examples above do not.
    let input = csv_file("CPUPercent,MemoryUsageInBytes\n50,1610612736\n");
    let dir = TempDir::new().expect("tempdir");
    let folder = format!("{}/", dir.path().display());

    let analyzer = Analyzer::new(AppConfig::default());
    let mut out = Vec::new();
    analyzer
        .analyze(input.path(), &OutputTarget::Folder(folder), &mut out)
        .expect("analyze");

    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("Min. Memory: 1.50GiB"));
    assert!(text.contains("Max. Memory: 1.50GiB"));
}

#[test]
fn test_fractional_cpu_values_print_raw() {
    let input = csv_file("CPUPercent,MemoryUsageInBytes\n10.25,1024\n99.9,2048\n");
    let dir = TempDir::new().expect("tempdir");
    let folder = format!("{}/", dir.path().display());

    let analyzer = Analyzer::new(AppConfig::default());
    let mut out = Vec::new();
    analyzer
        .analyze(input.path(), &OutputTarget::Folder(folder), &mut out)
        .expect("analyze");

    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("Min. CPU Percent: 10.25%"));
    assert!(text.contains("Max. CPU Percent: 99.9%"));
}
