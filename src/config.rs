use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Canvas width in pixels. Defaults to an 18x6 logical figure at
    /// 100 px per unit.
    #[serde(default = "default_chart_width")]
    pub width: u32,
    #[serde(default = "default_chart_height")]
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of the written chart file.
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// When false (the default), the output folder argument is prepended to
    /// the file name by literal string concatenation, so the caller must
    /// supply the trailing separator. When true, a proper path join is used
    /// instead. Kept switchable so existing callers get byte-identical
    /// output paths.
    #[serde(default)]
    pub join_paths: bool,
}

fn default_chart_width() -> u32 {
    1800
}

fn default_chart_height() -> u32 {
    600
}

fn default_file_name() -> String {
    "analysis.svg".into()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            join_paths: false,
        }
    }
}

impl AppConfig {
    /// Load from the file named by `CONFIG_FILE` (default `config.toml`).
    /// A missing file is not an error for this one-shot tool; defaults apply.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::load_from_str(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.chart.width > 0,
            "chart.width must be > 0, got {}",
            self.chart.width
        );
        anyhow::ensure!(
            self.chart.height > 0,
            "chart.height must be > 0, got {}",
            self.chart.height
        );
        anyhow::ensure!(
            !self.output.file_name.is_empty(),
            "output.file_name must be non-empty"
        );
        Ok(())
    }
}
