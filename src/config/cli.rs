use crate::domain::model::PageGeometry;
use crate::utils::error::{CompareError, Result};
use crate::utils::validation::{validate_endpoint_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "carcompare")]
#[command(about = "Render a side-by-side comparison sheet for car equipment packages")]
pub struct CliConfig {
    /// Path to a TOML job file; overrides the other arguments
    #[arg(long)]
    pub job: Option<String>,

    /// Path to a JSON catalog file
    #[arg(long)]
    pub catalog: Option<String>,

    /// HTTP endpoint serving the catalog as a JSON array
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Equipment ids in column order
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<i64>,

    /// Document title
    #[arg(long, default_value = crate::core::comparison::DEFAULT_TITLE)]
    pub title: String,

    /// Output format: text or csv
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Output file; stdout when omitted
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, default_value = "595.28")]
    pub page_width: f64,

    #[arg(long, default_value = "20")]
    pub left_margin: f64,

    #[arg(long, default_value = "20")]
    pub right_margin: f64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry {
            page_width: self.page_width,
            left_margin: self.left_margin,
            right_margin: self.right_margin,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.job.is_some() {
            // the job file carries its own settings
            return Ok(());
        }

        match (&self.catalog, &self.endpoint) {
            (None, None) => {
                return Err(CompareError::config(
                    "one of --catalog or --endpoint is required",
                ))
            }
            (Some(_), Some(_)) => {
                return Err(CompareError::config(
                    "--catalog and --endpoint are mutually exclusive",
                ))
            }
            (None, Some(endpoint)) => validate_endpoint_url("endpoint", endpoint)?,
            (Some(_), None) => {}
        }

        if self.ids.is_empty() {
            return Err(CompareError::validation("Empty ids list."));
        }
        if !matches!(self.format.as_str(), "text" | "csv") {
            return Err(CompareError::config(format!(
                "unsupported output format: {}",
                self.format
            )));
        }
        crate::utils::validation::validate_page_geometry(&self.geometry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> CliConfig {
        CliConfig::parse_from(["carcompare", "--catalog", "catalog.json", "--ids", "1,2,3"])
    }

    #[test]
    fn test_parses_comma_separated_ids() {
        let config = base();
        assert_eq!(config.ids, vec![1, 2, 3]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_requires_a_catalog_source() {
        let config = CliConfig::parse_from(["carcompare", "--ids", "1"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_both_sources() {
        let config = CliConfig::parse_from([
            "carcompare",
            "--catalog",
            "catalog.json",
            "--endpoint",
            "https://example.com",
            "--ids",
            "1",
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_format() {
        let mut config = base();
        config.format = "pdf".to_string();
        assert!(config.validate().is_err());
    }
}
